use crossterm::style::Color;

/// Colors used when printing a puzzle
#[derive(Debug, Clone)]
pub struct Theme {
    /// Letters of placed words when cheating
    pub cheat: Option<Color>,
    /// Seed line color
    pub seed: Option<Color>,
    /// Underline section headings
    pub underline_headings: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::terminal()
    }
}

impl Theme {
    /// Standard terminal colors
    pub fn terminal() -> Self {
        Self {
            cheat: Some(Color::Yellow),
            seed: Some(Color::Yellow),
            underline_headings: true,
        }
    }

    /// No escape codes at all
    pub fn plain() -> Self {
        Self {
            cheat: None,
            seed: None,
            underline_headings: false,
        }
    }
}
