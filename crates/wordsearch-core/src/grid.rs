use serde::{Deserialize, Serialize};

/// Direction a word runs across the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Down and to the right
    Diagonal,
}

impl Direction {
    /// Directions a word may take, with or without the diagonal
    pub fn allowed(allow_diagonals: bool) -> &'static [Direction] {
        if allow_diagonals {
            &[Direction::Horizontal, Direction::Vertical, Direction::Diagonal]
        } else {
            &[Direction::Horizontal, Direction::Vertical]
        }
    }

    /// Step vector `(dx, dy)` between consecutive letters
    pub fn step(&self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Diagonal => (1, 1),
        }
    }

    pub fn advances_x(&self) -> bool {
        self.step().0 != 0
    }

    pub fn advances_y(&self) -> bool {
        self.step().1 != 0
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
            Direction::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// A single grid position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    letter: Option<char>,
    used: bool,
}

impl Cell {
    /// The letter in this cell, `None` while unset
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Whether a placed word runs through this cell
    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn is_set(&self) -> bool {
        self.letter.is_some()
    }

    /// A letter may go here if the cell is unset or already holds it
    pub fn accepts(&self, letter: char) -> bool {
        self.letter.map_or(true, |existing| existing == letter)
    }
}

/// A `width x height` letter grid, addressed by `(x, y)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell unset.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`. [`Options::validate`]
    /// rejects such dimensions before a grid is built.
    ///
    /// [`Options::validate`]: crate::Options::validate
    pub fn new(width: usize, height: usize) -> Self {
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("grid of {}x{} cells overflows usize", width, height));
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell at `(x, y)`, `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(self.idx(x, y))
        } else {
            None
        }
    }

    /// Letter at `(x, y)`, `None` when unset or out of bounds
    pub fn letter(&self, x: usize, y: usize) -> Option<char> {
        self.get(x, y).and_then(Cell::letter)
    }

    /// Write a letter into a cell.
    ///
    /// Set cells are never reset: writing a different letter over an
    /// existing one is a no-op and returns `false`.
    pub(crate) fn set_letter(&mut self, x: usize, y: usize, letter: char, used: bool) -> bool {
        let idx = self.idx(x, y);
        let cell = &mut self.cells[idx];
        if !cell.accepts(letter) {
            return false;
        }
        cell.letter = Some(letter);
        cell.used |= used;
        true
    }

    /// Check whether `word` can start at `(x, y)` running in `direction`
    ///
    /// Every visited cell must be in bounds and either unset or holding the
    /// same letter, which is what lets words cross.
    pub fn fits(&self, word: &str, x: usize, y: usize, direction: Direction) -> bool {
        let (dx, dy) = direction.step();
        word.chars().enumerate().all(|(i, letter)| {
            self.get(x + i * dx, y + i * dy)
                .is_some_and(|cell| cell.accepts(letter))
        })
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of cells still unset
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_set()).count()
    }

    /// True once every cell holds a letter
    pub fn is_complete(&self) -> bool {
        self.unset_count() == 0
    }

    /// Number of cells covered by placed words
    pub fn used_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_used()).count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.letter().unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unset() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.unset_count(), 12);
        assert_eq!(grid.used_count(), 0);
        assert!(!grid.is_complete());
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_new_rejects_overflowing_size() {
        Grid::new(usize::MAX, 2);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(4, 3);
        assert!(grid.get(3, 2).is_some());
        assert!(grid.get(4, 0).is_none());
        assert!(grid.get(0, 3).is_none());
    }

    #[test]
    fn test_set_letter_never_overwrites() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.set_letter(1, 0, 'a', true));
        assert!(grid.set_letter(1, 0, 'a', false));
        assert!(!grid.set_letter(1, 0, 'b', true));
        assert_eq!(grid.letter(1, 0), Some('a'));
        assert!(grid.get(1, 0).unwrap().is_used());
    }

    #[test]
    fn test_fits_allows_matching_crossing() {
        let mut grid = Grid::new(3, 3);
        grid.set_letter(1, 1, 'b', true);

        assert!(grid.fits("abc", 0, 1, Direction::Horizontal));
        assert!(grid.fits("abc", 0, 0, Direction::Diagonal));
        assert!(!grid.fits("xyz", 1, 0, Direction::Vertical));
        assert!(!grid.fits("abcd", 0, 0, Direction::Horizontal));
    }

    #[test]
    fn test_direction_steps() {
        assert_eq!(Direction::allowed(false).len(), 2);
        assert_eq!(Direction::allowed(true).len(), 3);
        assert!(Direction::Diagonal.advances_x() && Direction::Diagonal.advances_y());
        assert!(!Direction::Vertical.advances_x());
        assert!(!Direction::Horizontal.advances_y());
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3, 2);
        grid.set_letter(0, 0, 'a', false);
        grid.set_letter(2, 1, 'z', false);
        assert_eq!(grid.to_string(), "a . .\n. . z\n");
    }
}
