use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Write};
use wordsearch_core::{Grid, Puzzle};

/// Print the grid, the word list and the seed
pub fn render_puzzle<W: Write>(
    out: &mut W,
    puzzle: &Puzzle,
    columns: usize,
    theme: &Theme,
) -> io::Result<()> {
    render_grid(out, puzzle.grid(), puzzle.options().cheat, theme)?;
    let column_width = puzzle.options().max_word_length + 1;
    render_words(out, &puzzle.words(), columns, column_width, theme)?;
    render_seed(out, puzzle.seed(), theme)
}

/// Print one grid row per line.
///
/// With `cheat` set, letters of placed words are drawn in the cheat color,
/// or upper-cased when the theme has no colors.
pub fn render_grid<W: Write>(
    out: &mut W,
    grid: &Grid,
    cheat: bool,
    theme: &Theme,
) -> io::Result<()> {
    for row in grid.rows() {
        for cell in row {
            let letter = cell.letter().unwrap_or('.');
            if cheat && cell.is_used() {
                match theme.cheat {
                    Some(color) => print_colored(out, color, &format!("{} ", letter))?,
                    None => write!(out, "{} ", letter.to_ascii_uppercase())?,
                }
            } else {
                write!(out, "{} ", letter)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print the heading and the words, `columns` per line
pub fn render_words<W: Write>(
    out: &mut W,
    words: &[&str],
    columns: usize,
    column_width: usize,
    theme: &Theme,
) -> io::Result<()> {
    writeln!(out)?;
    let heading = format!("{} Words", words.len());
    if theme.underline_headings {
        queue!(
            out,
            SetAttribute(Attribute::Underlined),
            Print(heading),
            SetAttribute(Attribute::Reset)
        )?;
    } else {
        write!(out, "{}", heading)?;
    }
    writeln!(out)?;

    for line in words.chunks(columns.max(1)) {
        let padded: String = line
            .iter()
            .map(|word| format!("{:<width$}", word, width = column_width))
            .collect();
        writeln!(out, "{}", padded.trim_end())?;
    }
    Ok(())
}

pub fn render_seed<W: Write>(out: &mut W, seed: i64, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    let line = format!("Seed: {}", seed);
    match theme.seed {
        Some(color) => print_colored(out, color, &line)?,
        None => write!(out, "{}", line)?,
    }
    writeln!(out)
}

fn print_colored<W: Write>(out: &mut W, color: Color, text: &str) -> io::Result<()> {
    queue!(out, SetForegroundColor(color), Print(text), ResetColor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordsearch_core::{Generator, Options};

    fn puzzle(cheat: bool) -> Puzzle {
        let options = Options {
            word_count: 1,
            height: 1,
            width: 5,
            min_word_length: 3,
            max_word_length: 5,
            allow_backwards: false,
            allow_diagonals: false,
            seed: 42,
            cheat,
        };
        Generator::new(options).generate(&["cat"]).unwrap()
    }

    fn render_to_string(puzzle: &Puzzle, theme: &Theme) -> String {
        let mut buf = Vec::new();
        render_puzzle(&mut buf, puzzle, 4, theme).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_output() {
        let puzzle = puzzle(false);
        let output = render_to_string(&puzzle, &Theme::plain());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0].len(), 10);
        assert!(lines[0].replace(' ', "").contains("cat"));
        assert_eq!(lines[2], "1 Words");
        assert_eq!(lines[3], "cat");
        assert_eq!(lines[5], "Seed: 42");
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_plain_cheat_uppercases_words() {
        let puzzle = puzzle(true);
        let output = render_to_string(&puzzle, &Theme::plain());
        let row = output.lines().next().unwrap().replace(' ', "");
        assert!(row.contains("CAT"));
    }

    #[test]
    fn test_colored_cheat() {
        let puzzle = puzzle(true);
        let output = render_to_string(&puzzle, &Theme::terminal());
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_word_columns() {
        let mut buf = Vec::new();
        let words = ["ant", "bee", "cow", "dog", "eel"];
        render_words(&mut buf, &words, 2, 4, &Theme::plain()).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(output, "\n5 Words\nant bee\ncow dog\neel\n");
    }
}
