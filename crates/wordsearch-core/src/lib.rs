//! # Word Search Core
//!
//! Generates word-search puzzles: words from a pool are placed horizontally,
//! vertically and (optionally) diagonally into a letter grid, optionally
//! reversed, and every remaining cell is filled with a random letter.
//!
//! ```
//! use wordsearch_core::{Generator, Options};
//!
//! let options = Options {
//!     seed: 7,
//!     ..Options::small()
//! };
//! let pool = ["rust", "cargo", "crate", "trait"];
//! let puzzle = Generator::new(options).generate(&pool).unwrap();
//!
//! assert!(puzzle.grid().is_complete());
//! assert!(puzzle.words().len() <= 4);
//! ```

pub mod error;
pub mod generator;
pub mod grid;
pub mod options;

pub use error::{GenerateError, Result};
pub use generator::{
    available_words, candidate_positions, is_puzzle_word, Candidate, Generator, Placement, Puzzle,
};
pub use grid::{Cell, Direction, Grid};
pub use options::Options;

/// Generate a puzzle from `options` and `pool` with a seeded generator.
///
/// A seed of zero is replaced with one derived from the clock; the value
/// actually used is available from [`Puzzle::seed`].
pub fn generate<S: AsRef<str>>(options: Options, pool: &[S]) -> Result<Puzzle> {
    Generator::new(options).generate(pool)
}
