use crate::{GenerateError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Number of words to place
    pub word_count: usize,
    /// Reverse each placed word with 50% probability
    pub allow_backwards: bool,
    /// Allow words running down and to the right
    pub allow_diagonals: bool,
    /// Grid height in cells
    pub height: usize,
    /// Grid width in cells
    pub width: usize,
    /// Shortest word taken from the pool
    pub min_word_length: usize,
    /// Longest word taken from the pool
    pub max_word_length: usize,
    /// Random seed; zero means "derive from the clock"
    pub seed: i64,
    /// Highlight the cells of placed words when displayed
    pub cheat: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            word_count: 5,
            allow_backwards: true,
            allow_diagonals: true,
            height: 10,
            width: 10,
            min_word_length: 3,
            max_word_length: 7,
            seed: 0,
            cheat: false,
        }
    }
}

impl Options {
    /// A small, forgiving board without diagonals
    pub fn small() -> Self {
        Self {
            word_count: 4,
            allow_diagonals: false,
            height: 8,
            width: 8,
            max_word_length: 6,
            ..Self::default()
        }
    }

    /// A large board with many long words
    pub fn large() -> Self {
        Self {
            word_count: 15,
            height: 20,
            width: 20,
            max_word_length: 10,
            ..Self::default()
        }
    }

    /// Reject option sets that cannot produce a puzzle
    pub fn validate(&self) -> Result<()> {
        if self.max_word_length > self.height && self.max_word_length > self.width {
            Err(GenerateError::invalid("max word length exceeds board dimensions"))
        } else if self.height < 1
            || self.width < 1
            || self.width.checked_mul(self.height).is_none()
        {
            Err(GenerateError::invalid("invalid board dimensions"))
        } else if self.word_count < 1 {
            Err(GenerateError::invalid("invalid word count"))
        } else if self.min_word_length > self.max_word_length {
            Err(GenerateError::invalid(
                "min word length is greater than max word length",
            ))
        } else {
            Ok(())
        }
    }
}
