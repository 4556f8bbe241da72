use crate::{Direction, GenerateError, Grid, Options, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

/// A conflict-free starting position for a board word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

/// A word committed to the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The word as it appears in the pool and the word list
    pub word: String,
    /// The letters actually written, possibly reversed
    pub board_word: String,
    /// Whether the word was written back to front
    pub reversed: bool,
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Placement {
    /// Whether the word was written back to front.
    ///
    /// Set by the reversal coin flip, so a reversed palindrome still
    /// reports `true`.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Coordinates covered by the board word, in letter order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dx, dy) = self.direction.step();
        (0..self.board_word.chars().count()).map(move |i| (self.x + i * dx, self.y + i * dy))
    }
}

/// A finished word search
#[derive(Debug, Clone, Serialize)]
pub struct Puzzle {
    grid: Grid,
    options: Options,
    placements: Vec<Placement>,
}

impl Puzzle {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Options the puzzle was generated with, seed resolved
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn seed(&self) -> i64 {
        self.options.seed
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placed words in the order they were placed
    pub fn placed_words(&self) -> Vec<&str> {
        self.placements.iter().map(|p| p.word.as_str()).collect()
    }

    /// Placed words, sorted for display
    pub fn words(&self) -> Vec<&str> {
        let mut words = self.placed_words();
        words.sort_unstable();
        words
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)?;
        writeln!(f)?;
        for word in self.words() {
            writeln!(f, "{}", word)?;
        }
        Ok(())
    }
}

/// Whether `word` can be written into a grid: non-empty, `a..=z` only
pub fn is_puzzle_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Filter the pool down to distinct words a puzzle may use.
///
/// A word qualifies when its length lies in `[min_len, max_len]` and
/// [`is_puzzle_word`] accepts it. Pool order is kept; later duplicates are
/// dropped.
pub fn available_words<S: AsRef<str>>(
    pool: &[S],
    min_len: usize,
    max_len: usize,
) -> Vec<&str> {
    let mut seen = HashSet::new();
    pool.iter()
        .map(|word| word.as_ref())
        .filter(|word| (min_len..=max_len).contains(&word.len()))
        .filter(|word| is_puzzle_word(word))
        .filter(|word| seen.insert(*word))
        .collect()
}

/// Every position where `board_word` fits, across all `directions`
pub fn candidate_positions(
    grid: &Grid,
    board_word: &str,
    directions: &[Direction],
) -> Vec<Candidate> {
    let len = board_word.chars().count();
    let mut candidates = Vec::new();
    if len == 0 {
        return candidates;
    }

    for &direction in directions {
        // Last start coordinate that keeps the word on the board
        let max_x = if direction.advances_x() {
            grid.width().checked_sub(len)
        } else {
            grid.width().checked_sub(1)
        };
        let max_y = if direction.advances_y() {
            grid.height().checked_sub(len)
        } else {
            grid.height().checked_sub(1)
        };
        let (Some(max_x), Some(max_y)) = (max_x, max_y) else {
            continue;
        };

        for x in 0..=max_x {
            for y in 0..=max_y {
                if grid.fits(board_word, x, y, direction) {
                    candidates.push(Candidate { x, y, direction });
                }
            }
        }
    }
    candidates
}

/// Word search generator
///
/// Owns the random stream for one generation run. Generic over the RNG so
/// callers can inject their own source; [`Generator::new`] seeds a
/// [`StdRng`] from the options.
pub struct Generator<R: Rng = StdRng> {
    options: Options,
    rng: R,
}

impl Generator<StdRng> {
    /// Create a generator seeded from `options.seed`, or from the clock
    /// when the seed is zero
    pub fn new(mut options: Options) -> Self {
        options.seed = resolve_seed(options.seed);
        let rng = StdRng::seed_from_u64(options.seed as u64);
        Self { options, rng }
    }
}

impl<R: Rng> Generator<R> {
    /// Create a generator drawing from an existing random stream.
    ///
    /// The seed in `options` is echoed back unchanged.
    pub fn with_rng(options: Options, rng: R) -> Self {
        Self { options, rng }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Generate a puzzle from `pool`.
    ///
    /// The pool is only read; a private filtered copy is consumed.
    pub fn generate<S: AsRef<str>>(&mut self, pool: &[S]) -> Result<Puzzle> {
        self.options.validate()?;

        let mut available = available_words(
            pool,
            self.options.min_word_length,
            self.options.max_word_length,
        );
        if available.is_empty() {
            return Err(GenerateError::NoAvailableWords);
        }
        debug!(
            "seed {}: {} of {} pool words available",
            self.options.seed,
            available.len(),
            pool.len()
        );

        let mut grid = Grid::new(self.options.width, self.options.height);
        let directions = Direction::allowed(self.options.allow_diagonals);
        let mut placements: Vec<Placement> = Vec::new();

        while placements.len() < self.options.word_count && !available.is_empty() {
            let index = self.rng.gen_range(0..available.len());
            let word = available.swap_remove(index);

            match self.place_word(&mut grid, word, directions) {
                Some(placement) => {
                    debug!(
                        "placed {} as {} at ({}, {}) {}",
                        placement.word,
                        placement.board_word,
                        placement.x,
                        placement.y,
                        placement.direction
                    );
                    placements.push(placement);
                }
                None => debug!("no room for {}, skipping", word),
            }
        }

        self.fill(&mut grid);
        info!(
            "placed {} of {} requested words on a {}x{} grid",
            placements.len(),
            self.options.word_count,
            self.options.width,
            self.options.height
        );

        Ok(Puzzle {
            grid,
            options: self.options.clone(),
            placements,
        })
    }

    /// One placement attempt: maybe reverse, search, pick, commit
    fn place_word(
        &mut self,
        grid: &mut Grid,
        word: &str,
        directions: &[Direction],
    ) -> Option<Placement> {
        let reversed = self.options.allow_backwards && self.rng.gen_bool(0.5);
        let board_word: String = if reversed {
            word.chars().rev().collect()
        } else {
            word.to_string()
        };

        let candidates = candidate_positions(grid, &board_word, directions);
        if candidates.is_empty() {
            return None;
        }
        let Candidate { x, y, direction } = candidates[self.rng.gen_range(0..candidates.len())];

        let placement = Placement {
            word: word.to_string(),
            board_word,
            reversed,
            x,
            y,
            direction,
        };
        for ((cx, cy), letter) in placement.cells().zip(placement.board_word.chars()) {
            let written = grid.set_letter(cx, cy, letter, true);
            debug_assert!(written, "candidate conflicted at ({}, {})", cx, cy);
        }
        Some(placement)
    }

    /// Give every unset cell a random letter
    fn fill(&mut self, grid: &mut Grid) {
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                if grid.letter(x, y).is_none() {
                    let letter = (b'a' + self.rng.gen_range(0..26u8)) as char;
                    grid.set_letter(x, y, letter, false);
                }
            }
        }
    }
}

/// Replace a zero seed with one taken from the wall clock
fn resolve_seed(seed: i64) -> i64 {
    if seed != 0 {
        return seed;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or(1);
    if nanos == 0 {
        1
    } else {
        nanos
    }
}
