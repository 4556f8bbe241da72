use log::{debug, warn};
use std::fs;
use std::path::Path;
use wordsearch_core::available_words;

/// Errors that can occur while reading a word list
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file is not a JSON array of strings
    Parse(serde_json::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Read error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Load a JSON word list, keeping only usable words
pub fn load_words(path: &Path) -> Result<Vec<String>, LoadError> {
    let json = fs::read_to_string(path)?;
    let words: Vec<String> = serde_json::from_str(&json)?;
    Ok(sanitize(words))
}

/// Load a word list, falling back to an empty pool on failure
pub fn load_words_lenient(path: &Path) -> Vec<String> {
    match load_words(path) {
        Ok(words) => {
            debug!("loaded {} words from {}", words.len(), path.display());
            words
        }
        Err(e) => {
            warn!("could not load {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Keep distinct words spelled only with `a..=z`, in first-seen order.
///
/// Uses the engine's own availability filter with no length bounds, so the
/// loaded pool never holds a word the engine would reject on spelling.
pub fn sanitize<I: IntoIterator<Item = String>>(words: I) -> Vec<String> {
    let words: Vec<String> = words.into_iter().collect();
    available_words(&words, 1, usize::MAX)
        .into_iter()
        .map(str::to_string)
        .collect()
}
