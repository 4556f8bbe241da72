/// Result type for puzzle generation
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that abort puzzle generation
///
/// Both variants are fatal for the attempt: no partial puzzle is returned.
/// Words that merely fail to fit are skipped silently and never surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The options describe a board no word could be placed on
    InvalidConfiguration(String),
    /// No word in the pool satisfies the length bounds
    NoAvailableWords,
}

impl GenerateError {
    pub(crate) fn invalid(reason: &str) -> Self {
        Self::InvalidConfiguration(reason.to_string())
    }
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(reason) => write!(f, "Invalid configuration: {}", reason),
            Self::NoAvailableWords => write!(f, "No available words"),
        }
    }
}

impl std::error::Error for GenerateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GenerateError::invalid("invalid word count");
        assert_eq!(err.to_string(), "Invalid configuration: invalid word count");
        assert_eq!(GenerateError::NoAvailableWords.to_string(), "No available words");
    }
}
