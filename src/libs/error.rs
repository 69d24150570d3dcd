use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// Malformed or empty scores, unequal sequence lengths, bad parameters
    InvalidInput(String),
    /// Gap and similarity vectors of different lengths
    ScoreMismatch {
        /// Number of gap scores
        gaps: usize,
        /// Number of similarity scores
        similarity: usize,
    },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SelectError::ScoreMismatch { gaps, similarity } => {
                write!(
                    f,
                    "Score mismatch: {} gap scores vs {} similarity scores",
                    gaps, similarity
                )
            }
        }
    }
}

impl std::error::Error for SelectError {}

pub type Result<T> = std::result::Result<T, SelectError>;

/// Shorthand for building an `InvalidInput` error.
pub fn invalid<S: Into<String>>(msg: S) -> SelectError {
    SelectError::InvalidInput(msg.into())
}
