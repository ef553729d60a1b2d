//! Crate error type.

use thiserror::Error as ThisError;

/// Errors produced by the solver.
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    /// The problem input cannot be solved (empty city set, duplicate ids).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The run was cancelled before any restart completed.
    #[error("cancelled before a result was available")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = Error::invalid_input("no cities");
        assert_eq!(format!("{err}"), "invalid input: no cities");
    }

    #[test]
    fn test_cancelled_display() {
        let display = format!("{}", Error::Cancelled);
        assert!(display.contains("cancelled"));
    }
}
