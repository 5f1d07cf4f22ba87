//! Error types for analysis and conversion.

use thiserror::Error;

/// Errors that can occur while analyzing or converting text
#[derive(Debug, Error)]
pub enum Error {
    /// The morphological analyzer failed on a piece of text
    #[error("analysis failed for {text:?}: {reason}")]
    Analysis { text: String, reason: String },

    /// A conversion direction name that is not recognized
    #[error("unsupported conversion direction: {0} (expected casual-to-polite or polite-to-casual)")]
    UnsupportedDirection(String),

    /// A malformed lexicon row
    #[error("lexicon line {line}: {reason}")]
    Lexicon { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn analysis(text: &str, reason: impl Into<String>) -> Self {
        Error::Analysis {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::UnsupportedDirection("sideways".into());
        assert!(err.to_string().contains("sideways"));

        let err = Error::Lexicon {
            line: 3,
            reason: "expected at least 8 columns".into(),
        };
        assert_eq!(err.to_string(), "lexicon line 3: expected at least 8 columns");

        let err = Error::analysis("読む", "surfaces do not cover input");
        assert!(err.to_string().starts_with("analysis failed for \"読む\""));
    }
}
