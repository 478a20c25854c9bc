//! Error types for bulk question import

use thiserror::Error;

/// Errors that can occur while parsing a bulk import
///
/// `index` is the zero-based position of the offending question in the input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    /// The JSON document could not be parsed
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Nothing to import
    #[error("No questions found in the input")]
    EmptyInput,

    /// A text block does not follow the expected layout
    #[error("Question {index}: malformed block ({reason})")]
    MalformedBlock { index: usize, reason: String },

    /// A question was parsed but breaks the option/answer rules
    #[error("Question {index}: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

impl ImportError {
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedBlock {
            index,
            reason: reason.into(),
        }
    }

    pub fn invalid(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidQuestion {
            index,
            reason: reason.into(),
        }
    }

    /// Position of the offending question, if the error concerns one
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::MalformedBlock { index, .. } | Self::InvalidQuestion { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}
