use thiserror::Error;

/// Error type for the comparison predicates.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq + Clone for easier testing
pub enum CompareError {
    #[error("Invalid interval token {token:?}: expected one of \"()\", \"[)\", \"(]\", \"[]\"")]
    InvalidInterval { token: String },

    #[error("Invalid regular expression: {0}")]
    InvalidPattern(String),

    #[error("Invalid bound value {value:?}: {message}")]
    InvalidBound { value: String, message: String },
}

impl From<regex::Error> for CompareError {
    fn from(err: regex::Error) -> Self {
        CompareError::InvalidPattern(err.to_string())
    }
}
