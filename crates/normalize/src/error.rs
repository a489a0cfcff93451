use thiserror::Error;

/// Errors that can occur during normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Nothing but whitespace was left once the stages ran and the text was
    /// trimmed, so there is no first character to capitalize.
    #[error("input text empty after normalization")]
    EmptyResult,
    /// Raw input bytes were not valid UTF-8. Raised before any stage runs.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding { valid_up_to: usize },
}

impl From<std::str::Utf8Error> for NormalizeError {
    fn from(err: std::str::Utf8Error) -> Self {
        NormalizeError::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
        }
    }
}
