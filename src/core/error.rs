// src/core/error.rs

use thiserror::Error;

/// Raised when an input fails one of the engines' preconditions.
///
/// The message names the precondition that failed and is shown to the caller verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidArgument {
    pub message: String,
}

impl InvalidArgument {
    pub fn new(message: impl Into<String>) -> Self {
        InvalidArgument {
            message: message.into(),
        }
    }
}
