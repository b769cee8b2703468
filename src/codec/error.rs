//! Codec error types

use thiserror::Error;

/// Errors raised while encoding editor values into an invocation payload
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The parameter's top-level type cannot be encoded
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// No value was supplied for a parameter
    #[error("Missing argument {index} ('{name}')")]
    MissingArgument { index: usize, name: String },

    /// The editor document is not an argument list and the function takes more than one parameter
    #[error("Expected a JSON array of {expected} arguments")]
    NotAnArgumentList { expected: usize },
}
