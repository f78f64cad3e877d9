//! Error types for schema extraction.
//!
//! All extraction errors are structural: a malformed operation input or schema
//! node aborts the whole catalog build. There is no partial-success mode and
//! nothing here is retryable. Messages carry the stable operation key so the
//! failing operation can be identified from the top-level build step.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation's declared input is not a recognized schema value.
    #[error("operation '{operation}': input parser expects a schema value")]
    InvalidInputParser { operation: String },

    /// An operation's unwrapped input schema is not an object shape.
    #[error("operation '{operation}': input schema must be an object")]
    InputMustBeObject { operation: String },

    /// A schema node does not have the structure its kind requires.
    #[error("invalid schema shape at '{path}': {detail}")]
    InvalidSchemaShape { path: String, detail: String },
}

impl Error {
    pub fn invalid_shape(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Error::InvalidSchemaShape {
            path: path.into(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
