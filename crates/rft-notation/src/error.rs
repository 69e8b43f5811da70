//! Notation errors.

use thiserror::Error;

use crate::kind::QuantityKind;

/// Result type for strict parsing.
pub type NotationResult<T> = Result<T, NotationError>;

/// Errors that can occur while reading engineering notation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotationError {
    /// Nothing but whitespace was entered.
    #[error("Empty input")]
    Empty,

    /// Input text did not reduce to a number.
    #[error("Could not parse {kind} from '{input}'")]
    Malformed { input: String, kind: QuantityKind },

    /// The number overflowed or spelled out inf/NaN.
    #[error("Non-finite value parsed from '{input}'")]
    NonFinite { input: String },

    /// Quantity kind name not recognised.
    #[error("Unknown quantity kind '{name}'")]
    UnknownKind { name: String },
}
