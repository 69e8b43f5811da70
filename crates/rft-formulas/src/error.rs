//! Error types for formula selectors.
//!
//! Numeric domain problems are never errors here; they come back as
//! [`rft_core::Sentinel`]s. These errors only cover names that fail to resolve.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("Unknown power unit '{name}'")]
    UnknownPowerUnit { name: String },

    #[error("Unknown injection mode '{name}'")]
    UnknownInjection { name: String },

    #[error("Unknown {family} unit '{name}'")]
    UnknownUnit { family: &'static str, name: String },
}

pub type FormulaResult<T> = Result<T, FormulaError>;
