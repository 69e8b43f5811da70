//! Sentinel results for domain violations.
//!
//! Formulas never leak NaN or infinities into the numeric pipeline. A division by
//! a near-zero denominator, a logarithm of a non-positive value or an out-of-range
//! physical input resolves to a [`Sentinel`] at the point of computation, and the
//! host renders it verbatim in place of a number.

use thiserror::Error;

/// Result of a total formula: either a finite value or a sentinel to display.
pub type Reading<T = f64> = Result<T, Sentinel>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sentinel {
    /// Division by a near-zero denominator.
    #[error("Undefined")]
    Undefined,
    /// Quantity diverges to +∞ (e.g. VSWR at total reflection).
    #[error("∞")]
    Infinite,
    /// Quantity diverges to -∞ (e.g. S11 in dB of a perfect match).
    #[error("-∞")]
    NegInfinite,
    /// Input outside the physically meaningful domain.
    #[error("Invalid")]
    Invalid,
}

impl Sentinel {
    /// Text shown in place of a numeric result.
    pub fn label(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Infinite => "∞",
            Self::NegInfinite => "-∞",
            Self::Invalid => "Invalid",
        }
    }
}

/// Wrap a raw float, mapping non-finite values onto their sentinel.
pub fn checked(value: f64) -> Reading {
    if value.is_nan() {
        Err(Sentinel::Undefined)
    } else if value == f64::INFINITY {
        Err(Sentinel::Infinite)
    } else if value == f64::NEG_INFINITY {
        Err(Sentinel::NegInfinite)
    } else {
        Ok(value)
    }
}
