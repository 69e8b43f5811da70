//! Common guards shared by the formulas.

use rft_core::numeric::{EPSILON, is_positive};
use rft_core::{Reading, Sentinel, checked};

/// Accept a strictly positive finite input, otherwise [`Sentinel::Invalid`].
pub fn require_positive(value: f64) -> Reading {
    if is_positive(value) {
        Ok(value)
    } else {
        Err(Sentinel::Invalid)
    }
}

/// Accept any finite input, otherwise [`Sentinel::Invalid`].
pub fn require_finite(value: f64) -> Reading {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Sentinel::Invalid)
    }
}

/// `num / den`, or [`Sentinel::Undefined`] when `|den| < EPSILON`.
pub fn divide(num: f64, den: f64) -> Reading {
    if den.abs() < EPSILON {
        return Err(Sentinel::Undefined);
    }
    checked(num / den)
}
