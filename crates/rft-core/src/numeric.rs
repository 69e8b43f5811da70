use crate::{RftError, RftResult};

/// Floating point type used throughout the toolbox
pub type Real = f64;

/// Threshold below which a magnitude, denominator or input is treated as zero.
pub const EPSILON: Real = 1e-12;

/// Tighter threshold for the `1 - Γ` denominator of the bilinear transform.
pub const EPSILON_DENOMINATOR: Real = 1e-15;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> RftResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RftError::NonFinite { what, value: v })
    }
}

/// Returns `true` when `v` is finite and strictly greater than [`EPSILON`].
pub fn is_positive(v: Real) -> bool {
    v.is_finite() && v > EPSILON
}
