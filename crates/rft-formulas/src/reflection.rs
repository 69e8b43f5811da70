//! Reflection coefficient, impedance, VSWR and S11.
//!
//! Γ = (Z − Z0)/(Z + Z0) and its inverse Z = Z0(1 + Γ)/(1 − Γ), plus the scalar
//! conversions between |Γ|, VSWR and S11 in dB. Every function is total: domain
//! violations come back as a [`Sentinel`].

use num_complex::Complex64;
use rft_core::numeric::{EPSILON, EPSILON_DENOMINATOR};
use rft_core::units::Resistance;
use rft_core::{Reading, Sentinel, checked};

use crate::common::require_positive;

/// Complex reflection coefficient Γ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectionCoefficient {
    pub value: Complex64,
}

impl ReflectionCoefficient {
    pub fn new(value: Complex64) -> Self {
        Self { value }
    }

    /// Build Γ from magnitude and angle in degrees.
    ///
    /// `Invalid` for a negative or non-finite magnitude or a non-finite angle; a
    /// negative magnitude is never folded into a 180° rotation.
    pub fn from_polar(magnitude: f64, angle_deg: f64) -> Reading<Self> {
        if !magnitude.is_finite() || magnitude < 0.0 || !angle_deg.is_finite() {
            return Err(Sentinel::Invalid);
        }
        Ok(Self::new(Complex64::from_polar(magnitude, angle_deg.to_radians())))
    }

    pub fn magnitude(&self) -> f64 {
        self.value.norm()
    }

    /// Angle in degrees, in (-180, 180].
    pub fn angle_deg(&self) -> f64 {
        self.value.arg().to_degrees()
    }
}

/// Γ = (Z − Z0)/(Z + Z0).
///
/// `Undefined` when |Z + Z0| < ε, `Invalid` for a non-positive Z0.
pub fn gamma_from_impedance(z: Complex64, z0: Resistance) -> Reading<ReflectionCoefficient> {
    let z0 = require_positive(z0.value)?;
    if !z.re.is_finite() || !z.im.is_finite() {
        return Err(Sentinel::Invalid);
    }
    let z0 = Complex64::new(z0, 0.0);
    let denominator = z + z0;
    if denominator.norm() < EPSILON {
        return Err(Sentinel::Undefined);
    }
    Ok(ReflectionCoefficient::new((z - z0) / denominator))
}

/// Z = Z0(1 + Γ)/(1 − Γ).
///
/// `Undefined` when |1 − Γ| < 1e-15 (Γ = 1 is an open circuit).
pub fn impedance_from_gamma(gamma: ReflectionCoefficient, z0: Resistance) -> Reading<Complex64> {
    let z0 = require_positive(z0.value)?;
    let one = Complex64::new(1.0, 0.0);
    let denominator = one - gamma.value;
    if denominator.norm() < EPSILON_DENOMINATOR {
        return Err(Sentinel::Undefined);
    }
    let z = z0 * (one + gamma.value) / denominator;
    checked(z.re)?;
    checked(z.im)?;
    Ok(z)
}

/// VSWR = (1 + |Γ|)/(1 − |Γ|), diverging to `∞` once |Γ| ≥ 1 − ε.
pub fn vswr_from_gamma(magnitude: f64) -> Reading {
    if !(0.0..=1.0 + EPSILON).contains(&magnitude) {
        return Err(Sentinel::Invalid);
    }
    if magnitude >= 1.0 - EPSILON {
        return Err(Sentinel::Infinite);
    }
    Ok((1.0 + magnitude) / (1.0 - magnitude))
}

/// |Γ| = (VSWR − 1)/(VSWR + 1) for VSWR ≥ 1.
pub fn gamma_from_vswr(vswr: f64) -> Reading {
    if !vswr.is_finite() || vswr < 1.0 {
        return Err(Sentinel::Invalid);
    }
    Ok((vswr - 1.0) / (vswr + 1.0))
}

/// S11 = 20·log10(|Γ|), `-∞` for a perfect match.
pub fn s11_db_from_gamma(magnitude: f64) -> Reading {
    if !(0.0..=1.0 + EPSILON).contains(&magnitude) {
        return Err(Sentinel::Invalid);
    }
    if magnitude <= EPSILON {
        return Err(Sentinel::NegInfinite);
    }
    Ok(20.0 * magnitude.log10())
}

/// |Γ| = 10^(S11/20) for S11 ≤ 0 dB.
pub fn gamma_from_s11_db(s11_db: f64) -> Reading {
    if s11_db.is_nan() || s11_db > 0.0 {
        return Err(Sentinel::Invalid);
    }
    Ok(10f64.powf(s11_db / 20.0))
}

/// Everything the reflection dialogs display, each entry resolved independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionSummary {
    pub gamma: Reading<ReflectionCoefficient>,
    pub impedance: Reading<Complex64>,
    pub vswr: Reading,
    pub s11_db: Reading,
}

impl ReflectionSummary {
    /// Start from a load impedance.
    pub fn from_impedance(z: Complex64, z0: Resistance) -> Self {
        let gamma = gamma_from_impedance(z, z0);
        let impedance = gamma.map(|_| z);
        Self::complete(gamma, impedance)
    }

    /// Start from a reflection coefficient.
    pub fn from_gamma(gamma: ReflectionCoefficient, z0: Resistance) -> Self {
        let impedance = impedance_from_gamma(gamma, z0);
        Self::complete(Ok(gamma), impedance)
    }

    /// Start from |Γ| and its angle in degrees. A rejected Γ poisons every entry.
    pub fn from_polar(magnitude: f64, angle_deg: f64, z0: Resistance) -> Self {
        match ReflectionCoefficient::from_polar(magnitude, angle_deg) {
            Ok(gamma) => Self::from_gamma(gamma, z0),
            Err(sentinel) => Self::complete(Err(sentinel), Err(sentinel)),
        }
    }

    fn complete(gamma: Reading<ReflectionCoefficient>, impedance: Reading<Complex64>) -> Self {
        let magnitude = gamma.map(|g| g.magnitude());
        Self {
            gamma,
            impedance,
            vswr: magnitude.and_then(vswr_from_gamma),
            s11_db: magnitude.and_then(s11_db_from_gamma),
        }
    }
}

/// The three scalar views of one mismatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MismatchTriple {
    pub gamma_magnitude: Reading,
    pub vswr: Reading,
    pub s11_db: Reading,
}

impl MismatchTriple {
    pub fn from_vswr(vswr: f64) -> Self {
        let gamma = gamma_from_vswr(vswr);
        Self {
            gamma_magnitude: gamma,
            vswr: gamma.map(|_| vswr),
            s11_db: gamma.and_then(s11_db_from_gamma),
        }
    }

    pub fn from_s11_db(s11_db: f64) -> Self {
        let gamma = gamma_from_s11_db(s11_db);
        Self {
            gamma_magnitude: gamma,
            vswr: gamma.and_then(vswr_from_gamma),
            s11_db: gamma.map(|_| s11_db),
        }
    }

    pub fn from_gamma_magnitude(magnitude: f64) -> Self {
        Self {
            gamma_magnitude: if (0.0..=1.0 + EPSILON).contains(&magnitude) {
                Ok(magnitude)
            } else {
                Err(Sentinel::Invalid)
            },
            vswr: vswr_from_gamma(magnitude),
            s11_db: s11_db_from_gamma(magnitude),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rft_core::units::ohm;

    proptest! {
        #[test]
        fn impedance_survives_gamma(
            re in 0.1_f64..1000.0,
            im in -1000.0_f64..1000.0,
            z0 in 1.0_f64..200.0
        ) {
            let z = Complex64::new(re, im);
            let g = gamma_from_impedance(z, ohm(z0)).unwrap();
            let back = impedance_from_gamma(g, ohm(z0)).unwrap();
            prop_assert!((back - z).norm() <= 1e-6 * z.norm().max(1.0));
        }

        #[test]
        fn passive_loads_reflect_at_most_unity(re in 0.0_f64..1e4, im in -1e4_f64..1e4) {
            let g = gamma_from_impedance(Complex64::new(re, im), ohm(50.0)).unwrap();
            prop_assert!(g.magnitude() <= 1.0 + 1e-12);
        }

        #[test]
        fn vswr_survives_gamma(vswr in 1.0_f64..1000.0) {
            let back = gamma_from_vswr(vswr).and_then(vswr_from_gamma).unwrap();
            prop_assert!((back - vswr).abs() <= 1e-9 * vswr);
        }
    }
}
