//! Frequency ↔ wavelength in a medium of relative permittivity εr.

use rft_core::numeric::EPSILON;
use rft_core::units::constants::SPEED_OF_LIGHT_MPS;
use rft_core::units::{Frequency, Length, hz, m};
use rft_core::{Reading, Sentinel};
use tracing::debug;

/// Permittivities below 1 are unphysical for a passive dielectric and are raised to 1.
pub fn effective_permittivity(er: f64) -> Reading {
    if !er.is_finite() {
        return Err(Sentinel::Invalid);
    }
    if er < 1.0 {
        debug!(er, "relative permittivity below 1 clamped to 1");
        return Ok(1.0);
    }
    Ok(er)
}

/// λ = c/(f·√εr).
pub fn wavelength(frequency: Frequency, er: f64) -> Reading<Length> {
    if frequency.value.is_nan() || frequency.value <= EPSILON {
        return Err(Sentinel::Invalid);
    }
    let sqrt_er = effective_permittivity(er)?.sqrt();
    Ok(m(SPEED_OF_LIGHT_MPS / (frequency.value * sqrt_er)))
}

/// f = c/(λ·√εr).
pub fn frequency_from_wavelength(lambda: Length, er: f64) -> Reading<Frequency> {
    if lambda.value.is_nan() || lambda.value <= EPSILON {
        return Err(Sentinel::Invalid);
    }
    let sqrt_er = effective_permittivity(er)?.sqrt();
    Ok(hz(SPEED_OF_LIGHT_MPS / (lambda.value * sqrt_er)))
}

/// A frequency with its full, half and quarter wavelength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavelengthSet {
    pub frequency: Frequency,
    pub full: Length,
    pub half: Length,
    pub quarter: Length,
}

impl WavelengthSet {
    fn new(frequency: Frequency, full: Length) -> Self {
        Self {
            frequency,
            full,
            half: m(full.value / 2.0),
            quarter: m(full.value / 4.0),
        }
    }

    pub fn from_frequency(frequency: Frequency, er: f64) -> Reading<Self> {
        let full = wavelength(frequency, er)?;
        Ok(Self::new(frequency, full))
    }

    pub fn from_wavelength(lambda: Length, er: f64) -> Reading<Self> {
        let frequency = frequency_from_wavelength(lambda, er)?;
        Ok(Self::new(frequency, lambda))
    }
}
