//! Octave and decade bandwidth of a frequency band.

use rft_core::units::{Frequency, hz};
use rft_core::{Reading, Sentinel};

use crate::common::require_positive;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSummary {
    /// (f_low + f_high)/2
    pub arithmetic_center: Frequency,
    /// √(f_low·f_high)
    pub geometric_center: Frequency,
    pub bandwidth: Frequency,
    pub octaves: f64,
    pub decades: f64,
    /// Arithmetic centre over bandwidth.
    pub q: f64,
}

/// Describe the band [f_low, f_high]. An inverted or empty band is `Invalid`.
pub fn band_summary(f_low: Frequency, f_high: Frequency) -> Reading<BandSummary> {
    let low = require_positive(f_low.value)?;
    let high = require_positive(f_high.value)?;
    if high <= low {
        return Err(Sentinel::Invalid);
    }
    let ratio = high / low;
    let bandwidth = high - low;
    let center = (low + high) / 2.0;
    Ok(BandSummary {
        arithmetic_center: hz(center),
        geometric_center: hz((low * high).sqrt()),
        bandwidth: hz(bandwidth),
        octaves: ratio.log2(),
        decades: ratio.log10(),
        q: center / bandwidth,
    })
}
