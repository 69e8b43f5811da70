//! Free-space path loss.

use std::f64::consts::PI;

use rft_core::units::constants::SPEED_OF_LIGHT_MPS;
use rft_core::units::{Frequency, Length, m};
use rft_core::{Reading, checked};

use crate::common::{require_finite, require_positive};

/// Multiples of the nominal distance reported in the path-loss table.
pub const DISTANCE_FACTORS: [f64; 5] = [0.25, 0.5, 1.0, 2.0, 4.0];

/// FSPL(dB) = 20·log10(4π/c) + 20·log10(f) + 20·log10(d) − G_tx − G_rx.
///
/// Antenna gains are in dBi. Non-positive frequency or distance is `Invalid`.
pub fn free_space_path_loss(
    frequency: Frequency,
    distance: Length,
    gain_tx_db: f64,
    gain_rx_db: f64,
) -> Reading {
    let f = require_positive(frequency.value)?;
    let d = require_positive(distance.value)?;
    let gain_tx = require_finite(gain_tx_db)?;
    let gain_rx = require_finite(gain_rx_db)?;
    let constant = 20.0 * (4.0 * PI / SPEED_OF_LIGHT_MPS).log10();
    checked(constant + 20.0 * f.log10() + 20.0 * d.log10() - gain_tx - gain_rx)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathLossPoint {
    pub distance: Length,
    pub loss_db: Reading,
}

/// Path loss at d/4, d/2, d, 2d and 4d.
pub fn path_loss_table(
    frequency: Frequency,
    distance: Length,
    gain_tx_db: f64,
    gain_rx_db: f64,
) -> Vec<PathLossPoint> {
    DISTANCE_FACTORS
        .iter()
        .map(|factor| {
            let d = m(distance.value * factor);
            PathLossPoint {
                distance: d,
                loss_db: free_space_path_loss(frequency, d, gain_tx_db, gain_rx_db),
            }
        })
        .collect()
}
