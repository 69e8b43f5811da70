//! Parallel and series equivalents.
//!
//! Parallel resistors, parallel inductors and series capacitors all reduce to the
//! same harmonic sum 1/Σ(1/xᵢ). Entries that are zero, negative or non-finite
//! (typically unparseable cells that degraded to 0.0) are dropped on construction.

use rft_core::units::{Capacitance, Current, Inductance, Power, Resistance, Voltage};
use rft_core::units::{ampere, farad, henry, ohm, watt};
use rft_core::{Reading, Sentinel};

/// Positive, finite component values in SI base units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentList {
    values: Vec<f64>,
}

impl ComponentList {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values
                .into_iter()
                .filter(|v| v.is_finite() && *v > 0.0)
                .collect(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 1/Σ(1/xᵢ), or 0.0 for an empty list.
    pub fn harmonic_sum(&self) -> f64 {
        let inverse: f64 = self.values.iter().map(|v| 1.0 / v).sum();
        if inverse > 0.0 { 1.0 / inverse } else { 0.0 }
    }
}

impl FromIterator<f64> for ComponentList {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

pub fn parallel_resistance(resistors: &ComponentList) -> Resistance {
    ohm(resistors.harmonic_sum())
}

pub fn parallel_inductance(inductors: &ComponentList) -> Inductance {
    henry(inductors.harmonic_sum())
}

pub fn series_capacitance(capacitors: &ComponentList) -> Capacitance {
    farad(capacitors.harmonic_sum())
}

/// Current and dissipation of one resistor with a fixed voltage across it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchLoad {
    pub resistance: Resistance,
    pub current: Current,
    pub power: Power,
    /// Dissipation exceeds the per-resistor limit.
    pub over_limit: bool,
}

/// I = ΔV/R and P = I²R for every resistor, flagged against `p_max`.
pub fn branch_loads(
    resistors: &ComponentList,
    delta_v: Voltage,
    p_max: Power,
) -> Vec<BranchLoad> {
    resistors
        .values()
        .iter()
        .map(|&r| {
            let current = delta_v.value / r;
            let power = current * current * r;
            BranchLoad {
                resistance: ohm(r),
                current: ampere(current),
                power: watt(power),
                over_limit: power > p_max.value,
            }
        })
        .collect()
}

/// Parallel resistor bank driven by a common voltage.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelBank {
    pub equivalent: Resistance,
    pub branches: Vec<BranchLoad>,
    pub total_current: Current,
    pub total_power: Power,
}

impl ParallelBank {
    pub fn any_over_limit(&self) -> bool {
        self.branches.iter().any(|b| b.over_limit)
    }
}

/// Equivalent resistance and the per-branch table. `Invalid` for an empty bank.
pub fn parallel_bank(
    resistors: &ComponentList,
    delta_v: Voltage,
    p_max: Power,
) -> Reading<ParallelBank> {
    if resistors.is_empty() {
        return Err(Sentinel::Invalid);
    }
    let branches = branch_loads(resistors, delta_v, p_max);
    let total_current = branches.iter().map(|b| b.current.value).sum();
    let total_power = branches.iter().map(|b| b.power.value).sum();
    Ok(ParallelBank {
        equivalent: parallel_resistance(resistors),
        branches,
        total_current: ampere(total_current),
        total_power: watt(total_power),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn equivalent_is_below_smallest(values in prop::collection::vec(1.0_f64..1e6, 2..8)) {
            let list = ComponentList::new(values.iter().copied());
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            prop_assert!(list.harmonic_sum() < min);
        }

        #[test]
        fn single_entry_is_itself(v in 1e-12_f64..1e9) {
            let list = ComponentList::new([v]);
            prop_assert!((list.harmonic_sum() - v).abs() <= 1e-12 * v);
        }
    }
}
