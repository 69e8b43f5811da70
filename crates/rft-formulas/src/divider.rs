//! Resistive voltage divider with parallel banks in each leg.

use rft_core::units::{Current, Power, Resistance, Voltage};
use rft_core::units::{ampere, volt, watt};
use rft_core::{Reading, Sentinel};

use crate::common::{divide, require_finite};
use crate::equivalents::{BranchLoad, ComponentList, branch_loads, parallel_resistance};

/// Vout = Vdc·R_lower/(R_upper + R_lower).
pub fn divider_output(vdc: Voltage, upper: Resistance, lower: Resistance) -> Reading<Voltage> {
    let vdc = require_finite(vdc.value)?;
    divide(vdc * lower.value, upper.value + lower.value).map(volt)
}

/// One leg of the divider: its equivalent and the load on every resistor in it.
#[derive(Debug, Clone, PartialEq)]
pub struct DividerLeg {
    pub equivalent: Resistance,
    /// Voltage across the leg.
    pub drop: Voltage,
    pub loads: Vec<BranchLoad>,
    pub power: Power,
}

impl DividerLeg {
    fn new(resistors: &ComponentList, drop: f64, p_max: Power) -> Self {
        let loads = branch_loads(resistors, volt(drop), p_max);
        let power = loads.iter().map(|l| l.power.value).sum();
        Self {
            equivalent: parallel_resistance(resistors),
            drop: volt(drop),
            loads,
            power: watt(power),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Divider {
    pub vout: Voltage,
    pub upper: DividerLeg,
    pub lower: DividerLeg,
    /// Current drawn from the supply.
    pub current: Current,
    pub total_power: Power,
}

impl Divider {
    pub fn any_over_limit(&self) -> bool {
        self.upper
            .loads
            .iter()
            .chain(&self.lower.loads)
            .any(|l| l.over_limit)
    }
}

/// Solve the divider. The upper leg sees Vdc − Vout, the lower leg Vout.
///
/// `Invalid` if either leg has no usable resistor.
pub fn voltage_divider(
    vdc: Voltage,
    upper: &ComponentList,
    lower: &ComponentList,
    p_max: Power,
) -> Reading<Divider> {
    if upper.is_empty() || lower.is_empty() {
        return Err(Sentinel::Invalid);
    }
    let r_upper = parallel_resistance(upper);
    let r_lower = parallel_resistance(lower);
    let vout = divider_output(vdc, r_upper, r_lower)?;
    let current = divide(vdc.value, r_upper.value + r_lower.value)?;

    let upper = DividerLeg::new(upper, vdc.value - vout.value, p_max);
    let lower = DividerLeg::new(lower, vout.value, p_max);
    let total_power = upper.power.value + lower.power.value;

    Ok(Divider {
        vout,
        upper,
        lower,
        current: ampere(current),
        total_power: watt(total_power),
    })
}
