//! RF power unit conversion.
//!
//! Every conversion goes through watts. Voltage-referenced units assume a matched
//! load of 50 Ω or 75 Ω, so V(rms) = √(P·Z0) and
//! dBμV = 10·log10(P) + 10·log10(Z0) + 120, dBmV = dBμV − 60.

use std::fmt;
use std::str::FromStr;

use rft_core::{Reading, Sentinel, checked};

use crate::common::require_finite;
use crate::error::FormulaError;

/// Load impedance a voltage-referenced power unit is defined against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceImpedance {
    Ohm50,
    Ohm75,
}

impl ReferenceImpedance {
    pub fn ohms(self) -> f64 {
        match self {
            Self::Ohm50 => 50.0,
            Self::Ohm75 => 75.0,
        }
    }

    /// dBμV reading of a 1 W signal: 10·log10(Z0) + 120 (136.99 at 50 Ω, 138.75 at 75 Ω).
    pub fn dbuv_offset(self) -> f64 {
        10.0 * self.ohms().log10() + 120.0
    }

    /// dBmV reading of a 1 W signal (76.99 at 50 Ω, 78.75 at 75 Ω).
    pub fn dbmv_offset(self) -> f64 {
        10.0 * self.ohms().log10() + 60.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUnit {
    Watt,
    Milliwatt,
    Dbm,
    DbMicrovolt(ReferenceImpedance),
    DbMillivolt(ReferenceImpedance),
    VoltRms(ReferenceImpedance),
}

impl PowerUnit {
    pub const ALL: [PowerUnit; 9] = [
        Self::Watt,
        Self::Milliwatt,
        Self::Dbm,
        Self::DbMicrovolt(ReferenceImpedance::Ohm75),
        Self::DbMillivolt(ReferenceImpedance::Ohm75),
        Self::VoltRms(ReferenceImpedance::Ohm75),
        Self::DbMicrovolt(ReferenceImpedance::Ohm50),
        Self::DbMillivolt(ReferenceImpedance::Ohm50),
        Self::VoltRms(ReferenceImpedance::Ohm50),
    ];

    /// Stable identifier used on the command line and in config files.
    pub fn key(self) -> &'static str {
        use ReferenceImpedance::{Ohm50, Ohm75};
        match self {
            Self::Watt => "W",
            Self::Milliwatt => "mW",
            Self::Dbm => "dBm",
            Self::DbMicrovolt(Ohm50) => "dBuV_50",
            Self::DbMicrovolt(Ohm75) => "dBuV_75",
            Self::DbMillivolt(Ohm50) => "dBmV_50",
            Self::DbMillivolt(Ohm75) => "dBmV_75",
            Self::VoltRms(Ohm50) => "V_50",
            Self::VoltRms(Ohm75) => "V_75",
        }
    }

    pub fn is_logarithmic(self) -> bool {
        matches!(
            self,
            Self::Dbm | Self::DbMicrovolt(_) | Self::DbMillivolt(_)
        )
    }

    /// Base unit symbol without the reference impedance.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Watt => "W",
            Self::Milliwatt => "mW",
            Self::Dbm => "dBm",
            Self::DbMicrovolt(_) => "dBμV",
            Self::DbMillivolt(_) => "dBmV",
            Self::VoltRms(_) => "V",
        }
    }

    pub fn reference(self) -> Option<ReferenceImpedance> {
        match self {
            Self::DbMicrovolt(z) | Self::DbMillivolt(z) | Self::VoltRms(z) => Some(z),
            Self::Watt | Self::Milliwatt | Self::Dbm => None,
        }
    }
}

impl fmt::Display for PowerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reference() {
            Some(z) => write!(f, "{} (Z₀ = {} Ω)", self.symbol(), z.ohms()),
            None => write!(f, "{}", self.symbol()),
        }
    }
}

impl FromStr for PowerUnit {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('μ', "u");
        Self::ALL
            .into_iter()
            .find(|unit| unit.key().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| FormulaError::UnknownPowerUnit {
                name: s.to_string(),
            })
    }
}

/// Express a value in watts. Linear inputs must be positive.
pub fn to_watts(value: f64, unit: PowerUnit) -> Reading {
    let value = require_finite(value)?;
    if !unit.is_logarithmic() && value <= 0.0 {
        return Err(Sentinel::Invalid);
    }
    let watts = match unit {
        PowerUnit::Watt => value,
        PowerUnit::Milliwatt => value * 1e-3,
        PowerUnit::Dbm => 10f64.powf((value - 30.0) / 10.0),
        PowerUnit::DbMicrovolt(z) => 10f64.powf((value - z.dbuv_offset()) / 10.0),
        PowerUnit::DbMillivolt(z) => 10f64.powf((value - z.dbmv_offset()) / 10.0),
        PowerUnit::VoltRms(z) => value * value / z.ohms(),
    };
    checked(watts)
}

/// Express a power in watts in `unit`.
pub fn from_watts(watts: f64, unit: PowerUnit) -> Reading {
    if watts.is_nan() || watts <= 0.0 {
        return Err(Sentinel::Invalid);
    }
    let value = match unit {
        PowerUnit::Watt => watts,
        PowerUnit::Milliwatt => watts * 1e3,
        PowerUnit::Dbm => 10.0 * watts.log10() + 30.0,
        PowerUnit::DbMicrovolt(z) => 10.0 * watts.log10() + z.dbuv_offset(),
        PowerUnit::DbMillivolt(z) => 10.0 * watts.log10() + z.dbmv_offset(),
        PowerUnit::VoltRms(z) => (watts * z.ohms()).sqrt(),
    };
    checked(value)
}

pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> Reading {
    to_watts(value, from).and_then(|w| from_watts(w, to))
}

/// Rescale small W and V readings (below 0.5) into m, μ, n or p.
///
/// Returns the scaled value and the prefix to put in front of the unit symbol.
pub fn scale_linear(value: f64, unit: PowerUnit) -> (f64, &'static str) {
    let linear = matches!(unit, PowerUnit::Watt | PowerUnit::VoltRms(_));
    if !linear || value <= 0.0 || value >= 0.5 {
        return (value, "");
    }
    if value >= 1e-3 {
        (value * 1e3, "m")
    } else if value >= 1e-6 {
        (value * 1e6, "μ")
    } else if value >= 1e-9 {
        (value * 1e9, "n")
    } else {
        (value * 1e12, "p")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReferenceImpedance::{Ohm50, Ohm75};

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn offsets_match_the_usual_tables() {
        assert!(approx(Ohm50.dbuv_offset(), 136.99, 0.005));
        assert!(approx(Ohm75.dbuv_offset(), 138.75, 0.005));
        assert!(approx(Ohm50.dbmv_offset(), 76.99, 0.005));
        assert!(approx(Ohm75.dbmv_offset(), 78.75, 0.005));
    }

    #[test]
    fn dbm_and_watts() {
        assert!(approx(to_watts(0.0, PowerUnit::Dbm).unwrap(), 1e-3, 1e-15));
        assert!(approx(to_watts(30.0, PowerUnit::Dbm).unwrap(), 1.0, 1e-12));
        assert!(approx(from_watts(1.0, PowerUnit::Dbm).unwrap(), 30.0, 1e-12));
        let w = convert_power(250.0, PowerUnit::Milliwatt, PowerUnit::Watt).unwrap();
        assert!(approx(w, 0.25, 1e-15));
    }

    #[test]
    fn zero_dbm_on_fifty_ohms() {
        let v = convert_power(0.0, PowerUnit::Dbm, PowerUnit::VoltRms(Ohm50)).unwrap();
        assert!(approx(v, 0.223_606_8, 1e-6));
        let dbuv = convert_power(0.0, PowerUnit::Dbm, PowerUnit::DbMicrovolt(Ohm50));
        let dbuv = dbuv.unwrap();
        assert!(approx(dbuv, 106.99, 0.005));
        // a volt-referenced unit agrees with its own voltage
        assert!(approx(dbuv, 20.0 * (v / 1e-6).log10(), 1e-9));
    }

    #[test]
    fn linear_input_must_be_positive() {
        assert_eq!(to_watts(0.0, PowerUnit::Watt), Err(Sentinel::Invalid));
        assert_eq!(
            to_watts(-1.0, PowerUnit::VoltRms(Ohm75)),
            Err(Sentinel::Invalid)
        );
        // negative dB is fine
        assert!(to_watts(-40.0, PowerUnit::Dbm).is_ok());
    }

    #[test]
    fn unit_keys_round_trip() {
        for unit in PowerUnit::ALL {
            assert_eq!(unit.key().parse::<PowerUnit>().unwrap(), unit);
        }
        assert_eq!(
            "dBμV_75".parse::<PowerUnit>().unwrap(),
            PowerUnit::DbMicrovolt(Ohm75)
        );
        assert_eq!("dbm".parse::<PowerUnit>().unwrap(), PowerUnit::Dbm);
        assert!("dBW".parse::<PowerUnit>().is_err());
    }

    #[test]
    fn display_names_reference() {
        assert_eq!(PowerUnit::DbMicrovolt(Ohm50).to_string(), "dBμV (Z₀ = 50 Ω)");
        assert_eq!(PowerUnit::Dbm.to_string(), "dBm");
    }

    #[test]
    fn small_linear_values_are_rescaled() {
        let (v, prefix) = scale_linear(0.025, PowerUnit::Watt);
        assert!(approx(v, 25.0, 1e-12));
        assert_eq!(prefix, "m");
        assert_eq!(scale_linear(2.0, PowerUnit::Watt), (2.0, ""));
        assert_eq!(scale_linear(0.1, PowerUnit::Dbm), (0.1, ""));
        let (v, prefix) = scale_linear(3e-7, PowerUnit::VoltRms(Ohm50));
        assert!(approx(v, 300.0, 1e-9));
        assert_eq!(prefix, "n");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn conversions_are_reversible(dbm in -150.0_f64..60.0, a in 0_usize..9, b in 0_usize..9) {
            let from = PowerUnit::ALL[a];
            let to = PowerUnit::ALL[b];
            let start = convert_power(dbm, PowerUnit::Dbm, from).unwrap();
            let there = convert_power(start, from, to).unwrap();
            let back = convert_power(there, to, from).unwrap();
            prop_assert!((back - start).abs() <= 1e-9 * start.abs().max(1.0));
        }
    }
}
