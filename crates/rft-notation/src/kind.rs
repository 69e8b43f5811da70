//! Quantity kinds and their prefix, suffix and display tables.

use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;

/// Dimension/quantity family for a value typed by the user or shown to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuantityKind {
    /// Resistance (canonical: Ω)
    Resistance,
    /// Capacitance (canonical: F)
    Capacitance,
    /// Inductance (canonical: H)
    Inductance,
    /// Voltage (canonical: V)
    Voltage,
    /// Current (canonical: A)
    Current,
    /// Power (canonical: W)
    Power,
    /// Frequency (canonical: Hz)
    Frequency,
    /// Distance / wavelength (canonical: m)
    Distance,
    /// Logarithmic ratio (canonical: dB)
    Decibel,
    /// Angle (canonical: degrees)
    Angle,
    /// Dimensionless ratio (|Γ|, VSWR, Q)
    Ratio,
    /// Bare SI-prefixed number with no unit
    Generic,
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resistance => write!(f, "Resistance"),
            Self::Capacitance => write!(f, "Capacitance"),
            Self::Inductance => write!(f, "Inductance"),
            Self::Voltage => write!(f, "Voltage"),
            Self::Current => write!(f, "Current"),
            Self::Power => write!(f, "Power"),
            Self::Frequency => write!(f, "Frequency"),
            Self::Distance => write!(f, "Distance"),
            Self::Decibel => write!(f, "Decibel"),
            Self::Angle => write!(f, "Angle"),
            Self::Ratio => write!(f, "Ratio"),
            Self::Generic => write!(f, "Number"),
        }
    }
}

impl FromStr for QuantityKind {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "resistance" | "r" | "ohm" => Ok(Self::Resistance),
            "capacitance" | "c" | "farad" => Ok(Self::Capacitance),
            "inductance" | "l" | "henry" => Ok(Self::Inductance),
            "voltage" | "v" | "volt" => Ok(Self::Voltage),
            "current" | "i" | "ampere" => Ok(Self::Current),
            "power" | "p" | "watt" => Ok(Self::Power),
            "frequency" | "f" | "hz" => Ok(Self::Frequency),
            "distance" | "length" | "wavelength" | "m" => Ok(Self::Distance),
            "decibel" | "db" => Ok(Self::Decibel),
            "angle" | "deg" => Ok(Self::Angle),
            "ratio" => Ok(Self::Ratio),
            "generic" | "number" => Ok(Self::Generic),
            other => Err(NotationError::UnknownKind {
                name: other.to_string(),
            }),
        }
    }
}

/// A multiplier token recognised by the parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prefix {
    /// Token as written; lower case when `case_sensitive` is false.
    pub token: &'static str,
    pub multiplier: f64,
    pub case_sensitive: bool,
}

const fn ci(token: &'static str, multiplier: f64) -> Prefix {
    Prefix {
        token,
        multiplier,
        case_sensitive: false,
    }
}

const fn cs(token: &'static str, multiplier: f64) -> Prefix {
    Prefix {
        token,
        multiplier,
        case_sensitive: true,
    }
}

/// One row of a display table: values with magnitude >= `factor` are divided by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub factor: f64,
    pub label: &'static str,
}

const fn sc(factor: f64, label: &'static str) -> Scale {
    Scale { factor, label }
}

/// How many digits a formatted value keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// `%g`-style: this many significant digits, trailing zeros trimmed.
    Significant(usize),
    /// Fixed number of decimal places.
    Decimals(usize),
}

// Prefix tables are in priority order: the first token present in the input wins,
// regardless of where it sits. "meg" always precedes "m"/"M".
const MICRO: [Prefix; 3] = [ci("u", 1e-6), cs("μ", 1e-6), cs("µ", 1e-6)];

const RESISTANCE_PREFIXES: &[Prefix] = &[
    ci("k", 1e3),
    ci("meg", 1e6),
    cs("M", 1e6),
    cs("m", 1e-3),
    ci("g", 1e9),
];
const CAPACITANCE_PREFIXES: &[Prefix] = &[
    ci("p", 1e-12),
    ci("n", 1e-9),
    MICRO[0],
    MICRO[1],
    MICRO[2],
    cs("m", 1e-3),
    ci("f", 1e-15),
];
const INDUCTANCE_PREFIXES: &[Prefix] = &[
    ci("n", 1e-9),
    MICRO[0],
    MICRO[1],
    MICRO[2],
    ci("meg", 1e6),
    cs("m", 1e-3),
    ci("p", 1e-12),
];
const VOLTAGE_PREFIXES: &[Prefix] = &[
    ci("k", 1e3),
    cs("m", 1e-3),
    MICRO[0],
    MICRO[1],
    MICRO[2],
];
const SMALL_SIGNAL_PREFIXES: &[Prefix] = &[
    cs("m", 1e-3),
    MICRO[0],
    MICRO[1],
    MICRO[2],
    ci("n", 1e-9),
    ci("p", 1e-12),
];
const FREQUENCY_PREFIXES: &[Prefix] = &[
    ci("t", 1e12),
    ci("g", 1e9),
    ci("meg", 1e6),
    cs("M", 1e6),
    ci("k", 1e3),
    cs("m", 1e-3),
];
const DISTANCE_PREFIXES: &[Prefix] = &[
    ci("k", 1e3),
    cs("c", 1e-2),
    cs("m", 1e-3),
    MICRO[0],
    MICRO[1],
    MICRO[2],
    ci("n", 1e-9),
];
const GENERIC_PREFIXES: &[Prefix] = &[
    ci("p", 1e-12),
    ci("n", 1e-9),
    MICRO[0],
    MICRO[1],
    MICRO[2],
    ci("meg", 1e6),
    cs("M", 1e6),
    cs("m", 1e-3),
    ci("k", 1e3),
    ci("g", 1e9),
];

const RESISTANCE_SCALES: &[Scale] = &[
    sc(1e9, "GΩ"),
    sc(1e6, "MΩ"),
    sc(1e3, "kΩ"),
    sc(1.0, "Ω"),
];
const CAPACITANCE_SCALES: &[Scale] = &[
    sc(1.0, "F"),
    sc(1e-3, "mF"),
    sc(1e-6, "μF"),
    sc(1e-9, "nF"),
    sc(1e-12, "pF"),
    sc(1e-15, "fF"),
];
const INDUCTANCE_SCALES: &[Scale] = &[
    sc(1.0, "H"),
    sc(1e-3, "mH"),
    sc(1e-6, "μH"),
    sc(1e-9, "nH"),
    sc(1e-12, "pH"),
];
const VOLTAGE_SCALES: &[Scale] = &[sc(1e3, "kV"), sc(1.0, "V"), sc(1e-3, "mV"), sc(1e-6, "μV")];
const CURRENT_SCALES: &[Scale] = &[
    sc(1.0, "A"),
    sc(1e-3, "mA"),
    sc(1e-6, "μA"),
    sc(1e-9, "nA"),
    sc(1e-12, "pA"),
];
const POWER_SCALES: &[Scale] = &[
    sc(1.0, "W"),
    sc(1e-3, "mW"),
    sc(1e-6, "μW"),
    sc(1e-9, "nW"),
    sc(1e-12, "pW"),
];
const FREQUENCY_SCALES: &[Scale] = &[
    sc(1e12, "THz"),
    sc(1e9, "GHz"),
    sc(1e6, "MHz"),
    sc(1e3, "kHz"),
    sc(1.0, "Hz"),
];
const DISTANCE_SCALES: &[Scale] = &[
    sc(1e3, "km"),
    sc(1.0, "m"),
    sc(1e-2, "cm"),
    sc(1e-3, "mm"),
    sc(1e-6, "μm"),
    sc(1e-9, "nm"),
];
const DECIBEL_SCALES: &[Scale] = &[sc(1.0, "dB")];
const ANGLE_SCALES: &[Scale] = &[sc(1.0, "°")];
const RATIO_SCALES: &[Scale] = &[sc(1.0, "")];
const GENERIC_SCALES: &[Scale] = &[
    sc(1e9, "G"),
    sc(1e6, "M"),
    sc(1e3, "k"),
    sc(1.0, ""),
    sc(1e-3, "m"),
    sc(1e-6, "μ"),
    sc(1e-9, "n"),
    sc(1e-12, "p"),
];

impl QuantityKind {
    /// Multiplier tokens accepted by the parser, highest priority first.
    pub fn prefixes(self) -> &'static [Prefix] {
        match self {
            Self::Resistance => RESISTANCE_PREFIXES,
            Self::Capacitance => CAPACITANCE_PREFIXES,
            Self::Inductance => INDUCTANCE_PREFIXES,
            Self::Voltage => VOLTAGE_PREFIXES,
            Self::Current | Self::Power => SMALL_SIGNAL_PREFIXES,
            Self::Frequency => FREQUENCY_PREFIXES,
            Self::Distance => DISTANCE_PREFIXES,
            Self::Generic => GENERIC_PREFIXES,
            Self::Decibel | Self::Angle | Self::Ratio => &[],
        }
    }

    /// Trailing unit symbols stripped before prefix detection (lower case, longest first).
    pub fn unit_suffixes(self) -> &'static [&'static str] {
        match self {
            Self::Resistance => &["ohms", "ohm", "ω"],
            Self::Capacitance => &["f"],
            Self::Inductance => &["h"],
            Self::Voltage => &["v"],
            Self::Current => &["a"],
            Self::Power => &["w"],
            Self::Frequency => &["hz"],
            Self::Distance => &["m"],
            Self::Decibel => &["db"],
            Self::Angle => &["deg", "°"],
            Self::Ratio | Self::Generic => &[],
        }
    }

    /// Display table, largest factor first. Values below the last row use the last row.
    pub fn scales(self) -> &'static [Scale] {
        match self {
            Self::Resistance => RESISTANCE_SCALES,
            Self::Capacitance => CAPACITANCE_SCALES,
            Self::Inductance => INDUCTANCE_SCALES,
            Self::Voltage => VOLTAGE_SCALES,
            Self::Current => CURRENT_SCALES,
            Self::Power => POWER_SCALES,
            Self::Frequency => FREQUENCY_SCALES,
            Self::Distance => DISTANCE_SCALES,
            Self::Decibel => DECIBEL_SCALES,
            Self::Angle => ANGLE_SCALES,
            Self::Ratio => RATIO_SCALES,
            Self::Generic => GENERIC_SCALES,
        }
    }

    pub fn precision(self) -> Precision {
        match self {
            Self::Frequency | Self::Decibel => Precision::Decimals(2),
            Self::Angle => Precision::Decimals(1),
            Self::Distance => Precision::Significant(6),
            _ => Precision::Significant(4),
        }
    }

    /// Text placed between the number and the unit label.
    pub fn separator(self) -> &'static str {
        match self {
            Self::Angle | Self::Generic => "",
            _ => " ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_has_a_base_row() {
        for kind in [
            QuantityKind::Resistance,
            QuantityKind::Capacitance,
            QuantityKind::Inductance,
            QuantityKind::Voltage,
            QuantityKind::Current,
            QuantityKind::Power,
            QuantityKind::Frequency,
            QuantityKind::Distance,
            QuantityKind::Decibel,
            QuantityKind::Angle,
            QuantityKind::Ratio,
            QuantityKind::Generic,
        ] {
            assert!(
                kind.scales().iter().any(|s| s.factor == 1.0),
                "{kind} has no unit row"
            );
            let factors: Vec<f64> = kind.scales().iter().map(|s| s.factor).collect();
            assert!(factors.windows(2).all(|w| w[0] > w[1]), "{kind} not descending");
        }
    }

    #[test]
    fn meg_precedes_milli_wherever_both_exist() {
        for kind in [
            QuantityKind::Resistance,
            QuantityKind::Inductance,
            QuantityKind::Frequency,
            QuantityKind::Generic,
        ] {
            let table = kind.prefixes();
            let meg = table.iter().position(|p| p.token == "meg").unwrap();
            let milli = table.iter().position(|p| p.token == "m").unwrap();
            assert!(meg < milli, "{kind}");
        }
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("R".parse::<QuantityKind>().unwrap(), QuantityKind::Resistance);
        assert_eq!(
            " wavelength ".parse::<QuantityKind>().unwrap(),
            QuantityKind::Distance
        );
        assert!("torque".parse::<QuantityKind>().is_err());
    }
}
