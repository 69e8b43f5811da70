//! Named display units offered next to numeric inputs (frequency, distance, wavelength).

use std::str::FromStr;

use crate::error::{FormulaError, FormulaResult};

/// A unit that is a fixed multiple of its SI base unit.
pub trait LinearUnit: Copy + Sized + 'static {
    /// Family name used in error messages.
    const FAMILY: &'static str;
    const ALL: &'static [Self];

    /// SI base units per one of this unit.
    fn factor(self) -> f64;
    fn symbol(self) -> &'static str;

    fn to_si(self, value: f64) -> f64 {
        value * self.factor()
    }

    fn from_si(self, value: f64) -> f64 {
        value / self.factor()
    }

    /// Look a unit up by symbol, ignoring ASCII case and accepting `u` for `μ`.
    fn lookup(name: &str) -> FormulaResult<Self> {
        let wanted = name.trim().replace('u', "μ");
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.symbol() == name.trim() || unit.symbol() == wanted)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|unit| unit.symbol().eq_ignore_ascii_case(name.trim()))
            })
            .ok_or_else(|| FormulaError::UnknownUnit {
                family: Self::FAMILY,
                name: name.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyUnit {
    Hz,
    KHz,
    MHz,
    GHz,
    THz,
}

impl LinearUnit for FrequencyUnit {
    const FAMILY: &'static str = "frequency";
    const ALL: &'static [Self] = &[Self::Hz, Self::KHz, Self::MHz, Self::GHz, Self::THz];

    fn factor(self) -> f64 {
        match self {
            Self::Hz => 1.0,
            Self::KHz => 1e3,
            Self::MHz => 1e6,
            Self::GHz => 1e9,
            Self::THz => 1e12,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Hz => "Hz",
            Self::KHz => "kHz",
            Self::MHz => "MHz",
            Self::GHz => "GHz",
            Self::THz => "THz",
        }
    }
}

/// Path-length units for link budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Foot,
    Mile,
    NauticalMile,
}

impl LinearUnit for DistanceUnit {
    const FAMILY: &'static str = "distance";
    const ALL: &'static [Self] = &[
        Self::Meter,
        Self::Kilometer,
        Self::Centimeter,
        Self::Millimeter,
        Self::Foot,
        Self::Mile,
        Self::NauticalMile,
    ];

    fn factor(self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Kilometer => 1e3,
            Self::Centimeter => 1e-2,
            Self::Millimeter => 1e-3,
            Self::Foot => 0.3048,
            Self::Mile => 1609.344,
            Self::NauticalMile => 1852.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Foot => "ft",
            Self::Mile => "mi",
            Self::NauticalMile => "nmi",
        }
    }
}

/// Wavelength units, down to the sub-millimetre ones used for PCB traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WavelengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Micrometer,
    Nanometer,
    Inch,
    Mil,
}

impl LinearUnit for WavelengthUnit {
    const FAMILY: &'static str = "wavelength";
    const ALL: &'static [Self] = &[
        Self::Meter,
        Self::Centimeter,
        Self::Millimeter,
        Self::Micrometer,
        Self::Nanometer,
        Self::Inch,
        Self::Mil,
    ];

    fn factor(self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Centimeter => 1e-2,
            Self::Millimeter => 1e-3,
            Self::Micrometer => 1e-6,
            Self::Nanometer => 1e-9,
            Self::Inch => 0.0254,
            Self::Mil => 0.0254e-3,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Micrometer => "μm",
            Self::Nanometer => "nm",
            Self::Inch => "inch",
            Self::Mil => "mil",
        }
    }
}

macro_rules! from_str_via_lookup {
    ($($unit:ty),*) => {
        $(
            impl FromStr for $unit {
                type Err = FormulaError;

                fn from_str(s: &str) -> FormulaResult<Self> {
                    <$unit as LinearUnit>::lookup(s)
                }
            }
        )*
    };
}

from_str_via_lookup!(FrequencyUnit, DistanceUnit, WavelengthUnit);
