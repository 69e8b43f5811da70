//! Superheterodyne frequency planning: LO and image frequency.

use std::fmt;
use std::str::FromStr;

use rft_core::units::{Frequency, hz};
use rft_core::{Reading, Sentinel};

use crate::common::require_positive;
use crate::error::FormulaError;

/// Side of the RF carrier on which the local oscillator sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InjectionMode {
    /// f_LO = f_RF − f_IF
    #[default]
    LowSide,
    /// f_LO = f_RF + f_IF
    HighSide,
}

impl fmt::Display for InjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowSide => write!(f, "Low-side injection"),
            Self::HighSide => write!(f, "High-side injection"),
        }
    }
}

impl FromStr for InjectionMode {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "low" | "lowside" => Ok(Self::LowSide),
            "high" | "highside" => Ok(Self::HighSide),
            _ => Err(FormulaError::UnknownInjection {
                name: s.to_string(),
            }),
        }
    }
}

/// A consistent RF/IF/LO/image set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlan {
    pub mode: InjectionMode,
    pub rf: Frequency,
    pub intermediate: Frequency,
    pub lo: Frequency,
    pub image: Frequency,
}

/// From f_RF and f_IF: low side gives LO = RF − IF and image = RF − 2·IF, high side
/// LO = RF + IF and image = RF + 2·IF.
///
/// `Invalid` for non-positive inputs or when the derived LO is not positive.
pub fn image_plan(
    rf: Frequency,
    intermediate: Frequency,
    mode: InjectionMode,
) -> Reading<ImagePlan> {
    let f_rf = require_positive(rf.value)?;
    let f_if = require_positive(intermediate.value)?;
    let (lo, image) = match mode {
        InjectionMode::LowSide => (f_rf - f_if, f_rf - 2.0 * f_if),
        InjectionMode::HighSide => (f_rf + f_if, f_rf + 2.0 * f_if),
    };
    require_positive(lo)?;
    Ok(ImagePlan {
        mode,
        rf,
        intermediate,
        lo: hz(lo),
        image: hz(image),
    })
}

/// From f_LO and f_IF: low side gives RF = LO + IF and image = LO − IF, high side
/// RF = LO − IF and image = LO + IF.
pub fn plan_from_lo(
    lo: Frequency,
    intermediate: Frequency,
    mode: InjectionMode,
) -> Reading<ImagePlan> {
    let f_lo = require_positive(lo.value)?;
    let f_if = require_positive(intermediate.value)?;
    let (rf, image) = match mode {
        InjectionMode::LowSide => (f_lo + f_if, f_lo - f_if),
        InjectionMode::HighSide => (f_lo - f_if, f_lo + f_if),
    };
    require_positive(rf)?;
    Ok(ImagePlan {
        mode,
        rf: hz(rf),
        intermediate,
        lo,
        image: hz(image),
    })
}

/// From f_RF and f_LO: low side gives IF = RF − LO, high side IF = LO − RF. The image
/// sits one IF past the LO on the far side from RF.
///
/// `Invalid` when the LO is on the wrong side of RF for `mode`.
pub fn plan_from_rf_lo(rf: Frequency, lo: Frequency, mode: InjectionMode) -> Reading<ImagePlan> {
    let f_rf = require_positive(rf.value)?;
    let f_lo = require_positive(lo.value)?;
    let (intermediate, image) = match mode {
        InjectionMode::LowSide => (f_rf - f_lo, 2.0 * f_lo - f_rf),
        InjectionMode::HighSide => (f_lo - f_rf, 2.0 * f_lo - f_rf),
    };
    require_positive(intermediate)?;
    Ok(ImagePlan {
        mode,
        rf,
        intermediate: hz(intermediate),
        lo,
        image: hz(image),
    })
}

/// Two cascaded low-side conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualConversionPlan {
    pub lo1: Frequency,
    pub image1: Frequency,
    pub lo2: Frequency,
    pub image2: Frequency,
}

/// LO1 = RF − IF1, IM1 = LO1 − IF1, LO2 = IF1 − IF2, IM2 = LO2 − IF2.
///
/// `Invalid` unless both LOs come out positive, which requires RF > IF1 > IF2.
pub fn dual_conversion(
    rf: Frequency,
    if1: Frequency,
    if2: Frequency,
) -> Reading<DualConversionPlan> {
    let f_rf = require_positive(rf.value)?;
    let f_if1 = require_positive(if1.value)?;
    let f_if2 = require_positive(if2.value)?;

    let lo1 = f_rf - f_if1;
    let lo2 = f_if1 - f_if2;
    if lo1 <= 0.0 || lo2 <= 0.0 {
        return Err(Sentinel::Invalid);
    }
    Ok(DualConversionPlan {
        lo1: hz(lo1),
        image1: hz(lo1 - f_if1),
        lo2: hz(lo2),
        image2: hz(lo2 - f_if2),
    })
}
