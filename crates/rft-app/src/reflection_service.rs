//! Load reflection calculators: Γ from Z, Z from Γ, and the VSWR/S11/|Γ| triple.

use std::str::FromStr;

use num_complex::Complex64;
use rft_core::units::ohm;
use rft_formulas::{MismatchTriple, ReflectionSummary};
use rft_notation::{QuantityKind, format_reading, format_value};
use tracing::trace;

use crate::config::ToolboxConfig;
use crate::error::{AppError, AppResult};
use crate::input::read_value;
use crate::report::Report;

/// Which of the three mismatch figures the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchInput {
    Vswr,
    S11Db,
    GammaMagnitude,
}

impl FromStr for MismatchInput {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vswr" | "swr" => Ok(Self::Vswr),
            "s11" | "s11db" | "rl" => Ok(Self::S11Db),
            "gamma" | "g" | "mag" => Ok(Self::GammaMagnitude),
            other => Err(AppError::InvalidInput(format!(
                "unknown mismatch figure '{other}' (expected vswr, s11 or gamma)"
            ))),
        }
    }
}

/// Γ, VSWR and S11 of a load `resistance + j·reactance` on the configured Z0.
pub fn gamma_calculator(
    resistance: &str,
    reactance: &str,
    z0: Option<&str>,
    config: &ToolboxConfig,
) -> AppResult<Report> {
    trace!(resistance, reactance, "gamma calculator");
    let z = Complex64::new(
        read_value(resistance, QuantityKind::Resistance)?,
        read_value(reactance, QuantityKind::Resistance)?,
    );
    let z0 = reference_impedance(z0, config)?;
    let summary = ReflectionSummary::from_impedance(z, ohm(z0));

    let mut report = Report::new("Reflection coefficient from load impedance");
    report.row("Z0", format_value(z0, QuantityKind::Resistance));
    report.row("Z", format_complex_impedance(z));
    push_summary(&mut report, &summary);
    Ok(report)
}

/// Load impedance from |Γ| and its angle.
pub fn impedance_calculator(
    magnitude: &str,
    angle_deg: &str,
    z0: Option<&str>,
    config: &ToolboxConfig,
) -> AppResult<Report> {
    trace!(magnitude, angle_deg, "impedance calculator");
    let magnitude = read_value(magnitude, QuantityKind::Ratio)?;
    let angle = read_value(angle_deg, QuantityKind::Angle)?;
    let z0 = reference_impedance(z0, config)?;
    let summary = ReflectionSummary::from_polar(magnitude, angle, ohm(z0));

    let mut report = Report::new("Load impedance from reflection coefficient");
    report.row("Z0", format_value(z0, QuantityKind::Resistance));
    match summary.impedance {
        Ok(z) => report.row("Z", format_complex_impedance(z)),
        Err(sentinel) => report.row("Z", sentinel.label()),
    };
    push_summary(&mut report, &summary);
    if magnitude < 0.0 {
        report.note("|Γ| cannot be negative");
    } else if magnitude > 1.0 {
        report.note("|Γ| above 1 describes an active load");
    }
    Ok(report)
}

/// Complete the VSWR / S11 / |Γ| triple from any one of them.
pub fn mismatch_calculator(input: MismatchInput, value: &str) -> AppResult<Report> {
    trace!(?input, value, "mismatch calculator");
    let triple = match input {
        MismatchInput::Vswr => MismatchTriple::from_vswr(read_value(value, QuantityKind::Ratio)?),
        MismatchInput::S11Db => {
            MismatchTriple::from_s11_db(read_value(value, QuantityKind::Decibel)?)
        }
        MismatchInput::GammaMagnitude => {
            MismatchTriple::from_gamma_magnitude(read_value(value, QuantityKind::Ratio)?)
        }
    };

    let mut report = Report::new("VSWR / S11 / |Γ|");
    report.row("|Γ|", format_reading(triple.gamma_magnitude, QuantityKind::Ratio));
    report.row("VSWR", format_reading(triple.vswr, QuantityKind::Ratio));
    report.row("S11", format_reading(triple.s11_db, QuantityKind::Decibel));
    report.row(
        "Return loss",
        format_reading(triple.s11_db.map(|db| -db), QuantityKind::Decibel),
    );
    Ok(report)
}

fn reference_impedance(text: Option<&str>, config: &ToolboxConfig) -> AppResult<f64> {
    match text {
        Some(text) => {
            let z0 = read_value(text, QuantityKind::Resistance)?;
            if z0 <= 0.0 {
                return Err(AppError::InvalidInput(format!(
                    "reference impedance must be positive, got '{text}'"
                )));
            }
            Ok(z0)
        }
        None => Ok(config.reference_impedance),
    }
}

fn push_summary(report: &mut Report, summary: &ReflectionSummary) {
    let magnitude = summary.gamma.map(|g| g.magnitude());
    let angle = summary.gamma.map(|g| g.angle_deg());
    let gamma = summary.gamma.map(|g| g.value);
    report.row("|Γ|", format_reading(magnitude, QuantityKind::Ratio));
    report.row("∠Γ", format_reading(angle, QuantityKind::Angle));
    report.row("Re Γ", format_reading(gamma.map(|g| g.re), QuantityKind::Ratio));
    report.row("Im Γ", format_reading(gamma.map(|g| g.im), QuantityKind::Ratio));
    report.row("VSWR", format_reading(summary.vswr, QuantityKind::Ratio));
    report.row("S11", format_reading(summary.s11_db, QuantityKind::Decibel));
}

fn format_complex_impedance(z: Complex64) -> String {
    let sign = if z.im < 0.0 { '-' } else { '+' };
    format!(
        "{} {sign} j{}",
        format_value(z.re, QuantityKind::Resistance),
        format_value(z.im.abs(), QuantityKind::Resistance)
    )
}
