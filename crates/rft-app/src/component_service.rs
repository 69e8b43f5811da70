//! Component calculators: parallel R and L, series C, and the banked voltage divider.

use rft_core::units::{volt, watt};
use rft_formulas::{
    BranchLoad, DividerLeg, parallel_bank, parallel_inductance, series_capacitance,
    voltage_divider,
};
use rft_notation::{QuantityKind, format_value};
use tracing::trace;

use crate::config::ToolboxConfig;
use crate::error::AppResult;
use crate::input::{read_list, read_nonempty_list, read_value};
use crate::report::Report;

/// Optional per-call overrides of the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct LoadOverrides {
    /// Voltage across the bank (parallel) or supply voltage (divider).
    pub voltage: Option<String>,
    pub max_power: Option<String>,
}

impl LoadOverrides {
    fn voltage_or(&self, default: f64) -> AppResult<f64> {
        match &self.voltage {
            Some(text) => read_value(text, QuantityKind::Voltage),
            None => Ok(default),
        }
    }

    fn max_power_or(&self, default: f64) -> AppResult<f64> {
        match &self.max_power {
            Some(text) => read_value(text, QuantityKind::Power),
            None => Ok(default),
        }
    }
}

/// Equivalent of resistors in parallel with the current and dissipation of each branch.
pub fn parallel_resistance_calculator<S: AsRef<str>>(
    resistors: &[S],
    overrides: &LoadOverrides,
    config: &ToolboxConfig,
) -> AppResult<Report> {
    let delta_v = overrides.voltage_or(config.parallel_delta_v)?;
    let p_max = overrides.max_power_or(config.max_resistor_power)?;
    trace!(count = resistors.len(), delta_v, p_max, "parallel resistance calculator");

    let list = read_list(resistors, QuantityKind::Resistance);
    let mut report = Report::new("Parallel resistors");
    report.row("ΔV", format_value(delta_v, QuantityKind::Voltage));
    report.row("P max", format_value(p_max, QuantityKind::Power));

    let bank = match parallel_bank(&list, volt(delta_v), watt(p_max)) {
        Ok(bank) => bank,
        Err(sentinel) => {
            report.row("Req", sentinel.label());
            report.note("no usable resistor values");
            return Ok(report);
        }
    };

    report.row("Req", format_value(bank.equivalent.value, QuantityKind::Resistance));
    push_branches(&mut report, "R", &bank.branches);
    report.row(
        "Total current",
        format_value(bank.total_current.value, QuantityKind::Current),
    );
    report.row(
        "Total power",
        format_value(bank.total_power.value, QuantityKind::Power),
    );
    if bank.any_over_limit() {
        report.note(over_limit_note(p_max));
    }
    Ok(report)
}

/// Equivalent of inductors in parallel.
pub fn parallel_inductance_calculator<S: AsRef<str>>(inductors: &[S]) -> AppResult<Report> {
    trace!(count = inductors.len(), "parallel inductance calculator");
    let list = read_nonempty_list(inductors, QuantityKind::Inductance, "parallel inductors")?;
    let leq = parallel_inductance(&list);

    let mut report = Report::new("Parallel inductors");
    for (i, l) in list.values().iter().enumerate() {
        report.row(format!("L{}", i + 1), format_value(*l, QuantityKind::Inductance));
    }
    report.row("Leq", format_value(leq.value, QuantityKind::Inductance));
    Ok(report)
}

/// Equivalent of capacitors in series.
pub fn series_capacitance_calculator<S: AsRef<str>>(capacitors: &[S]) -> AppResult<Report> {
    trace!(count = capacitors.len(), "series capacitance calculator");
    let list = read_nonempty_list(capacitors, QuantityKind::Capacitance, "series capacitors")?;
    let ceq = series_capacitance(&list);

    let mut report = Report::new("Series capacitors");
    for (i, c) in list.values().iter().enumerate() {
        report.row(format!("C{}", i + 1), format_value(*c, QuantityKind::Capacitance));
    }
    report.row("Ceq", format_value(ceq.value, QuantityKind::Capacitance));
    Ok(report)
}

/// Divider whose upper and lower legs are each a parallel bank.
pub fn divider_calculator<S: AsRef<str>>(
    upper: &[S],
    lower: &[S],
    overrides: &LoadOverrides,
    config: &ToolboxConfig,
) -> AppResult<Report> {
    let vdc = overrides.voltage_or(config.divider_supply)?;
    let p_max = overrides.max_power_or(config.max_resistor_power)?;
    trace!(vdc, p_max, "divider calculator");

    let upper = read_nonempty_list(upper, QuantityKind::Resistance, "upper leg")?;
    let lower = read_nonempty_list(lower, QuantityKind::Resistance, "lower leg")?;

    let mut report = Report::new("Voltage divider");
    report.row("Vdc", format_value(vdc, QuantityKind::Voltage));

    let divider = match voltage_divider(volt(vdc), &upper, &lower, watt(p_max)) {
        Ok(divider) => divider,
        Err(sentinel) => {
            report.row("Vout", sentinel.label());
            return Ok(report);
        }
    };

    report.row("Vout", format_value(divider.vout.value, QuantityKind::Voltage));
    push_leg(&mut report, "upper", "Ru", &divider.upper);
    push_leg(&mut report, "lower", "Rl", &divider.lower);
    report.row(
        "Supply current",
        format_value(divider.current.value, QuantityKind::Current),
    );
    report.row(
        "Total power",
        format_value(divider.total_power.value, QuantityKind::Power),
    );
    if divider.any_over_limit() {
        report.note(over_limit_note(p_max));
    }
    Ok(report)
}

fn push_leg(report: &mut Report, name: &str, prefix: &str, leg: &DividerLeg) {
    report.row(
        format!("R{name}"),
        format_value(leg.equivalent.value, QuantityKind::Resistance),
    );
    report.row(
        format!("V{name}"),
        format_value(leg.drop.value, QuantityKind::Voltage),
    );
    push_branches(report, prefix, &leg.loads);
    report.row(
        format!("P{name}"),
        format_value(leg.power.value, QuantityKind::Power),
    );
}

fn push_branches(report: &mut Report, prefix: &str, branches: &[BranchLoad]) {
    for (i, branch) in branches.iter().enumerate() {
        let value = format!(
            "{}  I = {}  P = {}",
            format_value(branch.resistance.value, QuantityKind::Resistance),
            format_value(branch.current.value, QuantityKind::Current),
            format_value(branch.power.value, QuantityKind::Power),
        );
        report.flagged_row(format!("{prefix}{}", i + 1), value, branch.over_limit);
    }
}

fn over_limit_note(p_max: f64) -> String {
    format!(
        "flagged resistors dissipate more than {}",
        format_value(p_max, QuantityKind::Power)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_kilohm_in_parallel() {
        let report = parallel_resistance_calculator(
            &["1k", "1k"],
            &LoadOverrides::default(),
            &ToolboxConfig::default(),
        )
        .unwrap();
        assert_eq!(report.value("Req"), Some("500 Ω"));
        assert_eq!(report.value("R1"), Some("1 kΩ  I = 5 mA  P = 25 mW"));
        assert_eq!(report.value("Total current"), Some("10 mA"));
        assert!(!report.any_flagged());
    }

    #[test]
    fn over_limit_resistors_are_flagged() {
        let overrides = LoadOverrides {
            voltage: Some("12".into()),
            ..LoadOverrides::default()
        };
        let report =
            parallel_resistance_calculator(&["100", "10k"], &overrides, &ToolboxConfig::default())
                .unwrap();
        assert!(report.rows.iter().any(|r| r.label == "R1" && r.flagged));
        assert!(report.rows.iter().any(|r| r.label == "R2" && !r.flagged));
        assert_eq!(report.notes.len(), 1);
    }

    #[test]
    fn empty_bank_reports_invalid() {
        let report = parallel_resistance_calculator(
            &["", "junk"],
            &LoadOverrides::default(),
            &ToolboxConfig::default(),
        )
        .unwrap();
        assert_eq!(report.value("Req"), Some("Invalid"));
    }

    #[test]
    fn series_picofarads() {
        let report = series_capacitance_calculator(&["1p", "1p"]).unwrap();
        assert_eq!(report.value("Ceq"), Some("500 fF"));
    }

    #[test]
    fn parallel_inductors() {
        let report = parallel_inductance_calculator(&["10u,10u"]).unwrap();
        assert_eq!(report.value("Leq"), Some("5 μH"));
        assert!(parallel_inductance_calculator(&["nope"]).is_err());
    }

    #[test]
    fn divider_with_banked_upper_leg() {
        let report = divider_calculator(
            &["2k", "2k"],
            &["1k"],
            &LoadOverrides {
                voltage: Some("10".into()),
                ..LoadOverrides::default()
            },
            &ToolboxConfig::default(),
        )
        .unwrap();
        assert_eq!(report.value("Vout"), Some("5 V"));
        assert_eq!(report.value("Rupper"), Some("1 kΩ"));
        assert_eq!(report.value("Vlower"), Some("5 V"));
        assert_eq!(report.value("Supply current"), Some("5 mA"));
        // 25 mW in the 1k lower resistor is under the 50 mW default
        assert!(!report.any_flagged());
    }
}
