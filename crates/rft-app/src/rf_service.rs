//! RF calculators: path loss, image frequency, wavelength, power units and bandwidth.

use rft_core::Reading;
use rft_core::units::{hz, m};
use rft_formulas::{
    DistanceUnit, FrequencyUnit, ImagePlan, InjectionMode, PowerUnit, WavelengthSet,
    WavelengthUnit, band_summary, convert_power, dual_conversion, free_space_path_loss,
    image_plan, path_loss_table, plan_from_lo, plan_from_rf_lo, scale_linear,
};
use rft_notation::{QuantityKind, format_reading, format_significant, format_value};
use tracing::trace;

use crate::config::ToolboxConfig;
use crate::error::AppResult;
use crate::input::{read_in_unit, read_value};
use crate::report::Report;

/// A number typed next to an optional unit selector.
#[derive(Debug, Clone, Copy)]
pub struct UnitInput<'a> {
    pub text: &'a str,
    pub unit: Option<&'a str>,
}

impl<'a> UnitInput<'a> {
    pub fn new(text: &'a str, unit: Option<&'a str>) -> Self {
        Self { text, unit }
    }

    fn frequency(self) -> AppResult<f64> {
        read_in_unit::<FrequencyUnit>(self.text, self.unit, QuantityKind::Frequency)
    }

    fn distance(self) -> AppResult<f64> {
        read_in_unit::<DistanceUnit>(self.text, self.unit, QuantityKind::Distance)
    }

    fn wavelength(self) -> AppResult<f64> {
        read_in_unit::<WavelengthUnit>(self.text, self.unit, QuantityKind::Distance)
    }
}

/// Free-space path loss at the given distance, plus the d/4 .. 4d table.
pub fn fspl_calculator(
    frequency: UnitInput<'_>,
    distance: UnitInput<'_>,
    gain_tx: &str,
    gain_rx: &str,
) -> AppResult<Report> {
    trace!(frequency = frequency.text, distance = distance.text, "fspl calculator");
    let f = hz(frequency.frequency()?);
    let d = m(distance.distance()?);
    let gain_tx = read_value(gain_tx, QuantityKind::Decibel)?;
    let gain_rx = read_value(gain_rx, QuantityKind::Decibel)?;

    let mut report = Report::new("Free-space path loss");
    report.row("f", format_value(f.value, QuantityKind::Frequency));
    report.row("d", format_value(d.value, QuantityKind::Distance));
    report.row("G tx", format!("{} dBi", format_significant(gain_tx, 4)));
    report.row("G rx", format!("{} dBi", format_significant(gain_rx, 4)));
    report.row(
        "FSPL",
        format_reading(
            free_space_path_loss(f, d, gain_tx, gain_rx),
            QuantityKind::Decibel,
        ),
    );
    for point in path_loss_table(f, d, gain_tx, gain_rx) {
        report.row(
            format!("FSPL @ {}", format_value(point.distance.value, QuantityKind::Distance)),
            format_reading(point.loss_db, QuantityKind::Decibel),
        );
    }
    Ok(report)
}

/// LO and image from RF and IF.
pub fn image_calculator(
    rf: UnitInput<'_>,
    intermediate: UnitInput<'_>,
    mode: Option<InjectionMode>,
    config: &ToolboxConfig,
) -> AppResult<Report> {
    let mode = mode.unwrap_or(config.injection);
    trace!(rf = rf.text, intermediate = intermediate.text, %mode, "image calculator");
    let plan = image_plan(hz(rf.frequency()?), hz(intermediate.frequency()?), mode);
    Ok(image_report("Image frequency from RF", mode, plan))
}

/// RF and image from LO and IF.
pub fn image_from_lo_calculator(
    lo: UnitInput<'_>,
    intermediate: UnitInput<'_>,
    mode: Option<InjectionMode>,
    config: &ToolboxConfig,
) -> AppResult<Report> {
    let mode = mode.unwrap_or(config.injection);
    trace!(lo = lo.text, intermediate = intermediate.text, %mode, "image-from-LO calculator");
    let plan = plan_from_lo(hz(lo.frequency()?), hz(intermediate.frequency()?), mode);
    Ok(image_report("Image frequency from LO", mode, plan))
}

/// IF and image from RF and LO.
pub fn intermediate_calculator(
    rf: UnitInput<'_>,
    lo: UnitInput<'_>,
    mode: Option<InjectionMode>,
    config: &ToolboxConfig,
) -> AppResult<Report> {
    let mode = mode.unwrap_or(config.injection);
    trace!(rf = rf.text, lo = lo.text, %mode, "intermediate frequency calculator");
    let plan = plan_from_rf_lo(hz(rf.frequency()?), hz(lo.frequency()?), mode);
    let mut report = image_report("Intermediate frequency from RF and LO", mode, plan);
    if plan.is_err() {
        report.note(match mode {
            InjectionMode::LowSide => "low-side injection needs LO below RF",
            InjectionMode::HighSide => "high-side injection needs LO above RF",
        });
    }
    Ok(report)
}

fn image_report(title: &str, mode: InjectionMode, plan: Reading<ImagePlan>) -> Report {
    let mut report = Report::new(title);
    report.row("Mode", mode.to_string());
    let field = |pick: fn(&ImagePlan) -> f64| {
        format_reading(plan.map(|p| pick(&p)), QuantityKind::Frequency)
    };
    report.row("f RF", field(|p| p.rf.value));
    report.row("f IF", field(|p| p.intermediate.value));
    report.row("f LO", field(|p| p.lo.value));
    report.row("f image", field(|p| p.image.value));
    report
}

/// Two cascaded low-side conversions.
pub fn dual_image_calculator(
    rf: UnitInput<'_>,
    if1: UnitInput<'_>,
    if2: UnitInput<'_>,
) -> AppResult<Report> {
    trace!(rf = rf.text, if1 = if1.text, if2 = if2.text, "dual-conversion calculator");
    let plan = dual_conversion(
        hz(rf.frequency()?),
        hz(if1.frequency()?),
        hz(if2.frequency()?),
    );

    let mut report = Report::new("Dual-conversion image frequencies");
    let rows = [
        ("f LO1", plan.map(|p| p.lo1.value)),
        ("f image1", plan.map(|p| p.image1.value)),
        ("f LO2", plan.map(|p| p.lo2.value)),
        ("f image2", plan.map(|p| p.image2.value)),
    ];
    for (label, value) in rows {
        report.row(label, format_reading(value, QuantityKind::Frequency));
    }
    if plan.is_err() {
        report.note("both conversions need RF > IF1 > IF2");
    }
    Ok(report)
}

/// What the wavelength calculator starts from.
#[derive(Debug, Clone, Copy)]
pub enum WavelengthInput<'a> {
    Frequency(UnitInput<'a>),
    Wavelength(UnitInput<'a>),
}

/// Frequency ↔ wavelength in a medium, with λ/2 and λ/4.
pub fn wavelength_calculator(
    input: WavelengthInput<'_>,
    permittivity: Option<&str>,
    config: &ToolboxConfig,
) -> AppResult<Report> {
    let er = match permittivity {
        Some(text) => read_value(text, QuantityKind::Ratio)?,
        None => config.permittivity,
    };
    trace!(?input, er, "wavelength calculator");
    let set = match input {
        WavelengthInput::Frequency(f) => WavelengthSet::from_frequency(hz(f.frequency()?), er),
        WavelengthInput::Wavelength(l) => WavelengthSet::from_wavelength(m(l.wavelength()?), er),
    };

    let mut report = Report::new("Frequency / wavelength");
    report.row("εr", format_significant(er.max(1.0), 4));
    report.row(
        "f",
        format_reading(set.map(|s| s.frequency.value), QuantityKind::Frequency),
    );
    report.row("λ", format_reading(set.map(|s| s.full.value), QuantityKind::Distance));
    report.row("λ/2", format_reading(set.map(|s| s.half.value), QuantityKind::Distance));
    report.row("λ/4", format_reading(set.map(|s| s.quarter.value), QuantityKind::Distance));
    if er < 1.0 {
        report.note("εr below 1 was raised to 1");
    }
    Ok(report)
}

/// Convert a power reading between units. Without a target unit, every unit is listed.
pub fn power_calculator(value: &str, from: &str, to: Option<&str>) -> AppResult<Report> {
    trace!(value, from, ?to, "power calculator");
    let from: PowerUnit = from.parse()?;
    let number = read_value(value, QuantityKind::Generic)?;
    let targets = match to {
        Some(name) => vec![name.parse::<PowerUnit>()?],
        None => PowerUnit::ALL.to_vec(),
    };

    let mut report = Report::new("RF power");
    report.row("Input", format_power(Ok(number), from));
    for unit in targets {
        report.row(unit.to_string(), format_power(convert_power(number, from, unit), unit));
    }
    Ok(report)
}

fn format_power(reading: Reading, unit: PowerUnit) -> String {
    let value = match reading {
        Ok(v) => v,
        Err(sentinel) => return sentinel.label().to_string(),
    };
    if unit.is_logarithmic() {
        return format!("{value:.2} {}", unit.symbol());
    }
    let (scaled, prefix) = scale_linear(value, unit);
    format!("{} {prefix}{}", format_significant(scaled, 4), unit.symbol())
}

/// Octaves, decades, centre frequencies and Q of a band.
pub fn octave_calculator(low: UnitInput<'_>, high: UnitInput<'_>) -> AppResult<Report> {
    trace!(low = low.text, high = high.text, "octave calculator");
    let band = band_summary(hz(low.frequency()?), hz(high.frequency()?));

    let mut report = Report::new("Octave / decade bandwidth");
    let frequency_rows = [
        ("Arithmetic centre", band.map(|b| b.arithmetic_center.value)),
        ("Geometric centre", band.map(|b| b.geometric_center.value)),
        ("Bandwidth", band.map(|b| b.bandwidth.value)),
    ];
    for (label, value) in frequency_rows {
        report.row(label, format_reading(value, QuantityKind::Frequency));
    }
    report.row("Octaves", format_reading(band.map(|b| b.octaves), QuantityKind::Ratio));
    report.row("Decades", format_reading(band.map(|b| b.decades), QuantityKind::Ratio));
    report.row("Q", format_reading(band.map(|b| b.q), QuantityKind::Ratio));
    Ok(report)
}
