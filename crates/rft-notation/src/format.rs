//! Engineering-notation formatter.
//!
//! Picks the largest display row whose factor does not exceed the magnitude, divides
//! by it and renders with the kind's precision. Output re-parses with
//! [`crate::parse_value`] to the same magnitude within display precision.

use rft_core::{Reading, Sentinel, checked};

use crate::kind::{Precision, QuantityKind, Scale};

/// Format a value in SI base units, e.g. `format_value(1500.0, Resistance) == "1.5 kΩ"`.
///
/// Non-finite input renders as the matching sentinel label.
pub fn format_value(value: f64, kind: QuantityKind) -> String {
    match checked(value) {
        Ok(v) => format_finite(v, kind),
        Err(sentinel) => sentinel.label().to_string(),
    }
}

/// Format a formula result, passing sentinels through as their labels.
pub fn format_reading(reading: Reading, kind: QuantityKind) -> String {
    match reading {
        Ok(v) => format_value(v, kind),
        Err(sentinel) => sentinel_text(sentinel),
    }
}

fn sentinel_text(sentinel: Sentinel) -> String {
    sentinel.label().to_string()
}

fn format_finite(value: f64, kind: QuantityKind) -> String {
    let precision = kind.precision();
    // select on the rounded magnitude so 999.96 Ω shows as "1 kΩ", not "1000 Ω"
    let magnitude = match precision {
        Precision::Significant(digits) => round_significant(value, digits).abs(),
        Precision::Decimals(_) => value.abs(),
    };
    let scale = select_scale(magnitude, kind.scales());
    let scaled = value / scale.factor;

    if scale.label.is_empty() {
        return match precision {
            Precision::Significant(digits) => format_significant(scaled, digits),
            Precision::Decimals(places) => format_decimals(scaled, places),
        };
    }

    // an exponent next to a prefix label would not read back, so stay positional
    let number = match precision {
        Precision::Significant(digits) => format_positional(scaled, digits),
        Precision::Decimals(places) => format_decimals(scaled, places),
    };
    format!("{number}{}{}", kind.separator(), scale.label)
}

fn select_scale(magnitude: f64, scales: &[Scale]) -> Scale {
    let base = scales
        .iter()
        .copied()
        .find(|s| s.factor == 1.0)
        .unwrap_or(Scale {
            factor: 1.0,
            label: "",
        });
    if magnitude == 0.0 {
        return base;
    }
    scales
        .iter()
        .copied()
        .find(|s| magnitude >= s.factor)
        .or_else(|| scales.last().copied())
        .unwrap_or(base)
}

fn round_significant(value: f64, digits: usize) -> f64 {
    let digits = digits.max(1);
    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Render like C's `%.Ng`: `digits` significant digits, trailing zeros removed,
/// scientific form when the exponent is below -4 or at least `digits`.
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return format_value(value, QuantityKind::Ratio);
    }

    let sci = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci;
    };

    let max_exponent = i32::try_from(digits).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        );
    }

    let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
    let fixed = format!("{value:.decimals$}");
    strip_negative_zero(trim_fraction(&fixed).to_string())
}

/// `digits` significant digits without ever switching to scientific form.
fn format_positional(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    let rounded = round_significant(value, digits);
    if rounded == 0.0 {
        return "0".to_string();
    }
    let exponent = decimal_exponent(rounded, digits);
    let max_exponent = i32::try_from(digits).unwrap_or(i32::MAX);
    let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
    let fixed = format!("{rounded:.decimals$}");
    strip_negative_zero(trim_fraction(&fixed).to_string())
}

fn decimal_exponent(value: f64, digits: usize) -> i32 {
    format!("{:.*e}", digits.max(1) - 1, value)
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0)
}

fn format_decimals(value: f64, places: usize) -> String {
    strip_negative_zero(format!("{value:.places$}"))
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn strip_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_fitting_prefix() {
        assert_eq!(format_value(1500.0, QuantityKind::Resistance), "1.5 kΩ");
        assert_eq!(format_value(2.2e6, QuantityKind::Resistance), "2.2 MΩ");
        assert_eq!(format_value(47.0, QuantityKind::Resistance), "47 Ω");
        assert_eq!(format_value(4.7e-9, QuantityKind::Capacitance), "4.7 nF");
        assert_eq!(format_value(0.5e-12, QuantityKind::Capacitance), "500 fF");
        assert_eq!(format_value(1e-6, QuantityKind::Inductance), "1 μH");
        assert_eq!(format_value(0.005, QuantityKind::Current), "5 mA");
        assert_eq!(format_value(0.025, QuantityKind::Power), "25 mW");
    }

    #[test]
    fn rounding_can_promote_the_prefix() {
        assert_eq!(format_value(999.96, QuantityKind::Resistance), "1 kΩ");
        assert_eq!(format_value(999.4, QuantityKind::Resistance), "999.4 Ω");
    }

    #[test]
    fn below_smallest_row_uses_last_row() {
        assert_eq!(format_value(0.5, QuantityKind::Resistance), "0.5 Ω");
        assert_eq!(format_value(1e-18, QuantityKind::Capacitance), "0.001 fF");
    }

    #[test]
    fn zero_uses_base_unit() {
        assert_eq!(format_value(0.0, QuantityKind::Capacitance), "0 F");
        assert_eq!(format_value(0.0, QuantityKind::Resistance), "0 Ω");
        assert_eq!(format_value(-0.0, QuantityKind::Frequency), "0.00 Hz");
    }

    #[test]
    fn fixed_decimal_kinds() {
        assert_eq!(format_value(1.5e9, QuantityKind::Frequency), "1.50 GHz");
        assert_eq!(format_value(200e6, QuantityKind::Frequency), "200.00 MHz");
        assert_eq!(format_value(-13.979_4, QuantityKind::Decibel), "-13.98 dB");
        assert_eq!(format_value(45.0, QuantityKind::Angle), "45.0°");
        assert_eq!(format_value(-0.001, QuantityKind::Decibel), "0.00 dB");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_value(-0.005, QuantityKind::Voltage), "-5 mV");
        assert_eq!(format_value(-2200.0, QuantityKind::Resistance), "-2.2 kΩ");
    }

    #[test]
    fn ratio_and_generic_have_no_dangling_separator() {
        assert_eq!(format_value(1.5, QuantityKind::Ratio), "1.5");
        assert_eq!(format_value(2200.0, QuantityKind::Generic), "2.2k");
        assert_eq!(format_value(4.7e-9, QuantityKind::Generic), "4.7n");
    }

    #[test]
    fn labelled_values_never_use_an_exponent() {
        assert_eq!(format_value(5e13, QuantityKind::Resistance), "50000 GΩ");
        assert_eq!(format_value(2e-20, QuantityKind::Capacitance), "0.00002 fF");
        assert_eq!(format_value(3e-17, QuantityKind::Power), "0.00003 pW");
        assert_eq!(format_value(4e-14, QuantityKind::Distance), "0.00004 nm");
        assert_eq!(format_value(1e13, QuantityKind::Generic), "10000G");
        assert_eq!(format_value(-1.234_56e14, QuantityKind::Resistance), "-123500 GΩ");
        // no label, so %g keeps its exponent
        assert_eq!(format_value(1.5e6, QuantityKind::Ratio), "1.5e+06");
    }

    #[test]
    fn extreme_magnitudes_read_back() {
        for (value, kind) in [
            (5e13, QuantityKind::Resistance),
            (2e-20, QuantityKind::Capacitance),
            (3e-17, QuantityKind::Power),
            (4e-14, QuantityKind::Distance),
            (1e13, QuantityKind::Generic),
            (7.5e-19, QuantityKind::Inductance),
        ] {
            let shown = format_value(value, kind);
            let back = crate::parse_value(&shown, kind).unwrap();
            assert!(
                rft_core::nearly_equal(back, value, rft_core::Tolerances { abs: 0.0, rel: 1e-9 }),
                "{value} as {kind} shown as {shown} read back as {back}"
            );
        }
    }

    #[test]
    fn sentinels_render_as_labels() {
        assert_eq!(format_value(f64::NAN, QuantityKind::Ratio), "Undefined");
        assert_eq!(format_value(f64::INFINITY, QuantityKind::Ratio), "∞");
        assert_eq!(format_value(f64::NEG_INFINITY, QuantityKind::Decibel), "-∞");
        assert_eq!(
            format_reading(Err(Sentinel::Invalid), QuantityKind::Ratio),
            "Invalid"
        );
        assert_eq!(format_reading(Ok(1500.0), QuantityKind::Resistance), "1.5 kΩ");
    }

    #[test]
    fn significant_digits_like_printf_g() {
        assert_eq!(format_significant(1.5, 4), "1.5");
        assert_eq!(format_significant(123.456, 4), "123.5");
        assert_eq!(format_significant(1_500_000.0, 4), "1.5e+06");
        assert_eq!(format_significant(0.000_012_34, 4), "1.234e-05");
        assert_eq!(format_significant(0.000_123_4, 4), "0.0001234");
        assert_eq!(format_significant(1000.0, 4), "1000");
        assert_eq!(format_significant(-0.0, 4), "0");
        assert_eq!(format_significant(299.792_458, 6), "299.792");
    }
}
