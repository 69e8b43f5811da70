//! Engineering-notation parser.
//!
//! Turns what a user types into a component table cell ("2k2", "4.7nF", "1 MΩ",
//! "0u5") into a value in SI base units.
//!
//! # Algorithm
//!
//! 1. Remove all whitespace.
//! 2. Strip one trailing unit symbol for the quantity kind ("F", "H", "Ω", "Hz", ...).
//! 3. Look for the first prefix token of the kind's table that occurs anywhere in
//!    the remaining text. Table order decides, not position.
//! 4. With a prefix at index `i`: digits before `i` are the integer part and digits
//!    after it are a fraction of the multiplier, so `2k2` is `2·10³ + 2·10³/10¹`.
//!    A prefix with nothing after it scales a full number, exponent included (`1e3k`).
//!    Without a prefix, the text is read as a plain number in base units.
//! 5. Any letter left over after steps 2 and 3 makes the input malformed, so `10ft`
//!    is rejected rather than read as 10 m.
//!
//! Lower-case `m` is milli, upper-case `M` and `meg` (any case) are mega, and `μ`/`µ`
//! are accepted alongside `u`. A trailing `f` on a capacitance is the farad symbol;
//! an `f` that survives suffix stripping is femto.

use crate::error::{NotationError, NotationResult};
use crate::kind::{Prefix, QuantityKind};

/// Stores a value with the text it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedValue {
    /// Raw text as the user entered it (e.g., "2k2", "4.7 nF")
    pub raw_text: String,
    /// Canonical value in SI base units
    pub canonical_si: f64,
    /// Associated quantity kind
    pub kind: QuantityKind,
}

impl ParsedValue {
    /// Parse `raw_text` and keep both the text and its canonical value.
    pub fn from_text(raw_text: impl Into<String>, kind: QuantityKind) -> NotationResult<Self> {
        let text = raw_text.into();
        let canonical_si = parse_value(&text, kind)?;
        Ok(Self {
            raw_text: text,
            canonical_si,
            kind,
        })
    }

    pub fn si_value(&self) -> f64 {
        self.canonical_si
    }

    /// Replace the raw text and re-parse, leaving `self` untouched on error.
    pub fn update_text(&mut self, new_text: impl Into<String>) -> NotationResult<()> {
        let text = new_text.into();
        let canonical_si = parse_value(&text, self.kind)?;
        self.raw_text = text;
        self.canonical_si = canonical_si;
        Ok(())
    }
}

/// Parse a value of the given kind, returning its magnitude in SI base units.
pub fn parse_value(raw_text: &str, kind: QuantityKind) -> NotationResult<f64> {
    let compact: String = raw_text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(NotationError::Empty);
    }

    let body = strip_unit_suffix(&compact, kind.unit_suffixes());
    let malformed = || NotationError::Malformed {
        input: raw_text.to_string(),
        kind,
    };

    let value = match find_prefix(body, kind.prefixes()) {
        Some((index, prefix)) => {
            let head = &body[..index];
            let tail = &body[index + prefix.token.len()..];
            combine_embedded(head, tail, prefix.multiplier).ok_or_else(malformed)?
        }
        None => body.parse::<f64>().map_err(|_| malformed())?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(NotationError::NonFinite {
            input: raw_text.to_string(),
        })
    }
}

/// Parse a unitless SI-prefixed number ("1k", "4.7n", "2meg").
pub fn parse_engineering(raw_text: &str) -> NotationResult<f64> {
    parse_value(raw_text, QuantityKind::Generic)
}

/// Degrade-to-zero variant used by list calculators: anything unparseable is 0.0,
/// which callers treat as "exclude this entry".
pub fn parse_or_zero(raw_text: &str, kind: QuantityKind) -> f64 {
    match parse_value(raw_text, kind) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!(input = raw_text, %kind, error = %err, "input degraded to zero");
            0.0
        }
    }
}

fn strip_unit_suffix<'a>(body: &'a str, suffixes: &[&str]) -> &'a str {
    let total = body.chars().count();
    for suffix in suffixes {
        let n = suffix.chars().count();
        if total < n {
            continue;
        }
        let split = body
            .char_indices()
            .nth(total - n)
            .map(|(i, _)| i)
            .unwrap_or(0);
        if body[split..].to_lowercase() == *suffix {
            return &body[..split];
        }
    }
    body
}

fn find_prefix(body: &str, prefixes: &[Prefix]) -> Option<(usize, Prefix)> {
    prefixes.iter().find_map(|prefix| {
        let index = find_token(body, prefix.token, prefix.case_sensitive)?;
        // a lone m/M must not be the start of "meg"
        if prefix.token.eq_ignore_ascii_case("m") && starts_with_ignore_case(&body[index..], "meg")
        {
            return None;
        }
        Some((index, *prefix))
    })
}

fn find_token(body: &str, token: &str, case_sensitive: bool) -> Option<usize> {
    if case_sensitive {
        return body.find(token);
    }
    body.char_indices()
        .map(|(i, _)| i)
        .find(|&i| starts_with_ignore_case(&body[i..], token))
}

// Case-insensitive tokens are ASCII, so a match spans exactly `token.len()` bytes.
fn starts_with_ignore_case(text: &str, token: &str) -> bool {
    text.len() >= token.len()
        && text.as_bytes()[..token.len()].eq_ignore_ascii_case(token.as_bytes())
}

fn combine_embedded(head: &str, tail: &str, multiplier: f64) -> Option<f64> {
    if tail.is_empty() {
        // plain suffix notation: "22k", "1e3k"
        let head_value: f64 = head.parse().ok()?;
        return Some(head_value * multiplier);
    }

    // digits after the prefix are a fraction of it; "2k2.5" and "1mi" have no meaning
    if !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (sign, unsigned) = split_sign(head);
    if !unsigned.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    let head_value: f64 = if unsigned.is_empty() {
        0.0
    } else {
        unsigned.parse().ok()?
    };
    let tail_value: f64 = tail.parse().ok()?;
    let places = i32::try_from(tail.len()).ok()?;
    Some(sign * (head_value * multiplier + tail_value * multiplier / 10f64.powi(places)))
}

fn split_sign(text: &str) -> (f64, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rft_core::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances { abs: 0.0, rel: 1e-9 })
    }

    #[test]
    fn plain_suffix_notation() {
        assert_eq!(parse_value("22k", QuantityKind::Resistance).unwrap(), 22_000.0);
        assert_eq!(parse_value("1k", QuantityKind::Resistance).unwrap(), 1_000.0);
        assert!(close(
            parse_value("4.7n", QuantityKind::Capacitance).unwrap(),
            4.7e-9
        ));
    }

    #[test]
    fn embedded_prefix_notation() {
        assert_eq!(parse_value("2k2", QuantityKind::Resistance).unwrap(), 2_200.0);
        assert_eq!(parse_value("0k5", QuantityKind::Resistance).unwrap(), 500.0);
        assert!(close(
            parse_value("2p2", QuantityKind::Capacitance).unwrap(),
            2.2e-12
        ));
        assert!(close(
            parse_value("0u5", QuantityKind::Inductance).unwrap(),
            0.5e-6
        ));
        assert!(close(
            parse_value("4k75", QuantityKind::Resistance).unwrap(),
            4_750.0
        ));
    }

    #[test]
    fn whitespace_and_unit_symbols_are_ignored() {
        assert_eq!(parse_value(" 1 k ", QuantityKind::Resistance).unwrap(), 1_000.0);
        assert_eq!(parse_value("1kΩ", QuantityKind::Resistance).unwrap(), 1_000.0);
        assert_eq!(parse_value("10 ohm", QuantityKind::Resistance).unwrap(), 10.0);
        assert_eq!(parse_value("47ohms", QuantityKind::Resistance).unwrap(), 47.0);
        assert!(close(
            parse_value("1pF", QuantityKind::Capacitance).unwrap(),
            1e-12
        ));
        assert!(close(
            parse_value("10uH", QuantityKind::Inductance).unwrap(),
            10e-6
        ));
    }

    #[test]
    fn meg_and_mega_versus_milli() {
        assert_eq!(parse_value("1meg", QuantityKind::Resistance).unwrap(), 1e6);
        assert_eq!(parse_value("2MEG2", QuantityKind::Resistance).unwrap(), 2.2e6);
        assert_eq!(parse_value("1M", QuantityKind::Resistance).unwrap(), 1e6);
        assert!(close(
            parse_value("1m", QuantityKind::Resistance).unwrap(),
            1e-3
        ));
        assert_eq!(parse_value("1g", QuantityKind::Resistance).unwrap(), 1e9);
    }

    #[test]
    fn femto_versus_farad_symbol() {
        // bare trailing f is the unit
        assert_eq!(parse_value("1f", QuantityKind::Capacitance).unwrap(), 1.0);
        assert!(close(
            parse_value("500fF", QuantityKind::Capacitance).unwrap(),
            500e-15
        ));
        assert!(close(
            parse_value("2f2", QuantityKind::Capacitance).unwrap(),
            2.2e-15
        ));
    }

    #[test]
    fn micro_sign_variants() {
        let a = parse_value("2.2μF", QuantityKind::Capacitance).unwrap();
        let b = parse_value("2.2µF", QuantityKind::Capacitance).unwrap();
        let c = parse_value("2.2uF", QuantityKind::Capacitance).unwrap();
        assert!(close(a, 2.2e-6));
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn frequency_and_distance_tables() {
        assert!(close(
            parse_value("1.5 GHz", QuantityKind::Frequency).unwrap(),
            1.5e9
        ));
        assert!(close(
            parse_value("200MHz", QuantityKind::Frequency).unwrap(),
            200e6
        ));
        assert!(close(
            parse_value("10 kHz", QuantityKind::Frequency).unwrap(),
            10e3
        ));
        assert_eq!(parse_value("1 km", QuantityKind::Distance).unwrap(), 1_000.0);
        assert_eq!(parse_value("5 m", QuantityKind::Distance).unwrap(), 5.0);
        assert!(close(
            parse_value("3 mm", QuantityKind::Distance).unwrap(),
            3e-3
        ));
        assert!(close(
            parse_value("2.5cm", QuantityKind::Distance).unwrap(),
            2.5e-2
        ));
    }

    #[test]
    fn plain_numbers_keep_exponent_and_sign() {
        assert!(close(parse_engineering("4.7e-9").unwrap(), 4.7e-9));
        assert_eq!(parse_value("-13.98 dB", QuantityKind::Decibel).unwrap(), -13.98);
        assert_eq!(parse_value("-5mV", QuantityKind::Voltage).unwrap(), -5e-3);
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert_eq!(
            parse_value("", QuantityKind::Resistance),
            Err(NotationError::Empty)
        );
        assert_eq!(
            parse_value("   ", QuantityKind::Resistance),
            Err(NotationError::Empty)
        );
        assert!(matches!(
            parse_value("k", QuantityKind::Resistance),
            Err(NotationError::Malformed { .. })
        ));
        assert!(matches!(
            parse_value("abc", QuantityKind::Resistance),
            Err(NotationError::Malformed { .. })
        ));
        assert!(parse_value("2k2.5", QuantityKind::Resistance).is_err());
        assert!(parse_value("1.2.3", QuantityKind::Resistance).is_err());
        assert!(parse_value("nan", QuantityKind::Generic).is_err());
        assert!(parse_value("inf", QuantityKind::Ratio).is_err());
    }

    #[test]
    fn exponent_before_a_prefix_scales_the_whole_number() {
        assert_eq!(parse_value("1e3k", QuantityKind::Resistance).unwrap(), 1e6);
        assert!(close(
            parse_value("5e+04 GΩ", QuantityKind::Resistance).unwrap(),
            5e13
        ));
        assert!(close(
            parse_value("2e-05 fF", QuantityKind::Capacitance).unwrap(),
            2e-20
        ));
        assert!(close(parse_engineering("-1.5e2k").unwrap(), -1.5e5));
        // an exponent cannot sit in front of an embedded fraction
        assert!(parse_value("1e3k2", QuantityKind::Resistance).is_err());
    }

    #[test]
    fn leftover_letters_are_rejected() {
        for (text, kind) in [
            ("1mi", QuantityKind::Distance),
            ("10ft", QuantityKind::Distance),
            ("-5x", QuantityKind::Generic),
            ("2k2x", QuantityKind::Resistance),
            ("4.7nX", QuantityKind::Capacitance),
        ] {
            assert!(
                matches!(parse_value(text, kind), Err(NotationError::Malformed { .. })),
                "{text} as {kind}"
            );
        }
        assert_eq!(parse_or_zero("-5x", QuantityKind::Generic), 0.0);
        assert_eq!(parse_value("-5", QuantityKind::Generic).unwrap(), -5.0);
        assert_eq!(parse_value("+2k2", QuantityKind::Resistance).unwrap(), 2_200.0);
        assert_eq!(parse_value("-2k2", QuantityKind::Resistance).unwrap(), -2_200.0);
    }

    #[test]
    fn degrade_to_zero() {
        assert_eq!(parse_or_zero("", QuantityKind::Resistance), 0.0);
        assert_eq!(parse_or_zero("oops", QuantityKind::Capacitance), 0.0);
        assert_eq!(parse_or_zero("1k", QuantityKind::Resistance), 1_000.0);
    }

    #[test]
    fn parsed_value_keeps_text() {
        let mut pv = ParsedValue::from_text("2k2", QuantityKind::Resistance).unwrap();
        assert_eq!(pv.raw_text, "2k2");
        assert_eq!(pv.si_value(), 2_200.0);

        assert!(pv.update_text("junk").is_err());
        assert_eq!(pv.raw_text, "2k2");

        pv.update_text("4k7").unwrap();
        assert_eq!(pv.si_value(), 4_700.0);
    }
}
