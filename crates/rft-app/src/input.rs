//! Turning host text fields into numbers.
//!
//! Scalar fields are strict: a malformed entry is an [`AppError::InvalidInput`]. List fields
//! degrade entry by entry to zero, which the formulas treat as an omitted component.

use rft_formulas::{ComponentList, LinearUnit};
use rft_notation::{QuantityKind, parse_or_zero, parse_value};

use crate::error::{AppError, AppResult};

/// Strict scalar read of `text` as a `kind` quantity in SI base units.
pub fn read_value(text: &str, kind: QuantityKind) -> AppResult<f64> {
    Ok(parse_value(text, kind)?)
}

/// Read a scalar either in an explicitly named unit (`"433"` + `"MHz"`) or, with no unit,
/// as engineering notation of `kind` (`"433M"`, `"433 MHz"`).
pub fn read_in_unit<U: LinearUnit>(
    text: &str,
    unit: Option<&str>,
    kind: QuantityKind,
) -> AppResult<f64> {
    match unit {
        Some(name) => {
            let unit = U::lookup(name)?;
            let number = parse_value(text, QuantityKind::Generic)?;
            Ok(unit.to_si(number))
        }
        None => read_value(text, kind),
    }
}

/// Read a component list. Entries may be separate items or comma-separated within one item.
pub fn read_list<S: AsRef<str>>(items: &[S], kind: QuantityKind) -> ComponentList {
    items
        .iter()
        .flat_map(|item| item.as_ref().split(','))
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| parse_or_zero(entry, kind))
        .collect()
}

/// Read a list and refuse it when no entry is usable.
pub fn read_nonempty_list<S: AsRef<str>>(
    items: &[S],
    kind: QuantityKind,
    what: &str,
) -> AppResult<ComponentList> {
    let list = read_list(items, kind);
    if list.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "{what}: no usable {} values",
            kind.to_string().to_lowercase()
        )));
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rft_formulas::{DistanceUnit, FrequencyUnit};

    #[test]
    fn scalar_is_strict() {
        assert_eq!(read_value("2k2", QuantityKind::Resistance).unwrap(), 2200.0);
        assert!(matches!(
            read_value("abc", QuantityKind::Resistance),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn named_unit_or_notation() {
        let f = read_in_unit::<FrequencyUnit>("433", Some("MHz"), QuantityKind::Frequency).unwrap();
        assert_eq!(f, 433e6);
        let f = read_in_unit::<FrequencyUnit>("433M", None, QuantityKind::Frequency).unwrap();
        assert_eq!(f, 433e6);
        let d = read_in_unit::<DistanceUnit>("2", Some("nmi"), QuantityKind::Distance).unwrap();
        assert_eq!(d, 3704.0);
        assert!(matches!(
            read_in_unit::<DistanceUnit>("2", Some("furlong"), QuantityKind::Distance),
            Err(AppError::UnknownUnit(_))
        ));
    }

    #[test]
    fn list_skips_bad_entries() {
        let list = read_list(&["1k", "oops", "2k2,3k3", ""], QuantityKind::Resistance);
        assert_eq!(list.values(), &[1000.0, 2200.0, 3300.0]);
    }

    #[test]
    fn empty_list_is_refused() {
        let err = read_nonempty_list(&["x"], QuantityKind::Resistance, "upper leg").unwrap_err();
        assert!(err.to_string().contains("upper leg"));
    }
}
