//! Parser/formatter behaviour as seen by a calculator front end.

use rft_core::{Tolerances, nearly_equal};
use rft_notation::{QuantityKind, format_value, parse_engineering, parse_or_zero, parse_value};

fn close(a: f64, b: f64) -> bool {
    nearly_equal(a, b, Tolerances { abs: 0.0, rel: 1e-9 })
}

#[test]
fn basic_scenario() {
    assert_eq!(parse_engineering("1k").unwrap(), 1000.0);
    assert!(close(parse_engineering("4.7n").unwrap(), 4.7e-9));
    assert_eq!(format_value(1500.0, QuantityKind::Resistance), "1.5 kΩ");
}

#[test]
fn embedded_prefix_equivalence() {
    let g = QuantityKind::Generic;
    assert_eq!(parse_value("2k2", g).unwrap(), parse_value("2200", g).unwrap());
    assert!(close(
        parse_value("0u5", g).unwrap(),
        parse_value("0.0000005", g).unwrap()
    ));
    assert!(close(
        parse_value("4n7", g).unwrap(),
        parse_value("4.7e-9", g).unwrap()
    ));
}

#[test]
fn component_column_degrades_to_zero() {
    let column = ["1k", "", "2k2", "n/a", "4k7"];
    let values: Vec<f64> = column
        .iter()
        .map(|s| parse_or_zero(s, QuantityKind::Resistance))
        .collect();
    assert_eq!(values, vec![1000.0, 0.0, 2200.0, 0.0, 4700.0]);
}

#[test]
fn formatted_output_reparses() {
    let cases = [
        (2200.0, QuantityKind::Resistance),
        (4.7e-9, QuantityKind::Capacitance),
        (0.5e-12, QuantityKind::Capacitance),
        (10e-6, QuantityKind::Inductance),
        (0.025, QuantityKind::Power),
        (0.005, QuantityKind::Current),
        (3.3, QuantityKind::Voltage),
        (1.5e9, QuantityKind::Frequency),
        (0.299_792_458, QuantityKind::Distance),
    ];
    for (v, kind) in cases {
        let shown = format_value(v, kind);
        let back = parse_value(&shown, kind).unwrap();
        assert!(
            nearly_equal(back, v, Tolerances { abs: 0.0, rel: 1e-3 }),
            "{shown} -> {back} (expected {v})"
        );
    }
}
