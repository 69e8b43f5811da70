//! Direct access to the engineering-notation parser and formatter.

use rft_notation::{ParsedValue, QuantityKind, format_significant, format_value};
use tracing::trace;

use crate::error::AppResult;
use crate::input::read_value;
use crate::report::Report;

/// Parse `text` as a `kind` quantity and show it back in canonical form.
pub fn parse_calculator(text: &str, kind: QuantityKind) -> AppResult<Report> {
    trace!(text, %kind, "parse");
    let parsed = ParsedValue::from_text(text, kind)?;

    let mut report = Report::new(format!("Parse {kind}"));
    report.row("Input", parsed.raw_text.clone());
    report.row("SI value", format_significant(parsed.si_value(), 12));
    report.row("Formatted", format_value(parsed.si_value(), kind));
    Ok(report)
}

/// Format an SI value (plain or engineering notation) for display as `kind`.
pub fn format_calculator(value: &str, kind: QuantityKind) -> AppResult<Report> {
    trace!(value, %kind, "format");
    let si = read_value(value, QuantityKind::Generic)?;

    let mut report = Report::new(format!("Format {kind}"));
    report.row("SI value", format_significant(si, 12));
    report.row("Formatted", format_value(si, kind));
    Ok(report)
}
