//! rft-notation: engineering-notation parsing and formatting for the RF toolbox.
//!
//! Provides:
//! - Quantity kinds with per-kind prefix, unit-symbol and display tables
//! - A parser for "22k", "2k2", "4.7 nF", "1 MΩ" and friends
//! - The inverse formatter with %g-style significant digits
//!
//! # Example
//!
//! ```
//! use rft_notation::{QuantityKind, format_value, parse_value};
//!
//! let r = parse_value("2k2", QuantityKind::Resistance).unwrap();
//! assert_eq!(r, 2200.0);
//! assert_eq!(format_value(1500.0, QuantityKind::Resistance), "1.5 kΩ");
//! ```

pub mod error;
pub mod format;
pub mod kind;
pub mod parse;

pub use error::{NotationError, NotationResult};
pub use format::{format_reading, format_significant, format_value};
pub use kind::{Precision, Prefix, QuantityKind, Scale};
pub use parse::{ParsedValue, parse_engineering, parse_or_zero, parse_value};
