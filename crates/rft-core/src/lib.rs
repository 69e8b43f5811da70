//! rft-core: stable foundation for the RF toolbox.
//!
//! Contains:
//! - units (uom SI types + constructors, physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - reading (sentinel results for domain violations)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod reading;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RftError, RftResult};
pub use numeric::*;
pub use reading::{Reading, Sentinel, checked};
pub use units::*;
