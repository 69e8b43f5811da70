//! Shared application service layer for the RF toolbox.
//!
//! Each calculator takes the text a user typed, runs the matching formulas and returns a
//! [`Report`] of formatted rows. Host defaults come from an explicit [`ToolboxConfig`]
//! rather than process-wide state, so the CLI and any future GUI share one code path.

pub mod component_service;
pub mod config;
pub mod error;
pub mod input;
pub mod notation_service;
pub mod reflection_service;
pub mod report;
pub mod rf_service;

// Re-export key types for convenience
pub use component_service::{
    LoadOverrides, divider_calculator, parallel_inductance_calculator,
    parallel_resistance_calculator, series_capacitance_calculator,
};
pub use config::{ToolboxConfig, load_config, save_config};
pub use error::{AppError, AppResult};
pub use input::{read_in_unit, read_list, read_nonempty_list, read_value};
pub use notation_service::{format_calculator, parse_calculator};
pub use reflection_service::{
    MismatchInput, gamma_calculator, impedance_calculator, mismatch_calculator,
};
pub use report::{Report, ReportRow};
pub use rf_service::{
    UnitInput, WavelengthInput, dual_image_calculator, fspl_calculator, image_calculator,
    image_from_lo_calculator, intermediate_calculator, octave_calculator, power_calculator,
    wavelength_calculator,
};
