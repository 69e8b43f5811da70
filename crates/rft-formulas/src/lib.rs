//! rft-formulas: closed-form RF and electrical formulas for the RF toolbox.
//!
//! Provides:
//! - Reflection coefficient, impedance, VSWR and S11 conversions
//! - Parallel/series equivalents with per-branch current and dissipation
//! - Voltage divider with parallel banks
//! - Free-space path loss
//! - Image frequency planning (single and dual conversion)
//! - Frequency/wavelength conversion
//! - RF power unit conversion
//! - Octave/decade bandwidth
//!
//! Every formula is a pure function returning a [`rft_core::Reading`]: a finite
//! value, or the sentinel the host shows instead of a number.
//!
//! # Example
//!
//! ```
//! use num_complex::Complex64;
//! use rft_core::units::ohm;
//! use rft_formulas::{gamma_from_impedance, vswr_from_gamma};
//!
//! let gamma = gamma_from_impedance(Complex64::new(75.0, 0.0), ohm(50.0)).unwrap();
//! let vswr = vswr_from_gamma(gamma.magnitude()).unwrap();
//! assert!((vswr - 1.5).abs() < 1e-12);
//! ```

pub mod bandwidth;
pub mod common;
pub mod divider;
pub mod equivalents;
pub mod error;
pub mod fspl;
pub mod image;
pub mod power;
pub mod reflection;
pub mod unit_names;
pub mod wavelength;

// Re-exports
pub use bandwidth::{BandSummary, band_summary};
pub use divider::{Divider, DividerLeg, divider_output, voltage_divider};
pub use equivalents::{
    BranchLoad, ComponentList, ParallelBank, branch_loads, parallel_bank, parallel_inductance,
    parallel_resistance, series_capacitance,
};
pub use error::{FormulaError, FormulaResult};
pub use fspl::{DISTANCE_FACTORS, PathLossPoint, free_space_path_loss, path_loss_table};
pub use image::{
    DualConversionPlan, ImagePlan, InjectionMode, dual_conversion, image_plan, plan_from_lo,
    plan_from_rf_lo,
};
pub use power::{
    PowerUnit, ReferenceImpedance, convert_power, from_watts, scale_linear, to_watts,
};
pub use reflection::{
    MismatchTriple, ReflectionCoefficient, ReflectionSummary, gamma_from_impedance,
    gamma_from_s11_db, gamma_from_vswr, impedance_from_gamma, s11_db_from_gamma,
    vswr_from_gamma,
};
pub use unit_names::{DistanceUnit, FrequencyUnit, LinearUnit, WavelengthUnit};
pub use wavelength::{
    WavelengthSet, effective_permittivity, frequency_from_wavelength, wavelength,
};
