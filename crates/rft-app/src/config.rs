//! Host defaults, loaded once and passed to every calculator.

use std::path::Path;

use rft_core::ensure_finite;
use rft_formulas::InjectionMode;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Defaults for inputs a user does not type every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    /// Reference impedance Z0 for the reflection calculators (Ω).
    pub reference_impedance: f64,
    /// Supply voltage of the divider calculator (V).
    pub divider_supply: f64,
    /// Voltage across the parallel resistor bank (V).
    pub parallel_delta_v: f64,
    /// Per-resistor dissipation limit (W).
    pub max_resistor_power: f64,
    /// Relative permittivity of the medium for wavelength conversion.
    pub permittivity: f64,
    pub injection: InjectionMode,
}

impl Default for ToolboxConfig {
    fn default() -> Self {
        Self {
            reference_impedance: 50.0,
            divider_supply: 5.0,
            parallel_delta_v: 5.0,
            max_resistor_power: 0.05,
            permittivity: 1.0,
            injection: InjectionMode::LowSide,
        }
    }
}

impl ToolboxConfig {
    pub fn validate(&self) -> AppResult<()> {
        let finite = [
            ("reference_impedance", self.reference_impedance),
            ("divider_supply", self.divider_supply),
            ("parallel_delta_v", self.parallel_delta_v),
            ("max_resistor_power", self.max_resistor_power),
            ("permittivity", self.permittivity),
        ];
        for (name, value) in finite {
            ensure_finite(value, name).map_err(|e| AppError::Config(e.to_string()))?;
        }
        if self.reference_impedance <= 0.0 {
            return Err(AppError::Config(
                "reference_impedance must be positive".to_string(),
            ));
        }
        if self.max_resistor_power < 0.0 {
            return Err(AppError::Config(
                "max_resistor_power must not be negative".to_string(),
            ));
        }
        if self.permittivity < 1.0 {
            return Err(AppError::Config(
                "permittivity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a YAML config file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> AppResult<ToolboxConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: ToolboxConfig = serde_yaml::from_str(&content)?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "loaded toolbox config");
    Ok(config)
}

pub fn save_config(path: &Path, config: &ToolboxConfig) -> AppResult<()> {
    config.validate()?;
    let content = serde_yaml::to_string(config)?;

    std::fs::write(path, content).map_err(|e| AppError::ConfigFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ToolboxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reference_impedance, 50.0);
        assert_eq!(config.max_resistor_power, 0.05);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: ToolboxConfig =
            serde_yaml::from_str("reference_impedance: 75.0\ninjection: high_side\n").unwrap();
        assert_eq!(config.reference_impedance, 75.0);
        assert_eq!(config.injection, InjectionMode::HighSide);
        assert_eq!(config.divider_supply, 5.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let config = ToolboxConfig {
            reference_impedance: 0.0,
            ..ToolboxConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = ToolboxConfig {
            permittivity: f64::NAN,
            ..ToolboxConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ToolboxConfig {
            max_resistor_power: -1.0,
            ..ToolboxConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
