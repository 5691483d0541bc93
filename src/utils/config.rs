//! Sweep configuration with JSON persistence and validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::constants::{OMEGA_MAX, OMEGA_MID, OMEGA_MIN};
use crate::core::params::FloatParameters;

/// Sampling span for one sweep axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSpan {
    /// First sample value
    pub start: f64,
    /// Last sample value
    pub end: f64,
    /// Number of evenly spaced samples
    pub samples: usize,
}

/// Configuration for a comparison sweep over added mass and rotation rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Base float geometry; each sweep point overrides added mass and
    /// rotation rate on top of this
    pub base_parameters: FloatParameters,
    /// Added-mass coefficients to sweep over
    pub added_mass_values: Vec<f64>,
    /// Piston-screw rotation rates to sweep over (rad/s)
    pub rotation_rates: Vec<f64>,
    /// Time grid for the forward curves (s)
    pub time_span: SampleSpan,
    /// Target-velocity grid for the inverse curves (m/s)
    pub velocity_span: SampleSpan,
}

impl Default for SweepConfig {
    /// The ENSTA comparison sweep: added mass 1 to 3, the three named
    /// rotation regimes, 100 s of motion, target speeds up to 0.1 m/s.
    fn default() -> Self {
        Self {
            base_parameters: FloatParameters::default(),
            added_mass_values: vec![1.0, 2.0, 3.0],
            rotation_rates: vec![OMEGA_MIN, OMEGA_MID, OMEGA_MAX],
            time_span: SampleSpan {
                start: 0.0,
                end: 100.0,
                samples: 200,
            },
            velocity_span: SampleSpan {
                start: 0.0,
                end: 0.1,
                samples: 200,
            },
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "invalid parameter {parameter} = {value}: {reason}"),
            ConfigError::IoError { message } => write!(f, "configuration I/O error: {message}"),
            ConfigError::SerializationError { message } => {
                write!(f, "configuration serialization error: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result of validating a sweep configuration
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the configuration can drive a sweep
    pub is_valid: bool,
    /// Hard validation errors
    pub errors: Vec<ConfigError>,
    /// Advisory warnings; the sweep still runs
    pub warnings: Vec<String>,
}

impl SweepConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| ConfigError::SerializationError {
            message: e.to_string(),
        })
    }

    /// Save the configuration to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: e.to_string(),
            })?;
        fs::write(path, contents).map_err(|e| ConfigError::IoError {
            message: e.to_string(),
        })
    }

    /// Validate the sweep configuration.
    ///
    /// Only sweep-level properties are checked; the kinematic formulas stay
    /// permissive about physically questionable inputs, so an added mass at
    /// or below -1 is reported as a warning here and rejected later by the
    /// kinematics as a domain error.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        Self::validate_span("time_span", &self.time_span, &mut errors);
        Self::validate_span("velocity_span", &self.velocity_span, &mut errors);

        if self.added_mass_values.is_empty() {
            errors.push(ConfigError::InvalidParameter {
                parameter: "added_mass_values".to_string(),
                value: "[]".to_string(),
                reason: "at least one added-mass value is required".to_string(),
            });
        }
        if self.rotation_rates.is_empty() {
            errors.push(ConfigError::InvalidParameter {
                parameter: "rotation_rates".to_string(),
                value: "[]".to_string(),
                reason: "at least one rotation rate is required".to_string(),
            });
        }

        for &a in &self.added_mass_values {
            if a <= -1.0 {
                warnings.push(format!(
                    "added mass {a} gives a non-positive inertia factor; the sweep will fail with a domain error"
                ));
            }
        }
        for &omega in &self.rotation_rates {
            if omega == 0.0 {
                warnings.push(
                    "rotation rate 0 gives zero piston flow; inverse curves will fail with a domain error"
                        .to_string(),
                );
            }
            if omega < 0.0 {
                warnings.push(format!("rotation rate {omega} rad/s drives the float upward"));
            }
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    fn validate_span(name: &str, span: &SampleSpan, errors: &mut Vec<ConfigError>) {
        if span.samples < 2 {
            errors.push(ConfigError::InvalidParameter {
                parameter: format!("{name}.samples"),
                value: span.samples.to_string(),
                reason: "a sweep grid needs at least 2 samples".to_string(),
            });
        }
        if span.end <= span.start {
            errors.push(ConfigError::InvalidParameter {
                parameter: format!("{name}.end"),
                value: span.end.to_string(),
                reason: format!("span end must be above start ({})", span.start),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let result = SweepConfig::default().validate();
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn validation_result_is_reexported_at_the_crate_root() {
        let result: crate::ValidationResult = SweepConfig::default().validate();
        assert!(result.is_valid);
    }

    #[test]
    fn default_config_matches_the_ensta_sweep() {
        let config = SweepConfig::default();
        assert_eq!(config.added_mass_values, vec![1.0, 2.0, 3.0]);
        assert_eq!(config.rotation_rates.len(), 3);
        assert_eq!(config.time_span.samples, 200);
        assert_eq!(config.velocity_span.end, 0.1);
    }

    #[test]
    fn degenerate_span_is_an_error() {
        let mut config = SweepConfig::default();
        config.time_span.samples = 1;
        config.velocity_span.end = config.velocity_span.start;
        let result = config.validate();
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn empty_sweep_axes_are_errors() {
        let mut config = SweepConfig::default();
        config.added_mass_values.clear();
        config.rotation_rates.clear();
        let result = config.validate();
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn questionable_physics_is_only_a_warning() {
        let mut config = SweepConfig::default();
        config.added_mass_values = vec![-1.0];
        config.rotation_rates = vec![0.0, -1.0];
        let result = config.validate();
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 3);
    }

    #[test]
    fn json_round_trip() {
        let config = SweepConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SweepConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn load_from_missing_file_is_an_io_error() {
        let result = SweepConfig::load_from_file("/nonexistent/sweep.json");
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join("float_kinematics_sweep_config_test.json");
        let config = SweepConfig::default();
        config.save_to_file(&path).unwrap();
        let back = SweepConfig::load_from_file(&path).unwrap();
        assert_eq!(back, config);
        let _ = std::fs::remove_file(&path);
    }
}
