//! Configuration loading and validation errors.

use super::error_code::{self, PulseErrorCode};

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid TOML in {path}: {message}")]
    TomlParse { path: String, message: String },

    #[error("Signal weight {name} out of range: {value} (must be in [0, 1] on a whole hundredth)")]
    WeightOutOfRange { name: String, value: f64 },

    #[error("Survey threshold out of range: {value} (must be in [0, 1] on a whole hundredth)")]
    ThresholdOutOfRange { value: f64 },
}

impl PulseErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::TomlParse { .. } => error_code::CONFIG_TOML_PARSE,
            Self::WeightOutOfRange { .. } => error_code::CONFIG_WEIGHT_OUT_OF_RANGE,
            Self::ThresholdOutOfRange { .. } => error_code::CONFIG_THRESHOLD_OUT_OF_RANGE,
        }
    }
}
