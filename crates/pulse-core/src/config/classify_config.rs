//! Classifier configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::config_error::ConfigError;

/// Configuration for the survey classifier subsystem.
///
/// The four signal weights and the decision threshold are decimals in [0, 1]
/// with at most two fractional digits. Scoring accumulates in integer
/// hundredths (see the `*_centi` accessors), so every value must sit on a
/// whole hundredth.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Weight added on a feedback title pattern match. Default: 0.60.
    pub title_weight: Option<f64>,
    /// Weight added when the source declares a survey quiz type. Default: 0.30.
    pub survey_type_weight: Option<f64>,
    /// Weight added when submissions are anonymous. Default: 0.15.
    pub anonymity_weight: Option<f64>,
    /// Weight added when the quiz awards no points. Default: 0.10.
    pub ungraded_weight: Option<f64>,
    /// Confidence at or above which a quiz counts as a survey. Default: 0.50.
    pub survey_threshold: Option<f64>,
}

impl ClassifyConfig {
    /// Returns the effective title pattern weight, defaulting to 0.60.
    pub fn effective_title_weight(&self) -> f64 {
        self.title_weight.unwrap_or(0.60)
    }

    /// Returns the effective survey type weight, defaulting to 0.30.
    pub fn effective_survey_type_weight(&self) -> f64 {
        self.survey_type_weight.unwrap_or(0.30)
    }

    /// Returns the effective anonymity weight, defaulting to 0.15.
    pub fn effective_anonymity_weight(&self) -> f64 {
        self.anonymity_weight.unwrap_or(0.15)
    }

    /// Returns the effective ungraded weight, defaulting to 0.10.
    pub fn effective_ungraded_weight(&self) -> f64 {
        self.ungraded_weight.unwrap_or(0.10)
    }

    /// Returns the effective survey threshold, defaulting to 0.50.
    pub fn effective_survey_threshold(&self) -> f64 {
        self.survey_threshold.unwrap_or(0.50)
    }

    /// Title pattern weight in integer hundredths.
    pub fn title_weight_centi(&self) -> u32 {
        to_centi(self.effective_title_weight())
    }

    /// Survey type weight in integer hundredths.
    pub fn survey_type_weight_centi(&self) -> u32 {
        to_centi(self.effective_survey_type_weight())
    }

    /// Anonymity weight in integer hundredths.
    pub fn anonymity_weight_centi(&self) -> u32 {
        to_centi(self.effective_anonymity_weight())
    }

    /// Ungraded weight in integer hundredths.
    pub fn ungraded_weight_centi(&self) -> u32 {
        to_centi(self.effective_ungraded_weight())
    }

    /// Survey threshold in integer hundredths.
    pub fn survey_threshold_centi(&self) -> u32 {
        to_centi(self.effective_survey_threshold())
    }

    /// Load a config from a TOML file and validate it.
    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::TomlParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded classifier config");
        Ok(config)
    }

    /// Check that every weight and the threshold lies in [0, 1] on a whole
    /// hundredth.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("title_weight", self.effective_title_weight()),
            ("survey_type_weight", self.effective_survey_type_weight()),
            ("anonymity_weight", self.effective_anonymity_weight()),
            ("ungraded_weight", self.effective_ungraded_weight()),
        ];
        for (name, value) in weights {
            if !is_valid_centi(value) {
                return Err(ConfigError::WeightOutOfRange {
                    name: name.to_string(),
                    value,
                });
            }
        }
        let threshold = self.effective_survey_threshold();
        if !is_valid_centi(threshold) {
            return Err(ConfigError::ThresholdOutOfRange { value: threshold });
        }
        Ok(())
    }
}

/// Convert a validated decimal to integer hundredths.
fn to_centi(value: f64) -> u32 {
    (value * 100.0).round() as u32
}

/// In [0, 1] and on a whole hundredth.
fn is_valid_centi(value: f64) -> bool {
    (0.0..=1.0).contains(&value) && (value * 100.0 - (value * 100.0).round()).abs() < 1e-9
}
