//! Stable machine-readable error codes.

/// Trait implemented by every workspace error type.
///
/// Codes are part of the external contract: downstream collaborators match
/// on them, so existing codes never change meaning.
pub trait PulseErrorCode {
    /// Stable machine-readable code for this error.
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_TOML_PARSE: &str = "CONFIG_TOML_PARSE";
pub const CONFIG_WEIGHT_OUT_OF_RANGE: &str = "CONFIG_WEIGHT_OUT_OF_RANGE";
pub const CONFIG_THRESHOLD_OUT_OF_RANGE: &str = "CONFIG_THRESHOLD_OUT_OF_RANGE";
