//! # pulse-core
//!
//! Foundation crate for the Pulse feedback engine.
//! Defines the domain types, configuration, errors, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod telemetry;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ClassifyConfig;
pub use errors::config_error::ConfigError;
pub use errors::error_code::PulseErrorCode;
pub use types::quiz::QuizMetadata;
