//! Configuration for the Pulse engine.

pub mod classify_config;

pub use classify_config::ClassifyConfig;
