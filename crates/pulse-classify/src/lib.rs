//! # pulse-classify
//!
//! Survey identification engine for the Pulse feedback tool.
//! Decides, from sparse quiz metadata, whether a quiz represents a feedback
//! survey, with a bounded confidence score and human-readable rationale.

pub mod survey;

pub use survey::classifier::SurveyClassifier;
pub use survey::types::{ClassificationVerdict, ClassifiedQuiz, SignalReport};
