//! Output types for the survey classifier — the contract consumed by the
//! sync/storage collaborators.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use pulse_core::QuizMetadata;

/// Per-signal audit trail for one verdict.
///
/// Serializes as a signal-name → value mapping. Signals that were never
/// evaluated (exclusion short-circuit) stay `None` and are omitted from the
/// serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    /// Whether an exclusion pattern matched the title.
    pub excluded: bool,
    /// Name of the exclusion pattern that matched.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub exclusion_pattern: Option<String>,
    /// Whether a feedback title pattern matched.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title_match: Option<bool>,
    /// Name of the feedback pattern that matched.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title_pattern: Option<String>,
    /// Whether the source declared a survey quiz type.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_lms_survey_type: Option<bool>,
    /// Whether submissions are anonymous.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_anonymous: Option<bool>,
    /// Whether the quiz awards no points.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_ungraded: Option<bool>,
    /// Per-signal reasons dropped from `reasons` by the below-threshold
    /// branch, kept here for debugging near-miss records.
    #[serde(skip_serializing_if = "SmallVec::is_empty", default)]
    pub discarded_reasons: SmallVec<[String; 4]>,
}

/// The classifier's verdict for one quiz — the universal output type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationVerdict {
    /// Confidence in [0.00, 1.00], always an exact two-decimal value.
    pub confidence: f64,
    /// Whether the quiz is considered a feedback survey.
    pub is_survey: bool,
    /// Ordered human-readable contributing signals. Below threshold this is
    /// a single explanatory string.
    pub reasons: SmallVec<[String; 4]>,
    /// Per-signal audit trail.
    pub signals: SignalReport,
}

/// A quiz decorated with its verdict. Output of the batch helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedQuiz {
    pub quiz: QuizMetadata,
    pub verdict: ClassificationVerdict,
}
