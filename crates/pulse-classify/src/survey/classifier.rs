//! Survey classifier — compiled pattern tables and signal scoring.

use regex::{Regex, RegexSet};
use smallvec::SmallVec;

use pulse_core::{ClassifyConfig, QuizMetadata};

use super::patterns::{TitlePattern, EXCLUSION_PATTERNS, FEEDBACK_PATTERNS};
use super::types::{ClassificationVerdict, SignalReport};

/// Rule-based survey classifier.
///
/// Compiles both pattern tables once at construction. `classify` reads only
/// its argument and the compiled tables, so a shared instance is safe to use
/// from multiple threads without locking.
pub struct SurveyClassifier {
    exclusion: CompiledTable,
    feedback: CompiledTable,
    config: ClassifyConfig,
}

/// One compiled pattern table: a `RegexSet` fast path plus the per-pattern
/// regexes for first-match reporting.
struct CompiledTable {
    set: Option<RegexSet>,
    compiled: Vec<(Regex, &'static TitlePattern)>,
}

impl CompiledTable {
    fn new(table: &'static [TitlePattern]) -> Self {
        let compiled: Vec<(Regex, &'static TitlePattern)> = table
            .iter()
            .filter_map(|p| Regex::new(p.pattern).ok().map(|re| (re, p)))
            .collect();
        let set = RegexSet::new(compiled.iter().map(|(_, p)| p.pattern)).ok();
        Self { set, compiled }
    }

    /// First pattern in table order matching `title`, if any.
    fn first_match(&self, title: &str) -> Option<&'static TitlePattern> {
        if let Some(ref set) = self.set {
            if !set.is_match(title) {
                return None;
            }
        }
        self.compiled
            .iter()
            .find(|(re, _)| re.is_match(title))
            .map(|(_, p)| *p)
    }
}

impl SurveyClassifier {
    /// Create a classifier with the default weights and threshold.
    pub fn new() -> Self {
        Self::with_config(ClassifyConfig::default())
    }

    /// Create a classifier with custom weights and threshold.
    ///
    /// The config is taken as-is; file-loaded configs are validated by
    /// `ClassifyConfig::from_toml_path`. Oversized weight sums still cap at
    /// 1.00 during scoring.
    pub fn with_config(config: ClassifyConfig) -> Self {
        Self {
            exclusion: CompiledTable::new(EXCLUSION_PATTERNS),
            feedback: CompiledTable::new(FEEDBACK_PATTERNS),
            config,
        }
    }

    /// The configuration this classifier scores with.
    pub fn config(&self) -> &ClassifyConfig {
        &self.config
    }

    /// Classify one quiz.
    ///
    /// Total over any metadata record: absent upstream fields already
    /// degraded to their defaults at deserialization, and no signal check
    /// can fail. Exclusion patterns short-circuit all scoring.
    pub fn classify(&self, quiz: &QuizMetadata) -> ClassificationVerdict {
        let title_lower = quiz.title.to_lowercase();

        // Exclusion check — highest precedence. Later signals are never
        // evaluated and stay None in the report.
        if let Some(pattern) = self.exclusion.first_match(&title_lower) {
            tracing::debug!(
                title = %quiz.title,
                pattern = pattern.name,
                "excluded by title pattern"
            );
            let mut reasons: SmallVec<[String; 4]> = SmallVec::new();
            reasons.push(format!(
                "Excluded: title '{}' matches non-survey pattern '{}'",
                quiz.title, pattern.name
            ));
            return ClassificationVerdict {
                confidence: 0.0,
                is_survey: false,
                reasons,
                signals: SignalReport {
                    excluded: true,
                    exclusion_pattern: Some(pattern.name.to_string()),
                    ..SignalReport::default()
                },
            };
        }

        let mut signals = SignalReport::default();
        let mut reasons: SmallVec<[String; 4]> = SmallVec::new();
        // Accumulate in integer hundredths so confidences stay exact
        // two-decimal values.
        let mut score_centi: u32 = 0;

        match self.feedback.first_match(&title_lower) {
            Some(pattern) => {
                score_centi += self.config.title_weight_centi();
                reasons.push(format!(
                    "Title '{}' matches feedback pattern '{}'",
                    quiz.title, pattern.name
                ));
                signals.title_match = Some(true);
                signals.title_pattern = Some(pattern.name.to_string());
            }
            None => signals.title_match = Some(false),
        }

        if quiz.declares_survey_type() {
            score_centi += self.config.survey_type_weight_centi();
            reasons.push(format!("Source-declared quiz type '{}'", quiz.quiz_type));
            signals.is_lms_survey_type = Some(true);
        } else {
            signals.is_lms_survey_type = Some(false);
        }

        if quiz.anonymous_submissions {
            score_centi += self.config.anonymity_weight_centi();
            reasons.push("Anonymous submissions enabled".to_string());
            signals.is_anonymous = Some(true);
        } else {
            signals.is_anonymous = Some(false);
        }

        if quiz.is_ungraded() {
            score_centi += self.config.ungraded_weight_centi();
            reasons.push("Ungraded (0 points possible)".to_string());
            signals.is_ungraded = Some(true);
        } else {
            signals.is_ungraded = Some(false);
        }

        // All four default weights sum to 1.15, so the cap does fire.
        let score_centi = score_centi.min(100);
        let confidence = f64::from(score_centi) / 100.0;
        let is_survey = score_centi >= self.config.survey_threshold_centi();

        if !is_survey {
            // The per-signal rationale is replaced below threshold; keep the
            // dropped strings in the audit trail.
            signals.discarded_reasons = std::mem::take(&mut reasons);
            reasons.push(format!(
                "Confidence {:.2} below survey threshold {:.2}",
                confidence,
                self.config.effective_survey_threshold()
            ));
        }

        tracing::trace!(title = %quiz.title, confidence, is_survey, "classified quiz");

        ClassificationVerdict {
            confidence,
            is_survey,
            reasons,
            signals,
        }
    }
}

impl Default for SurveyClassifier {
    fn default() -> Self {
        Self::new()
    }
}
