//! Quiz metadata as delivered by the upstream LMS collaborator.

use serde::{Deserialize, Serialize};

/// One quiz record from the LMS quiz listing.
///
/// Upstream payloads are sparse and noisy: any field may be absent, and an
/// absent field takes its documented default, so deserialization is total
/// over partial records. Unclassifiable-by-absence records simply score low
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuizMetadata {
    /// Free-text quiz title. May be empty.
    pub title: String,
    /// Source-declared quiz type ("survey", "graded_survey", "assignment",
    /// "practice_quiz", ...). Unknown values are tolerated.
    pub quiz_type: String,
    /// Whether submissions are anonymous. Default: false.
    pub anonymous_submissions: bool,
    /// Maximum points. 0 = ungraded. Default: 0.
    pub points_possible: u32,
    /// Whether the quiz is published. Carried for consumers, not scored.
    pub published: bool,
}

impl QuizMetadata {
    /// Whether the source-declared type is one of the survey types.
    pub fn declares_survey_type(&self) -> bool {
        matches!(self.quiz_type.as_str(), "survey" | "graded_survey")
    }

    /// Whether the quiz awards no points.
    pub fn is_ungraded(&self) -> bool {
        self.points_possible == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_takes_defaults() {
        let quiz: QuizMetadata = serde_json::from_str(r#"{"title": "Course Feedback"}"#)
            .expect("partial record must deserialize");
        assert_eq!(quiz.title, "Course Feedback");
        assert_eq!(quiz.quiz_type, "");
        assert!(!quiz.anonymous_submissions);
        assert_eq!(quiz.points_possible, 0);
        assert!(!quiz.published);
    }

    #[test]
    fn empty_payload_takes_defaults() {
        let quiz: QuizMetadata = serde_json::from_str("{}").expect("empty record must deserialize");
        assert_eq!(quiz, QuizMetadata::default());
    }

    #[test]
    fn survey_type_detection() {
        let mut quiz = QuizMetadata {
            quiz_type: "survey".to_string(),
            ..QuizMetadata::default()
        };
        assert!(quiz.declares_survey_type());

        quiz.quiz_type = "graded_survey".to_string();
        assert!(quiz.declares_survey_type());

        quiz.quiz_type = "assignment".to_string();
        assert!(!quiz.declares_survey_type());

        // Unknown types are tolerated, they just carry no signal.
        quiz.quiz_type = "some_future_type".to_string();
        assert!(!quiz.declares_survey_type());
    }
}
