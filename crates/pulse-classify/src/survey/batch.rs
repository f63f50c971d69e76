//! Batch classification and filtering helpers built on `classify`.

use rayon::prelude::*;

use pulse_core::QuizMetadata;

use super::classifier::SurveyClassifier;
use super::types::ClassifiedQuiz;

impl SurveyClassifier {
    /// Classify each quiz in input order, decorating copies with verdicts.
    ///
    /// The input is never mutated, and no element can fail — `classify` is
    /// total, so the output length always equals the input length.
    pub fn classify_batch(&self, quizzes: &[QuizMetadata]) -> Vec<ClassifiedQuiz> {
        quizzes
            .iter()
            .map(|quiz| ClassifiedQuiz {
                quiz: quiz.clone(),
                verdict: self.classify(quiz),
            })
            .collect()
    }

    /// Same contract as `classify_batch`, fanned out across the rayon pool.
    ///
    /// Individual classifications are independent; only the output order is
    /// constrained, and `par_iter` reassembles it to match the input.
    pub fn classify_batch_parallel(&self, quizzes: &[QuizMetadata]) -> Vec<ClassifiedQuiz> {
        quizzes
            .par_iter()
            .map(|quiz| ClassifiedQuiz {
                quiz: quiz.clone(),
                verdict: self.classify(quiz),
            })
            .collect()
    }

    /// Quizzes classified as surveys at or above `min_confidence`, in
    /// original relative order.
    ///
    /// `min_confidence` is independent of the classifier threshold: with the
    /// defaults, a quiz at 0.55 passes a 0.50 filter and fails a 0.60 one
    /// even though `is_survey` is true either way.
    pub fn filter_surveys(
        &self,
        quizzes: &[QuizMetadata],
        min_confidence: f64,
    ) -> Vec<ClassifiedQuiz> {
        self.classify_batch(quizzes)
            .into_iter()
            .filter(|c| c.verdict.is_survey && c.verdict.confidence >= min_confidence)
            .collect()
    }

    /// `filter_surveys` at the configured survey threshold.
    pub fn filter_surveys_default(&self, quizzes: &[QuizMetadata]) -> Vec<ClassifiedQuiz> {
        self.filter_surveys(quizzes, self.config().effective_survey_threshold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey_quiz(title: &str) -> QuizMetadata {
        QuizMetadata {
            title: title.to_string(),
            quiz_type: "survey".to_string(),
            ..QuizMetadata::default()
        }
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let classifier = SurveyClassifier::new();
        let quizzes = vec![
            survey_quiz("Course Feedback"),
            survey_quiz("Module 1 Quiz"),
            survey_quiz("Student Survey"),
        ];
        let classified = classifier.classify_batch(&quizzes);
        assert_eq!(classified.len(), 3);
        for (input, output) in quizzes.iter().zip(&classified) {
            assert_eq!(&output.quiz, input);
        }
    }

    #[test]
    fn parallel_batch_matches_sequential() {
        let classifier = SurveyClassifier::new();
        let quizzes: Vec<QuizMetadata> = (0..200)
            .map(|i| QuizMetadata {
                title: format!("Quiz {i}"),
                points_possible: i,
                ..QuizMetadata::default()
            })
            .collect();
        assert_eq!(
            classifier.classify_batch(&quizzes),
            classifier.classify_batch_parallel(&quizzes)
        );
    }

    #[test]
    fn filter_applies_both_predicates() {
        let classifier = SurveyClassifier::new();
        // 0.30 (type) + 0.15 (anonymous) + 0.10 (ungraded) = 0.55.
        let mid = QuizMetadata {
            title: "Thoughts?".to_string(),
            quiz_type: "survey".to_string(),
            anonymous_submissions: true,
            ..QuizMetadata::default()
        };
        // Exactly 1.00 after cap.
        let high = QuizMetadata {
            title: "Course Evaluation".to_string(),
            quiz_type: "graded_survey".to_string(),
            anonymous_submissions: true,
            ..QuizMetadata::default()
        };
        let quizzes = vec![mid.clone(), high.clone()];

        let at_default = classifier.filter_surveys(&quizzes, 0.50);
        assert_eq!(at_default.len(), 2);
        // Relative input order survives filtering.
        assert_eq!(at_default[0].quiz, mid);
        assert_eq!(at_default[1].quiz, high);

        let strict = classifier.filter_surveys(&quizzes, 0.60);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].quiz, high);
    }
}
