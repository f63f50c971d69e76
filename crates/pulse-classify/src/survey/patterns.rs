//! Static pattern tables for survey identification.
//!
//! Two ordered, immutable tables matched against the lower-cased quiz title.
//! Order matters for reporting only: the first matching pattern is the one
//! named in the verdict.

/// A title pattern with a stable name for audit output.
#[derive(Debug, Clone)]
pub struct TitlePattern {
    /// Pattern name (e.g., "course_evaluation").
    pub name: &'static str,
    /// Regex pattern string. Matched against the lower-cased title.
    pub pattern: &'static str,
}

/// Titles that disqualify a quiz from being a survey regardless of every
/// other signal: numbered course units, exams, and practice material.
pub static EXCLUSION_PATTERNS: &[TitlePattern] = &[
    TitlePattern { name: "numbered_quiz", pattern: r"\bquiz\s*#?\d+\b" },
    TitlePattern { name: "numbered_module", pattern: r"\bmodule\s*#?\d+\b" },
    TitlePattern { name: "numbered_chapter", pattern: r"\bchapter\s*#?\d+\b" },
    TitlePattern { name: "numbered_week", pattern: r"\bweek\s*#?\d+\b" },
    TitlePattern { name: "numbered_unit", pattern: r"\bunit\s*#?\d+\b" },
    TitlePattern { name: "midterm", pattern: r"\bmidterm\b" },
    TitlePattern { name: "final_exam", pattern: r"\bfinal\s+exam\b" },
    TitlePattern { name: "numbered_test", pattern: r"\btest\s*#?\d+\b" },
    TitlePattern { name: "practice", pattern: r"\bpractice\b" },
];

/// Titles that indicate a feedback survey.
pub static FEEDBACK_PATTERNS: &[TitlePattern] = &[
    TitlePattern { name: "course_evaluation", pattern: r"\bcourse\s+evaluation\b" },
    TitlePattern { name: "course_feedback", pattern: r"\bcourse\s+feedback\b" },
    TitlePattern { name: "course_review", pattern: r"\bcourse\s+review\b" },
    TitlePattern { name: "course_survey", pattern: r"\bcourse\s+survey\b" },
    TitlePattern { name: "student_feedback", pattern: r"\bstudent\s+(feedback|survey|evaluation)\b" },
    TitlePattern { name: "end_of_course", pattern: r"\bend\s+of\s+course\b" },
    TitlePattern { name: "final_evaluation", pattern: r"\bfinal\s+(evaluation|feedback|survey)\b" },
    TitlePattern { name: "satisfaction_survey", pattern: r"\bsatisfaction\s+(survey|assessment|questionnaire)\b" },
    TitlePattern { name: "experience_survey", pattern: r"\b(course|learning|student)\s+experience\b" },
    TitlePattern { name: "course_assessment", pattern: r"\bcourse\s+assessment\b" },
    TitlePattern { name: "program_evaluation", pattern: r"\bprogram\s+(evaluation|feedback)\b" },
    TitlePattern { name: "quality_survey", pattern: r"\bquality\s+survey\b" },
    TitlePattern { name: "instructor_evaluation", pattern: r"\b(instructor|teaching)\s+evaluation\b" },
];
