use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    Open,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "multiple choice"),
            QuestionKind::TrueFalse => write!(f, "true/false"),
            QuestionKind::Open => write!(f, "open-ended"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    SecondarySchool,
    AppliedSciences,
    University,
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EducationLevel::SecondarySchool => write!(f, "secondary school"),
            EducationLevel::AppliedSciences => write!(f, "university of applied sciences"),
            EducationLevel::University => write!(f, "university"),
        }
    }
}

/// Bloom's taxonomy levels offered by the exam builder form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BloomLevel {
    Knowledge,
    Comprehension,
    Application,
    Analysis,
    Synthesis,
    Evaluation,
}

impl fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloomLevel::Knowledge => write!(f, "knowledge"),
            BloomLevel::Comprehension => write!(f, "comprehension"),
            BloomLevel::Application => write!(f, "application"),
            BloomLevel::Analysis => write!(f, "analysis"),
            BloomLevel::Synthesis => write!(f, "synthesis"),
            BloomLevel::Evaluation => write!(f, "evaluation"),
        }
    }
}

/// Validated exam-question specification, assembled from the builder form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamSpec {
    pub question_kind: QuestionKind,
    pub question_count: u8,
    pub education_level: EducationLevel,
    pub bloom_level: BloomLevel,
    pub needs_case: bool,
    pub subject: String,
    pub context: String,
}
