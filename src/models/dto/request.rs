use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{BloomLevel, EducationLevel, ExamSpec, QuestionKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Cabaret,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatMessageRequest {
    /// The length cap is configured, so the relay enforces it.
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,

    #[serde(default)]
    pub persona: Option<Persona>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizGenerationRequest {
    #[validate(length(min = 1, max = 500, message = "keywords must be 1 to 500 characters"))]
    pub keywords: String,

    #[serde(default)]
    #[validate(range(min = 1, max = 10, message = "question_count must be between 1 and 10"))]
    pub question_count: Option<u8>,
}

impl QuizGenerationRequest {
    // The original quiz page always asked for three questions.
    pub fn question_count(&self) -> u8 {
        self.question_count.unwrap_or(3)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExamQuestionsRequest {
    pub question_type: QuestionKind,

    #[validate(range(min = 1, max = 10, message = "question_count must be between 1 and 10"))]
    pub question_count: u8,

    pub education_level: EducationLevel,

    pub bloom_level: BloomLevel,

    #[serde(default)]
    pub needs_case: bool,

    #[validate(length(min = 1, max = 200, message = "subject must be 1 to 200 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 2000, message = "context must be 1 to 2000 characters"))]
    pub context: String,
}

impl From<ExamQuestionsRequest> for ExamSpec {
    fn from(request: ExamQuestionsRequest) -> Self {
        ExamSpec {
            question_kind: request.question_type,
            question_count: request.question_count,
            education_level: request.education_level,
            bloom_level: request.bloom_level,
            needs_case: request.needs_case,
            subject: request.subject,
            context: request.context,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadRequest {
    #[validate(length(min = 1, max = 255, message = "filename must be 1 to 255 characters"))]
    pub filename: String,

    /// Base64-encoded file body.
    #[validate(length(min = 1, message = "file data is required"))]
    pub data: String,
}
