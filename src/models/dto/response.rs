use serde::Serialize;

use crate::models::domain::{GeneratedQuiz, QuizQuestion};

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub success: bool,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            success: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
    pub success: bool,
}

impl From<GeneratedQuiz> for QuizResponse {
    fn from(quiz: GeneratedQuiz) -> Self {
        Self {
            questions: quiz.questions,
            success: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub content_type: String,
    pub content: String,
    pub truncated: bool,
}
