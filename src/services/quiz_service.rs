use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::prompts::QUIZ_GENERATOR_PROMPT,
    errors::{AppError, AppResult},
    models::{domain::GeneratedQuiz, dto::request::QuizGenerationRequest},
    services::{completion_helpers::parse_fenced_json, relay_service::RelayService},
};

pub struct QuizService {
    relay: Arc<RelayService>,
}

impl QuizService {
    pub fn new(relay: Arc<RelayService>) -> Self {
        Self { relay }
    }

    pub async fn generate_quiz(&self, request: QuizGenerationRequest) -> AppResult<GeneratedQuiz> {
        request.validate()?;

        let prompt = build_quiz_prompt(&request.keywords, request.question_count());
        let completion = self.relay.relay(&prompt).await?;

        let quiz: GeneratedQuiz = parse_fenced_json(&completion)?;
        if quiz.questions.is_empty() {
            return Err(AppError::ParseError(
                "completion contained no questions".to_string(),
            ));
        }

        log::info!(
            "Generated quiz with {} questions about '{}'",
            quiz.questions.len(),
            request.keywords
        );
        Ok(quiz)
    }
}

fn build_quiz_prompt(keywords: &str, question_count: u8) -> String {
    format!(
        "Generate a multiple choice quiz with {question_count} questions about the following topic: {keywords}.\n\n{QUIZ_GENERATOR_PROMPT}"
    )
}
