use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::prompts::EXAM_BUILDER_PROMPT,
    errors::AppResult,
    models::{domain::ExamSpec, dto::request::ExamQuestionsRequest},
    services::relay_service::RelayService,
};

pub struct ExamService {
    relay: Arc<RelayService>,
}

impl ExamService {
    pub fn new(relay: Arc<RelayService>) -> Self {
        Self { relay }
    }

    /// Builds the templated instruction from the form fields and relays it.
    /// The completion is returned raw; the exam builder renders it as text.
    pub async fn build_questions(&self, request: ExamQuestionsRequest) -> AppResult<String> {
        request.validate()?;

        let spec = ExamSpec::from(request);
        let prompt = build_exam_prompt(&spec);

        log::info!(
            "Building {} {} questions about '{}'",
            spec.question_count,
            spec.question_kind,
            spec.subject
        );
        self.relay.relay(&prompt).await
    }
}

fn build_exam_prompt(spec: &ExamSpec) -> String {
    format!(
        "{EXAM_BUILDER_PROMPT}\n\
         - Type: {}\n\
         - Number of questions: {}\n\
         - Education level: {}\n\
         - Bloom's level: {}\n\
         - {} a case study\n\
         - Subject: {}\n\
         - Context: {}",
        spec.question_kind,
        spec.question_count,
        spec.education_level,
        spec.bloom_level,
        if spec.needs_case { "With" } else { "Without" },
        spec.subject,
        spec.context
    )
}
