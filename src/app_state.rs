use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        chat_service::ChatService,
        exam_service::ExamService,
        extract_service::ExtractService,
        model_service::{GeminiClient, TextGenerator},
        quiz_service::QuizService,
        relay_service::RelayService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub quiz_service: Arc<QuizService>,
    pub exam_service: Arc<ExamService>,
    pub extract_service: Arc<ExtractService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(&config));
        Self::with_generator(config, generator)
    }

    /// Wires the services around an arbitrary generator so tests can
    /// substitute an in-memory implementation.
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        let relay = Arc::new(RelayService::new(generator, config.max_message_chars));

        Self {
            chat_service: Arc::new(ChatService::new(relay.clone())),
            quiz_service: Arc::new(QuizService::new(relay.clone())),
            exam_service: Arc::new(ExamService::new(relay)),
            extract_service: Arc::new(ExtractService::new(config.upload_preview_chars)),
            config: Arc::new(config),
        }
    }
}
