use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    services::model_service::TextGenerator,
};

/// The single forwarding boundary between the endpoint handlers and the
/// model. One best-effort upstream call per request: no retry, no caching.
pub struct RelayService {
    generator: Arc<dyn TextGenerator>,
    max_message_chars: usize,
}

impl RelayService {
    pub fn new(generator: Arc<dyn TextGenerator>, max_message_chars: usize) -> Self {
        Self {
            generator,
            max_message_chars,
        }
    }

    /// Validates the instruction and forwards it unchanged. Oversized or
    /// empty input is rejected before the upstream service is contacted.
    pub async fn relay(&self, instruction: &str) -> AppResult<String> {
        if instruction.is_empty() {
            return Err(AppError::ValidationError("message is required".to_string()));
        }

        let length = instruction.chars().count();
        if length > self.max_message_chars {
            return Err(AppError::ValidationError(format!(
                "message must be at most {} characters, got {}",
                self.max_message_chars, length
            )));
        }

        log::info!("Relaying instruction of {} characters to model", length);
        self.generator.generate(instruction).await
    }
}
