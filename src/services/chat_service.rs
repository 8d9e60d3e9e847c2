use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::prompts::CABARET_PERSONA_PROMPT,
    errors::AppResult,
    models::dto::request::{ChatMessageRequest, Persona},
    services::relay_service::RelayService,
};

pub struct ChatService {
    relay: Arc<RelayService>,
}

impl ChatService {
    pub fn new(relay: Arc<RelayService>) -> Self {
        Self { relay }
    }

    pub async fn respond(&self, request: ChatMessageRequest) -> AppResult<String> {
        request.validate()?;

        let instruction = match request.persona {
            Some(Persona::Cabaret) => {
                format!("{CABARET_PERSONA_PROMPT} {}", request.message)
            }
            None => request.message,
        };

        self.relay.relay(&instruction).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError,
        services::model_service::MockTextGenerator,
    };

    fn chat_with(mock: MockTextGenerator) -> ChatService {
        ChatService::new(Arc::new(RelayService::new(Arc::new(mock), 4000)))
    }

    #[actix_web::test]
    async fn test_plain_message_forwarded_verbatim() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|prompt| prompt == "hi")
            .times(1)
            .returning(|_| Ok("hello".to_string()));

        let service = chat_with(mock);
        let request = ChatMessageRequest {
            message: "hi".to_string(),
            persona: None,
        };

        assert_eq!(service.respond(request).await.unwrap(), "hello");
    }

    #[actix_web::test]
    async fn test_cabaret_persona_prefixes_instruction() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|prompt| {
                prompt.starts_with(CABARET_PERSONA_PROMPT) && prompt.ends_with("tell me a joke")
            })
            .times(1)
            .returning(|_| Ok("ha".to_string()));

        let service = chat_with(mock);
        let request = ChatMessageRequest {
            message: "tell me a joke".to_string(),
            persona: Some(Persona::Cabaret),
        };

        assert!(service.respond(request).await.is_ok());
    }

    #[actix_web::test]
    async fn test_oversized_message_rejected_without_upstream_call() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate().times(0);

        let service = chat_with(mock);
        let request = ChatMessageRequest {
            message: "x".repeat(4001),
            persona: None,
        };

        let err = service.respond(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
