use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult},
    services::model_service::TextGenerator,
};

/// Generator stub that returns a canned completion and counts calls, so
/// tests can assert whether the upstream boundary was reached.
pub struct StubGenerator {
    completion: Result<String, AppError>,
    calls: Arc<AtomicUsize>,
}

impl StubGenerator {
    pub fn replying(completion: impl Into<String>) -> Self {
        Self {
            completion: Ok(completion.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: AppError) -> Self {
        Self {
            completion: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.completion.clone()
    }
}

pub mod fixtures {
    /// A completion in the shape the quiz prompt asks for, wrapped in the
    /// markdown fence Gemini tends to add.
    pub fn fenced_quiz_completion() -> String {
        format!("```json\n{}\n```", plain_quiz_completion())
    }

    pub fn plain_quiz_completion() -> String {
        r#"{
            "questions": [
                {
                    "question": "Which company traded under the VOC monogram?",
                    "options": [
                        "A) The Dutch East India Company",
                        "B) The Hanseatic League",
                        "C) The British East India Company",
                        "D) The West India Company"
                    ],
                    "correctAnswer": "A) The Dutch East India Company"
                }
            ]
        }"#
        .to_string()
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[actix_web::test]
    async fn test_stub_generator_counts_calls() {
        let stub = StubGenerator::replying("ok");
        let calls = stub.call_counter();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let _ = stub.generate("hi").await;
        let _ = stub.generate("hi again").await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_fixture_completion_parses() {
        let completion = fixtures::plain_quiz_completion();
        let value: serde_json::Value = serde_json::from_str(&completion).unwrap();
        assert!(value["questions"].is_array());
    }
}
