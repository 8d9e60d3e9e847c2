pub mod chat_handler;
pub mod exam_handler;
pub mod quiz_handler;
pub mod upload_handler;

pub use chat_handler::{chat, health_check, health_check_live};
pub use exam_handler::build_exam_questions;
pub use quiz_handler::generate_quiz;
pub use upload_handler::upload_document;
