pub mod chat_service;
pub mod completion_helpers;
pub mod exam_service;
pub mod extract_service;
pub mod model_service;
pub mod quiz_service;
pub mod relay_service;
