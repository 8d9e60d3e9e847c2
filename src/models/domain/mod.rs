pub mod exam;
pub mod quiz;

pub use exam::{BloomLevel, EducationLevel, ExamSpec, QuestionKind};
pub use quiz::{GeneratedQuiz, QuizQuestion};
