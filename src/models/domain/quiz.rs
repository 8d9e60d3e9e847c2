use serde::{Deserialize, Serialize};

/// The structure the quiz prompt asks the model to return.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratedQuiz {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

impl QuizQuestion {
    /// A question is answerable only when the marked answer is one of its
    /// options verbatim.
    pub fn is_answerable(&self) -> bool {
        self.options.iter().any(|option| option == &self.correct_answer)
    }
}
