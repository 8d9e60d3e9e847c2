pub const CABARET_PERSONA_PROMPT: &str = "You are a cabaret comedian in the style of Youp van 't Hek. Respond to the following with wit and sarcasm:";

pub const QUIZ_GENERATOR_PROMPT: &str = r#"Generate a multiple choice quiz about the given topic.

Return ONLY a valid JSON object in exactly this format:
{
  "questions": [
    {
      "question": "The question text here",
      "options": ["A) option 1", "B) option 2", "C) option 3", "D) option 4"],
      "correctAnswer": "A) option 1"
    }
  ]
}

Rules:
- Every question has exactly 4 options, labelled A) through D).
- correctAnswer must be copied verbatim from the options array.
- Do not include explanatory text, markdown formatting, or commentary around the JSON.
- The JSON must be valid and parseable without any preprocessing."#;

pub const EXAM_BUILDER_PROMPT: &str = "As an assessment expert, develop exam questions with the following specifications:";
