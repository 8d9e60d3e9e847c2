use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

static OPENING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^```[a-zA-Z0-9]*[ \t]*\r?\n?").expect("opening fence pattern is valid")
});

static CLOSING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r?\n?```[ \t]*$").expect("closing fence pattern is valid")
});

/// Strips a surrounding markdown code fence (``` or ```json) from a
/// completion. Text without a fence is returned trimmed and otherwise
/// untouched.
pub fn strip_code_fence(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_opening = OPENING_FENCE.replace(trimmed, "");
    let without_closing = CLOSING_FENCE.replace(&without_opening, "");
    without_closing.trim().to_string()
}

/// Best-effort recovery of a JSON payload from a completion the model was
/// asked (but not guaranteed) to return as JSON.
pub fn parse_fenced_json<T: DeserializeOwned>(raw: &str) -> AppResult<T> {
    let cleaned = strip_code_fence(raw);
    serde_json::from_str(&cleaned)
        .map_err(|e| AppError::ParseError(format!("completion is not the expected JSON: {e}")))
}
