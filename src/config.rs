use std::env;

use secrecy::SecretString;

pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 4000;
pub const DEFAULT_UPLOAD_PREVIEW_CHARS: usize = 20_000;

#[derive(Clone, Debug)]
pub struct Config {
    /// Absence is fatal to the request, not to the process.
    pub gemini_api_key: Option<SecretString>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub max_message_chars: usize,
    pub upload_preview_chars: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-preview-05-20".to_string()),
            gemini_api_base: env::var("GEMINI_API_BASE").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            max_message_chars: env::var("MAX_MESSAGE_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_MESSAGE_CHARS),
            upload_preview_chars: env::var("UPLOAD_PREVIEW_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_UPLOAD_PREVIEW_CHARS),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: Some(SecretString::from("test_api_key".to_string())),
            gemini_model: "gemini-test".to_string(),
            gemini_api_base: "http://localhost:9999/v1beta".to_string(),
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
            upload_preview_chars: DEFAULT_UPLOAD_PREVIEW_CHARS,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }

    #[cfg(test)]
    pub fn test_config_without_credential() -> Self {
        Self {
            gemini_api_key: None,
            ..Self::test_config()
        }
    }
}
