//! Configuration for the suggestion client.
//!
//! All configuration is loaded from environment variables. The client
//! needs the completion API's base URL, key, and model name; which
//! concrete backend to use is inferred from `SUGGEST_BACKEND`.

use crate::error::SuggestError;

/// Default base URL when `OPENAI_BASE_URL` is unset.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model when `SUGGEST_MODEL` is unset. A fast model is enough
/// for inline editing suggestions.
const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Completion API configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// The backend type (openai-compatible or anthropic).
    pub backend_type: BackendType,
    /// Base API URL (e.g. `https://api.openai.com/v1`).
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model identifier (e.g. `gpt-4.1-mini`).
    pub model: String,
}

/// Supported completion API backend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// OpenAI-compatible API (works with `OpenAI`, `DeepSeek`, Ollama).
    OpenAi,
    /// Anthropic Messages API (different request format).
    Anthropic,
}

impl SuggestConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `OPENAI_API_KEY` -- completion API key
    ///
    /// Optional variables:
    /// - `OPENAI_BASE_URL` -- API base URL (default `https://api.openai.com/v1`)
    /// - `SUGGEST_MODEL` -- model name (default `gpt-4.1-mini`)
    /// - `SUGGEST_BACKEND` -- backend type (default `openai`)
    pub fn from_env() -> Result<Self, SuggestError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|e| SuggestError::Config(format!("missing OPENAI_API_KEY: {e}")))?;

        let api_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());

        let model = std::env::var("SUGGEST_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned());

        let backend_str =
            std::env::var("SUGGEST_BACKEND").unwrap_or_else(|_| "openai".to_owned());
        let backend_type = parse_backend_type(&backend_str)?;

        Ok(Self {
            backend_type,
            api_url,
            api_key,
            model,
        })
    }
}

/// Map a backend name from the environment to a [`BackendType`].
fn parse_backend_type(name: &str) -> Result<BackendType, SuggestError> {
    match name.to_lowercase().as_str() {
        "openai" | "deepseek" | "ollama" => Ok(BackendType::OpenAi),
        "anthropic" | "claude" => Ok(BackendType::Anthropic),
        other => Err(SuggestError::Config(format!(
            "unknown backend type: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_type_parsing() {
        assert_eq!(parse_backend_type("openai").ok(), Some(BackendType::OpenAi));
        assert_eq!(parse_backend_type("OLLAMA").ok(), Some(BackendType::OpenAi));
        assert_eq!(
            parse_backend_type("claude").ok(),
            Some(BackendType::Anthropic)
        );
        assert!(parse_backend_type("cohere").is_err());
    }

    #[test]
    fn config_defaults() {
        assert_eq!(DEFAULT_BASE_URL, "https://api.openai.com/v1");
        assert_eq!(DEFAULT_MODEL, "gpt-4.1-mini");
    }
}
