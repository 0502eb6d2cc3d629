use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Settings for one quiz generation call.
///
/// Built once per invocation from the environment by the function binary and
/// handed to [`crate::handler::handle`]; tests build it directly.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            timeout: Duration::from_secs(30),
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`. Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: get("OPENAI_API_KEY").or_else(|| get("OPENAI_KEY")),
            base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            model: get("OPENAI_MODEL").unwrap_or(defaults.model),
            ..defaults
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(AppError::MissingApiKey)
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults_without_key() {
        let config = QuizConfig::from_lookup(lookup(&[]));
        assert!(matches!(config.api_key(), Err(AppError::MissingApiKey)));
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.completions_url(), "https://api.openai.com/v1/chat/completions");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 2000);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = QuizConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")]));
        assert!(config.api_key().is_err());
    }

    #[test]
    fn legacy_key_name_is_a_fallback() {
        let config = QuizConfig::from_lookup(lookup(&[("OPENAI_KEY", "sk-old")]));
        assert_eq!(config.api_key().unwrap(), "sk-old");

        let config = QuizConfig::from_lookup(lookup(&[
            ("OPENAI_KEY", "sk-old"),
            ("OPENAI_API_KEY", "sk-new"),
        ]));
        assert_eq!(config.api_key().unwrap(), "sk-new");
    }

    #[test]
    fn overrides_base_url_and_model() {
        let config = QuizConfig::from_lookup(lookup(&[
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("OPENAI_MODEL", "gpt-4o"),
        ]));
        assert_eq!(config.completions_url(), "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.model, "gpt-4o");
    }
}
