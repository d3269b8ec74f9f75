use std::env;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_SKETCH_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub model: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            api_base: None,
            model: None,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `GEMINI_API_KEY` (falling back to the legacy `API_KEY` name),
    /// `GEMINI_API_BASE` and `GEMINI_MODEL`. Missing variables stay `None`
    /// and surface later as a request-time configuration failure.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok();
        let api_base = env::var("GEMINI_API_BASE").ok();
        let model = env::var("GEMINI_MODEL").ok();

        GeminiConfig {
            api_key,
            api_base,
            model,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_SKETCH_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = GeminiConfig::new()
            .with_api_key("test-key")
            .with_api_base("http://localhost:9090")
            .with_model("gemini-test");

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.api_base(), "http://localhost:9090");
        assert_eq!(config.model(), "gemini-test");
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config = GeminiConfig::new();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
        assert_eq!(config.model(), DEFAULT_SKETCH_MODEL);
    }
}
