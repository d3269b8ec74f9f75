use crate::{
    config::GeminiConfig,
    error::{Result, SketchError},
    models::{
        gemini::{GenerateContentRequest, GenerateContentResponse},
        sketch::{ImageReference, SketchRequest, SketchResponse},
    },
};
use async_trait::async_trait;
use reqwest::Client;

use super::traits::SketchBackend;

#[derive(Clone)]
pub struct SketchClient {
    http: Client,
    config: GeminiConfig,
}

impl SketchClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            (
                "gemini-2.5-flash-image",
                "Gemini 2.5 Flash Image",
                "Google",
            ),
            (
                "gemini-2.0-flash-preview-image-generation",
                "Gemini 2.0 Flash Image Generation (preview)",
                "Google",
            ),
        ]
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base().trim_end_matches('/'),
            model
        )
    }

    /// One call against the service. A missing credential is a request-time
    /// error here, never a construction-time one, so callers that swallow
    /// failures see it like any other failed attempt.
    async fn invoke(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| SketchError::Config("GEMINI_API_KEY is not set".into()))?;

        let url = self.endpoint(model);
        log::info!("Requesting sketch from model: {}", model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        log::debug!("Gemini response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "could not read error body".to_string());
            return Err(SketchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }

    /// Typed single-shot generation: builds the instruction payload, invokes
    /// the model once and errors with [`SketchError::NoImage`] when the
    /// response carries no inline payload.
    pub async fn generate(&self, request: SketchRequest) -> Result<SketchResponse> {
        let model = request
            .model_id
            .as_deref()
            .unwrap_or_else(|| self.config.model())
            .to_string();

        let payload = GenerateContentRequest::for_sketch(&request);
        let response = self.invoke(&model, &payload).await?;

        let inline = response.first_image().ok_or(SketchError::NoImage)?;

        Ok(SketchResponse {
            image: ImageReference::from(inline.clone()),
            model,
        })
    }
}

#[async_trait]
impl SketchBackend for SketchClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.invoke(self.config.model(), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeminiConfig;

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = SketchClient::new(
            GeminiConfig::new().with_api_base("https://example.test/"),
        );
        assert_eq!(
            client.endpoint("gemini-2.5-flash-image"),
            "https://example.test/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_api_key_is_a_config_error() {
        let client = SketchClient::new(GeminiConfig::new());
        let err = client
            .generate(SketchRequest::new("a courtyard house"))
            .await
            .unwrap_err();
        assert!(matches!(err, SketchError::Config(_)));
    }
}
