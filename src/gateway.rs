use std::sync::Arc;
use uuid::Uuid;

use crate::{
    config::GeminiConfig,
    gemini::{SketchBackend, SketchClient},
    logger,
    models::{
        gemini::GenerateContentRequest,
        sketch::{ImageReference, SketchRequest},
    },
};

/// The sketch generation gateway the presentation layer talks to.
///
/// One invocation means exactly one attempt against the service: no retry,
/// no timeout of its own, no cancellation. Every failure mode (transport,
/// credential, non-2xx, malformed body, payload-free response) collapses to
/// `None`; the tagged error is logged for operators and goes no further.
/// Concurrent invocations proceed independently; if two update the same
/// display slot, last writer wins and that is the caller's concern.
pub struct SketchGateway {
    backend: Arc<dyn SketchBackend>,
}

impl SketchGateway {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            backend: Arc::new(SketchClient::new(config)),
        }
    }

    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    /// Mainly a test seam, but also how a host application would substitute
    /// its own transport.
    pub fn with_backend(backend: Arc<dyn SketchBackend>) -> Self {
        Self { backend }
    }

    /// Resolves exactly once to either a displayable image or nothing.
    pub async fn generate(&self, prompt: &str) -> Option<ImageReference> {
        if prompt.trim().is_empty() {
            log::warn!("Ignoring sketch request with empty prompt");
            return None;
        }

        let request_id = Uuid::new_v4();
        // Logs elapsed time on drop, covering every exit path below.
        let _timer = logger::timer("sketch_generation");

        let request = SketchRequest::new(prompt);
        let payload = GenerateContentRequest::for_sketch(&request);

        log::debug!("[req:{}] dispatching sketch generation", request_id);

        match self.backend.generate_content(&payload).await {
            Ok(response) => match response.first_image() {
                Some(inline) => {
                    log::info!(
                        "[req:{}] sketch generated ({} base64 chars, {})",
                        request_id,
                        inline.data.len(),
                        inline.mime_type
                    );
                    Some(ImageReference::from(inline.clone()))
                }
                None => {
                    log::info!("[req:{}] response carried no image payload", request_id);
                    None
                }
            },
            Err(e) => {
                log::error!("[req:{}] sketch generation failed: {}", request_id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, SketchError};
    use crate::models::gemini::GenerateContentResponse;
    use async_trait::async_trait;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays one canned outcome and counts invocations.
    struct FakeBackend {
        response: std::result::Result<serde_json::Value, String>,
        calls: AtomicUsize,
    }

    impl FakeBackend {
        fn returning(response: serde_json::Value) -> Self {
            Self {
                response: Ok(response),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SketchBackend for FakeBackend {
        async fn generate_content(
            &self,
            _request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(value) => Ok(serde_json::from_value(value.clone())?),
                Err(message) => Err(SketchError::Api {
                    status: 503,
                    body: message.clone(),
                }),
            }
        }
    }

    fn response_with_image(data: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "Concept attached." },
                        { "inlineData": { "mimeType": "image/png", "data": data } }
                    ]
                }
            }]
        })
    }

    #[tokio::test]
    async fn image_payload_round_trips_byte_for_byte() {
        let bytes = b"\x89PNG\r\n\x1a\nfake image bytes".to_vec();
        let backend = Arc::new(FakeBackend::returning(response_with_image(
            &STANDARD.encode(&bytes),
        )));
        let gateway = SketchGateway::with_backend(backend);

        let image = gateway
            .generate("a minimalist concrete villa on a cliff edge")
            .await
            .expect("image expected");

        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.decode().unwrap(), bytes);
        assert!(image.data_uri().starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn zero_candidates_yield_nothing() {
        let backend = Arc::new(FakeBackend::returning(serde_json::json!({})));
        let gateway = SketchGateway::with_backend(backend);
        assert!(gateway.generate("a brutalist library").await.is_none());
    }

    #[tokio::test]
    async fn text_only_response_yields_nothing() {
        let backend = Arc::new(FakeBackend::returning(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "I cannot draw that." }] }
            }]
        })));
        let gateway = SketchGateway::with_backend(backend);
        assert!(gateway.generate("a glass pavilion").await.is_none());
    }

    #[tokio::test]
    async fn backend_failure_collapses_to_nothing() {
        let backend = Arc::new(FakeBackend::failing("service unavailable"));
        let gateway = SketchGateway::with_backend(backend.clone());
        assert!(gateway.generate("a timber footbridge").await.is_none());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_prompt_never_reaches_the_backend() {
        let backend = Arc::new(FakeBackend::returning(response_with_image("Zm9v")));
        let gateway = SketchGateway::with_backend(backend.clone());

        assert!(gateway.generate("").await.is_none());
        assert!(gateway.generate("   \t  ").await.is_none());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn each_invocation_makes_exactly_one_attempt() {
        let backend = Arc::new(FakeBackend::failing("timeout"));
        let gateway = SketchGateway::with_backend(backend.clone());

        gateway.generate("a cliffside observatory").await;
        gateway.generate("a cliffside observatory").await;

        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }
}
