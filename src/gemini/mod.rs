pub mod sketch_client;
pub mod traits;

use crate::{config::GeminiConfig, error::Result, models::sketch::SketchRequest};

pub use sketch_client::SketchClient;
pub use traits::SketchBackend;

/// Facade over the per-capability Gemini clients. The studio site only ever
/// generates sketches, so there is a single capability behind it today.
#[derive(Clone)]
pub struct GeminiClient {
    sketch_client: SketchClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            sketch_client: SketchClient::new(config),
        }
    }

    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    pub fn sketch(&self) -> &SketchClient {
        &self.sketch_client
    }

    /// Convenience for the common path: prompt in, typed response out.
    pub async fn generate_sketch(
        &self,
        prompt: impl Into<String>,
    ) -> Result<crate::models::sketch::SketchResponse> {
        self.sketch_client.generate(SketchRequest::new(prompt)).await
    }
}
