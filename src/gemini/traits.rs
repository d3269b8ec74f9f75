use crate::{
    error::Result,
    models::gemini::{GenerateContentRequest, GenerateContentResponse},
};
use async_trait::async_trait;

/// The transport seam between the gateway and the Gemini service. The real
/// implementation is [`crate::gemini::SketchClient`]; tests substitute a
/// double that replays canned responses or failures.
#[async_trait]
pub trait SketchBackend: Send + Sync {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}
