use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SketchError};
use crate::models::gemini::InlineData;

/// Fixed style directive appended to every prompt. The studio wants every
/// generated concept to read as a deliverable, not as generic AI art.
pub const STYLE_DIRECTIVE: &str = "Professional, high-end, clean lines, minimalist style. \
     Either a hand-drawn pencil sketch on white paper or a blue-toned CAD blueprint.";

pub const DEFAULT_ASPECT_RATIO: &str = "16:9";

/// One user action's worth of input. Never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct SketchRequest {
    pub prompt: String,
    pub aspect_ratio: Option<String>,
    pub model_id: Option<String>,
}

impl SketchRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            aspect_ratio: None,
            model_id: None,
        }
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn aspect_ratio(&self) -> &str {
        self.aspect_ratio.as_deref().unwrap_or(DEFAULT_ASPECT_RATIO)
    }

    /// The full instruction sent to the model.
    pub fn instruction(&self) -> String {
        format!(
            "An architectural sketch or technical CAD drawing for: {}. {}",
            self.prompt, STYLE_DIRECTIVE
        )
    }
}

/// A self-contained, directly displayable image payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageReference {
    pub mime_type: String,
    pub data: String, // Base64 encoded
}

impl ImageReference {
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Renders the payload as a `data:` URI a display surface can consume
    /// without a further fetch.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.data)
            .map_err(|e| SketchError::Response(format!("invalid base64 image payload: {}", e)))
    }
}

impl From<InlineData> for ImageReference {
    fn from(inline: InlineData) -> Self {
        Self {
            mime_type: inline.mime_type,
            data: inline.data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SketchResponse {
    pub image: ImageReference,
    pub model: String,
}
