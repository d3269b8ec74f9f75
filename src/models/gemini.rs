//! Google Gemini `generateContent` wire types.

use serde::{Deserialize, Serialize};

use crate::models::sketch::SketchRequest;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Builds the single-turn request for an architectural sketch: the user
    /// prompt wrapped in the fixed style directive, plus the aspect-ratio
    /// hint for the image model.
    pub fn for_sketch(request: &SketchRequest) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part::Text {
                    text: request.instruction(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: request.aspect_ratio().to_string(),
                }),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content unit. Responses interleave text and inline image parts; part
/// kinds this crate does not consume fall through to `Other` so a new kind
/// never fails deserialization of the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InlineData {
    #[serde(rename = "mimeType", default = "default_mime_type")]
    pub mime_type: String,
    pub data: String,
}

// The service leaves the encoding implicit on image parts; PNG is what it
// actually returns.
fn default_mime_type() -> String {
    "image/png".to_string()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "modelVersion", default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(rename = "finishReason", default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Linear scan of the first candidate's parts; returns the first inline
    /// image payload, or `None` when the response carries no candidates, no
    /// content, or no image part.
    pub fn first_image(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| match part {
                Part::InlineData { inline_data } => Some(inline_data),
                _ => None,
            })
    }
}
