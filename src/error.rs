use thiserror::Error;

#[derive(Error, Debug)]
pub enum SketchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Response(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No image payload in response")]
    NoImage,
}

pub type Result<T> = std::result::Result<T, SketchError>;
