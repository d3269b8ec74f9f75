//! SketchGen — Gemini-backed architectural sketch generation for the studio
//! portfolio site.
//!
//! The crate exposes one integration boundary: [`SketchGateway::generate`]
//! takes a free-text design prompt, issues a single `generateContent` call
//! against Google's Gemini image model and resolves to either a displayable
//! [`ImageReference`] or nothing. All failure modes collapse into the empty
//! result at that boundary; the typed internals ([`GeminiClient`],
//! [`SketchClient`]) are available to callers that want the tagged errors.

pub mod config;
pub mod error;
pub mod gateway;
pub mod gemini;
pub mod logger;
pub mod models;

pub use config::{GeminiConfig, DEFAULT_API_BASE, DEFAULT_SKETCH_MODEL};
pub use error::{Result, SketchError};
pub use gateway::SketchGateway;
pub use gemini::{GeminiClient, SketchBackend, SketchClient};
pub use models::project::{catalog, filter_by_kind, ProjectEntry, ProjectKind};
pub use models::sketch::{ImageReference, SketchRequest, SketchResponse};
