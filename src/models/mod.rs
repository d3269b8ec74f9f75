pub mod gemini;
pub mod project;
pub mod sketch;

pub use gemini::*;
pub use project::*;
pub use sketch::*;
