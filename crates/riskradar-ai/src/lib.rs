//! AI analysis layer: one structured-output LLM call per contract submission.

mod analyzer;
mod error;
pub mod gemini;
pub mod prompt;
pub mod schema;

pub use analyzer::Analyzer;
pub use error::AnalysisError;
pub use gemini::{GeminiAnalyzer, GeminiConfig};
