//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - Text-generation providers (Gemini, mock)
//! - `document` - PDF composition and local file storage

pub mod ai;
pub mod document;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider};
pub use document::{LocalDocumentFileStorage, PdfPageComposer};
