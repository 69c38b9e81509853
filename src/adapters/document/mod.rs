//! Document adapters - Implementations for document composition and storage.
//!
//! This module provides adapters for the document-related ports:
//! - `PdfPageComposer` - Composes layouts into PDF files with base-14 fonts
//! - `LocalDocumentFileStorage` - Stores exported documents on local filesystem

mod font_metrics;
mod local_file_storage;
mod pdf_composer;
mod text_flow;

pub use font_metrics::{encode_win_ansi, text_width, FontFace};
pub use local_file_storage::LocalDocumentFileStorage;
pub use pdf_composer::PdfPageComposer;
