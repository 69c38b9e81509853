//! Domain layer containing the pure text and layout logic.
//!
//! # Module Organization
//!
//! - `color` - RGB color value object
//! - `summary` - The summary value object and its word count
//! - `markup` - Inline emphasis conversion and markup interpretation
//! - `document` - Typed content blocks, page geometry and the document theme

pub mod color;
pub mod document;
pub mod markup;
pub mod summary;

pub use color::Rgb;
pub use summary::SummaryText;
