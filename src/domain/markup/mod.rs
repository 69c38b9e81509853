//! Inline markup: the emphasis dialect converter and the interpreter for the
//! markup it produces.

mod converter;
mod interpreter;

pub use converter::{convert, BULLET_ENTITY, BULLET_GLYPH, LINE_BREAK_TAG};
pub use interpreter::{parse_markup, MarkupError, MarkupLine, StyledRun, TextStyle};
