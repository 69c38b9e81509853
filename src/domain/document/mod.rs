//! Summary document structure.
//!
//! - `theme` - Page geometry and the fixed design constants
//! - `layout` - The ordered list of typed content blocks
//! - `filename` - Timestamped export filenames

mod filename;
mod layout;
mod theme;

pub use filename::{
    document_filename, parse_capture_time, CONTENT_TYPE, FILENAME_TIME_FORMAT, FILE_EXTENSION,
    FILE_PREFIX,
};
pub use layout::{ContentBlock, DocumentLayout, DocumentMetadata, FOOTER_TIME_FORMAT};
pub use theme::{
    Alignment, CardStyle, DocumentTheme, HeaderBarStyle, PageGeometry, ParagraphStyle, INCH,
};
