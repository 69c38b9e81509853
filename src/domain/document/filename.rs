//! Timestamped filenames for exported documents.

use chrono::NaiveDateTime;

/// Fixed prefix of every exported document.
pub const FILE_PREFIX: &str = "AI_Summary_";

/// Extension of every exported document.
pub const FILE_EXTENSION: &str = "pdf";

/// Capture time encoding inside the filename, second granularity.
pub const FILENAME_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// MIME type of exported documents.
pub const CONTENT_TYPE: &str = "application/pdf";

/// Builds `AI_Summary_YYYYMMDD_HHMMSS.pdf` for the capture instant.
pub fn document_filename(captured_at: NaiveDateTime) -> String {
    format!(
        "{}{}.{}",
        FILE_PREFIX,
        captured_at.format(FILENAME_TIME_FORMAT),
        FILE_EXTENSION
    )
}

/// Recovers the capture instant from a filename built by [`document_filename`].
pub fn parse_capture_time(filename: &str) -> Option<NaiveDateTime> {
    let stamp = filename
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_EXTENSION)?
        .strip_suffix('.')?;
    NaiveDateTime::parse_from_str(stamp, FILENAME_TIME_FORMAT).ok()
}
