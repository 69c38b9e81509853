//! Multi-line text entry.

use std::io::{self, BufRead};

/// A line containing only this marker ends the input.
pub const END_MARKER: &str = ".";

/// Reads pasted lines until a line holding only [`END_MARKER`] or EOF.
///
/// Line endings are normalized to `\n`; the marker line is not included.
pub fn read_text_block<R: BufRead>(reader: R) -> io::Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim() == END_MARKER {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}
