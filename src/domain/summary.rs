//! Summary value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Model-generated condensed text, immutable once produced.
///
/// The raw text is kept exactly as returned by the provider; conversion to
/// renderer markup happens on demand and is never cached here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryText(String);

impl SummaryText {
    /// Wraps provider output as a summary.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the raw summary text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of whitespace-delimited tokens in the raw text.
    pub fn word_count(&self) -> usize {
        word_count(&self.0)
    }

    /// Returns true if the text holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SummaryText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SummaryText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SummaryText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Counts whitespace-delimited tokens, markers included.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
