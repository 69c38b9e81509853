//! The interactive session's memory of the last successful summary.

use crate::domain::SummaryText;

use super::errors::ActionError;

/// Holds the most recent summary so it can be exported later.
#[derive(Debug, Clone, Default)]
pub struct SummarySession {
    last_summary: Option<SummaryText>,
}

impl SummarySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_summary(&self) -> Option<&SummaryText> {
        self.last_summary.as_ref()
    }

    pub fn has_summary(&self) -> bool {
        self.last_summary.is_some()
    }

    /// Stores a successful summarization; a failure leaves the slot as it was.
    pub fn record(
        &mut self,
        outcome: Result<SummaryText, ActionError>,
    ) -> Result<&SummaryText, ActionError> {
        let summary = outcome?;
        Ok(self.last_summary.insert(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let session = SummarySession::new();
        assert!(!session.has_summary());
        assert!(session.last_summary().is_none());
    }

    #[test]
    fn success_replaces_last_summary() {
        let mut session = SummarySession::new();
        session.record(Ok(SummaryText::new("first"))).unwrap();
        let latest = session.record(Ok(SummaryText::new("second"))).unwrap();

        assert_eq!(latest.as_str(), "second");
        assert_eq!(session.last_summary().unwrap().as_str(), "second");
    }

    #[test]
    fn failure_keeps_previous_summary() {
        let mut session = SummarySession::new();
        session.record(Ok(SummaryText::new("kept"))).unwrap();

        let result = session.record(Err(ActionError::EmptyInput));

        assert!(matches!(result, Err(ActionError::EmptyInput)));
        assert_eq!(session.last_summary().unwrap().as_str(), "kept");
    }
}
