//! In-memory journal of add actions.

use chrono::Utc;

/// Ordered record of add actions as human-readable lines.
///
/// Journals are ephemeral: callers thread one through a series of adds when
/// they want the history, and it is never persisted — only surfaced through
/// process output.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a timestamped line for an add action.
    pub(crate) fn record_add(&mut self, item: &str, qty: i64) {
        self.entries.push(format!("{}: Added {qty} of {item}", Utc::now()));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
