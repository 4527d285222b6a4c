//! Reporter capturing output in memory.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::reporter::Reporter;

/// Severity of a captured report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    /// Progress and result lines.
    Info,
    /// Mismatch and failure lines.
    Error,
    /// Diagnostic lines.
    Debug,
}

/// One captured report line.
#[derive(Debug, Clone)]
pub struct ReportEvent {
    /// Severity the line was emitted at.
    pub level: ReportLevel,
    /// The message text.
    pub message: String,
}

/// Reporter that records every line for later assertions. Clones share
/// the same buffer, so a command can own one copy while the test keeps
/// another.
#[derive(Default, Clone)]
pub struct MemoryReporter {
    events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl MemoryReporter {
    /// Creates an empty memory reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<ReportEvent> {
        self.lock().clone()
    }

    /// Messages captured at [`ReportLevel::Error`].
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.messages_at(ReportLevel::Error)
    }

    /// Messages captured at [`ReportLevel::Info`].
    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        self.messages_at(ReportLevel::Info)
    }

    /// Messages captured at [`ReportLevel::Debug`].
    #[must_use]
    pub fn debugs(&self) -> Vec<String> {
        self.messages_at(ReportLevel::Debug)
    }

    fn messages_at(&self, level: ReportLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|event| event.level == level)
            .map(|event| event.message.clone())
            .collect()
    }

    fn push(&self, level: ReportLevel, message: &str) {
        self.lock().push(ReportEvent { level, message: message.to_string() });
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ReportEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, message: &str) {
        self.push(ReportLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(ReportLevel::Error, message);
    }

    fn debug(&self, message: &str) {
        self.push(ReportLevel::Debug, message);
    }
}
