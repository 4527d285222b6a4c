//! In-memory adapters for exercising command flows in tests.

pub mod reporter;

pub use reporter::{MemoryReporter, ReportEvent, ReportLevel};
