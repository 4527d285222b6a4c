//! Recorded-case data model shared by both recording roots.

pub mod format;

pub use format::{RecordedCase, RequestRecord, ResponseRecord, CORRELATION_HEADER};
