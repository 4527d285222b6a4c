//! Error types for the reconciliation and swap pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for reconciler operations.
pub type BenchResult<T> = Result<T, BenchError>;

/// Failure taxonomy for a reconciler run.
///
/// Every variant is fatal to the run as a whole; comparison mismatches in
/// `--test-assert` mode are deliberately *not* errors (they accumulate into
/// the aggregate verdict instead).
#[derive(Debug, Error)]
pub enum BenchError {
    /// The two recording roots contain different numbers of sessions.
    #[error(
        "number of sessions in the two recordings differ \
         (pre-recorded {pre_rec}, test-bench {test_bench})"
    )]
    SessionCount {
        /// Session count under the pre-recorded root.
        pre_rec: usize,
        /// Session count under the test-bench root.
        test_bench: usize,
    },

    /// The sorted session lists disagree; carries the first divergent pair.
    #[error("session names diverge after sorting: pre-recorded `{pre_rec}` vs test-bench `{test_bench}`")]
    SessionName {
        /// First divergent session name on the pre-recorded side.
        pre_rec: String,
        /// First divergent session name on the test-bench side.
        test_bench: String,
    },

    /// The noise configuration file exists but could not be parsed.
    #[error("malformed noise config at {}: {source}", path.display())]
    ConfigParse {
        /// Path of the offending configuration file.
        path: PathBuf,
        /// Underlying read or parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A session's two case collections differ in length.
    #[error(
        "session `{session}`: case counts differ \
         (pre-recorded {pre_rec}, test-bench {test_bench})"
    )]
    CardinalityMismatch {
        /// Session whose collections could not be paired.
        session: String,
        /// Case count on the pre-recorded side.
        pre_rec: usize,
        /// Case count on the test-bench side.
        test_bench: usize,
    },

    /// An aligned pair carries two different case names (swap mode only).
    #[error(
        "session `{session}`: aligned case names differ \
         (pre-recorded `{pre_rec}`, test-bench `{test_bench}`)"
    )]
    IdentityMismatch {
        /// Session containing the misaligned pair.
        session: String,
        /// Case name on the pre-recorded side.
        pre_rec: String,
        /// Case name on the test-bench side.
        test_bench: String,
    },

    /// Writing an updated case record back to its store failed.
    #[error("failed to persist case `{case}` in session `{session}`: {source}")]
    Persist {
        /// Session the case belongs to.
        session: String,
        /// Name of the case that could not be written.
        case: String,
        /// Underlying store failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A read or write failed during the fixture file exchange.
    #[error("fixture swap failed at {}: {source}", path.display())]
    SwapIo {
        /// The specific path the failing operation touched.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Listing sessions or loading cases from a recording root failed.
    #[error("store operation failed for {}: {source}", path.display())]
    Store {
        /// Root or session path the store was reading.
        path: PathBuf,
        /// Underlying store failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Both roots reconciled to an empty session set.
    #[error("no sessions found under the recording roots")]
    NoSessions,
}

impl BenchError {
    /// Wrap a store failure with the path it occurred on.
    #[must_use]
    pub fn store(
        path: impl Into<PathBuf>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Store { path: path.into(), source }
    }

    /// Wrap a case-update failure with its session and case name.
    #[must_use]
    pub fn persist(
        session: impl Into<String>,
        case: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Persist { session: session.into(), case: case.into(), source }
    }

    /// Wrap an I/O failure from the fixture exchange with the path it hit.
    #[must_use]
    pub fn swap_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SwapIo { path: path.into(), source }
    }
}
