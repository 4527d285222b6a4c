//! Case store port for reading and updating recorded sessions.

use std::path::{Path, PathBuf};

use crate::record::RecordedCase;

/// Provides access to the recorded sessions under a recording root.
///
/// The store is statically typed: loading a session yields exactly
/// [`RecordedCase`] values, so callers never filter a heterogeneous record
/// list at runtime.
pub trait CaseStore: Send + Sync {
    /// Lists the session identifiers present under a recording root, in
    /// ascending lexicographic order.
    ///
    /// # Errors
    ///
    /// Returns an error if the root does not exist or cannot be read.
    fn list_sessions(
        &self,
        root: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Loads the full case collection for one session.
    ///
    /// No ordering is guaranteed; callers sort by the key they need.
    ///
    /// # Errors
    ///
    /// Returns an error if the session's case directory cannot be read or
    /// any record fails to parse.
    fn load_cases(
        &self,
        root: &Path,
        session: &str,
    ) -> Result<Vec<RecordedCase>, Box<dyn std::error::Error + Send + Sync>>;

    /// Writes an updated case record back to its session, replacing the
    /// stored record of the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn update_case(
        &self,
        root: &Path,
        session: &str,
        case: &RecordedCase,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Path of the session's mock-fixture file under the given root.
    ///
    /// Pure layout knowledge; the file is not required to exist yet.
    fn fixture_path(&self, root: &Path, session: &str) -> PathBuf;
}
