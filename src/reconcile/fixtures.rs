//! Crash-safe exchange of two sessions' mock-fixture files.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{BenchError, BenchResult};

/// A fixture file's original content parked in a scratch file.
///
/// The scratch file is uniquely named per process so concurrent runs never
/// collide. Dropping the guard removes the file, so every orderly exit
/// path cleans up; only a hard crash leaves the file behind, and then it
/// holds the first fixture's original bytes for manual recovery.
struct ParkedContent {
    path: PathBuf,
}

impl ParkedContent {
    /// Claims a fresh scratch path. The guard owns the path before any
    /// bytes are written, so a write that fails partway still removes the
    /// partial file.
    fn claim() -> Self {
        let name = format!("rebench-fixture-{}.tmp", Uuid::new_v4());
        Self { path: env::temp_dir().join(name) }
    }

    /// Writes `content` to a freshly claimed scratch file.
    fn park(content: &[u8]) -> BenchResult<Self> {
        let parked = Self::claim();
        fs::write(&parked.path, content).map_err(|e| BenchError::swap_io(&parked.path, e))?;
        Ok(parked)
    }
}

impl Drop for ParkedContent {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Exchanges the contents of two fixture files.
///
/// The first file's content is read and parked in a scratch file before
/// either destination is touched, so the second file is only overwritten
/// once the first's content is durably captured. A crash between the two
/// destination writes leaves the scratch file in place with the first
/// file's original bytes.
///
/// # Errors
///
/// Returns [`BenchError::SwapIo`] naming the specific path on any read or
/// write failure. A failure leaves files already written as they are;
/// there is no rollback.
pub fn swap_files(pre_rec: &Path, test_bench: &Path) -> BenchResult<()> {
    let pre_rec_content = fs::read(pre_rec).map_err(|e| BenchError::swap_io(pre_rec, e))?;
    let _parked = ParkedContent::park(&pre_rec_content)?;
    let test_bench_content =
        fs::read(test_bench).map_err(|e| BenchError::swap_io(test_bench, e))?;
    fs::write(pre_rec, &test_bench_content).map_err(|e| BenchError::swap_io(pre_rec, e))?;
    fs::write(test_bench, &pre_rec_content).map_err(|e| BenchError::swap_io(test_bench, e))?;
    Ok(())
}
