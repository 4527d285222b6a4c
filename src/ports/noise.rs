//! Noise configuration loader port.

use std::path::{Path, PathBuf};

use crate::noise::NoiseSettings;

/// Loads the noise configuration from a configuration directory.
pub trait NoiseLoader: Send + Sync {
    /// Attempts to load noise settings from the given directory.
    ///
    /// Returns `Ok(None)` when no configuration source exists there; an
    /// absent source is not an error and comparison proceeds unmasked.
    ///
    /// # Errors
    ///
    /// Returns an error only when a configuration source exists but cannot
    /// be read or parsed.
    fn load(
        &self,
        dir: &Path,
    ) -> Result<Option<NoiseSettings>, Box<dyn std::error::Error + Send + Sync>>;

    /// Path of the configuration source `load` consults under `dir`.
    ///
    /// Pure layout knowledge; the file is not required to exist.
    fn source_path(&self, dir: &Path) -> PathBuf;
}
