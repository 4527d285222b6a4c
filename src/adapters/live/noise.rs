//! Noise configuration loader backed by a YAML file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::noise::NoiseSettings;
use crate::ports::noise::NoiseLoader;

/// Config file name looked up inside the configured directory.
const CONFIG_FILE: &str = "rebench.yaml";

/// Top-level config document. Only the `noise` section is consumed here;
/// unknown keys are ignored so the file can grow other sections.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    noise: NoiseSettings,
}

/// Loads `rebench.yaml` from a directory, treating an absent file as
/// "no noise configured".
#[derive(Default)]
pub struct YamlNoiseLoader;

impl YamlNoiseLoader {
    /// Creates a YAML noise loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NoiseLoader for YamlNoiseLoader {
    fn load(
        &self,
        dir: &Path,
    ) -> Result<Option<NoiseSettings>, Box<dyn std::error::Error + Send + Sync>> {
        let path = self.source_path(dir);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(format!("failed to read config {}: {e}", path.display()).into());
            }
        };
        // An empty or comment-only document parses as `None`.
        let config: Option<ConfigFile> = serde_yaml::from_str(&raw)
            .map_err(|e| format!("failed to parse config {}: {e}", path.display()))?;
        Ok(Some(config.map_or_else(NoiseSettings::default, |c| c.noise)))
    }

    fn source_path(&self, dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }
}
