//! Filesystem-backed YAML case store.
//!
//! Layout per recording root:
//!
//! ```text
//! <root>/
//!   ├── <session>/
//!   │     ├── cases/
//!   │     │     ├── <case-name>.yaml
//!   │     │     └── ...
//!   │     └── fixtures.yaml
//!   └── ...
//! ```

use std::path::{Path, PathBuf};

use crate::ports::store::CaseStore;
use crate::record::RecordedCase;

/// Directory under a session holding one YAML file per recorded case.
const CASES_DIR: &str = "cases";
/// The session's single mock-fixture file.
const FIXTURE_FILE: &str = "fixtures.yaml";

/// Case store reading and writing YAML records on disk.
#[derive(Default)]
pub struct YamlCaseStore;

impl YamlCaseStore {
    /// Creates a filesystem-backed case store.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn case_path(root: &Path, session: &str, name: &str) -> PathBuf {
        root.join(session).join(CASES_DIR).join(format!("{name}.yaml"))
    }
}

impl CaseStore for YamlCaseStore {
    fn list_sessions(
        &self,
        root: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let mut sessions = Vec::new();
        for entry in std::fs::read_dir(root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                sessions.push(name.to_string());
            }
        }
        sessions.sort();
        Ok(sessions)
    }

    fn load_cases(
        &self,
        root: &Path,
        session: &str,
    ) -> Result<Vec<RecordedCase>, Box<dyn std::error::Error + Send + Sync>> {
        let dir = root.join(session).join(CASES_DIR);
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut cases = Vec::with_capacity(paths.len());
        for path in paths {
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    return Err(format!("failed to read case record {}: {e}", path.display()).into())
                }
            };
            let case: RecordedCase = match serde_yaml::from_str(&content) {
                Ok(case) => case,
                Err(e) => {
                    return Err(
                        format!("failed to parse case record {}: {e}", path.display()).into()
                    )
                }
            };
            cases.push(case);
        }
        Ok(cases)
    }

    fn update_case(
        &self,
        root: &Path,
        session: &str,
        case: &RecordedCase,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let path = Self::case_path(root, session, &case.name);
        let yaml = match serde_yaml::to_string(case) {
            Ok(yaml) => yaml,
            Err(e) => return Err(format!("failed to serialize case `{}`: {e}", case.name).into()),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, yaml)?;
        Ok(())
    }

    fn fixture_path(&self, root: &Path, session: &str) -> PathBuf {
        root.join(session).join(FIXTURE_FILE)
    }
}
