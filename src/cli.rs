//! CLI argument definitions.

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};

/// Top-level CLI parser for `rebench`.
///
/// Exactly one of the two mode flags must be set; the path flags default
/// to the current directory.
#[derive(Debug, Parser)]
#[command(name = "rebench", version, about = "Reconcile two recorded test-bench runs")]
#[command(group(ArgGroup::new("mode").required(true).multiple(false)))]
pub struct Cli {
    /// Assert behavioral equivalence of the two recordings.
    #[arg(long = "test-assert", group = "mode")]
    pub test_assert: bool,

    /// Swap timestamps and mock fixtures between the two recordings.
    #[arg(long = "mock-assert", group = "mode")]
    pub mock_assert: bool,

    /// Directory holding the pre-recorded sessions.
    #[arg(long = "pre-rec-path", value_name = "DIR", default_value = ".")]
    pub pre_rec_path: PathBuf,

    /// Directory holding the test-bench sessions.
    #[arg(long = "test-bench-path", value_name = "DIR", default_value = ".")]
    pub test_bench_path: PathBuf,

    /// Directory holding the `rebench.yaml` noise configuration.
    #[arg(long = "config-path", value_name = "DIR", default_value = ".")]
    pub config_path: PathBuf,

    /// Emit per-case debug detail during the run.
    #[arg(long)]
    pub debug: bool,
}

/// Resolves a possibly-relative path against the current directory.
///
/// The path is not required to exist. When the current directory cannot be
/// determined the path is returned as given.
#[must_use]
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::{absolutize, Cli};
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn parses_test_assert_mode_with_defaults() {
        let cli = Cli::parse_from(["rebench", "--test-assert"]);
        assert!(cli.test_assert);
        assert!(!cli.mock_assert);
        assert_eq!(cli.pre_rec_path, Path::new("."));
        assert_eq!(cli.test_bench_path, Path::new("."));
        assert_eq!(cli.config_path, Path::new("."));
        assert!(!cli.debug);
    }

    #[test]
    fn parses_mock_assert_mode_with_paths() {
        let cli = Cli::parse_from([
            "rebench",
            "--mock-assert",
            "--pre-rec-path",
            "/roots/a",
            "--test-bench-path",
            "/roots/b",
            "--debug",
        ]);
        assert!(cli.mock_assert);
        assert_eq!(cli.pre_rec_path, Path::new("/roots/a"));
        assert_eq!(cli.test_bench_path, Path::new("/roots/b"));
        assert!(cli.debug);
    }

    #[test]
    fn rejects_both_modes_at_once() {
        let result = Cli::try_parse_from(["rebench", "--test-assert", "--mock-assert"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_mode() {
        let result = Cli::try_parse_from(["rebench"]);
        assert!(result.is_err());
    }

    #[test]
    fn absolutize_keeps_absolute_paths() {
        assert_eq!(absolutize(Path::new("/roots/a")), Path::new("/roots/a"));
    }

    #[test]
    fn absolutize_anchors_relative_paths() {
        let resolved = absolutize(Path::new("rel"));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("rel"));
    }
}
