//! Command dispatch and mode handlers.

pub mod mock_assert;
pub mod test_assert;

use std::path::{Path, PathBuf};

use crate::cli::{absolutize, Cli};
use crate::context::ServiceContext;
use crate::error::{BenchError, BenchResult};
use crate::reconcile::reconcile_sessions;

/// Fixed subdirectory appended to each recording root before use.
const RECORDINGS_DIR: &str = "recordings";

/// Dispatch a parsed invocation to its mode handler.
///
/// # Errors
///
/// Returns an error string when session discovery, configuration loading,
/// alignment, or persistence fails, or when any case pair differed in
/// `--test-assert` mode.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = ServiceContext::live(cli.debug);
    dispatch_with_context(cli, &ctx)
}

/// Dispatch a command with the given service context.
///
/// Session reconciliation runs once here; its output is the iteration
/// order for whichever mode was selected.
fn dispatch_with_context(cli: &Cli, ctx: &ServiceContext) -> Result<(), String> {
    let pre_rec_root = recordings_root(&cli.pre_rec_path);
    let test_bench_root = recordings_root(&cli.test_bench_path);
    let config_dir = absolutize(&cli.config_path);

    let sessions = discover_sessions(ctx, &pre_rec_root, &test_bench_root)
        .map_err(|e| e.to_string())?;

    if cli.test_assert {
        let outcome =
            test_assert::run(ctx, &pre_rec_root, &test_bench_root, &config_dir, &sessions)
                .map_err(|e| e.to_string())?;
        if outcome.matched() {
            Ok(())
        } else {
            Err(format!(
                "test assertion failed: {} of {} case pairs differed",
                outcome.failed_pairs, outcome.pairs
            ))
        }
    } else {
        mock_assert::run(ctx, &pre_rec_root, &test_bench_root, &sessions)
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}

/// Absolutizes a CLI root and appends the fixed recordings subdirectory.
fn recordings_root(path: &Path) -> PathBuf {
    absolutize(path).join(RECORDINGS_DIR)
}

/// Lists the sessions under both roots and reconciles them into the
/// canonical iteration order.
///
/// # Errors
///
/// Returns [`BenchError::Store`] when either root cannot be listed,
/// [`BenchError::NoSessions`] when both roots are empty, or a session
/// mismatch from [`reconcile_sessions`].
fn discover_sessions(
    ctx: &ServiceContext,
    pre_rec_root: &Path,
    test_bench_root: &Path,
) -> BenchResult<Vec<String>> {
    let pre_rec = ctx
        .store
        .list_sessions(pre_rec_root)
        .map_err(|e| BenchError::store(pre_rec_root, e))?;
    let test_bench = ctx
        .store
        .list_sessions(test_bench_root)
        .map_err(|e| BenchError::store(test_bench_root, e))?;
    let sessions = reconcile_sessions(pre_rec, test_bench)?;
    if sessions.is_empty() {
        return Err(BenchError::NoSessions);
    }
    ctx.reporter.debug(&format!("reconciled sessions: {}", sessions.join(", ")));
    Ok(sessions)
}
