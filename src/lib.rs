//! Core library entry for the `rebench` CLI.
//!
//! `rebench` reconciles two independently recorded sets of HTTP interaction
//! sessions: a pre-recorded baseline and a test-bench re-run. It either
//! asserts the two recordings are behaviorally equivalent modulo a noise
//! mask (`--test-assert`) or swaps their timestamps and mock fixtures to
//! prepare a reciprocal re-run (`--mock-assert`).

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod noise;
pub mod ports;
pub mod reconcile;
pub mod record;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, a fatal
/// reconciliation error occurs, or any case pair differed in
/// `--test-assert` mode.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version render through clap's own printer and are
        // not failures.
        Err(err) if !err.use_stderr() => {
            return err.print().map_err(|e| e.to_string());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}
