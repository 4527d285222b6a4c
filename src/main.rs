//! Binary entrypoint for the `rebench` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match rebench::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
