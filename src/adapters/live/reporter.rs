//! Console-backed reporter.

use crate::ports::reporter::Reporter;

/// Reporter printing informational lines to stdout and errors and debug
/// detail to stderr. Debug lines are emitted only when enabled from the
/// CLI.
pub struct ConsoleReporter {
    debug_enabled: bool,
}

impl ConsoleReporter {
    /// Creates a console reporter; `debug_enabled` gates debug output.
    #[must_use]
    pub fn new(debug_enabled: bool) -> Self {
        Self { debug_enabled }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn debug(&self, message: &str) {
        if self.debug_enabled {
            eprintln!("debug: {message}");
        }
    }
}
