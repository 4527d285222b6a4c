//! Service context bundling all port trait objects.

use crate::adapters::live::{ConsoleReporter, StructuralMatcher, YamlCaseStore, YamlNoiseLoader};
use crate::ports::{CaseMatcher, CaseStore, NoiseLoader, Reporter};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Command handlers
/// take the context instead of constructing adapters, so tests can swap in
/// doubles (an in-memory reporter, a store over a scratch directory).
pub struct ServiceContext {
    /// Store for recorded sessions, cases, and fixture layout.
    pub store: Box<dyn CaseStore>,
    /// Differential matcher for aligned case pairs.
    pub matcher: Box<dyn CaseMatcher>,
    /// Noise configuration loader.
    pub noise: Box<dyn NoiseLoader>,
    /// Operator-visible run reporter.
    pub reporter: Box<dyn Reporter>,
}

impl ServiceContext {
    /// Creates a live context with real adapters; `debug` gates debug
    /// output on the console reporter.
    #[must_use]
    pub fn live(debug: bool) -> Self {
        Self {
            store: Box::new(YamlCaseStore::new()),
            matcher: Box::new(StructuralMatcher::new()),
            noise: Box::new(YamlNoiseLoader::new()),
            reporter: Box::new(ConsoleReporter::new(debug)),
        }
    }
}
