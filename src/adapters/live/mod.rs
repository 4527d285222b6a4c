//! Live adapters for real recording roots and operator consoles.

pub mod matcher;
pub mod noise;
pub mod reporter;
pub mod store;

pub use matcher::StructuralMatcher;
pub use noise::YamlNoiseLoader;
pub use reporter::ConsoleReporter;
pub use store::YamlCaseStore;
