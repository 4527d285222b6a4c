//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the reconciliation core and an
//! external collaborator (case storage, transaction matching, noise
//! configuration, operator-visible reporting). Implementations live in
//! `src/adapters/`.

pub mod matcher;
pub mod noise;
pub mod reporter;
pub mod store;

pub use matcher::{CaseMatcher, FieldDiff, MatchVerdict, SideReport};
pub use noise::NoiseLoader;
pub use reporter::Reporter;
pub use store::CaseStore;
