//! Reconciliation core: session-set equality, pairwise case alignment,
//! and the crash-safe fixture exchange.

pub mod align;
pub mod fixtures;
pub mod sessions;

pub use align::{align_session, pair_cases};
pub use fixtures::swap_files;
pub use sessions::reconcile_sessions;
