//! Session-set reconciliation across the two recording roots.

use crate::error::{BenchError, BenchResult};

/// Verifies the two roots recorded the same sessions and returns the
/// canonical iteration order for downstream stages.
///
/// The lists are compared as multisets: equal cardinality, and equal
/// elements at every index after each list is sorted independently. Any
/// mismatch aborts the run before a single case is compared or swapped.
///
/// # Errors
///
/// Returns [`BenchError::SessionCount`] when the lists differ in length,
/// or [`BenchError::SessionName`] carrying the first divergent pair.
pub fn reconcile_sessions(
    mut pre_rec: Vec<String>,
    mut test_bench: Vec<String>,
) -> BenchResult<Vec<String>> {
    if pre_rec.len() != test_bench.len() {
        return Err(BenchError::SessionCount {
            pre_rec: pre_rec.len(),
            test_bench: test_bench.len(),
        });
    }
    pre_rec.sort_unstable();
    test_bench.sort_unstable();
    for (a, b) in pre_rec.iter().zip(&test_bench) {
        if a != b {
            return Err(BenchError::SessionName { pre_rec: a.clone(), test_bench: b.clone() });
        }
    }
    Ok(pre_rec)
}
