//! Pairwise alignment of two independently recorded case collections.

use std::path::Path;

use crate::error::{BenchError, BenchResult};
use crate::ports::CaseStore;
use crate::record::RecordedCase;

/// One pre-recorded case paired with its test-bench counterpart.
pub type AlignedPair = (RecordedCase, RecordedCase);

/// Loads both collections for a session and pairs them with [`pair_cases`].
///
/// # Errors
///
/// Returns [`BenchError::Store`] when either collection cannot be loaded,
/// or any error [`pair_cases`] produces.
pub fn align_session(
    store: &dyn CaseStore,
    pre_rec_root: &Path,
    test_bench_root: &Path,
    session: &str,
) -> BenchResult<Vec<AlignedPair>> {
    let pre_rec = store
        .load_cases(pre_rec_root, session)
        .map_err(|e| BenchError::store(pre_rec_root.join(session), e))?;
    let test_bench = store
        .load_cases(test_bench_root, session)
        .map_err(|e| BenchError::store(test_bench_root.join(session), e))?;
    pair_cases(session, pre_rec, test_bench)
}

/// Sorts each collection by its own key and zips them positionally.
///
/// The pre-recorded collection sorts by case name; the test-bench
/// collection sorts by the replay-assigned correlation key, since the two
/// recordings may label the same logical case differently. Positional
/// pairing after the independent sorts assumes the recordings cover the
/// same logical requests in a correspondence the sorts expose; it performs
/// no content-based matching.
///
/// # Errors
///
/// Returns [`BenchError::CardinalityMismatch`] when the collections differ
/// in length. Checked before sorting, so no pairing is attempted at all.
pub fn pair_cases(
    session: &str,
    mut pre_rec: Vec<RecordedCase>,
    mut test_bench: Vec<RecordedCase>,
) -> BenchResult<Vec<AlignedPair>> {
    if pre_rec.len() != test_bench.len() {
        return Err(BenchError::CardinalityMismatch {
            session: session.to_string(),
            pre_rec: pre_rec.len(),
            test_bench: test_bench.len(),
        });
    }
    pre_rec.sort_by(|a, b| a.name.cmp(&b.name));
    test_bench.sort_by(|a, b| a.correlation_key().cmp(b.correlation_key()));
    Ok(pre_rec.into_iter().zip(test_bench).collect())
}
