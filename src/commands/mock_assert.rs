//! Timestamp and mock-fixture exchange between the two recordings.

use std::mem;
use std::path::Path;

use crate::context::ServiceContext;
use crate::error::{BenchError, BenchResult};
use crate::reconcile::{align_session, swap_files};

/// Aggregate result of a swap run.
#[derive(Debug, Clone, Copy)]
pub struct SwapOutcome {
    /// Sessions whose cases and fixtures were exchanged.
    pub sessions: usize,
    /// Case pairs whose timestamps were exchanged.
    pub pairs: usize,
}

/// Prepares the two recordings for a reciprocal re-run.
///
/// Per session: aligns the case collections, verifies each pair carries
/// the same case name, exchanges the request and response timestamps of
/// the pair, persists both updated records, and finally exchanges the
/// session's mock-fixture files. Earlier sessions' writes stay committed
/// when a later session fails; there is no cross-session rollback.
///
/// # Errors
///
/// Returns [`BenchError::IdentityMismatch`] when an aligned pair carries
/// two different names, [`BenchError::Persist`] when a record write fails,
/// [`BenchError::SwapIo`] when the fixture exchange fails, or a
/// store/alignment error from [`align_session`].
pub fn run(
    ctx: &ServiceContext,
    pre_rec_root: &Path,
    test_bench_root: &Path,
    sessions: &[String],
) -> BenchResult<SwapOutcome> {
    let mut outcome = SwapOutcome { sessions: sessions.len(), pairs: 0 };

    for session in sessions {
        let pairs = align_session(ctx.store.as_ref(), pre_rec_root, test_bench_root, session)?;
        let pair_count = pairs.len();

        for (mut pre_rec, mut test_bench) in pairs {
            if pre_rec.name != test_bench.name {
                return Err(BenchError::IdentityMismatch {
                    session: session.clone(),
                    pre_rec: pre_rec.name,
                    test_bench: test_bench.name,
                });
            }
            ctx.reporter.debug(&format!(
                "case `{}` before swap: pre-recorded req={} resp={}, test-bench req={} resp={}",
                pre_rec.name,
                pre_rec.request.timestamp,
                pre_rec.response.timestamp,
                test_bench.request.timestamp,
                test_bench.response.timestamp
            ));
            mem::swap(&mut pre_rec.request.timestamp, &mut test_bench.request.timestamp);
            mem::swap(&mut pre_rec.response.timestamp, &mut test_bench.response.timestamp);
            ctx.reporter.debug(&format!(
                "case `{}` after swap: pre-recorded req={} resp={}, test-bench req={} resp={}",
                pre_rec.name,
                pre_rec.request.timestamp,
                pre_rec.response.timestamp,
                test_bench.request.timestamp,
                test_bench.response.timestamp
            ));

            ctx.store
                .update_case(pre_rec_root, session, &pre_rec)
                .map_err(|e| BenchError::persist(session.clone(), pre_rec.name.clone(), e))?;
            ctx.store
                .update_case(test_bench_root, session, &test_bench)
                .map_err(|e| BenchError::persist(session.clone(), test_bench.name.clone(), e))?;
            outcome.pairs += 1;
        }

        let pre_rec_fixture = ctx.store.fixture_path(pre_rec_root, session);
        let test_bench_fixture = ctx.store.fixture_path(test_bench_root, session);
        swap_files(&pre_rec_fixture, &test_bench_fixture)?;
        ctx.reporter.info(&format!(
            "session `{session}`: swapped timestamps for {pair_count} case pairs and exchanged fixtures"
        ));
    }

    ctx.reporter.info(&format!(
        "mock assertion prepared: {} case pairs across {} sessions",
        outcome.pairs, outcome.sessions
    ));
    Ok(outcome)
}
