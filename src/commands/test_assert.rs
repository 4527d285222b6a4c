//! Behavioral equivalence assertion between the two recordings.

use std::path::Path;

use crate::context::ServiceContext;
use crate::error::{BenchError, BenchResult};
use crate::noise::NoiseSettings;
use crate::ports::SideReport;
use crate::reconcile::align_session;

/// Aggregate result of a comparison run.
#[derive(Debug, Clone, Copy)]
pub struct AssertOutcome {
    /// Sessions compared.
    pub sessions: usize,
    /// Case pairs compared across all sessions.
    pub pairs: usize,
    /// Case pairs that still differed after noise masking.
    pub failed_pairs: usize,
}

impl AssertOutcome {
    /// Whether every pair in every session matched.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.failed_pairs == 0
    }
}

/// Compares every aligned pair in every session under its resolved noise
/// mask.
///
/// Pair mismatches are reported as they are found and never abort the run;
/// the aggregate verdict is the AND over all pairs in all sessions.
///
/// # Errors
///
/// Returns [`BenchError::ConfigParse`] when a noise configuration exists
/// but is malformed, or a store/alignment error from [`align_session`].
/// Mismatched pairs are not errors; they lower the returned outcome.
pub fn run(
    ctx: &ServiceContext,
    pre_rec_root: &Path,
    test_bench_root: &Path,
    config_dir: &Path,
    sessions: &[String],
) -> BenchResult<AssertOutcome> {
    let noise = load_noise(ctx, config_dir)?;
    let mut outcome =
        AssertOutcome { sessions: sessions.len(), pairs: 0, failed_pairs: 0 };

    for session in sessions {
        let mask = noise.for_session(session);
        let pairs = align_session(ctx.store.as_ref(), pre_rec_root, test_bench_root, session)?;
        let mut session_failed = 0usize;

        for (pre_rec, test_bench) in &pairs {
            let verdict = ctx.matcher.compare(pre_rec, test_bench, &mask);
            outcome.pairs += 1;
            if verdict.matched {
                continue;
            }
            session_failed += 1;
            report_side(ctx, session, &pre_rec.name, &test_bench.name, "request", &verdict.request);
            report_side(
                ctx,
                session,
                &pre_rec.name,
                &test_bench.name,
                "response",
                &verdict.response,
            );
        }

        outcome.failed_pairs += session_failed;
        if session_failed == 0 {
            ctx.reporter
                .info(&format!("session `{session}`: {} case pairs matched", pairs.len()));
        } else {
            ctx.reporter.error(&format!(
                "session `{session}`: {session_failed} of {} case pairs differed",
                pairs.len()
            ));
        }
    }

    if outcome.matched() {
        ctx.reporter.info(&format!(
            "test assertion passed: {} case pairs matched across {} sessions",
            outcome.pairs, outcome.sessions
        ));
    }
    Ok(outcome)
}

/// Loads noise settings, treating an absent source as an empty mask.
fn load_noise(ctx: &ServiceContext, config_dir: &Path) -> BenchResult<NoiseSettings> {
    match ctx.noise.load(config_dir) {
        Ok(Some(settings)) => Ok(settings),
        Ok(None) => {
            ctx.reporter.info("no noise configuration found; comparing unmasked");
            Ok(NoiseSettings::default())
        }
        Err(source) => {
            Err(BenchError::ConfigParse { path: ctx.noise.source_path(config_dir), source })
        }
    }
}

/// Emits one failing side's diff with the session and both case names.
fn report_side(
    ctx: &ServiceContext,
    session: &str,
    pre_rec_name: &str,
    test_bench_name: &str,
    side: &str,
    report: &SideReport,
) {
    if report.matched {
        return;
    }
    ctx.reporter.error(&format!(
        "session `{session}` case `{pre_rec_name}` vs `{test_bench_name}`: {side} differs\n{}",
        report.render()
    ));
}
