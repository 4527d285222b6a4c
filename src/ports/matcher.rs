//! Differential matcher port comparing two recorded cases.

use crate::noise::NoiseMask;
use crate::record::RecordedCase;

/// One field whose recorded values disagree between the two recordings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiff {
    /// Dotted field path, e.g. `resp.header.date` or `resp.body.token`.
    pub field: String,
    /// Value observed in the pre-recorded case.
    pub pre_rec: String,
    /// Value observed in the test-bench case.
    pub test_bench: String,
}

/// Verdict and diffs for one side (request or response) of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideReport {
    /// Whether this side matched after noise masking.
    pub matched: bool,
    /// Unmasked field differences, in field-path order.
    pub diffs: Vec<FieldDiff>,
}

impl SideReport {
    /// A report for a side with no surviving differences.
    #[must_use]
    pub fn matching() -> Self {
        Self { matched: true, diffs: Vec::new() }
    }

    /// Renders the differences as indented `field: pre-recorded=.. test-bench=..`
    /// lines for operator output.
    #[must_use]
    pub fn render(&self) -> String {
        self.diffs
            .iter()
            .map(|d| {
                format!(
                    "  {}: pre-recorded=`{}` test-bench=`{}`",
                    d.field, d.pre_rec, d.test_bench
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Full verdict for one aligned pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchVerdict {
    /// AND of both side verdicts.
    pub matched: bool,
    /// Request-side report.
    pub request: SideReport,
    /// Response-side report.
    pub response: SideReport,
}

impl MatchVerdict {
    /// Builds the overall verdict from the two side reports.
    #[must_use]
    pub fn from_sides(request: SideReport, response: SideReport) -> Self {
        Self { matched: request.matched && response.matched, request, response }
    }
}

/// Compares two recorded cases field by field under a noise mask.
///
/// The comparison itself is infallible: structural disagreement is a
/// verdict, not an error.
pub trait CaseMatcher: Send + Sync {
    /// Compares a pre-recorded case against its test-bench counterpart,
    /// returning the verdict plus a structured diff per side.
    fn compare(
        &self,
        pre_rec: &RecordedCase,
        test_bench: &RecordedCase,
        noise: &NoiseMask,
    ) -> MatchVerdict;
}
