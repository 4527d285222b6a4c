//! Operator-visible reporting port.
//!
//! The reconciler threads a reporter through every component instead of
//! logging through process-global state, so embedders and tests can capture
//! exactly what an operator would see.

/// Receives operator-visible run output at three levels.
pub trait Reporter: Send + Sync {
    /// Progress and result lines (aggregate verdicts, diff bodies).
    fn info(&self, message: &str);

    /// Failures worth an operator's attention (mismatched pairs, aborts).
    fn error(&self, message: &str);

    /// Trace detail (timestamp values around a swap); may be discarded.
    fn debug(&self, message: &str);
}
