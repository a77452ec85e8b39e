//! Aggregated results of an accuracy run and their text/JSON renderings.

use crate::checker::{CheckKind, CheckOutcome};
use crate::config::FailurePolicy;
use chrono::{DateTime, Utc};
use mathfn::Backend;
use serde::Serialize;
use std::fmt::Write;

/// Process exit code when every check passed.
pub const PASS: u8 = 0;
/// Process exit code when any check failed.
pub const FAIL: u8 = 1;

/// Aggregate result of one accuracy run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub function: String,
    pub backend: Backend,
    pub policy: FailurePolicy,
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<CheckOutcome>,
}

impl RunReport {
    /// Builds a report, deriving the pass/fail counts from `outcomes`.
    pub fn new(
        function: impl Into<String>,
        backend: Backend,
        policy: FailurePolicy,
        started_at: DateTime<Utc>,
        outcomes: Vec<CheckOutcome>,
    ) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        Self {
            function: function.into(),
            backend,
            policy,
            started_at,
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
            outcomes,
        }
    }

    pub fn success(&self) -> bool {
        self.failed == 0
    }

    /// [`PASS`] or [`FAIL`].
    pub fn exit_code(&self) -> u8 {
        if self.success() {
            PASS
        } else {
            FAIL
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// One summary line, one line per failure, then `PASS` or `FAIL`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} [{}]: {}/{} checks passed",
            self.function, self.backend, self.passed, self.total
        );

        for outcome in self.failures() {
            let _ = match outcome.kind {
                CheckKind::WithinVariance => writeln!(
                    out,
                    "  FAIL {}({}) = {}, expected {} (delta {}, variance {})",
                    self.function,
                    outcome.value,
                    outcome.actual,
                    outcome.expected,
                    outcome.delta.unwrap_or(f32::NAN),
                    outcome.variance.unwrap_or(f32::NAN),
                ),
                CheckKind::IsNan => writeln!(
                    out,
                    "  FAIL {}({}) = {}, expected NaN",
                    self.function, outcome.value, outcome.actual
                ),
            };
        }

        let _ = write!(out, "{}", if self.success() { "PASS" } else { "FAIL" });
        out
    }
}
