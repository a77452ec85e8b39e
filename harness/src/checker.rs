//! Accuracy checks for a single-precision function against a reference table.
//!
//! Every table entry is evaluated at `value` and at `-value` with the same
//! expected result and variance, then one final check asserts that a NaN input
//! propagates to a NaN output.

use crate::cases::{TestCase, NAN};
use crate::config::FailurePolicy;
use crate::report::RunReport;
use chrono::Utc;
use mathfn::UnaryFunction;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, info};

/// A computed result that is outside the allowed variance, or a NaN input
/// that did not produce NaN.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{function}({value}) returned {actual} when it should have returned {expected}")]
pub struct CheckError {
    pub function: &'static str,
    pub value: f32,
    pub actual: f32,
    pub expected: f32,
}

pub type CheckResult<T> = Result<T, CheckError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// `|f(value) - expected| <= variance`
    WithinVariance,
    /// `f(value)` is NaN
    IsNan,
}

/// Record of one evaluation, pass or fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    pub value: f32,
    pub expected: f32,
    pub actual: f32,
    pub variance: Option<f32>,
    pub delta: Option<f32>,
    pub passed: bool,
}

pub struct AccuracyChecker<F: UnaryFunction> {
    function: F,
}

impl<F: UnaryFunction> AccuracyChecker<F> {
    pub fn new(function: F) -> Self {
        Self { function }
    }

    pub fn function(&self) -> &F {
        &self.function
    }

    /// Evaluates `f(value)` and records whether it lies within `variance` of
    /// `expected`.
    pub fn check_within(&self, value: f32, expected: f32, variance: f32) -> CheckOutcome {
        let actual = self.function.eval(value);
        let delta = (actual - expected).abs();

        // NaN deltas (inf - inf) are unordered and therefore pass.
        let passed = delta.partial_cmp(&variance) != Some(Ordering::Greater);

        CheckOutcome {
            kind: CheckKind::WithinVariance,
            value,
            expected,
            actual,
            variance: Some(variance),
            delta: Some(delta),
            passed,
        }
    }

    /// Evaluates `f(value)` and records whether it is NaN.
    pub fn check_is_nan(&self, value: f32) -> CheckOutcome {
        let actual = self.function.eval(value);

        CheckOutcome {
            kind: CheckKind::IsNan,
            value,
            expected: NAN,
            actual,
            variance: None,
            delta: None,
            passed: actual.is_nan(),
        }
    }

    pub fn validate(&self, value: f32, expected: f32, variance: f32) -> CheckResult<()> {
        self.outcome_result(&self.check_within(value, expected, variance))
    }

    pub fn validate_is_nan(&self, value: f32) -> CheckResult<()> {
        self.outcome_result(&self.check_is_nan(value))
    }

    /// Runs `cases` at `value` and `-value`, then the NaN check.
    ///
    /// `report_failure` is invoked for every violation as it happens. With
    /// [`FailurePolicy::FailFast`] the run stops after the first one.
    pub fn run<R>(
        &self,
        cases: &[TestCase],
        policy: FailurePolicy,
        mut report_failure: R,
    ) -> RunReport
    where
        R: FnMut(&CheckError),
    {
        let started_at = Utc::now();
        let mut outcomes = Vec::with_capacity(cases.len() * 2 + 1);

        info!(
            function = self.function.name(),
            backend = %self.function.backend(),
            cases = cases.len(),
            ?policy,
            "Starting accuracy run"
        );

        let checks = cases
            .iter()
            .flat_map(|case| [*case, case.negated()])
            .map(|case| self.check_within(case.value, case.expected, case.variance))
            .chain(std::iter::once_with(|| self.check_is_nan(NAN)));

        for outcome in checks {
            debug!(
                value = outcome.value,
                actual = outcome.actual,
                expected = outcome.expected,
                passed = outcome.passed,
                "check"
            );

            let failed = !outcome.passed;
            if failed {
                if let Err(e) = self.outcome_result(&outcome) {
                    report_failure(&e);
                }
            }
            outcomes.push(outcome);

            if failed && policy == FailurePolicy::FailFast {
                break;
            }
        }

        RunReport::new(
            self.function.name(),
            self.function.backend(),
            policy,
            started_at,
            outcomes,
        )
    }

    fn outcome_result(&self, outcome: &CheckOutcome) -> CheckResult<()> {
        if outcome.passed {
            Ok(())
        } else {
            Err(CheckError {
                function: self.function.name(),
                value: outcome.value,
                actual: outcome.actual,
                expected: outcome.expected,
            })
        }
    }
}
