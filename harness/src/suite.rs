//! Suite lifecycle: initialize, run, report failures, terminate.

use crate::cases::TestCase;
use crate::checker::{AccuracyChecker, CheckError};
use crate::config::{ConfigError, ReportFormat, SuiteConfig};
use crate::report::RunReport;
use crate::telemetry::{self, TelemetryError};
use mathfn::UnaryFunction;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("Suite terminated before any run")]
    NotRun,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SuiteResult<T> = Result<T, SuiteError>;

/// One configured function under test and the report of its last run.
pub struct TestSuite {
    config: SuiteConfig,
    function: Box<dyn UnaryFunction>,
    report: Option<RunReport>,
}

impl TestSuite {
    /// Validates `config`, installs logging, and selects the configured cosh
    /// backend.
    pub fn initialize(config: SuiteConfig) -> SuiteResult<Self> {
        let function = config.backend.cosh();
        Self::initialize_with(config, function)
    }

    /// Like [`TestSuite::initialize`], with an explicit function under test.
    pub fn initialize_with(
        config: SuiteConfig,
        function: Box<dyn UnaryFunction>,
    ) -> SuiteResult<Self> {
        config.validate()?;
        telemetry::init_logging(&config.log_level)?;

        info!(
            function = function.name(),
            backend = %function.backend(),
            policy = ?config.failure_policy,
            "Suite initialized"
        );

        Ok(Self {
            config,
            function,
            report: None,
        })
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub fn function(&self) -> &dyn UnaryFunction {
        self.function.as_ref()
    }

    /// Runs `cases` under the configured failure policy, replacing any
    /// earlier report.
    pub fn run(&mut self, cases: &[TestCase]) -> &RunReport {
        let checker = AccuracyChecker::new(self.function.as_ref());
        let report = checker.run(cases, self.config.failure_policy, Self::fail);
        self.report.insert(report)
    }

    /// Reports a tolerance violation.
    pub fn fail(violation: &CheckError) {
        error!(
            function = violation.function,
            value = violation.value,
            actual = violation.actual,
            expected = violation.expected,
            "{}",
            violation
        );
    }

    pub fn report(&self) -> Option<&RunReport> {
        self.report.as_ref()
    }

    /// Renders the last run in the configured [`ReportFormat`].
    pub fn render(&self) -> SuiteResult<String> {
        let report = self.report().ok_or(SuiteError::NotRun)?;

        match self.config().report_format {
            ReportFormat::Text => Ok(report.to_text()),
            ReportFormat::Json => Ok(report.to_json()?),
        }
    }

    /// Logs the summary and hands back the final report.
    pub fn terminate(self) -> SuiteResult<RunReport> {
        let report = self.report.ok_or(SuiteError::NotRun)?;

        if report.success() {
            info!(
                passed = report.passed,
                total = report.total,
                "All checks passed"
            );
        } else {
            error!(
                failed = report.failed,
                total = report.total,
                "Accuracy checks failed"
            );
        }

        Ok(report)
    }
}
