//! Accuracy suite for single-precision hyperbolic cosine.
//!
//! [`COSHF_CASES`] holds the reference table, [`AccuracyChecker`] evaluates a
//! [`mathfn::UnaryFunction`] against it, and [`TestSuite`] wraps a run with
//! logging setup, failure reporting and a final [`RunReport`].

pub mod cases;
pub mod checker;
pub mod config;
pub mod report;
pub mod suite;
pub mod telemetry;

pub use cases::{variance, TestCase, COSHF_CASES, EPSILON, NAN, POS_INF};
pub use checker::{AccuracyChecker, CheckError, CheckKind, CheckOutcome, CheckResult};
pub use config::{
    ConfigError, ConfigOverrides, ConfigResult, FailurePolicy, ReportFormat, SuiteConfig,
};
pub use report::{RunReport, FAIL, PASS};
pub use suite::{SuiteError, SuiteResult, TestSuite};
pub use telemetry::{init_logging, TelemetryError, TelemetryResult};
