//! The seam between the accuracy harness and the math routine under test.
//!
//! Anything implementing [`UnaryFunction`] can be checked against a reference
//! table, which is how tests substitute deliberately wrong functions.

use crate::config::Backend;
use thiserror::Error;

/// Errors raised while selecting a function implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Unknown backend: {name} (expected one of: std, libm)")]
    UnknownBackend { name: String },
}

pub type MathResult<T> = Result<T, MathError>;

/// A single-precision function of one argument.
pub trait UnaryFunction: Send + Sync {
    /// C-style name used in failure messages, e.g. `coshf`.
    fn name(&self) -> &'static str;

    /// Which implementation provides this function.
    fn backend(&self) -> Backend;

    /// Evaluates the function at `x`.
    fn eval(&self, x: f32) -> f32;
}

impl<F: UnaryFunction + ?Sized> UnaryFunction for &F {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn backend(&self) -> Backend {
        (**self).backend()
    }

    fn eval(&self, x: f32) -> f32 {
        (**self).eval(x)
    }
}

impl<F: UnaryFunction + ?Sized> UnaryFunction for Box<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn backend(&self) -> Backend {
        (**self).backend()
    }

    fn eval(&self, x: f32) -> f32 {
        (**self).eval(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockFunction;

    impl UnaryFunction for MockFunction {
        fn name(&self) -> &'static str {
            "mockf"
        }

        fn backend(&self) -> Backend {
            Backend::Std
        }

        fn eval(&self, x: f32) -> f32 {
            x * 2.0
        }
    }

    #[test]
    fn test_mock_function() {
        let function = MockFunction;
        assert_eq!(function.name(), "mockf");
        assert_eq!(function.backend(), Backend::Std);
        assert_eq!(function.eval(1.5), 3.0);
    }

    #[test]
    fn test_boxed_function_delegates() {
        let function: Box<dyn UnaryFunction> = Box::new(MockFunction);
        assert_eq!(function.name(), "mockf");
        assert_eq!(function.eval(-2.0), -4.0);
    }

    #[test]
    fn test_unknown_backend_message() {
        let err = MathError::UnknownBackend {
            name: "cuda".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown backend: cuda (expected one of: std, libm)"
        );
    }
}
