//! Hyperbolic cosine backends.

use crate::config::Backend;
use crate::function::UnaryFunction;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdCosh;

impl StdCosh {
    pub fn new() -> Self {
        Self
    }
}

impl UnaryFunction for StdCosh {
    fn name(&self) -> &'static str {
        "coshf"
    }

    fn backend(&self) -> Backend {
        Backend::Std
    }

    fn eval(&self, x: f32) -> f32 {
        let result = x.cosh();
        trace!(backend = "std", x, result, "coshf");
        result
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LibmCosh;

impl LibmCosh {
    pub fn new() -> Self {
        Self
    }
}

impl UnaryFunction for LibmCosh {
    fn name(&self) -> &'static str {
        "coshf"
    }

    fn backend(&self) -> Backend {
        Backend::Libm
    }

    fn eval(&self, x: f32) -> f32 {
        let result = libm::coshf(x);
        trace!(backend = "libm", x, result, "coshf");
        result
    }
}
