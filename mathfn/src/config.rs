//! Backend selection: which cosh implementation a run exercises.

use crate::cosh::{LibmCosh, StdCosh};
use crate::function::{MathError, MathResult, UnaryFunction};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which implementation of the math routines to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The platform libm, reached through `f32` inherent methods.
    #[default]
    Std,
    /// The pure-Rust `libm` crate.
    Libm,
}

impl Backend {
    /// Every backend, in listing order.
    pub const ALL: [Backend; 2] = [Backend::Std, Backend::Libm];

    /// Name accepted by [`FromStr`] and used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Std => "std",
            Backend::Libm => "libm",
        }
    }

    /// One-line summary for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Backend::Std => "platform libm via f32::cosh",
            Backend::Libm => "pure-Rust libm crate (musl port)",
        }
    }

    /// Hyperbolic cosine as provided by this backend.
    pub fn cosh(&self) -> Box<dyn UnaryFunction> {
        match self {
            Backend::Std => Box::new(StdCosh::new()),
            Backend::Libm => Box::new(LibmCosh::new()),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = MathError;

    fn from_str(s: &str) -> MathResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "std" => Ok(Backend::Std),
            "libm" => Ok(Backend::Libm),
            _ => Err(MathError::UnknownBackend {
                name: s.to_string(),
            }),
        }
    }
}
