//! Single-precision math functions behind a common trait.
//!
//! [`Backend::cosh`] returns hyperbolic cosine from either the platform libm
//! ([`StdCosh`]) or the pure-Rust `libm` crate ([`LibmCosh`]).

pub mod config;
pub mod cosh;
pub mod function;

pub use config::Backend;
pub use cosh::{LibmCosh, StdCosh};
pub use function::{MathError, MathResult, UnaryFunction};

pub mod prelude {
    pub use crate::config::*;
    pub use crate::cosh::*;
    pub use crate::function::*;
}
