//! Reference table for single-precision hyperbolic cosine.
//!
//! binary32 has a machine epsilon of 2^-23 (about 1.19e-07), which is tighter
//! than libm implementations across platforms manage. [`EPSILON`] is 2^-21
//! and is scaled per entry so the comparison covers the significant digits of
//! the expected result:
//!
//! - expected `0.xxxxxxxxx` uses `EPSILON`
//! - expected `0.0xxxxxxxx` uses `EPSILON / 10`
//! - expected `x.xxxxxxxx` uses `EPSILON * 10`
//! - expected `xx.xxxxxxx` uses `EPSILON * 100`

use serde::{Deserialize, Serialize};

/// Base tolerance, 2^-21.
pub const EPSILON: f64 = 4.768_371_58e-7;

/// Not-a-number sentinel. Detect with `is_nan`, never with `==`.
pub const NAN: f32 = f32::NAN;

/// Positive infinity sentinel.
pub const POS_INF: f32 = f32::INFINITY;

/// Scales [`EPSILON`] in double precision before narrowing to `f32`.
pub const fn variance(scale: f64) -> f32 {
    (EPSILON * scale) as f32
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Input to the function under test.
    pub value: f32,
    pub expected: f32,
    /// Maximum absolute delta between expected and actual.
    pub variance: f32,
}

impl TestCase {
    pub const fn new(value: f32, expected: f32, variance: f32) -> Self {
        Self {
            value,
            expected,
            variance,
        }
    }

    /// The same case applied to `-value`. cosh is even, so expected and
    /// variance carry over unchanged.
    pub fn negated(&self) -> Self {
        Self {
            value: -self.value,
            ..*self
        }
    }
}

// Literals are the published reference digits, not approximations of std consts.
#[rustfmt::skip]
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const COSHF_CASES: [TestCase; 16] = [
    //             value            expected        variance
    TestCase::new( 0.0,             1.0,            variance(10.0)),
    TestCase::new( 0.318309886,     1.05108979,     variance(10.0)),  // 1 / pi
    TestCase::new( 0.434294482,     1.09579746,     variance(10.0)),  // log10(e)
    TestCase::new( 0.636619772,     1.20957949,     variance(10.0)),  // 2 / pi
    TestCase::new( 0.693147181,     1.25,           variance(10.0)),  // ln(2)
    TestCase::new( 0.707106781,     1.26059184,     variance(10.0)),  // 1 / sqrt(2)
    TestCase::new( 0.785398163,     1.32460909,     variance(10.0)),  // pi / 4
    TestCase::new( 1.0,             1.54308063,     variance(10.0)),
    TestCase::new( 1.12837917,      1.70710014,     variance(10.0)),  // 2 / sqrt(pi)
    TestCase::new( 1.41421356,      2.17818356,     variance(10.0)),  // sqrt(2)
    TestCase::new( 1.44269504,      2.23418810,     variance(10.0)),  // log2(e)
    TestCase::new( 1.57079633,      2.50917848,     variance(10.0)),  // pi / 2
    TestCase::new( 2.30258509,      5.05,           variance(10.0)),  // ln(10)
    TestCase::new( 2.71828183,      7.61012514,     variance(10.0)),  // e
    TestCase::new( 3.14159265,      11.5919533,     variance(100.0)), // pi
    TestCase::new( POS_INF,         POS_INF,        0.0),
];
