// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Float Foundations
//!
//! The `NeonFloat` trait ties `num_traits::Float` to the few bit-level and
//! per-type facts the rest of the crate needs: default tolerances, the
//! smallest subnormal, and an *ordered key* view of the bit pattern.
//!
//! The ordered key maps every non-NaN value to a signed integer such that
//! two adjacent representable values differ by exactly one and both zeros
//! map to `0`:
//!
//! ```text
//! -inf  .. -MAX .. -tiny  ±0  +tiny .. +MAX .. +inf
//!  -k   .. -k+1 ..   -1    0    +1  .. k-1  ..  k
//! ```
//!
//! ULP distance and stepping reduce to integer arithmetic on that key.

use num_traits::Float;
use std::fmt::{Debug, Display};

/// A trait for the IEEE-754 binary floating-point types supported by this crate.
///
/// Implemented for `f32` and `f64`.
///
/// # Examples
///
/// ```rust
/// # use neon_core::num::float::NeonFloat;
/// assert_eq!(0.0f64.to_ordered(), 0);
/// assert_eq!((-0.0f64).to_ordered(), 0);
/// assert_eq!(f64::from_ordered(1), f64::SMALLEST_SUBNORMAL);
/// assert_eq!(1.0f64.to_ordered() + 1, 1.0000000000000002f64.to_ordered());
/// ```
pub trait NeonFloat: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Relative tolerance used by `Tolerance::default()`.
    const DEFAULT_RELATIVE_TOLERANCE: Self;

    /// Absolute tolerance suggested for zero and integer checks.
    const DEFAULT_ABSOLUTE_TOLERANCE: Self;

    /// The smallest positive subnormal value.
    const SMALLEST_SUBNORMAL: Self;

    /// Returns the ordered key of `self`.
    ///
    /// The result is meaningless for NaN.
    fn to_ordered(self) -> i64;

    /// Reconstructs a value from its ordered key.
    ///
    /// `key` must lie within `[NEG_INFINITY.to_ordered(), INFINITY.to_ordered()]`.
    /// The key `0` yields `+0.0`.
    fn from_ordered(key: i64) -> Self;

    /// Converts a sequence length into `Self`, rounding to nearest.
    fn from_len(len: usize) -> Self;
}

macro_rules! impl_neon_float_for {
    ($t:ty, $bits:ty, $rel:expr, $abs:expr) => {
        impl NeonFloat for $t {
            const DEFAULT_RELATIVE_TOLERANCE: Self = $rel;
            const DEFAULT_ABSOLUTE_TOLERANCE: Self = $abs;
            const SMALLEST_SUBNORMAL: Self = <$t>::from_bits(1);

            #[inline(always)]
            fn to_ordered(self) -> i64 {
                const SIGN: $bits = 1 << (<$bits>::BITS - 1);
                let bits = self.to_bits();
                let magnitude = (bits & !SIGN) as i64;
                if bits & SIGN != 0 { -magnitude } else { magnitude }
            }

            #[inline(always)]
            fn from_ordered(key: i64) -> Self {
                const SIGN: $bits = 1 << (<$bits>::BITS - 1);
                debug_assert!(
                    key.unsigned_abs() <= <$t>::INFINITY.to_bits() as u64,
                    "called `from_ordered` with a key outside the representable range"
                );
                if key >= 0 {
                    <$t>::from_bits(key as $bits)
                } else {
                    <$t>::from_bits(key.unsigned_abs() as $bits | SIGN)
                }
            }

            #[inline(always)]
            fn from_len(len: usize) -> Self {
                len as $t
            }
        }
    };
}

impl_neon_float_for!(f32, u32, 1e-5, 1e-5);
impl_neon_float_for!(f64, u64, 1e-9, 1e-9);
