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

//! # ULP Operations
//!
//! Distance, stepping, and nearness measured in units in the last place.
//!
//! All operations work on the ordered key of `NeonFloat`, so stepping by
//! `n` values is a single integer addition and `diff` is exact for any pair
//! of finite values. Both zeros share one key: `+0.0` and `-0.0` are zero
//! steps apart, and stepping from either zero lands on the same neighbour.

use crate::{error::NeonResult, num::float::NeonFloat, validation};

/// Default `max_ulps` for `near`.
pub const DEFAULT_MAX_ULPS: u64 = 4;

/// Returns the size of one ULP at the magnitude of `a`.
///
/// This is the gap between `|a|` and the next larger representable value.
/// At `T::MAX`, where that neighbour is infinity, the gap below is used.
/// The ULP of either zero is the smallest subnormal and the ULP of an
/// infinity is infinity.
///
/// # Errors
///
/// Returns an `InvalidValue` error if `a` is NaN.
///
/// # Examples
///
/// ```rust
/// # use neon_core::ulp;
/// assert_eq!(ulp::of(1.0), Ok(f64::EPSILON));
/// assert_eq!(ulp::of(-1.0), Ok(f64::EPSILON));
/// assert_eq!(ulp::of(f64::INFINITY), Ok(f64::INFINITY));
/// assert!(ulp::of(f64::NAN).is_err());
/// ```
pub fn of<T>(a: T) -> NeonResult<T>
where
    T: NeonFloat,
{
    validation::ensure_not_nan("ulp::of", "value", a)?;
    if a.is_infinite() {
        return Ok(T::infinity());
    }
    let magnitude = a.abs();
    if magnitude == T::max_value() {
        return Ok(magnitude - prev(magnitude));
    }
    Ok(next(magnitude) - magnitude)
}

/// Returns the number of representable values between `a` and `b`.
///
/// `diff(a, next(a)) == 1` and `diff(0.0, -0.0) == 0`.
///
/// # Errors
///
/// Returns an `InvalidValue` error if either value is NaN or infinite.
///
/// # Examples
///
/// ```rust
/// # use neon_core::ulp;
/// assert_eq!(ulp::diff(1.0, 1.0), Ok(0));
/// assert_eq!(ulp::diff(1.0, ulp::next(1.0)), Ok(1));
/// assert_eq!(ulp::diff(-f64::MIN_POSITIVE, f64::MIN_POSITIVE), ulp::diff(0.0, f64::MIN_POSITIVE).map(|d| d * 2));
/// assert!(ulp::diff(f64::INFINITY, 1.0).is_err());
/// ```
pub fn diff<T>(a: T, b: T) -> NeonResult<u64>
where
    T: NeonFloat,
{
    validation::ensure_finite("ulp::diff", "a", a)?;
    validation::ensure_finite("ulp::diff", "b", b)?;
    Ok(a.to_ordered().abs_diff(b.to_ordered()))
}

/// Returns `true` if `a` and `b` are at most `max_ulps` representable values apart.
///
/// Equal values are near, including equal infinities. NaN is never near,
/// and an infinity is not near any other value.
///
/// # Examples
///
/// ```rust
/// # use neon_core::ulp;
/// assert!(ulp::near(1.0, ulp::add(1.0, 4), ulp::DEFAULT_MAX_ULPS));
/// assert!(!ulp::near(1.0, ulp::add(1.0, 5), ulp::DEFAULT_MAX_ULPS));
/// assert!(!ulp::near(f64::NAN, f64::NAN, u64::MAX));
/// ```
#[inline]
pub fn near<T>(a: T, b: T, max_ulps: u64) -> bool
where
    T: NeonFloat,
{
    if a == b {
        return true;
    }
    if a.is_nan() || b.is_nan() || a.is_infinite() || b.is_infinite() {
        return false;
    }
    a.to_ordered().abs_diff(b.to_ordered()) <= max_ulps
}

/// Returns the next representable value toward positive infinity.
///
/// NaN and `+inf` are returned unchanged. Both zeros step to the smallest
/// positive subnormal.
///
/// # Examples
///
/// ```rust
/// # use neon_core::ulp;
/// assert_eq!(ulp::next(1.0), 1.0000000000000002);
/// assert_eq!(ulp::next(f64::MAX), f64::INFINITY);
/// assert_eq!(ulp::next(f64::INFINITY), f64::INFINITY);
/// ```
#[inline]
pub fn next<T>(a: T) -> T
where
    T: NeonFloat,
{
    if a.is_nan() || a == T::infinity() {
        return a;
    }
    T::from_ordered(a.to_ordered() + 1)
}

/// Returns the next representable value toward negative infinity.
///
/// NaN and `-inf` are returned unchanged. Both zeros step to the smallest
/// negative subnormal.
///
/// # Examples
///
/// ```rust
/// # use neon_core::ulp;
/// assert_eq!(ulp::prev(1.0), 0.9999999999999999);
/// assert_eq!(ulp::prev(f64::NEG_INFINITY), f64::NEG_INFINITY);
/// ```
#[inline]
pub fn prev<T>(a: T) -> T
where
    T: NeonFloat,
{
    if a.is_nan() || a == T::neg_infinity() {
        return a;
    }
    T::from_ordered(a.to_ordered() - 1)
}

/// Steps `a` by `n` representable values, toward `+inf` for positive `n`.
///
/// Stepping saturates at the infinities. NaN is returned unchanged, and so
/// is `a` when `n == 0`.
///
/// # Examples
///
/// ```rust
/// # use neon_core::ulp;
/// assert_eq!(ulp::add(1.0, 2), ulp::next(ulp::next(1.0)));
/// assert_eq!(ulp::add(ulp::add(1.0, 5), -5), 1.0);
/// assert_eq!(ulp::add(f64::MAX, i64::MAX), f64::INFINITY);
/// ```
pub fn add<T>(a: T, n: i64) -> T
where
    T: NeonFloat,
{
    if n == 0 || a.is_nan() {
        return a;
    }
    let low = T::neg_infinity().to_ordered();
    let high = T::infinity().to_ordered();
    T::from_ordered(a.to_ordered().saturating_add(n).clamp(low, high))
}
