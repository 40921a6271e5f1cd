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

//! # Snapping and Clamping
//!
//! Replace a value by a canonical target (zero, an integer, a boundary, or
//! one of several candidates) when it lies within tolerance of that target.
//! Values that are not close to any target pass through unchanged, NaN
//! included.

use crate::{
    compare::{is_integer, near, near_zero},
    error::NeonResult,
    num::{float::NeonFloat, tolerance::Tolerance},
    validation,
};

/// Returns `0` if `a` is within `abs_tol` of zero, otherwise `a`.
///
/// Snapped values always become `+0.0`.
///
/// # Examples
///
/// ```rust
/// # use neon_core::clamp::to_zero;
/// assert_eq!(to_zero(1e-7, 1e-3), 0.0);
/// assert_eq!(to_zero(5.0, 1e-3), 5.0);
/// assert!(to_zero(f64::NAN, 1e-3).is_nan());
/// ```
#[inline]
pub fn to_zero<T>(a: T, abs_tol: T) -> T
where
    T: NeonFloat,
{
    if near_zero(a, abs_tol) { T::zero() } else { a }
}

/// Returns the nearest integer if `a` is within `abs_tol` of it, otherwise `a`.
///
/// # Examples
///
/// ```rust
/// # use neon_core::clamp::to_int;
/// assert_eq!(to_int(2.9999999999, 1e-9), 3.0);
/// assert_eq!(to_int(-3.0000000001, 1e-9), -3.0);
/// assert_eq!(to_int(2.5, 1e-9), 2.5);
/// ```
#[inline]
pub fn to_int<T>(a: T, abs_tol: T) -> T
where
    T: NeonFloat,
{
    if is_integer(a, abs_tol) { a.round() } else { a }
}

/// Returns `target` if `a` is near it, otherwise `a`.
///
/// # Examples
///
/// ```rust
/// # use neon_core::clamp::to_value;
/// # use neon_core::num::tolerance::Tolerance;
/// assert_eq!(to_value(0.33, 1.0 / 3.0, Tolerance::from_absolute(0.01)), 1.0 / 3.0);
/// assert_eq!(to_value(0.33, 1.0 / 3.0, Tolerance::from_absolute(0.001)), 0.33);
/// ```
#[inline]
pub fn to_value<T>(a: T, target: T, tolerance: Tolerance<T>) -> T
where
    T: NeonFloat,
{
    if near(a, target, tolerance) { target } else { a }
}

/// Clamps `a` into `[low, high]`, first snapping values near a boundary onto it.
///
/// If `a` is near both boundaries, the closer one wins and `low` wins a tie.
/// A NaN `a` is returned unchanged; any other `a` yields a value within
/// `[low, high]`.
///
/// # Errors
///
/// Returns an `InvalidValue` error if `low` or `high` is NaN, or if `low > high`.
///
/// # Examples
///
/// ```rust
/// # use neon_core::clamp::to_range;
/// # use neon_core::num::tolerance::Tolerance;
/// let tol = Tolerance::from_absolute(1e-6);
/// assert_eq!(to_range(5.0, 0.0, 10.0, tol), Ok(5.0));
/// assert_eq!(to_range(-5.0, 0.0, 10.0, tol), Ok(0.0));
/// assert_eq!(to_range(10.0000001, 0.0, 10.0, tol), Ok(10.0));
/// assert_eq!(to_range(9.9999999, 0.0, 10.0, tol), Ok(10.0));
/// assert!(to_range(1.0, 10.0, 0.0, tol).is_err());
/// ```
pub fn to_range<T>(a: T, low: T, high: T, tolerance: Tolerance<T>) -> NeonResult<T>
where
    T: NeonFloat,
{
    validation::ensure_not_nan("clamp::to_range", "low", low)?;
    validation::ensure_not_nan("clamp::to_range", "high", high)?;
    if low > high {
        return Err(validation::invalid_value(
            "clamp::to_range",
            format!("low ({low}) must not exceed high ({high})"),
        ));
    }

    if a.is_nan() {
        return Ok(a);
    }

    match (near(a, low, tolerance), near(a, high, tolerance)) {
        (true, true) => {
            if distance(a, low) <= distance(a, high) {
                Ok(low)
            } else {
                Ok(high)
            }
        }
        (true, false) => Ok(low),
        (false, true) => Ok(high),
        (false, false) => Ok(a.max(low).min(high)),
    }
}

/// Snaps `a` to the nearest candidate it is near, otherwise returns `a`.
///
/// Ties between equally distant candidates go to the one listed first.
///
/// # Examples
///
/// ```rust
/// # use neon_core::clamp::to_values;
/// # use neon_core::num::tolerance::Tolerance;
/// let tol = Tolerance::default();
/// assert_eq!(to_values(0.5000000001, &[0.0, 0.5, 1.0], tol), 0.5);
/// assert_eq!(to_values(0.3, &[0.0, 0.5, 1.0], tol), 0.3);
/// assert_eq!(to_values(0.5, &[], tol), 0.5);
/// ```
pub fn to_values<T>(a: T, candidates: &[T], tolerance: Tolerance<T>) -> T
where
    T: NeonFloat,
{
    let mut best: Option<(T, T)> = None;
    for &candidate in candidates {
        if !near(a, candidate, tolerance) {
            continue;
        }
        let d = distance(a, candidate);
        match best {
            Some((_, best_distance)) if best_distance <= d => {}
            _ => best = Some((candidate, d)),
        }
    }
    best.map_or(a, |(candidate, _)| candidate)
}

/// Applies `to_zero` to every element of `xs`.
///
/// # Examples
///
/// ```rust
/// # use neon_core::clamp::to_zero_many;
/// assert_eq!(to_zero_many(&[1e-15, 0.1, -1e-15], 1e-9), vec![0.0, 0.1, 0.0]);
/// ```
pub fn to_zero_many<T>(xs: &[T], abs_tol: T) -> Vec<T>
where
    T: NeonFloat,
{
    xs.iter().map(|&x| to_zero(x, abs_tol)).collect()
}

/// `|a - b|`, with equal infinities at distance zero.
#[inline(always)]
fn distance<T>(a: T, b: T) -> T
where
    T: NeonFloat,
{
    if a == b { T::zero() } else { (a - b).abs() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_zero() {
        assert_eq!(to_zero(1e-15, 1e-9), 0.0);
        assert_eq!(to_zero(-1e-15, 1e-9), 0.0);
        assert!(to_zero(-1e-15f64, 1e-9).is_sign_positive());
        assert_eq!(to_zero(0.1, 1e-9), 0.1);
        assert_eq!(to_zero(-0.1, 1e-9), -0.1);
    }

    #[test]
    fn test_to_zero_custom_tolerance() {
        assert_eq!(to_zero(1e-15, 1e-14), 0.0);
        assert_eq!(to_zero(1e-15, 1e-16), 1e-15);
        assert_eq!(to_zero(0.0000001, 0.001), 0.0);
        assert_eq!(to_zero(5.0, 0.001), 5.0);
    }

    #[test]
    fn test_to_zero_special_values() {
        assert!(to_zero(f64::NAN, 1e-9).is_nan());
        assert_eq!(to_zero(f64::INFINITY, 1e-9), f64::INFINITY);
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int(3.0, 1e-9), 3.0);
        assert_eq!(to_int(-5.0, 1e-9), -5.0);
        assert_eq!(to_int(0.0, 1e-9), 0.0);
        assert_eq!(to_int(2.9999999999, 1e-9), 3.0);
        assert_eq!(to_int(3.0000000001, 1e-9), 3.0);
        assert_eq!(to_int(-3.0000000001, 1e-9), -3.0);
        assert_eq!(to_int(2.5, 1e-9), 2.5);
        assert_eq!(to_int(3.1, 1e-9), 3.1);
    }

    #[test]
    fn test_to_int_special_values() {
        assert!(to_int(f64::NAN, 1e-9).is_nan());
        assert_eq!(to_int(f64::INFINITY, 1e-9), f64::INFINITY);
        assert_eq!(to_int(f64::NEG_INFINITY, 1e-9), f64::NEG_INFINITY);
    }

    #[test]
    fn test_to_value() {
        let third = 1.0 / 3.0;
        assert_eq!(to_value(0.333333333333, third, Tolerance::default()), third);
        assert_eq!(to_value(0.5, third, Tolerance::default()), 0.5);
        assert_eq!(to_value(0.33, third, Tolerance::from_absolute(0.01)), third);
        assert_eq!(to_value(0.33, third, Tolerance::from_absolute(0.001)), 0.33);
    }

    #[test]
    fn test_to_range_inside_and_outside() {
        let tol = Tolerance::default();
        assert_eq!(to_range(5.0, 0.0, 10.0, tol), Ok(5.0));
        assert_eq!(to_range(-5.0, 0.0, 10.0, tol), Ok(0.0));
        assert_eq!(to_range(15.0, 0.0, 10.0, tol), Ok(10.0));
        assert_eq!(to_range(0.0, 0.0, 10.0, tol), Ok(0.0));
        assert_eq!(to_range(10.0, 0.0, 10.0, tol), Ok(10.0));
    }

    #[test]
    fn test_to_range_snaps_inside_boundaries() {
        let tol = Tolerance::from_absolute(1e-3);
        assert_eq!(to_range(0.0005, 0.0, 10.0, tol), Ok(0.0));
        assert_eq!(to_range(9.9995, 0.0, 10.0, tol), Ok(10.0));
        assert_eq!(to_range(5.0005, 0.0, 10.0, tol), Ok(5.0005));
    }

    #[test]
    fn test_to_range_narrow_range_picks_closer_boundary() {
        let tol = Tolerance::from_absolute(1.0);
        assert_eq!(to_range(0.4, 0.0, 0.5, tol), Ok(0.5));
        assert_eq!(to_range(0.1, 0.0, 0.5, tol), Ok(0.0));
        assert_eq!(to_range(0.25, 0.0, 0.5, tol), Ok(0.0));
    }

    #[test]
    fn test_to_range_degenerate() {
        assert_eq!(to_range(3.0, 1.0, 1.0, Tolerance::default()), Ok(1.0));
    }

    #[test]
    fn test_to_range_infinite_bounds() {
        let tol = Tolerance::default();
        assert_eq!(to_range(3.0, f64::NEG_INFINITY, f64::INFINITY, tol), Ok(3.0));
        assert_eq!(to_range(f64::INFINITY, 0.0, 1.0, tol), Ok(1.0));
        assert_eq!(to_range(f64::NEG_INFINITY, 0.0, 1.0, tol), Ok(0.0));
    }

    #[test]
    fn test_to_range_nan_passthrough() {
        assert!(to_range(f64::NAN, 0.0, 10.0, Tolerance::default()).unwrap().is_nan());
    }

    #[test]
    fn test_to_range_invalid_bounds() {
        let tol = Tolerance::default();
        let err = to_range(1.0, 10.0, 0.0, tol).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(err.operation(), "clamp::to_range");
        assert!(to_range(1.0, f64::NAN, 0.0, tol).is_err());
        assert!(to_range(1.0, 0.0, f64::NAN, tol).is_err());
    }

    #[test]
    fn test_to_values() {
        let targets = [0.0, 0.5, 1.0];
        let tol = Tolerance::default();
        assert_eq!(to_values(0.5000000001, &targets, tol), 0.5);
        assert_eq!(to_values(1.0000000001, &targets, tol), 1.0);
        assert_eq!(to_values(0.3, &targets, tol), 0.3);
        assert_eq!(to_values(0.7, &targets, tol), 0.7);
        assert_eq!(to_values(0.5, &[], tol), 0.5);
    }

    #[test]
    fn test_to_values_picks_nearest() {
        let tol = Tolerance::from_absolute(0.5);
        assert_eq!(to_values(0.9, &[0.5, 1.0, 1.2], tol), 1.0);
    }

    #[test]
    fn test_to_values_tie_goes_to_first() {
        let tol = Tolerance::from_absolute(1.0);
        assert_eq!(to_values(0.5, &[1.0, 0.0], tol), 1.0);
        assert_eq!(to_values(0.5, &[0.0, 1.0], tol), 0.0);
    }

    #[test]
    fn test_to_values_infinite_candidate() {
        let tol = Tolerance::default();
        assert_eq!(to_values(f64::INFINITY, &[1.0, f64::INFINITY], tol), f64::INFINITY);
        assert!(to_values(f64::NAN, &[f64::NAN, 0.0], tol).is_nan());
    }

    #[test]
    fn test_to_zero_many() {
        assert_eq!(to_zero_many(&[1e-15, 0.1, -1e-15], 1e-9), vec![0.0, 0.1, 0.0]);
        assert!(to_zero_many::<f64>(&[], 1e-9).is_empty());
    }

    #[test]
    fn test_f32() {
        assert_eq!(to_zero(1e-7f32, 1e-5), 0.0);
        assert_eq!(to_int(2.999999f32, 1e-5), 3.0);
    }
}
