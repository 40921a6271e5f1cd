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

//! # Tolerant Comparison
//!
//! Approximate equality and ordering for floats.
//!
//! `near` follows the `math.isclose` rule: two values are near when their
//! difference is within `max(relative * max(|a|, |b|), absolute)`. NaN is
//! never near anything, an infinity is only near itself, and `0.0` is near
//! `-0.0`.
//!
//! Tolerant relations are *not* orders. `near` is reflexive and symmetric but
//! not transitive: with an absolute tolerance of `1`, `0 ≈ 0.9` and
//! `0.9 ≈ 1.8` while `0` and `1.8` are not near. Consequently
//! `less_or_near` is not antisymmetric and `compare` must not be used as a
//! sort key for data containing clusters wider than the tolerance.

use crate::{
    error::NeonResult,
    num::{float::NeonFloat, tolerance::Tolerance},
    validation,
};
use std::cmp::Ordering;

/// Returns `true` if `a` and `b` are approximately equal.
///
/// Never fails. NaN is not near anything, including NaN. Infinities are
/// only near the infinity of the same sign, even under an infinite tolerance.
///
/// # Examples
///
/// ```rust
/// # use neon_core::compare::near;
/// # use neon_core::num::tolerance::Tolerance;
/// assert!(near(0.1 + 0.2, 0.3, Tolerance::default()));
/// assert!(near(1000.0, 1001.0, Tolerance::from_relative(1e-2)));
/// assert!(!near(1000.0, 1001.0, Tolerance::from_relative(1e-4)));
/// assert!(near(0.0, -0.0, Tolerance::exact()));
/// assert!(!near(f64::NAN, f64::NAN, Tolerance::default()));
/// ```
#[inline]
pub fn near<T>(a: T, b: T, tolerance: Tolerance<T>) -> bool
where
    T: NeonFloat,
{
    if a == b {
        return true;
    }
    if a.is_nan() || b.is_nan() || a.is_infinite() || b.is_infinite() {
        return false;
    }
    (a - b).abs() <= tolerance.allowance(a, b)
}

/// Returns `true` if `a` is within `abs_tol` of zero.
///
/// NaN and infinities are never near zero. A negative or NaN `abs_tol`
/// accepts nothing but exact zeros.
///
/// # Examples
///
/// ```rust
/// # use neon_core::compare::near_zero;
/// # use neon_core::num::float::NeonFloat;
/// assert!(near_zero(-0.0, 0.0));
/// assert!(near_zero(1e-15, f64::DEFAULT_ABSOLUTE_TOLERANCE));
/// assert!(!near_zero(1e-5, 1e-9));
/// ```
#[inline]
pub fn near_zero<T>(a: T, abs_tol: T) -> bool
where
    T: NeonFloat,
{
    a == T::zero() || (a.is_finite() && a.abs() <= abs_tol)
}

/// Returns `true` if `a` is within `abs_tol` of the nearest integer.
///
/// NaN and infinities are not integers.
///
/// # Examples
///
/// ```rust
/// # use neon_core::compare::is_integer;
/// assert!(is_integer(3.0, 0.0));
/// assert!(is_integer(2.9999999999, 1e-9));
/// assert!(!is_integer(2.5, 1e-9));
/// assert!(!is_integer(f64::INFINITY, 1e-9));
/// ```
#[inline]
pub fn is_integer<T>(a: T, abs_tol: T) -> bool
where
    T: NeonFloat,
{
    a.is_finite() && (a - a.round()).abs() <= abs_tol
}

/// Returns `true` if `a < b` or `a` is near `b`.
///
/// # Examples
///
/// ```rust
/// # use neon_core::compare::less_or_near;
/// # use neon_core::num::tolerance::Tolerance;
/// assert!(less_or_near(1.0, 2.0, Tolerance::default()));
/// assert!(less_or_near(1.0 + 1e-15, 1.0, Tolerance::default()));
/// assert!(!less_or_near(2.0, 1.0, Tolerance::default()));
/// ```
#[inline]
pub fn less_or_near<T>(a: T, b: T, tolerance: Tolerance<T>) -> bool
where
    T: NeonFloat,
{
    a < b || near(a, b, tolerance)
}

/// Returns `true` if `a > b` or `a` is near `b`.
///
/// # Examples
///
/// ```rust
/// # use neon_core::compare::greater_or_near;
/// # use neon_core::num::tolerance::Tolerance;
/// assert!(greater_or_near(2.0, 1.0, Tolerance::default()));
/// assert!(greater_or_near(1.0 - 1e-15, 1.0, Tolerance::default()));
/// assert!(!greater_or_near(1.0, 2.0, Tolerance::default()));
/// ```
#[inline]
pub fn greater_or_near<T>(a: T, b: T, tolerance: Tolerance<T>) -> bool
where
    T: NeonFloat,
{
    a > b || near(a, b, tolerance)
}

/// Three-way tolerant comparison.
///
/// Returns `Some(Ordering::Equal)` when `a` is near `b`, otherwise the strict
/// ordering of the two. Returns `None` if either operand is NaN.
///
/// # Examples
///
/// ```rust
/// # use neon_core::compare::compare;
/// # use neon_core::num::tolerance::Tolerance;
/// # use std::cmp::Ordering;
/// let tol = Tolerance::default();
/// assert_eq!(compare(1.0, 2.0, tol), Some(Ordering::Less));
/// assert_eq!(compare(1.0, 1.0 + 1e-15, tol), Some(Ordering::Equal));
/// assert_eq!(compare(f64::NAN, 1.0, tol), None);
/// ```
#[inline]
pub fn compare<T>(a: T, b: T, tolerance: Tolerance<T>) -> Option<Ordering>
where
    T: NeonFloat,
{
    if a.is_nan() || b.is_nan() {
        return None;
    }
    if near(a, b, tolerance) {
        Some(Ordering::Equal)
    } else if a < b {
        Some(Ordering::Less)
    } else {
        Some(Ordering::Greater)
    }
}

/// Returns `true` if every `xs[i]` is near `ys[i]`.
///
/// Two empty slices are trivially near.
///
/// # Errors
///
/// Returns `NeonError::LengthMismatch` if the slices differ in length.
///
/// # Examples
///
/// ```rust
/// # use neon_core::compare::all_near;
/// # use neon_core::num::tolerance::Tolerance;
/// let tol = Tolerance::default();
/// assert_eq!(all_near(&[0.1 + 0.2, 1.0], &[0.3, 1.0], tol), Ok(true));
/// assert_eq!(all_near(&[1.0, 1.0], &[1.0, 2.0], tol), Ok(false));
/// assert!(all_near(&[1.0, 2.0, 3.0], &[1.0, 2.0], tol).is_err());
/// ```
pub fn all_near<T>(xs: &[T], ys: &[T], tolerance: Tolerance<T>) -> NeonResult<bool>
where
    T: NeonFloat,
{
    validation::ensure_same_length("compare::all_near", xs.len(), ys.len())?;
    Ok(xs.iter().zip(ys).all(|(&a, &b)| near(a, b, tolerance)))
}

/// Compares every element of `xs` against `target`.
///
/// # Examples
///
/// ```rust
/// # use neon_core::compare::near_many;
/// # use neon_core::num::tolerance::Tolerance;
/// let flags = near_many(&[0.1 + 0.2, 0.3, 0.4], 0.3, Tolerance::default());
/// assert_eq!(flags, vec![true, true, false]);
/// ```
pub fn near_many<T>(xs: &[T], target: T, tolerance: Tolerance<T>) -> Vec<bool>
where
    T: NeonFloat,
{
    xs.iter().map(|&x| near(x, target, tolerance)).collect()
}

/// Returns `true` if both members of every pair are near each other.
pub fn all_near_pairs<T>(pairs: &[(T, T)], tolerance: Tolerance<T>) -> bool
where
    T: NeonFloat,
{
    pairs.iter().all(|&(a, b)| near(a, b, tolerance))
}

/// Compares the members of each pair.
///
/// # Examples
///
/// ```rust
/// # use neon_core::compare::near_pairs;
/// # use neon_core::num::tolerance::Tolerance;
/// let pairs = [(0.1 + 0.2, 0.3), (1.0, 1.0), (1.0, 2.0)];
/// assert_eq!(near_pairs(&pairs, Tolerance::default()), vec![true, true, false]);
/// ```
pub fn near_pairs<T>(pairs: &[(T, T)], tolerance: Tolerance<T>) -> Vec<bool>
where
    T: NeonFloat,
{
    pairs.iter().map(|&(a, b)| near(a, b, tolerance)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, NeonError};

    fn tol() -> Tolerance<f64> {
        Tolerance::default()
    }

    #[test]
    fn test_near_basic() {
        assert!(near(0.1 + 0.2, 0.3, tol()));
        assert!(near(1.0, 1.0, tol()));
        assert!(!near(1.0, 2.0, tol()));
    }

    #[test]
    fn test_near_relative() {
        assert!(near(1000.0, 1001.0, Tolerance::from_relative(1e-2)));
        assert!(!near(1000.0, 1001.0, Tolerance::from_relative(1e-4)));
    }

    #[test]
    fn test_near_absolute() {
        assert!(near(1e-15, 0.0, Tolerance::from_absolute(1e-14)));
        assert!(!near(1e-15, 0.0, Tolerance::from_absolute(1e-16)));
        // A purely relative tolerance never accepts a non-zero value against zero.
        assert!(!near(1e-300, 0.0, tol()));
    }

    #[test]
    fn test_near_nan() {
        assert!(!near(f64::NAN, f64::NAN, tol()));
        assert!(!near(f64::NAN, 0.0, tol()));
        assert!(!near(0.0, f64::NAN, tol()));
        assert!(!near(f64::NAN, 0.0, Tolerance::new(f64::INFINITY, f64::INFINITY)));
    }

    #[test]
    fn test_near_infinities() {
        assert!(near(f64::INFINITY, f64::INFINITY, tol()));
        assert!(near(f64::NEG_INFINITY, f64::NEG_INFINITY, tol()));
        assert!(!near(f64::INFINITY, f64::NEG_INFINITY, tol()));
        assert!(!near(f64::INFINITY, 1e308, tol()));
        assert!(!near(f64::INFINITY, 1.0, Tolerance::new(f64::INFINITY, f64::INFINITY)));
    }

    #[test]
    fn test_near_signed_zeros() {
        assert!(near(0.0, -0.0, tol()));
        assert!(near(-0.0, 0.0, Tolerance::exact()));
    }

    #[test]
    fn test_near_is_symmetric() {
        let t = Tolerance::new(1e-3, 1e-6);
        let values = [0.0, -0.0, 1e-7, 1.0, 1.0005, -1.0, 1e300, f64::MAX, f64::MIN];
        for &a in &values {
            for &b in &values {
                assert_eq!(near(a, b, t), near(b, a, t), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_near_extreme_magnitudes() {
        // |MAX - MIN| overflows to infinity and must not compare near.
        assert!(!near(f64::MAX, f64::MIN, Tolerance::from_relative(1.0)));
        assert!(near(f64::MAX, f64::MAX, Tolerance::exact()));
    }

    #[test]
    fn test_near_f32() {
        assert!(near(0.1f32 + 0.2f32, 0.3f32, Tolerance::default()));
        assert!(!near(1.0f32, 1.001f32, Tolerance::default()));
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(0.0, 1e-9));
        assert!(near_zero(-0.0, 1e-9));
        assert!(near_zero(1e-15, 1e-9));
        assert!(!near_zero(1e-5, 1e-9));
        assert!(near_zero(1e-15, 1e-14));
        assert!(!near_zero(1e-15, 1e-16));
    }

    #[test]
    fn test_near_zero_special_values() {
        assert!(!near_zero(f64::NAN, 1e-9));
        assert!(!near_zero(f64::INFINITY, f64::INFINITY));
        assert!(!near_zero(f64::NEG_INFINITY, 1e-9));
        assert!(near_zero(0.0, -1.0));
        assert!(!near_zero(1e-20, f64::NAN));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(3.0, 1e-9));
        assert!(is_integer(-5.0, 1e-9));
        assert!(is_integer(0.0, 1e-9));
        assert!(is_integer(3.0000000001, 1e-9));
        assert!(is_integer(2.9999999999, 1e-9));
        assert!(is_integer(-3.0000000001, 1e-9));
        assert!(!is_integer(3.1, 1e-9));
        assert!(!is_integer(2.5, 1e-9));
        assert!(!is_integer(f64::INFINITY, 1e-9));
        assert!(!is_integer(f64::NAN, 1e-9));
    }

    #[test]
    fn test_is_integer_large_values() {
        assert!(is_integer(1e300, 0.0));
        assert!(is_integer(f64::MAX, 0.0));
    }

    #[test]
    fn test_less_or_near() {
        assert!(less_or_near(1.0, 2.0, tol()));
        assert!(less_or_near(1.0, 1.0 + 1e-15, tol()));
        assert!(less_or_near(1.0 + 1e-15, 1.0, tol()));
        assert!(!less_or_near(2.0, 1.0, tol()));
        assert!(!less_or_near(f64::NAN, 1.0, tol()));
    }

    #[test]
    fn test_greater_or_near() {
        assert!(greater_or_near(2.0, 1.0, tol()));
        assert!(greater_or_near(1.0, 1.0 - 1e-15, tol()));
        assert!(!greater_or_near(1.0, 2.0, tol()));
        assert!(!greater_or_near(1.0, f64::NAN, tol()));
    }

    #[test]
    fn test_tolerant_relations_are_not_transitive() {
        let t = Tolerance::from_absolute(1.0);
        assert!(near(0.0, 0.9, t));
        assert!(near(0.9, 1.8, t));
        assert!(!near(0.0, 1.8, t));
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(1.0, 2.0, tol()), Some(Ordering::Less));
        assert_eq!(compare(2.0, 1.0, tol()), Some(Ordering::Greater));
        assert_eq!(compare(1.0, 1.0 + 1e-15, tol()), Some(Ordering::Equal));
        assert_eq!(compare(1.0, 1.0, tol()), Some(Ordering::Equal));
        assert_eq!(compare(f64::NEG_INFINITY, f64::INFINITY, tol()), Some(Ordering::Less));
    }

    #[test]
    fn test_compare_nan() {
        assert_eq!(compare(f64::NAN, 1.0, tol()), None);
        assert_eq!(compare(1.0, f64::NAN, tol()), None);
    }

    #[test]
    fn test_all_near() {
        assert_eq!(all_near(&[0.1 + 0.2, 1.0], &[0.3, 1.0], tol()), Ok(true));
        assert_eq!(all_near(&[1.0, 1.0], &[1.0, 2.0], tol()), Ok(false));
        assert_eq!(all_near::<f64>(&[], &[], tol()), Ok(true));
    }

    #[test]
    fn test_all_near_length_mismatch() {
        let err = all_near(&[1.0, 2.0, 3.0], &[1.0, 2.0], tol()).unwrap_err();
        assert_eq!(
            err,
            NeonError::LengthMismatch {
                operation: "compare::all_near",
                left: 3,
                right: 2,
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_near_many() {
        assert_eq!(
            near_many(&[1.0, 1.0 + 1e-12, 2.0, f64::NAN], 1.0, tol()),
            vec![true, true, false, false]
        );
        assert!(near_many(&[], 1.0, tol()).is_empty());
    }

    #[test]
    fn test_pairs() {
        let pairs = [(0.1 + 0.2, 0.3), (1.0, 1.0), (1.0, 2.0)];
        assert_eq!(near_pairs(&pairs, tol()), vec![true, true, false]);
        assert!(!all_near_pairs(&pairs, tol()));
        assert!(all_near_pairs(&pairs[..2], tol()));
        assert!(all_near_pairs::<f64>(&[], tol()));
    }
}
