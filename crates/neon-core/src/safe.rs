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

//! # Guarded Arithmetic
//!
//! Arithmetic that reports domain violations instead of silently producing
//! NaN or infinity, plus compensated summation.
//!
//! The fallible functions return `NeonResult<T>` and fail with
//! `ErrorKind::InvalidValue` (domain violations) or `ErrorKind::EmptyInput`
//! (aggregates over empty slices). The `div_or*` variants never fail: their
//! contract is to substitute a defined fallback for a zero denominator.
//!
//! The `*_within` variants take a `zero_tol` and treat any denominator (or
//! modulus) with `|d| <= zero_tol` as zero. The plain functions are the
//! `zero_tol = 0` case.

use crate::{compare, error::NeonResult, num::float::NeonFloat, validation};

/// Divides `numerator` by `denominator`.
///
/// # Errors
///
/// Returns an `InvalidValue` error if `denominator` is zero of either sign.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::div;
/// assert_eq!(div(6.0, 3.0), Ok(2.0));
/// assert!(div(10.0, 0.0).is_err());
/// assert!(div(10.0, -0.0).is_err());
/// ```
#[inline]
pub fn div<T>(numerator: T, denominator: T) -> NeonResult<T>
where
    T: NeonFloat,
{
    div_within(numerator, denominator, T::zero())
}

/// Divides `numerator` by `denominator`, treating any denominator within
/// `zero_tol` of zero as zero.
///
/// # Errors
///
/// Returns an `InvalidValue` error if `denominator` is near zero.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::div_within;
/// assert!(div_within(1.0, 1e-15, 1e-10).is_err());
/// assert_eq!(div_within(1.0, 0.5, 1e-10), Ok(2.0));
/// ```
#[inline]
pub fn div_within<T>(numerator: T, denominator: T, zero_tol: T) -> NeonResult<T>
where
    T: NeonFloat,
{
    if compare::near_zero(denominator, zero_tol) {
        return Err(validation::invalid_value(
            "safe::div",
            format!("cannot divide {numerator} by {denominator}, which is zero within {zero_tol}"),
        ));
    }
    Ok(numerator / denominator)
}

/// Divides `numerator` by `denominator`, returning `fallback` for a zero denominator.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::div_or;
/// assert_eq!(div_or(1.0, 0.0, 99.0), 99.0);
/// assert_eq!(div_or(1.0, 2.0, 99.0), 0.5);
/// ```
#[inline]
pub fn div_or<T>(numerator: T, denominator: T, fallback: T) -> T
where
    T: NeonFloat,
{
    div_or_within(numerator, denominator, fallback, T::zero())
}

/// Like [`div_or`], but a denominator within `zero_tol` of zero yields `fallback`.
#[inline]
pub fn div_or_within<T>(numerator: T, denominator: T, fallback: T, zero_tol: T) -> T
where
    T: NeonFloat,
{
    if compare::near_zero(denominator, zero_tol) {
        fallback
    } else {
        numerator / denominator
    }
}

/// Divides `numerator` by `denominator`, returning `0` for a zero denominator.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::div_or_zero;
/// assert_eq!(div_or_zero(6.0, 3.0), 2.0);
/// assert_eq!(div_or_zero(10.0, 0.0), 0.0);
/// ```
#[inline]
pub fn div_or_zero<T>(numerator: T, denominator: T) -> T
where
    T: NeonFloat,
{
    div_or(numerator, denominator, T::zero())
}

/// Like [`div_or_zero`], but a denominator within `zero_tol` of zero yields `0`.
#[inline]
pub fn div_or_zero_within<T>(numerator: T, denominator: T, zero_tol: T) -> T
where
    T: NeonFloat,
{
    div_or_within(numerator, denominator, T::zero(), zero_tol)
}

/// Divides `numerator` by `denominator`, returning a signed infinity for a
/// zero denominator.
///
/// The infinity takes the sign of `numerator`, regardless of the sign of
/// the zero. `0 / 0` and `NaN / 0` are NaN.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::div_or_inf;
/// assert_eq!(div_or_inf(10.0, 0.0), f64::INFINITY);
/// assert_eq!(div_or_inf(-10.0, 0.0), f64::NEG_INFINITY);
/// assert_eq!(div_or_inf(-10.0, -0.0), f64::NEG_INFINITY);
/// assert!(div_or_inf(0.0f64, 0.0).is_nan());
/// ```
#[inline]
pub fn div_or_inf<T>(numerator: T, denominator: T) -> T
where
    T: NeonFloat,
{
    div_or_inf_within(numerator, denominator, T::zero())
}

/// Like [`div_or_inf`], with `zero_tol` applied to both operands: a
/// near-zero denominator gives a signed infinity, and NaN if the numerator
/// is near zero as well.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::div_or_inf_within;
/// assert_eq!(div_or_inf_within(-1.0, 1e-15, 1e-10), f64::NEG_INFINITY);
/// assert!(div_or_inf_within(1e-12f64, 1e-15, 1e-10).is_nan());
/// ```
#[inline]
pub fn div_or_inf_within<T>(numerator: T, denominator: T, zero_tol: T) -> T
where
    T: NeonFloat,
{
    if !compare::near_zero(denominator, zero_tol) {
        return numerator / denominator;
    }
    if compare::near_zero(numerator, zero_tol) || numerator.is_nan() {
        T::nan()
    } else if numerator.is_sign_negative() {
        T::neg_infinity()
    } else {
        T::infinity()
    }
}

/// Floored modulo: the result has the sign of `m` and `|result| < |m|`.
///
/// This is the `mod` operation. It differs from Rust's `%` (truncated
/// remainder) for operands of different sign. When the shift by `m` rounds
/// onto `m` itself (a tiny `a` of the opposite sign), the result is a zero
/// carrying the sign of `m`.
///
/// # Errors
///
/// Returns an `InvalidValue` error if either operand is NaN or infinite, or
/// if `m` is zero of either sign.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::modulo;
/// assert_eq!(modulo(7.0, 3.0), Ok(1.0));
/// assert_eq!(modulo(-7.0, 3.0), Ok(2.0));
/// assert_eq!(modulo(7.0, -3.0), Ok(-2.0));
/// assert!(modulo(7.0, 0.0).is_err());
/// assert!(modulo(f64::INFINITY, 3.0).is_err());
/// ```
#[inline]
pub fn modulo<T>(a: T, m: T) -> NeonResult<T>
where
    T: NeonFloat,
{
    modulo_within(a, m, T::zero())
}

/// Like [`modulo`], but a modulus within `zero_tol` of zero is rejected as zero.
///
/// # Errors
///
/// Returns an `InvalidValue` error if either operand is NaN or infinite, or
/// if `m` is near zero.
pub fn modulo_within<T>(a: T, m: T, zero_tol: T) -> NeonResult<T>
where
    T: NeonFloat,
{
    validation::ensure_finite("safe::modulo", "dividend", a)?;
    validation::ensure_finite("safe::modulo", "modulus", m)?;
    if compare::near_zero(m, zero_tol) {
        return Err(validation::invalid_value(
            "safe::modulo",
            format!("cannot reduce {a} modulo {m}, which is zero within {zero_tol}"),
        ));
    }

    let signed_zero = if m.is_sign_negative() { -T::zero() } else { T::zero() };
    let r = a % m;
    if r == T::zero() {
        return Ok(signed_zero);
    }
    if (r < T::zero()) == (m < T::zero()) {
        return Ok(r);
    }
    let shifted = r + m;
    if shifted == m { Ok(signed_zero) } else { Ok(shifted) }
}

/// Square root of a non-negative value.
///
/// `sqrt(-0.0)` is `-0.0`.
///
/// # Errors
///
/// Returns an `InvalidValue` error if `a` is negative or NaN.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::sqrt;
/// assert_eq!(sqrt(9.0), Ok(3.0));
/// assert!(sqrt(-1.0).is_err());
/// ```
#[inline]
pub fn sqrt<T>(a: T) -> NeonResult<T>
where
    T: NeonFloat,
{
    validation::ensure_not_nan("safe::sqrt", "argument", a)?;
    if a < T::zero() {
        return Err(validation::invalid_value(
            "safe::sqrt",
            format!("argument must be non-negative, got {a}"),
        ));
    }
    Ok(a.sqrt())
}

/// Natural logarithm of a positive value.
///
/// # Errors
///
/// Returns an `InvalidValue` error if `a` is not positive or is NaN.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::ln;
/// assert_eq!(ln(1.0), Ok(0.0));
/// assert!(ln(0.0).is_err());
/// ```
#[inline]
pub fn ln<T>(a: T) -> NeonResult<T>
where
    T: NeonFloat,
{
    ensure_positive("safe::ln", "argument", a)?;
    Ok(a.ln())
}

/// Logarithm of `a` in the given `base`.
///
/// Bases `2` and `10` use the dedicated routines, so exact powers of those
/// bases produce exact results.
///
/// # Errors
///
/// Returns an `InvalidValue` error if `a <= 0`, `base <= 0`, `base == 1`,
/// `base` is infinite, or either operand is NaN.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::log;
/// assert_eq!(log(100.0, 10.0), Ok(2.0));
/// assert_eq!(log(8.0, 2.0), Ok(3.0));
/// assert!(log(8.0, 1.0).is_err());
/// assert!(log(-8.0, 2.0).is_err());
/// ```
pub fn log<T>(a: T, base: T) -> NeonResult<T>
where
    T: NeonFloat,
{
    ensure_positive("safe::log", "argument", a)?;
    ensure_positive("safe::log", "base", base)?;
    validation::ensure_finite("safe::log", "base", base)?;
    if base == T::one() {
        return Err(validation::invalid_value("safe::log", "base must not be 1"));
    }

    let two = T::one() + T::one();
    let ten = two * (two + two) + two;
    if base == two {
        Ok(a.log2())
    } else if base == ten {
        Ok(a.log10())
    } else {
        Ok(a.ln() / base.ln())
    }
}

/// Raises `base` to the power `exponent`.
///
/// `pow(0, 0)` is `1`. Overflow to infinity is not treated as an error.
///
/// # Errors
///
/// Returns an `InvalidValue` error if
/// - either operand is NaN,
/// - `base` is zero and `exponent` is negative,
/// - `base` is negative and finite while `exponent` is finite and not an integer.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::pow;
/// assert_eq!(pow(2.0, 3.0), Ok(8.0));
/// assert_eq!(pow(-2.0, 3.0), Ok(-8.0));
/// assert_eq!(pow(0.0, 0.0), Ok(1.0));
/// assert!(pow(-1.0, 0.5).is_err());
/// assert!(pow(0.0, -1.0).is_err());
/// ```
pub fn pow<T>(base: T, exponent: T) -> NeonResult<T>
where
    T: NeonFloat,
{
    validation::ensure_not_nan("safe::pow", "base", base)?;
    validation::ensure_not_nan("safe::pow", "exponent", exponent)?;

    if base == T::zero() && exponent < T::zero() {
        return Err(validation::invalid_value(
            "safe::pow",
            format!("zero cannot be raised to the negative power {exponent}"),
        ));
    }
    if base < T::zero()
        && base.is_finite()
        && exponent.is_finite()
        && exponent.fract() != T::zero()
    {
        return Err(validation::invalid_value(
            "safe::pow",
            format!("negative base {base} with non-integer exponent {exponent} has no real result"),
        ));
    }
    Ok(base.powf(exponent))
}

/// Sums `values` with Neumaier's compensated summation.
///
/// The running compensation captures the low-order bits lost by each
/// addition, whichever operand is larger, so cancellation between large
/// terms does not swallow small ones. If the plain running sum overflows or
/// meets a NaN, that IEEE result is returned as is.
///
/// # Errors
///
/// Returns an `EmptyInput` error if `values` is empty.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::sum_exact;
/// let values = [1e16, 1.0, -1e16];
/// assert_eq!(values.iter().sum::<f64>(), 0.0);
/// assert_eq!(sum_exact(&values), Ok(1.0));
/// ```
pub fn sum_exact<T>(values: &[T]) -> NeonResult<T>
where
    T: NeonFloat,
{
    validation::ensure_non_empty(values, "safe::sum_exact", "values")?;
    Ok(compensated_sum(values))
}

/// Arithmetic mean of `values`, computed from `sum_exact`.
///
/// # Errors
///
/// Returns an `EmptyInput` error if `values` is empty.
///
/// # Examples
///
/// ```rust
/// # use neon_core::safe::mean_exact;
/// assert_eq!(mean_exact(&[1.0, 2.0, 3.0]), Ok(2.0));
/// assert!(mean_exact::<f64>(&[]).is_err());
/// ```
pub fn mean_exact<T>(values: &[T]) -> NeonResult<T>
where
    T: NeonFloat,
{
    validation::ensure_non_empty(values, "safe::mean_exact", "values")?;
    Ok(compensated_sum(values) / T::from_len(values.len()))
}

#[inline]
fn compensated_sum<T>(values: &[T]) -> T
where
    T: NeonFloat,
{
    let mut sum = T::zero();
    let mut compensation = T::zero();
    for &x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            compensation = compensation + ((sum - t) + x);
        } else {
            compensation = compensation + ((x - t) + sum);
        }
        sum = t;
    }
    if !sum.is_finite() {
        return sum;
    }
    sum + compensation
}

#[inline]
fn ensure_positive<T>(operation: &'static str, name: &str, value: T) -> NeonResult<()>
where
    T: NeonFloat,
{
    validation::ensure_not_nan(operation, name, value)?;
    if value <= T::zero() {
        return Err(validation::invalid_value(
            operation,
            format!("{name} must be positive, got {value}"),
        ));
    }
    Ok(())
}
