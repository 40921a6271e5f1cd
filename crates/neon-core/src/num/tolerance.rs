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

use crate::{error::NeonResult, num::float::NeonFloat, validation};

/// A relative/absolute tolerance pair used by the tolerant comparisons.
///
/// Two values `a` and `b` are considered near when
///
/// ```text
/// |a - b| <= max(relative * max(|a|, |b|), absolute)
/// ```
///
/// The relative part scales with the operands and is the right choice for
/// values far from zero. The absolute part is a floor that matters close to
/// zero, where any relative tolerance collapses.
///
/// # Invariants
/// Neither component is negative or NaN. Infinite components are allowed.
///
/// # Examples
///
/// ```rust
/// # use neon_core::num::tolerance::Tolerance;
/// let tol = Tolerance::new(0.5, 0.0);
/// assert_eq!(tol.allowance(8.0, 2.0), 4.0);
///
/// let tol = Tolerance::<f64>::default().with_absolute(1e-12);
/// assert_eq!(tol.relative(), 1e-9);
/// assert_eq!(tol.absolute(), 1e-12);
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tolerance<T>
where
    T: NeonFloat,
{
    relative: T,
    absolute: T,
}

#[inline(always)]
fn is_valid_component<T: NeonFloat>(value: T) -> bool {
    // false for NaN
    value >= T::zero()
}

impl<T> Tolerance<T>
where
    T: NeonFloat,
{
    /// Creates a new `Tolerance`.
    ///
    /// # Panics
    ///
    /// Panics if either component is negative or NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use neon_core::num::tolerance::Tolerance;
    /// let tol = Tolerance::new(1e-6, 1e-12);
    /// assert_eq!(tol.relative(), 1e-6);
    /// ```
    #[inline]
    pub fn new(relative: T, absolute: T) -> Self {
        assert!(
            is_valid_component(relative) && is_valid_component(absolute),
            "Invalid tolerance: relative and absolute components must be non-negative and not NaN"
        );
        Self { relative, absolute }
    }

    /// Creates a new `Tolerance` if both components are valid.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidValue` error if either component is negative or NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use neon_core::num::tolerance::Tolerance;
    /// assert!(Tolerance::try_new(1e-9, 0.0).is_ok());
    /// assert!(Tolerance::try_new(-1e-9, 0.0).is_err());
    /// assert!(Tolerance::try_new(0.0, f64::NAN).is_err());
    /// ```
    #[inline]
    pub fn try_new(relative: T, absolute: T) -> NeonResult<Self> {
        if !is_valid_component(relative) {
            return Err(validation::invalid_value(
                "Tolerance::try_new",
                format!("relative tolerance must be non-negative, got {relative}"),
            ));
        }
        if !is_valid_component(absolute) {
            return Err(validation::invalid_value(
                "Tolerance::try_new",
                format!("absolute tolerance must be non-negative, got {absolute}"),
            ));
        }
        Ok(Self { relative, absolute })
    }

    /// Creates a new `Tolerance` without checking invariants in release builds.
    ///
    /// The caller must ensure both components are non-negative and not NaN.
    #[inline]
    pub fn new_unchecked(relative: T, absolute: T) -> Self {
        debug_assert!(
            is_valid_component(relative) && is_valid_component(absolute),
            "Invalid tolerance: relative and absolute components must be non-negative and not NaN"
        );
        Self { relative, absolute }
    }

    /// A purely relative tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `relative` is negative or NaN.
    #[inline]
    pub fn from_relative(relative: T) -> Self {
        Self::new(relative, T::zero())
    }

    /// A purely absolute tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `absolute` is negative or NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use neon_core::num::tolerance::Tolerance;
    /// let tol = Tolerance::from_absolute(0.5);
    /// assert_eq!(tol.allowance(1e9, 1e9), 0.5);
    /// ```
    #[inline]
    pub fn from_absolute(absolute: T) -> Self {
        Self::new(T::zero(), absolute)
    }

    /// The zero tolerance; only exactly equal values are near.
    #[inline]
    pub fn exact() -> Self {
        Self {
            relative: T::zero(),
            absolute: T::zero(),
        }
    }

    /// Returns the relative component.
    #[inline]
    pub fn relative(&self) -> T {
        self.relative
    }

    /// Returns the absolute component.
    #[inline]
    pub fn absolute(&self) -> T {
        self.absolute
    }

    /// Returns a copy with the relative component replaced.
    ///
    /// # Panics
    ///
    /// Panics if `relative` is negative or NaN.
    #[inline]
    pub fn with_relative(self, relative: T) -> Self {
        Self::new(relative, self.absolute)
    }

    /// Returns a copy with the absolute component replaced.
    ///
    /// # Panics
    ///
    /// Panics if `absolute` is negative or NaN.
    #[inline]
    pub fn with_absolute(self, absolute: T) -> Self {
        Self::new(self.relative, absolute)
    }

    /// Returns the largest `|a - b|` this tolerance accepts for the operands `a` and `b`.
    #[inline]
    pub fn allowance(&self, a: T, b: T) -> T {
        // `Float::max` ignores a NaN operand, which covers `inf * 0`.
        (self.relative * a.abs().max(b.abs())).max(self.absolute)
    }
}

impl<T> Default for Tolerance<T>
where
    T: NeonFloat,
{
    /// `T::DEFAULT_RELATIVE_TOLERANCE` with no absolute floor.
    #[inline]
    fn default() -> Self {
        Self {
            relative: T::DEFAULT_RELATIVE_TOLERANCE,
            absolute: T::zero(),
        }
    }
}

impl<T> std::fmt::Display for Tolerance<T>
where
    T: NeonFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tolerance(rel: {}, abs: {})", self.relative, self.absolute)
    }
}
