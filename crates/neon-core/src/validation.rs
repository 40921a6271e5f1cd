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

//! Precondition checks that build a `NeonError` and record the rejection.
//!
//! Every error the crate produces passes through here, so each rejected
//! input emits exactly one `debug` event.

use crate::error::{NeonError, NeonResult};
use crate::num::float::NeonFloat;

/// Builds an `InvalidValue` error for `operation`.
#[cold]
pub(crate) fn invalid_value(operation: &'static str, reason: impl Into<String>) -> NeonError {
    let reason = reason.into();
    tracing::debug!(operation, reason = %reason, "rejected invalid value");
    NeonError::InvalidValue { operation, reason }
}

/// Fails with `EmptyInput` if `values` has no elements.
#[inline]
pub(crate) fn ensure_non_empty<T>(
    values: &[T],
    operation: &'static str,
    name: &'static str,
) -> NeonResult<()> {
    if values.is_empty() {
        tracing::debug!(operation, name, "rejected empty input");
        return Err(NeonError::EmptyInput { operation, name });
    }
    Ok(())
}

/// Fails with `LengthMismatch` if `left != right`.
#[inline]
pub(crate) fn ensure_same_length(
    operation: &'static str,
    left: usize,
    right: usize,
) -> NeonResult<()> {
    if left != right {
        tracing::debug!(operation, left, right, "rejected sequences of different length");
        return Err(NeonError::LengthMismatch {
            operation,
            left,
            right,
        });
    }
    Ok(())
}

/// Fails with `InvalidValue` if `value` is NaN.
#[inline]
pub(crate) fn ensure_not_nan<T>(operation: &'static str, name: &str, value: T) -> NeonResult<()>
where
    T: NeonFloat,
{
    if value.is_nan() {
        return Err(invalid_value(operation, format!("{name} is NaN")));
    }
    Ok(())
}

/// Fails with `InvalidValue` if `value` is NaN or infinite.
#[inline]
pub(crate) fn ensure_finite<T>(operation: &'static str, name: &str, value: T) -> NeonResult<()>
where
    T: NeonFloat,
{
    ensure_not_nan(operation, name, value)?;
    if value.is_infinite() {
        return Err(invalid_value(operation, format!("{name} is infinite")));
    }
    Ok(())
}
