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

//! Error types shared by every fallible operation in the crate.
//!
//! `NeonError` is the single error type returned by the library, so matching
//! on it catches every failure uniformly. `NeonError::kind` narrows a failure
//! down to its `ErrorKind` for callers that only care about *what class* of
//! precondition was violated.

use thiserror::Error;

/// The class of precondition a failed operation violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument lies outside the operation's domain.
    InvalidValue,
    /// An aggregate operation received no elements.
    EmptyInput,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidValue => write!(f, "InvalidValue"),
            ErrorKind::EmptyInput => write!(f, "EmptyInput"),
        }
    }
}

/// Errors returned by the fallible operations of this crate.
///
/// # Examples
///
/// ```rust
/// # use neon_core::error::{ErrorKind, NeonError};
/// # use neon_core::safe;
/// let err = safe::div(10.0, 0.0).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidValue);
/// assert!(matches!(err, NeonError::InvalidValue { operation: "safe::div", .. }));
///
/// let err = safe::sum_exact::<f64>(&[]).unwrap_err();
/// assert!(err.is_empty_input());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NeonError {
    /// An argument violates a domain precondition.
    #[error("{operation}: invalid value: {reason}")]
    InvalidValue {
        /// The operation that rejected the input.
        operation: &'static str,
        /// Human readable description of the violated precondition.
        reason: String,
    },

    /// Two sequences that must be compared element-wise differ in length.
    #[error("{operation}: length mismatch: left has {left} elements, right has {right}")]
    LengthMismatch {
        /// The operation that rejected the input.
        operation: &'static str,
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// An aggregate operation received an empty sequence.
    #[error("{operation}: cannot operate on empty {name}")]
    EmptyInput {
        /// The operation that rejected the input.
        operation: &'static str,
        /// Name of the offending parameter.
        name: &'static str,
    },
}

impl NeonError {
    /// Returns the class of this error.
    ///
    /// A length mismatch is an invalid argument and reports `ErrorKind::InvalidValue`.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            NeonError::InvalidValue { .. } | NeonError::LengthMismatch { .. } => {
                ErrorKind::InvalidValue
            }
            NeonError::EmptyInput { .. } => ErrorKind::EmptyInput,
        }
    }

    /// Returns the name of the operation that failed.
    #[inline]
    pub fn operation(&self) -> &'static str {
        match self {
            NeonError::InvalidValue { operation, .. }
            | NeonError::LengthMismatch { operation, .. }
            | NeonError::EmptyInput { operation, .. } => operation,
        }
    }

    /// Returns `true` if this is an `ErrorKind::InvalidValue` error.
    #[inline]
    pub fn is_invalid_value(&self) -> bool {
        self.kind() == ErrorKind::InvalidValue
    }

    /// Returns `true` if this is an `ErrorKind::EmptyInput` error.
    #[inline]
    pub fn is_empty_input(&self) -> bool {
        self.kind() == ErrorKind::EmptyInput
    }
}

/// Result alias used throughout the crate.
pub type NeonResult<T> = Result<T, NeonError>;
