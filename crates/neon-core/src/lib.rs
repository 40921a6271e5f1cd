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

//! # Neon Core
//!
//! Near-equality and tolerance arithmetic for IEEE-754 floating-point
//! numbers. Every function is pure and generic over `f32` and `f64` through
//! the `NeonFloat` trait.
//!
//! ## Modules
//!
//! - `compare`: Tolerance-based equality (`near`, `near_zero`, `is_integer`),
//!   tolerant ordering (`less_or_near`, `greater_or_near`, `compare`) and
//!   batch checks (`all_near`, `near_many`).
//! - `clamp`: Snapping onto zero, integers, a target, a set of candidates or
//!   the boundaries of a range.
//! - `safe`: Guarded division, modulo, square root, logarithms and powers
//!   that report domain violations, plus compensated summation
//!   (`sum_exact`, `mean_exact`).
//! - `ulp`: ULP size, ULP distance, ULP-based nearness, and stepping by
//!   representable values.
//! - `num`: The `NeonFloat` trait and the `Tolerance` value type.
//! - `error`: `NeonError` and its `ErrorKind`.
//!
//! ## Example
//!
//! ```rust
//! use neon_core::{clamp, compare, safe, ulp, Tolerance};
//!
//! assert!(compare::near(0.1 + 0.2, 0.3, Tolerance::default()));
//! assert_eq!(clamp::to_zero(1e-12, 1e-9), 0.0);
//! assert!(safe::div(1.0, 0.0).is_err());
//! assert_eq!(safe::sum_exact(&[1e16, 1.0, -1e16]), Ok(1.0));
//! assert_eq!(ulp::diff(1.0, ulp::next(1.0)), Ok(1));
//! ```
//!
//! ## Logging
//!
//! Rejected inputs emit a `debug` level `tracing` event carrying the
//! operation name and the reason. The crate never installs a subscriber.

pub mod clamp;
pub mod compare;
pub mod error;
pub mod num;
pub mod safe;
pub mod ulp;

mod validation;

pub use error::{ErrorKind, NeonError, NeonResult};
pub use num::{float::NeonFloat, tolerance::Tolerance};
