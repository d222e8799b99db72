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

//! # Error-Returning Arithmetic
//!
//! `Result`-based counterparts of the two operations of the function set
//! that substitute sentinel values. The sentinel-returning originals in
//! [`crate::arith`] are unchanged; this layer is for Rust callers that
//! prefer `?` propagation over inspecting a `0` result.

use crate::arith::{add_with_overflow_check, divide};
use crate::error::ArithmeticError;

/// Divides `a` by `b`, failing with [`ArithmeticError::DivisionByZero`] when
/// `b` is zero.
///
/// # Examples
///
/// ```rust
/// # use calc_core::strict::try_divide;
/// # use calc_core::ArithmeticError;
/// assert_eq!(try_divide(12, 3), Ok(4));
/// assert_eq!(try_divide(10, 0), Err(ArithmeticError::DivisionByZero { dividend: 10 }));
/// ```
#[inline]
pub fn try_divide(a: i32, b: i32) -> Result<i32, ArithmeticError> {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero { dividend: a });
    }
    Ok(divide(a, b))
}

/// Adds `a` and `b`, failing with [`ArithmeticError::Overflow`] when the sum
/// does not fit in 32 bits.
#[inline]
pub fn try_add(a: i32, b: i32) -> Result<i32, ArithmeticError> {
    add_with_overflow_check(a, b)
        .into_option()
        .ok_or(ArithmeticError::Overflow { lhs: a, rhs: b })
}
