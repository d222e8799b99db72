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

//! # Foreign Function Interface (FFI) for the Arithmetic Function Set
//!
//! The exported symbols and their C declarations:
//!
//! ### Basic arithmetic
//! * `int add(int a, int b)`
//! * `int subtract(int a, int b)`
//! * `int multiply(int a, int b)`
//! * `int divide(int a, int b)`
//!
//! ### Overflow-aware / widened arithmetic
//! * `int add_with_overflow_check(int a, int b, int* has_overflow)`
//! * `long long add_long(long long a, long long b)`
//!
//! ### Comparison / absolute-value helpers
//! * `int abs_value(int a)`
//! * `int max_value(int a, int b)`
//! * `int min_value(int a, int b)`
//!
//! All functions are pure and may be called concurrently from any thread.

use calc_core::arith as calc;
use libc::{c_int, c_longlong};

/// Returns `a + b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn add(a: c_int, b: c_int) -> c_int {
    calc::add(a, b)
}

/// Returns `a - b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn subtract(a: c_int, b: c_int) -> c_int {
    calc::subtract(a, b)
}

/// Returns `a * b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn multiply(a: c_int, b: c_int) -> c_int {
    calc::multiply(a, b)
}

/// Returns `a / b` truncated toward zero, or `0` if `b` is zero.
#[no_mangle]
pub extern "C" fn divide(a: c_int, b: c_int) -> c_int {
    calc::divide(a, b)
}

/// Adds `a` and `b` and reports whether the exact sum fits in an `int`.
///
/// Writes `1` to `*has_overflow` and returns `0` if the sum overflows,
/// otherwise writes `0` and returns the sum.
///
/// # Panics
///
/// This function will panic if `has_overflow` is a null pointer.
///
/// # Safety
///
/// This function is unsafe because it writes through a raw pointer.
/// The caller must ensure that `has_overflow` points to a valid,
/// writable `int`.
#[no_mangle]
pub unsafe extern "C" fn add_with_overflow_check(
    a: c_int,
    b: c_int,
    has_overflow: *mut c_int,
) -> c_int {
    assert!(
        !has_overflow.is_null(),
        "called `add_with_overflow_check` with null has_overflow pointer"
    );

    let (value, overflowed) = calc::add_with_overflow_check(a, b).into_parts();
    *has_overflow = c_int::from(overflowed);
    value
}

/// Returns `a + b` over `long long` operands, wrapping on overflow.
#[no_mangle]
pub extern "C" fn add_long(a: c_longlong, b: c_longlong) -> c_longlong {
    calc::add_long(a, b)
}

/// Returns `|a|`. The absolute value of `INT_MIN` wraps to `INT_MIN`.
#[no_mangle]
pub extern "C" fn abs_value(a: c_int) -> c_int {
    calc::abs_value(a)
}

#[no_mangle]
pub extern "C" fn max_value(a: c_int, b: c_int) -> c_int {
    calc::max_value(a, b)
}

#[no_mangle]
pub extern "C" fn min_value(a: c_int, b: c_int) -> c_int {
    calc::min_value(a, b)
}
