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

//! # Arithmetic Function Set
//!
//! Nine independent, pure functions over `i32` (and one over `i64`). None of
//! them panics:
//!
//! - `add`, `subtract`, `multiply`, `add_long` wrap on overflow.
//! - `divide` truncates toward zero and returns `0` for a zero divisor.
//! - `add_with_overflow_check` computes the exact sum in `i64` and reports
//!   whether it fits in `i32` through a [`CheckedSum`].
//! - `abs_value` wraps for `i32::MIN`, which has no positive counterpart.
//! - `max_value` / `min_value` select the greater / lesser operand.

use crate::num::ops::widening_arithmetic::WideningAddVal;
use crate::num::ops::wrapping_arithmetic::{
    WrappingAbsVal, WrappingAddVal, WrappingMulVal, WrappingSubVal, ZeroDivVal,
};
use crate::sum::CheckedSum;
use log::debug;

/// Returns `a + b`, wrapping on overflow.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add_val(b)
}

/// Returns `a - b`, wrapping on overflow.
#[inline]
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub_val(b)
}

/// Returns `a * b`, wrapping on overflow.
#[inline]
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul_val(b)
}

/// Returns `a / b` truncated toward zero.
///
/// A zero divisor is not an error: the result is `0`. `i32::MIN / -1`
/// wraps to `i32::MIN`.
#[inline]
pub fn divide(a: i32, b: i32) -> i32 {
    if b == 0 {
        debug!("divide({}, 0): zero divisor, returning 0", a);
    }
    a.zero_div_val(b)
}

/// Adds `a` and `b` in 64-bit arithmetic and checks that the result fits in
/// 32 bits.
///
/// On overflow the result is [`CheckedSum::Overflowed`], whose value is `0`.
///
/// # Examples
///
/// ```rust
/// # use calc_core::arith::add_with_overflow_check;
/// assert_eq!(add_with_overflow_check(1, 2).into_parts(), (3, false));
/// assert_eq!(add_with_overflow_check(i32::MAX, 1).into_parts(), (0, true));
/// ```
#[inline]
pub fn add_with_overflow_check(a: i32, b: i32) -> CheckedSum<i32> {
    let sum = CheckedSum::from(a.checked_widening_add_val(b));
    if sum.has_overflowed() {
        debug!(
            "add_with_overflow_check({}, {}): sum {} exceeds 32-bit range",
            a,
            b,
            a.widening_add_val(b)
        );
    }
    sum
}

/// Returns `a + b` over 64-bit operands, wrapping on overflow.
#[inline]
pub fn add_long(a: i64, b: i64) -> i64 {
    a.wrapping_add_val(b)
}

/// Returns `|a|`. `abs_value(i32::MIN)` wraps to `i32::MIN`.
#[inline]
pub fn abs_value(a: i32) -> i32 {
    a.wrapping_abs_val()
}

#[inline]
pub fn max_value(a: i32, b: i32) -> i32 {
    a.max(b)
}

#[inline]
pub fn min_value(a: i32, b: i32) -> i32 {
    a.min(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [i32; 11] = [
        i32::MIN,
        i32::MIN + 1,
        -65_536,
        -7,
        -1,
        0,
        1,
        7,
        65_536,
        i32::MAX - 1,
        i32::MAX,
    ];

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(3, 4), 7);
        assert_eq!(subtract(7, 3), 4);
        assert_eq!(multiply(3, 4), 12);
        assert_eq!(divide(12, 3), 4);
    }

    #[test]
    fn test_add_table() {
        let cases = [
            ("positive numbers", 3, 4, 7),
            ("zero and positive", 0, 4, 4),
            ("zero and zero", 0, 0, 0),
            ("negative numbers", -3, -4, -7),
            ("mixed numbers", -3, 4, 1),
        ];
        for (name, a, b, expected) in cases {
            assert_eq!(add(a, b), expected, "{}", name);
        }
    }

    #[test]
    fn test_divide_table() {
        let cases = [
            ("normal division", 10, 2, 5),
            ("division by zero", 10, 0, 0),
            ("negative division", -10, 2, -5),
            ("zero dividend", 0, 5, 0),
        ];
        for (name, a, b, expected) in cases {
            assert_eq!(divide(a, b), expected, "{}", name);
        }
    }

    #[test]
    fn test_add_and_multiply_are_commutative() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(add(a, b), add(b, a), "add({}, {})", a, b);
                assert_eq!(multiply(a, b), multiply(b, a), "multiply({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_subtract_is_anti_commutative_without_overflow() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                let (forward, forward_overflow) = a.overflowing_sub(b);
                let (backward, backward_overflow) = b.overflowing_sub(a);
                if forward_overflow || backward_overflow || backward == i32::MIN {
                    continue;
                }
                assert_eq!(subtract(a, b), forward);
                assert_eq!(subtract(a, b), -subtract(b, a), "subtract({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_wrapping_operations() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(subtract(i32::MIN, 1), i32::MAX);
        assert_eq!(multiply(i32::MAX, 2), -2);
        assert_eq!(add_long(i64::MAX, 1), i64::MIN);
        assert_eq!(add_long(9_223_372_036_854_775_807, 1), -9_223_372_036_854_775_808);
    }

    #[test]
    fn test_add_long_exceeds_32_bit_range() {
        let big = i64::from(i32::MAX) + 1;
        let result = add_long(big, big);
        assert!(result > i64::from(i32::MAX));
        assert_eq!(result, 4_294_967_296);
    }

    #[test]
    fn test_divide_by_zero_is_zero() {
        for &a in &SAMPLES {
            assert_eq!(divide(a, 0), 0, "divide({}, 0)", a);
        }
    }

    #[test]
    fn test_divide_matches_native_truncation() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                if b == 0 || (a == i32::MIN && b == -1) {
                    continue;
                }
                assert_eq!(divide(a, b), a / b, "divide({}, {})", a, b);
            }
        }
        assert_eq!(divide(-7, 2), -3);
        assert_eq!(divide(i32::MIN, -1), i32::MIN);
    }

    #[test]
    fn test_add_with_overflow_check() {
        assert_eq!(add_with_overflow_check(1, 2), CheckedSum::Exact(3));
        assert_eq!(add_with_overflow_check(i32::MAX, 1), CheckedSum::Overflowed);
        assert_eq!(add_with_overflow_check(i32::MIN, -1), CheckedSum::Overflowed);
        assert_eq!(add_with_overflow_check(i32::MAX, 1).value(), 0);
        assert_eq!(
            add_with_overflow_check(i32::MAX, i32::MIN),
            CheckedSum::Exact(-1)
        );
    }

    #[test]
    fn test_add_with_overflow_check_agrees_with_wide_sum() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                let wide = i64::from(a) + i64::from(b);
                let fits = wide >= i64::from(i32::MIN) && wide <= i64::from(i32::MAX);
                let (value, overflowed) = add_with_overflow_check(a, b).into_parts();
                assert_eq!(overflowed, !fits, "add_with_overflow_check({}, {})", a, b);
                if fits {
                    assert_eq!(i64::from(value), wide);
                } else {
                    assert_eq!(value, 0);
                }
            }
        }
    }

    #[test]
    fn test_special_functions() {
        assert_eq!(abs_value(5), 5);
        assert_eq!(abs_value(-5), 5);
        assert_eq!(abs_value(0), 0);
        assert_eq!(abs_value(i32::MIN), i32::MIN);

        assert_eq!(max_value(5, 3), 5);
        assert_eq!(max_value(3, 5), 5);
        assert_eq!(max_value(5, 5), 5);
        assert_eq!(max_value(3, 7), 7);

        assert_eq!(min_value(5, 3), 3);
        assert_eq!(min_value(3, 5), 3);
        assert_eq!(min_value(5, 5), 5);
        assert_eq!(min_value(3, 7), 3);
    }

    #[test]
    fn test_composite_operations() {
        // (10 + 5) * 2 - 8
        assert_eq!(subtract(multiply(add(10, 5), 2), 8), 22);
        // |a + b| for two negative operands
        assert_eq!(abs_value(add(-5, -3)), 8);
    }
}
