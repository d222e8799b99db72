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

use crate::num::constants::Zero;
use core::ops::{Add, Div, Mul, Sub};

/// A trait for types that support wrapping addition by value (no references).
///
/// The result wraps around at the boundary of the type, matching native
/// two's-complement machine arithmetic.
///
/// # Examples
///
/// ```rust
/// # use calc_core::num::ops::wrapping_arithmetic::WrappingAddVal;
/// let a: i32 = i32::MAX;
/// assert_eq!(a.wrapping_add_val(1), i32::MIN); // Wraps around
/// assert_eq!(3i32.wrapping_add_val(4), 7);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

/// A trait for types that support wrapping subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use calc_core::num::ops::wrapping_arithmetic::WrappingSubVal;
///
/// let a: i32 = i32::MIN;
/// assert_eq!(a.wrapping_sub_val(1), i32::MAX); // Wraps around
/// assert_eq!(7i32.wrapping_sub_val(3), 4);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

/// A trait for types that support wrapping multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use calc_core::num::ops::wrapping_arithmetic::WrappingMulVal;
///
/// let a: i32 = 1 << 16;
/// assert_eq!(a.wrapping_mul_val(1 << 16), 0); // 2^32 wraps to 0
/// assert_eq!(3i32.wrapping_mul_val(4), 12);
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping multiplication by value.
    fn wrapping_mul_val(self, v: Self) -> Self;
}

macro_rules! wrapping_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> $t {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

wrapping_impl_val!(WrappingAddVal, wrapping_add_val, wrapping_add, i8, i16, i32, i64, i128, isize);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, wrapping_sub, i8, i16, i32, i64, i128, isize);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, wrapping_mul, i8, i16, i32, i64, i128, isize);

/// A trait for types that support wrapping absolute value by value.
///
/// The minimum value of a signed type has no positive counterpart; its
/// absolute value wraps to itself.
///
/// # Examples
///
/// ```rust
/// # use calc_core::num::ops::wrapping_arithmetic::WrappingAbsVal;
///
/// assert_eq!((-5i32).wrapping_abs_val(), 5);
/// assert_eq!(i32::MIN.wrapping_abs_val(), i32::MIN); // No positive counterpart
/// ```
pub trait WrappingAbsVal: Sized {
    /// Returns the absolute value, wrapping for the minimum value.
    fn wrapping_abs_val(self) -> Self;
}

macro_rules! wrapping_impl_unary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self) -> $t {
                    <$t>::$src_method(self)
                }
            }
        )*
    };
}

wrapping_impl_unary_val!(WrappingAbsVal, wrapping_abs_val, wrapping_abs, i8, i16, i32, i64, i128, isize);

/// A trait for types that support truncating division by value where a zero
/// divisor yields zero instead of a panic.
///
/// The quotient is truncated toward zero. `MIN / -1` wraps to `MIN`.
///
/// # Examples
///
/// ```rust
/// # use calc_core::num::ops::wrapping_arithmetic::ZeroDivVal;
///
/// assert_eq!(12i32.zero_div_val(3), 4);
/// assert_eq!((-7i32).zero_div_val(2), -3); // Truncates toward zero
/// assert_eq!(10i32.zero_div_val(0), 0); // Zero divisor maps to 0
/// assert_eq!(i32::MIN.zero_div_val(-1), i32::MIN); // Wraps around
/// ```
pub trait ZeroDivVal: Sized + Zero + Div<Self, Output = Self> {
    /// Performs truncating division by value, returning `ZERO` for a zero divisor.
    fn zero_div_val(self, v: Self) -> Self;
}

macro_rules! zero_div_impl_val {
    ($($t:ty),*) => {
        $(
            impl ZeroDivVal for $t {
                #[inline(always)]
                fn zero_div_val(self, v: $t) -> $t {
                    if v == <$t>::ZERO {
                        return <$t>::ZERO;
                    }
                    <$t>::wrapping_div(self, v)
                }
            }
        )*
    };
}

zero_div_impl_val!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_add_wraps_at_both_bounds() {
        assert_eq!(i32::MAX.wrapping_add_val(1), i32::MIN);
        assert_eq!(i32::MIN.wrapping_add_val(-1), i32::MAX);
        assert_eq!(i64::MAX.wrapping_add_val(1), i64::MIN);
        assert_eq!(i8::MAX.wrapping_add_val(i8::MAX), -2);
    }

    #[test]
    fn test_wrapping_sub_and_mul() {
        assert_eq!(i32::MIN.wrapping_sub_val(1), i32::MAX);
        assert_eq!(i32::MAX.wrapping_mul_val(2), -2);
        assert_eq!((-6i16).wrapping_mul_val(7), -42);
    }

    #[test]
    fn test_wrapping_abs_of_minimum_is_minimum() {
        assert_eq!(i8::MIN.wrapping_abs_val(), i8::MIN);
        assert_eq!(i32::MIN.wrapping_abs_val(), i32::MIN);
        assert_eq!(i64::MIN.wrapping_abs_val(), i64::MIN);
        assert_eq!((i32::MIN + 1).wrapping_abs_val(), i32::MAX);
    }

    #[test]
    fn test_zero_div_truncates_toward_zero() {
        assert_eq!(7i32.zero_div_val(2), 3);
        assert_eq!((-7i32).zero_div_val(2), -3);
        assert_eq!(7i32.zero_div_val(-2), -3);
        assert_eq!((-7i32).zero_div_val(-2), 3);
    }

    #[test]
    fn test_zero_div_by_zero_is_zero_for_every_width() {
        assert_eq!(i8::MIN.zero_div_val(0), 0);
        assert_eq!(i16::MAX.zero_div_val(0), 0);
        assert_eq!(i32::MIN.zero_div_val(0), 0);
        assert_eq!(i64::MAX.zero_div_val(0), 0);
        assert_eq!(0isize.zero_div_val(0), 0);
    }

    #[test]
    fn test_zero_div_minimum_by_minus_one_wraps() {
        assert_eq!(i32::MIN.zero_div_val(-1), i32::MIN);
        assert_eq!(i64::MIN.zero_div_val(-1), i64::MIN);
    }
}
