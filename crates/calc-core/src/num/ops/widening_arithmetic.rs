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

use core::ops::Add;

/// A trait for types whose sum can be computed exactly in a wider integer
/// type and narrowed back afterwards.
///
/// Each implementor is paired with the next wider signed type
/// (`i8 -> i16`, `i16 -> i32`, `i32 -> i64`, `i64 -> i128`). Because the
/// wide type holds every sum of two narrow values, overflow is detected by a
/// range check on the narrowing step rather than by inspecting the wrapped
/// result.
///
/// # Examples
///
/// ```rust
/// # use calc_core::num::ops::widening_arithmetic::WideningAddVal;
/// let a: i32 = i32::MAX;
/// assert_eq!(a.widening_add_val(1), i64::from(i32::MAX) + 1);
/// assert_eq!(a.checked_widening_add_val(1), None); // Does not fit in i32
/// assert_eq!(1i32.checked_widening_add_val(2), Some(3));
/// ```
pub trait WideningAddVal: Sized + Copy + Add<Self, Output = Self> {
    /// The wider type in which the exact sum is computed.
    type Wide: Copy + Ord + Add<Self::Wide, Output = Self::Wide>;

    /// Computes the exact sum in the wider type.
    fn widening_add_val(self, v: Self) -> Self::Wide;

    /// Narrows a wide value back, returning `None` if it is out of range.
    fn narrow_val(wide: Self::Wide) -> Option<Self>;

    /// Computes the exact sum and narrows it, returning `None` on overflow.
    #[inline(always)]
    fn checked_widening_add_val(self, v: Self) -> Option<Self> {
        Self::narrow_val(self.widening_add_val(v))
    }
}

macro_rules! widening_impl_val {
    ($t:ty, $wide:ty) => {
        impl WideningAddVal for $t {
            type Wide = $wide;

            #[inline(always)]
            fn widening_add_val(self, v: $t) -> $wide {
                <$wide>::from(self) + <$wide>::from(v)
            }

            #[inline(always)]
            fn narrow_val(wide: $wide) -> Option<$t> {
                <$t>::try_from(wide).ok()
            }
        }
    };
}

widening_impl_val!(i8, i16);
widening_impl_val!(i16, i32);
widening_impl_val!(i32, i64);
widening_impl_val!(i64, i128);

#[cfg(test)]
mod tests {
    use super::WideningAddVal;

    #[test]
    fn test_widening_add_is_exact() {
        assert_eq!(i32::MAX.widening_add_val(i32::MAX), 2 * i64::from(i32::MAX));
        assert_eq!(i32::MIN.widening_add_val(i32::MIN), 2 * i64::from(i32::MIN));
        assert_eq!(i8::MIN.widening_add_val(-1), -129i16);
    }

    #[test]
    fn test_checked_widening_add_detects_both_directions() {
        assert_eq!(i32::MAX.checked_widening_add_val(1), None);
        assert_eq!(i32::MIN.checked_widening_add_val(-1), None);
        assert_eq!(i64::MAX.checked_widening_add_val(1), None);
        assert_eq!(i8::MIN.checked_widening_add_val(i8::MIN), None);
    }

    #[test]
    fn test_checked_widening_add_accepts_boundaries() {
        assert_eq!(i32::MAX.checked_widening_add_val(0), Some(i32::MAX));
        assert_eq!(i32::MIN.checked_widening_add_val(0), Some(i32::MIN));
        assert_eq!(i32::MAX.checked_widening_add_val(i32::MIN), Some(-1));
        assert_eq!(
            (i32::MAX - 1).checked_widening_add_val(1),
            Some(i32::MAX)
        );
    }

    #[test]
    fn test_narrow_val_rejects_out_of_range() {
        assert_eq!(<i32 as WideningAddVal>::narrow_val(i64::from(i32::MAX) + 1), None);
        assert_eq!(<i32 as WideningAddVal>::narrow_val(i64::from(i32::MIN) - 1), None);
        assert_eq!(<i32 as WideningAddVal>::narrow_val(42), Some(42));
    }
}
