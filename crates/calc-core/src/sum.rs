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

//! # Checked Sums
//!
//! The tagged result of an overflow-checked addition. A checked addition
//! either produced an exact in-range value or overflowed; in the latter case
//! the defined primary value is `ZERO`.

use crate::num::constants::Zero;
use num_traits::{PrimInt, Signed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckedSum<T> {
    /// The mathematical sum fits in the operand type.
    Exact(T),
    /// The mathematical sum lies outside the range of the operand type.
    Overflowed,
}

impl<T> CheckedSum<T>
where
    T: PrimInt + Signed + Zero,
{
    /// Returns the sum, or `ZERO` if the addition overflowed.
    #[inline]
    pub fn value(self) -> T {
        match self {
            CheckedSum::Exact(value) => value,
            CheckedSum::Overflowed => T::ZERO,
        }
    }

    #[inline]
    pub fn has_overflowed(self) -> bool {
        matches!(self, CheckedSum::Overflowed)
    }

    /// Splits the result into the primary value and the overflow flag,
    /// the shape used by the C interface.
    #[inline]
    pub fn into_parts(self) -> (T, bool) {
        (self.value(), self.has_overflowed())
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            CheckedSum::Exact(value) => Some(value),
            CheckedSum::Overflowed => None,
        }
    }
}

impl<T> From<Option<T>> for CheckedSum<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => CheckedSum::Exact(value),
            None => CheckedSum::Overflowed,
        }
    }
}

impl<T> std::fmt::Display for CheckedSum<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckedSum::Exact(value) => write!(f, "Exact({})", value),
            CheckedSum::Overflowed => write!(f, "Overflowed"),
        }
    }
}
