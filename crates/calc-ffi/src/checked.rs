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

//! # Composite Checked Addition
//!
//! `add_with_overflow_check` reports overflow through an out-parameter. This
//! module exports `calc_add_checked`, which returns the value and the flag
//! together by value, so hosts with structured return support do not need to
//! pass a pointer.

use calc_core::{arith, CheckedSum};
use libc::c_int;

/// A C-compatible checked sum (`calc_checked_sum_t` in the header).
///
/// `overflow` is `1` if the exact sum did not fit in an `int`, in which case
/// `value` is `0`; otherwise `overflow` is `0` and `value` holds the sum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FfiCheckedSum {
    pub value: c_int,
    pub overflow: c_int,
}

impl FfiCheckedSum {
    /// Returns `true` if the overflow flag is set.
    #[inline]
    pub fn has_overflowed(&self) -> bool {
        self.overflow != 0
    }
}

impl From<CheckedSum<i32>> for FfiCheckedSum {
    fn from(sum: CheckedSum<i32>) -> Self {
        let (value, overflowed) = sum.into_parts();
        Self {
            value,
            overflow: c_int::from(overflowed),
        }
    }
}

impl From<FfiCheckedSum> for CheckedSum<i32> {
    fn from(sum: FfiCheckedSum) -> Self {
        if sum.has_overflowed() {
            CheckedSum::Overflowed
        } else {
            CheckedSum::Exact(sum.value)
        }
    }
}

/// Adds `a` and `b` and returns the sum together with its overflow flag.
#[no_mangle]
pub extern "C" fn calc_add_checked(a: c_int, b: c_int) -> FfiCheckedSum {
    FfiCheckedSum::from(arith::add_with_overflow_check(a, b))
}
