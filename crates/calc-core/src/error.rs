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

/// Errors reported by the error-returning arithmetic in [`crate::strict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ArithmeticError {
    /// The divisor was zero.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i32 },
    /// The exact sum does not fit in 32 bits.
    #[error("integer overflow: {lhs} + {rhs} exceeds the 32-bit range")]
    Overflow { lhs: i32, rhs: i32 },
}

#[cfg(test)]
mod tests {
    use super::ArithmeticError;

    #[test]
    fn test_arithmetic_error_correct_display() {
        let div = ArithmeticError::DivisionByZero { dividend: 10 };
        assert_eq!(div.to_string(), "division by zero: 10 / 0");

        let overflow = ArithmeticError::Overflow {
            lhs: i32::MAX,
            rhs: 1,
        };
        assert_eq!(
            overflow.to_string(),
            "integer overflow: 2147483647 + 1 exceeds the 32-bit range"
        );
    }
}
