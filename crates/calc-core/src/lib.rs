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

//! # Calc Core
//!
//! Fixed-width integer arithmetic with well-defined behavior on every input.
//! This crate is the Rust implementation behind the `calc` C interface and
//! can be used directly from Rust without going through the FFI layer.
//!
//! ## Modules
//!
//! - `arith`: The arithmetic function set (`add`, `subtract`, `multiply`,
//!   `divide`, `add_with_overflow_check`, `add_long`, `abs_value`,
//!   `max_value`, `min_value`). Every function is pure and total: results
//!   wrap on overflow, a zero divisor yields `0`, and checked addition reports
//!   overflow through a [`CheckedSum`].
//! - `strict`: Error-returning variants (`try_divide`, `try_add`) for callers
//!   that want `Result` instead of sentinel values.
//! - `num`: By-value wrapping, sentinel-division and widening operation
//!   traits for the signed primitive integers, plus associated constants.
//! - `sum`: The tagged result of a checked addition.
//! - `error`: The error type of the `strict` layer.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never
//! installs a logger itself. The two sentinel paths (zero divisor, overflowing
//! checked addition) emit `debug` records.

pub mod arith;
pub mod error;
pub mod num;
pub mod strict;
pub mod sum;

pub use arith::{
    abs_value, add, add_long, add_with_overflow_check, divide, max_value, min_value, multiply,
    subtract,
};
pub use error::ArithmeticError;
pub use sum::CheckedSum;
