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

//! # Calc FFI
//!
//! **C-Compatible Bindings for the Calc Arithmetic Function Set.**
//!
//! This crate exports the functions declared in `include/calc.h` with the C
//! calling convention and unmangled names, so that C, C++, Go (cgo), Python
//! (ctypes/cffi) and other hosts can link against the `cdylib` or
//! `staticlib` artifact directly.
//!
//! ## Core Design Principles
//!
//! 1.  **Plain Values**: Every function takes and returns machine integers.
//!     There are no handles, no allocation and nothing to free.
//! 2.  **Contract Compatibility**: Symbol names, signatures and sentinel
//!     behavior (`divide(a, 0) == 0`, `0` plus an overflow flag for a
//!     checked addition that does not fit) match the C header exactly.
//! 3.  **Fail-Fast Safety**: The only pointer in the interface is the
//!     overflow out-parameter of `add_with_overflow_check`. Passing `NULL`
//!     results in an immediate process abort rather than undefined behavior.
//!
//! ## Modules
//!
//! - `arith`: The nine symbols of the C header.
//! - `checked`: `calc_add_checked`, which returns the checked sum and its
//!   overflow flag together as a `#[repr(C)]` struct.

pub mod arith;
pub mod checked;
