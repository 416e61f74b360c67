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

//! # Safeint Core
//!
//! Checked signed integers. Every arithmetic operation is validated before
//! it is performed; if the exact result is not representable in the
//! underlying primitive, the operation fails with a distinguishable error
//! instead of wrapping or panicking, and the operand keeps its value.
//!
//! ## Modules
//!
//! - `checked`: The `Checked<T>` wrapper with fallible operators, in-place
//!   and copying arithmetic, increments, and range-checked conversions
//!   between widths. Aliases `CheckedI8` through `CheckedIsize`.
//! - `num`: Range constants for every signed primitive (`Bounds`,
//!   `MinusOne`, `PlusOne`, `Zero`, `TypeName`), the `SignedInt` blanket
//!   trait, and the guard functions in `num::ops::guarded` that decide
//!   representability without overflowing during the check.
//! - `error`: `ArithmeticError<T>` with `Overflow`, `Underflow` and `Domain`
//!   variants carrying the rejected operands, and `ConversionError`.
//!
//! ## Logging
//!
//! Rejected operations are reported through the `log` facade at `trace`
//! level. No logger is installed by this crate.
//!
//! ## Example
//!
//! ```rust
//! use safeint_core::{ArithmeticError, ArithmeticErrorKind, Checked};
//!
//! fn average(a: Checked<i32>, b: Checked<i32>) -> Result<Checked<i32>, ArithmeticError<i32>> {
//!     (a + b)? / 2i32
//! }
//!
//! assert_eq!(average(Checked::new(4), Checked::new(10)).unwrap().get(), 7);
//!
//! let err = average(Checked::new(i32::MAX), Checked::new(1)).unwrap_err();
//! assert_eq!(err.kind(), ArithmeticErrorKind::Overflow);
//! ```

pub mod checked;
pub mod error;
pub mod num;

pub use checked::{
    Checked, CheckedI128, CheckedI16, CheckedI32, CheckedI64, CheckedI8, CheckedIsize, Operand,
};
pub use error::{ArithmeticError, ArithmeticErrorKind, ConversionError, Operands, Operation};
pub use num::SignedInt;
