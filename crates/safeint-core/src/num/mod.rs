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

//! # Numeric Foundations
//!
//! Traits and guard functions for checked signed-integer arithmetic. This
//! module collects the compile-time range constants of every signed
//! primitive and the overflow-free pre-checks built on top of them.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`Bounds`, `MinusOne`, `Zero`,
//!   `PlusOne`, `TypeName`) implemented for all signed primitives.
//! - `ops`: Guarded arithmetic (`add`, `sub`, `mul`, `div`, `rem`, `neg`,
//!   `increment`, `decrement`) that validates an operation before performing
//!   it and reports the kind of failure.
//!
//! ## Motivation
//!
//! Native integer arithmetic either panics (debug) or wraps (release) on
//! overflow. The guards decide representability up front, using only
//! comparisons against bounds that were shifted or divided *before* the
//! operand is combined with them, so the check itself can never overflow.

pub mod constants;
pub mod ops;

use constants::{Bounds, MinusOne, PlusOne, TypeName, Zero};
use num_traits::{PrimInt, Signed};

/// The set of primitive types a `Checked` integer can wrap.
///
/// This is a blanket trait: every type satisfying the bounds implements it.
/// In practice those are `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
pub trait SignedInt:
    PrimInt
    + Signed
    + Bounds
    + MinusOne
    + PlusOne
    + Zero
    + TypeName
    + std::fmt::Display
    + std::fmt::Debug
    + std::hash::Hash
    + Default
    + Send
    + Sync
    + 'static
{
}

impl<T> SignedInt for T where
    T: PrimInt
        + Signed
        + Bounds
        + MinusOne
        + PlusOne
        + Zero
        + TypeName
        + std::fmt::Display
        + std::fmt::Debug
        + std::hash::Hash
        + Default
        + Send
        + Sync
        + 'static
{
}
