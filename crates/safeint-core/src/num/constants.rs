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

//! Associated-constant traits describing the range of each signed primitive.
//!
//! The guard functions phrase every bound as a comparison against these
//! constants, so the values have to be available at compile time and in
//! generic code alike.

/// A trait for signed integer types that expose their representable range.
///
/// `NEG_MAX` is `-MAX`, the smallest value whose negation is representable.
/// In two's complement it is `MIN + 1`, which makes `MIN` the only value
/// for which `x < NEG_MAX` holds.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::constants::Bounds;
/// assert_eq!(<i8 as Bounds>::MAX, 127);
/// assert_eq!(<i8 as Bounds>::MIN, -128);
/// assert_eq!(<i8 as Bounds>::NEG_MAX, -127);
/// ```
pub trait Bounds: Sized {
    /// The largest representable value.
    const MAX: Self;
    /// The smallest representable value.
    const MIN: Self;
    /// The negation of `MAX`.
    const NEG_MAX: Self;
}

/// A trait for integer types that have a constant representing -1.
pub trait MinusOne {
    /// The constant representing -1 for the implementing type.
    const MINUS_ONE: Self;
}

/// A trait for integer types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait naming the primitive, used in diagnostics.
pub trait TypeName {
    /// The name of the primitive as written in Rust source, e.g. `"i32"`.
    const NAME: &'static str;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_signed_constants_for {
    ($t:ident) => {
        impl Bounds for $t {
            const MAX: Self = $t::MAX;
            const MIN: Self = $t::MIN;
            const NEG_MAX: Self = -$t::MAX;
        }

        impl_const_for!(MinusOne, MINUS_ONE, -1, $t);
        impl_const_for!(PlusOne, PLUS_ONE, 1, $t);
        impl_const_for!(Zero, ZERO, 0, $t);

        impl TypeName for $t {
            const NAME: &'static str = stringify!($t);
        }
    };
}

impl_signed_constants_for!(i8);
impl_signed_constants_for!(i16);
impl_signed_constants_for!(i32);
impl_signed_constants_for!(i64);
impl_signed_constants_for!(i128);
impl_signed_constants_for!(isize);
