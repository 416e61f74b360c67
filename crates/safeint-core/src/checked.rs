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

//! # Checked Integers
//!
//! `Checked<T>` wraps a signed primitive and performs every arithmetic
//! operation through the guards in `num::ops::guarded`. An operation whose
//! exact result does not fit in `T` returns an `ArithmeticError` and leaves
//! the value untouched; nothing ever wraps, saturates or panics.
//!
//! ## Highlights
//!
//! - Mutating operations (`try_add_assign`, `try_inc`, ...) return
//!   `Result<&mut Self, _>` so successful steps can be chained with `?`.
//! - Non-mutating operations (`try_add`, ...) and the `+ - * / %` and unary
//!   `-` operators return `Result<Checked<T>, _>`.
//! - Right-hand operands may be raw `T` values or other `Checked<T>`.
//! - Same-width construction is infallible; cross-width construction is
//!   range-checked (`try_from_int`, `try_convert`) or lossless (`widen`).
//! - Zero-cost: `#[repr(transparent)]` over `T`.
//!
//! ## Usage
//!
//! ```rust
//! use safeint_core::checked::CheckedI8;
//! use safeint_core::error::ArithmeticErrorKind;
//!
//! let mut x = CheckedI8::new(100);
//! x.try_add_assign(27i8).unwrap();
//! assert_eq!(x.get(), 127);
//!
//! let err = x.try_add_assign(1i8).unwrap_err();
//! assert_eq!(err.kind(), ArithmeticErrorKind::Overflow);
//! assert_eq!(x.get(), 127);
//!
//! let y = (x / CheckedI8::new(-1)).unwrap();
//! assert_eq!(y.get(), -127);
//! ```

use crate::error::{ArithmeticError, ConversionError};
use crate::num::ops::guarded;
use crate::num::SignedInt;

/// A right-hand operand for checked arithmetic on `Checked<T>`.
///
/// Implemented for the raw primitive `T` and for `Checked<T>`, which is
/// unwrapped to its raw value.
pub trait Operand<T> {
    /// Returns the raw value of the operand.
    fn into_raw(self) -> T;
}

impl<T> Operand<T> for T
where
    T: SignedInt,
{
    #[inline(always)]
    fn into_raw(self) -> T {
        self
    }
}

/// A signed integer whose arithmetic is checked before it is performed.
///
/// # Invariants
///
/// The wrapped value is always within `[T::MIN, T::MAX]`, and a failed
/// operation never changes it.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::checked::Checked;
/// let a = Checked::new(-128i8);
/// assert!(a.try_neg().unwrap_err().is_overflow());
/// assert_eq!(a.try_add(1i8).unwrap().get(), -127);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Checked<T>
where
    T: SignedInt,
{
    value: T,
}

impl<T> Operand<T> for Checked<T>
where
    T: SignedInt,
{
    #[inline(always)]
    fn into_raw(self) -> T {
        self.value
    }
}

impl<T> Checked<T>
where
    T: SignedInt,
{
    /// The largest representable value.
    pub const MAX: Self = Self { value: T::MAX };

    /// The smallest representable value.
    pub const MIN: Self = Self { value: T::MIN };

    /// Creates a new `Checked` from a value of the same width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint_core::checked::Checked;
    /// let x = Checked::new(42i32);
    /// assert_eq!(x.get(), 42);
    /// ```
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Creates a new `Checked` from a value of another integer type.
    ///
    /// Returns a `ConversionError` if `value` is outside the range of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint_core::checked::Checked;
    /// assert_eq!(Checked::<i8>::try_from_int(100i64).unwrap().get(), 100);
    /// assert!(Checked::<i8>::try_from_int(300i64).is_err());
    /// assert!(Checked::<i8>::try_from_int(200u8).is_err());
    /// ```
    #[inline]
    pub fn try_from_int<U>(value: U) -> Result<Self, ConversionError>
    where
        T: TryFrom<U>,
        U: std::fmt::Display + Copy,
    {
        T::try_from(value)
            .map(Self::new)
            .map_err(|_| ConversionError {
                value: value.to_string(),
                target: T::NAME,
            })
    }

    /// Converts into a `Checked` of another width, failing if the value does
    /// not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint_core::checked::Checked;
    /// let wide = Checked::new(-128i32);
    /// assert_eq!(wide.try_convert::<i8>().unwrap().get(), -128);
    /// assert!(Checked::new(-129i32).try_convert::<i8>().is_err());
    /// ```
    #[inline]
    pub fn try_convert<U>(self) -> Result<Checked<U>, ConversionError>
    where
        U: SignedInt + TryFrom<T>,
    {
        Checked::<U>::try_from_int(self.value)
    }

    /// Converts into a `Checked` of a width that holds every value of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint_core::checked::Checked;
    /// let small = Checked::new(i8::MIN);
    /// assert_eq!(small.widen::<i64>().get(), -128);
    /// ```
    #[inline]
    pub fn widen<U>(self) -> Checked<U>
    where
        U: SignedInt + From<T>,
    {
        Checked::new(<U as From<T>>::from(self.value))
    }

    /// Returns the underlying value.
    #[inline(always)]
    pub const fn get(&self) -> T {
        self.value
    }

    /// Consumes `self` and returns the underlying value.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Replaces the underlying value.
    #[inline(always)]
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Returns a copy of `self` (unary plus).
    #[inline(always)]
    pub fn pos(self) -> Self {
        self
    }

    /// Returns `-self`, failing with `Overflow` for `MIN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint_core::checked::Checked;
    /// assert_eq!(Checked::new(5i16).try_neg().unwrap().get(), -5);
    /// assert!(Checked::new(i16::MIN).try_neg().is_err());
    /// ```
    #[inline]
    pub fn try_neg(self) -> Result<Self, ArithmeticError<T>> {
        guarded::neg(self.value).map(Self::new)
    }

    /// Increments in place, failing with `Overflow` at `MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint_core::checked::Checked;
    /// let mut x = Checked::new(126i8);
    /// x.try_inc().unwrap();
    /// assert_eq!(x.get(), 127);
    /// assert!(x.try_inc().is_err());
    /// assert_eq!(x.get(), 127);
    /// ```
    #[inline]
    pub fn try_inc(&mut self) -> Result<&mut Self, ArithmeticError<T>> {
        self.value = guarded::increment(self.value)?;
        Ok(self)
    }

    /// Decrements in place, failing with `Underflow` at `MIN`.
    #[inline]
    pub fn try_dec(&mut self) -> Result<&mut Self, ArithmeticError<T>> {
        self.value = guarded::decrement(self.value)?;
        Ok(self)
    }

    /// Increments in place and returns the previous value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint_core::checked::Checked;
    /// let mut x = Checked::new(1i32);
    /// assert_eq!(x.try_post_inc().unwrap().get(), 1);
    /// assert_eq!(x.get(), 2);
    /// ```
    #[inline]
    pub fn try_post_inc(&mut self) -> Result<Self, ArithmeticError<T>> {
        let previous = *self;
        self.try_inc()?;
        Ok(previous)
    }

    /// Decrements in place and returns the previous value.
    #[inline]
    pub fn try_post_dec(&mut self) -> Result<Self, ArithmeticError<T>> {
        let previous = *self;
        self.try_dec()?;
        Ok(previous)
    }
}

macro_rules! impl_checked_op {
    ($assign_method:ident, $method:ident, $guard:ident, $verb:literal) => {
        impl<T> Checked<T>
        where
            T: SignedInt,
        {
            #[doc = concat!("Sets `self` to `self ", $verb, " rhs`.")]
            ///
            /// On failure `self` keeps its previous value.
            #[inline]
            pub fn $assign_method<R>(&mut self, rhs: R) -> Result<&mut Self, ArithmeticError<T>>
            where
                R: Operand<T>,
            {
                self.value = guarded::$guard(self.value, rhs.into_raw())?;
                Ok(self)
            }

            #[doc = concat!("Returns `self ", $verb, " rhs` as a new value.")]
            #[inline]
            pub fn $method<R>(self, rhs: R) -> Result<Self, ArithmeticError<T>>
            where
                R: Operand<T>,
            {
                let mut result = self;
                result.$assign_method(rhs)?;
                Ok(result)
            }
        }
    };
}

impl_checked_op!(try_add_assign, try_add, add, "+");
impl_checked_op!(try_sub_assign, try_sub, sub, "-");
impl_checked_op!(try_mul_assign, try_mul, mul, "*");
impl_checked_op!(try_div_assign, try_div, div, "/");
impl_checked_op!(try_rem_assign, try_rem, rem, "%");

macro_rules! impl_checked_operator {
    ($trait_name:ident, $method:ident, $checked_method:ident) => {
        impl<T, R> std::ops::$trait_name<R> for Checked<T>
        where
            T: SignedInt,
            R: Operand<T>,
        {
            type Output = Result<Checked<T>, ArithmeticError<T>>;

            #[inline]
            fn $method(self, rhs: R) -> Self::Output {
                self.$checked_method(rhs)
            }
        }
    };
}

impl_checked_operator!(Add, add, try_add);
impl_checked_operator!(Sub, sub, try_sub);
impl_checked_operator!(Mul, mul, try_mul);
impl_checked_operator!(Div, div, try_div);
impl_checked_operator!(Rem, rem, try_rem);

impl<T> std::ops::Neg for Checked<T>
where
    T: SignedInt,
{
    type Output = Result<Checked<T>, ArithmeticError<T>>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.try_neg()
    }
}

impl<T> std::fmt::Debug for Checked<T>
where
    T: SignedInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Checked<{}>({:?})", T::NAME, self.value)
    }
}

impl<T> std::fmt::Display for Checked<T>
where
    T: SignedInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}

impl<T> std::str::FromStr for Checked<T>
where
    T: SignedInt + std::str::FromStr,
{
    type Err = <T as std::str::FromStr>::Err;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<T>().map(Self::new)
    }
}

impl<T> From<T> for Checked<T>
where
    T: SignedInt,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_primitive_for {
    ($t:ident, $alias:ident) => {
        #[doc = concat!("A checked `", stringify!($t), "`.")]
        pub type $alias = Checked<$t>;

        impl From<Checked<$t>> for $t {
            #[inline(always)]
            fn from(checked: Checked<$t>) -> Self {
                checked.value
            }
        }
    };
}

impl_primitive_for!(i8, CheckedI8);
impl_primitive_for!(i16, CheckedI16);
impl_primitive_for!(i32, CheckedI32);
impl_primitive_for!(i64, CheckedI64);
impl_primitive_for!(i128, CheckedI128);
impl_primitive_for!(isize, CheckedIsize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArithmeticErrorKind, Operation};

    fn kind<T: SignedInt, V>(r: Result<V, ArithmeticError<T>>) -> ArithmeticErrorKind {
        match r {
            Ok(_) => panic!("expected the operation to fail"),
            Err(e) => e.kind(),
        }
    }

    #[test]
    fn test_new_and_get() {
        let x = CheckedI8::new(-7);
        assert_eq!(x.get(), -7);
        assert_eq!(x.into_inner(), -7);
        assert_eq!(CheckedI32::default().get(), 0);
    }

    #[test]
    fn test_round_trip() {
        for v in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert_eq!(Checked::new(v).get(), v);
            let raw: i64 = Checked::from(v).into();
            assert_eq!(raw, v);
        }
    }

    #[test]
    fn test_bounds_constants() {
        assert_eq!(CheckedI8::MAX.get(), 127);
        assert_eq!(CheckedI8::MIN.get(), -128);
        assert_eq!(CheckedI128::MIN.get(), i128::MIN);
    }

    #[test]
    fn test_set() {
        let mut x = CheckedI16::new(1);
        x.set(i16::MIN);
        assert_eq!(x, CheckedI16::MIN);
    }

    #[test]
    fn test_pos_is_identity() {
        let x = CheckedI8::new(-128);
        assert_eq!(x.pos(), x);
    }

    #[test]
    fn test_neg_operator() {
        assert_eq!((-CheckedI8::new(127)).unwrap().get(), -127);
        assert_eq!(kind(-CheckedI8::MIN), ArithmeticErrorKind::Overflow);
        let twice = (-(-CheckedI8::new(-127)).unwrap()).unwrap();
        assert_eq!(twice.get(), -127);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut x = CheckedI8::new(126);
        x.try_inc().unwrap();
        assert_eq!(kind(x.try_inc()), ArithmeticErrorKind::Overflow);
        assert_eq!(x.get(), 127);

        let mut y = CheckedI8::new(-127);
        y.try_dec().unwrap();
        assert_eq!(kind(y.try_dec()), ArithmeticErrorKind::Underflow);
        assert_eq!(y.get(), -128);
    }

    #[test]
    fn test_post_increment_and_decrement() {
        let mut x = CheckedI8::new(5);
        assert_eq!(x.try_post_inc().unwrap().get(), 5);
        assert_eq!(x.get(), 6);
        assert_eq!(x.try_post_dec().unwrap().get(), 6);
        assert_eq!(x.get(), 5);

        let mut max = CheckedI8::MAX;
        assert_eq!(kind(max.try_post_inc()), ArithmeticErrorKind::Overflow);
        assert_eq!(max, CheckedI8::MAX);

        let mut min = CheckedI8::MIN;
        assert_eq!(kind(min.try_post_dec()), ArithmeticErrorKind::Underflow);
        assert_eq!(min, CheckedI8::MIN);
    }

    #[test]
    fn test_eight_bit_scenarios() {
        assert_eq!(
            kind(CheckedI8::new(127) + 1i8),
            ArithmeticErrorKind::Overflow
        );
        assert_eq!(
            kind(CheckedI8::new(-128) - 1i8),
            ArithmeticErrorKind::Underflow
        );
        assert_eq!(
            kind(CheckedI8::new(-128) / -1i8),
            ArithmeticErrorKind::Underflow
        );
        assert_eq!(kind(CheckedI8::new(5) % 0i8), ArithmeticErrorKind::Domain);
        assert_eq!((CheckedI8::new(100) + 27i8).unwrap().get(), 127);
        assert_eq!(kind(-CheckedI8::new(-128)), ArithmeticErrorKind::Overflow);
        assert_eq!((CheckedI8::MAX / -1i8).unwrap().get(), -127);
    }

    #[test]
    fn test_failed_assign_leaves_value_unchanged() {
        let mut x = CheckedI8::new(100);
        assert!(x.try_add_assign(28i8).is_err());
        assert_eq!(x.get(), 100);
        assert!(x.try_mul_assign(2i8).is_err());
        assert_eq!(x.get(), 100);
        assert!(x.try_div_assign(0i8).is_err());
        assert_eq!(x.get(), 100);
        assert!(x.try_rem_assign(0i8).is_err());
        assert_eq!(x.get(), 100);
        assert!(x.try_sub_assign(i8::MIN).is_err());
        assert_eq!(x.get(), 100);
    }

    #[test]
    fn test_chained_assign() {
        let mut x = CheckedI32::new(10);
        x.try_add_assign(5i32)
            .and_then(|x| x.try_mul_assign(3i32))
            .and_then(|x| x.try_sub_assign(CheckedI32::new(5)))
            .and_then(|x| x.try_div_assign(4i32))
            .and_then(|x| x.try_rem_assign(7i32))
            .unwrap();
        assert_eq!(x.get(), 3);
    }

    #[test]
    fn test_checked_operand() {
        let a = CheckedI16::new(300);
        let b = CheckedI16::new(200);
        assert_eq!((a + b).unwrap().get(), 500);
        assert_eq!((a - b).unwrap().get(), 100);
        assert_eq!((a * b).unwrap_err().operation(), Operation::Mul);
        assert_eq!((a / b).unwrap().get(), 1);
        assert_eq!((a % b).unwrap().get(), 100);
    }

    #[test]
    fn test_operators_compose_with_question_mark() {
        fn poly(x: CheckedI64) -> Result<CheckedI64, ArithmeticError<i64>> {
            let squared = (x * x)?;
            (squared + (x * 3i64)?)? - 7i64
        }
        assert_eq!(poly(CheckedI64::new(4)).unwrap().get(), 21);
        assert!(poly(CheckedI64::new(i64::MAX)).is_err());
    }

    #[test]
    fn test_non_mutating_ops_leave_receiver() {
        let x = CheckedI8::new(10);
        let y = x.try_mul(12i8).unwrap();
        assert_eq!(y.get(), 120);
        assert_eq!(x.get(), 10);
    }

    #[test]
    fn test_try_from_int() {
        assert_eq!(CheckedI8::try_from_int(127i32).unwrap().get(), 127);
        assert_eq!(CheckedI8::try_from_int(-128i128).unwrap().get(), -128);

        let err = CheckedI8::try_from_int(128i32).unwrap_err();
        assert_eq!(err.target, "i8");
        assert_eq!(err.value, "128");

        assert!(CheckedI32::try_from_int(u64::MAX).is_err());
        assert_eq!(CheckedI32::try_from_int(7u8).unwrap().get(), 7);
    }

    #[test]
    fn test_try_convert_and_widen() {
        let x = CheckedI64::new(i32::MIN as i64);
        assert_eq!(x.try_convert::<i32>().unwrap().get(), i32::MIN);
        assert!(CheckedI64::new(i32::MIN as i64 - 1)
            .try_convert::<i32>()
            .is_err());

        let w: CheckedI128 = CheckedI16::MIN.widen();
        assert_eq!(w.get(), i16::MIN as i128);
    }

    #[test]
    fn test_parse() {
        let x: CheckedI8 = "-128".parse().unwrap();
        assert_eq!(x, CheckedI8::MIN);
        assert!("128".parse::<CheckedI8>().is_err());
    }

    #[test]
    fn test_debug_and_display() {
        let x = CheckedI16::new(-42);
        assert_eq!(format!("{}", x), "-42");
        assert_eq!(format!("{:?}", x), "Checked<i16>(-42)");
        assert_eq!(format!("{:>5}", x), "  -42");
    }

    #[test]
    fn test_ordering() {
        assert!(CheckedI8::MIN < CheckedI8::new(0));
        assert!(CheckedI8::new(0) < CheckedI8::MAX);
    }
}
