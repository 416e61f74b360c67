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

//! Overflow-free pre-checks for signed arithmetic.
//!
//! Each function decides whether the exact mathematical result is
//! representable in `T` *before* computing it. The checks only combine an
//! operand with a bound (`MAX - rhs`, `MIN / val`, ...) in ways that are
//! representable themselves, so no intermediate value can leave the range.
//!
//! On success the native result is returned. On failure the error names the
//! kind of failure and carries the operands; nothing else is touched.

use crate::error::{ArithmeticError, Operands, Operation};
use crate::num::SignedInt;
use log::trace;

#[cold]
fn reject<T>(error: ArithmeticError<T>) -> ArithmeticError<T>
where
    T: SignedInt,
{
    trace!("rejected {}: {}", error.operands(), error.kind());
    error
}

#[inline]
fn overflow<T: SignedInt>(operands: Operands<T>) -> ArithmeticError<T> {
    reject(ArithmeticError::Overflow(operands))
}

#[inline]
fn underflow<T: SignedInt>(operands: Operands<T>) -> ArithmeticError<T> {
    reject(ArithmeticError::Underflow(operands))
}

#[inline]
fn domain<T: SignedInt>(operands: Operands<T>) -> ArithmeticError<T> {
    reject(ArithmeticError::Domain(operands))
}

/// Negates `val`.
///
/// Fails with `Overflow` for `val < -MAX`, which in two's complement is
/// exactly `MIN`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::ops::guarded;
/// assert_eq!(guarded::neg(127i8), Ok(-127));
/// assert!(guarded::neg(i8::MIN).unwrap_err().is_overflow());
/// ```
#[inline]
pub fn neg<T>(val: T) -> Result<T, ArithmeticError<T>>
where
    T: SignedInt,
{
    if val < T::NEG_MAX {
        return Err(overflow(Operands::unary(Operation::Neg, val)));
    }
    Ok(-val)
}

/// Returns `val + 1`, failing with `Overflow` at `MAX`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::ops::guarded;
/// assert_eq!(guarded::increment(41i32), Ok(42));
/// assert!(guarded::increment(i32::MAX).unwrap_err().is_overflow());
/// ```
#[inline]
pub fn increment<T>(val: T) -> Result<T, ArithmeticError<T>>
where
    T: SignedInt,
{
    if val == T::MAX {
        return Err(overflow(Operands::unary(Operation::Increment, val)));
    }
    Ok(val + T::PLUS_ONE)
}

/// Returns `val - 1`, failing with `Underflow` at `MIN`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::ops::guarded;
/// assert_eq!(guarded::decrement(0i64), Ok(-1));
/// assert!(guarded::decrement(i64::MIN).unwrap_err().is_underflow());
/// ```
#[inline]
pub fn decrement<T>(val: T) -> Result<T, ArithmeticError<T>>
where
    T: SignedInt,
{
    if val == T::MIN {
        return Err(underflow(Operands::unary(Operation::Decrement, val)));
    }
    Ok(val - T::PLUS_ONE)
}

/// Returns `val + rhs`.
///
/// A positive `rhs` can only overflow and a negative one can only underflow.
/// `MAX - rhs` is representable for `rhs > 0`, `MIN - rhs` for `rhs < 0`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::ops::guarded;
/// assert_eq!(guarded::add(100i8, 27), Ok(127));
/// assert!(guarded::add(127i8, 1).unwrap_err().is_overflow());
/// assert!(guarded::add(-128i8, -1).unwrap_err().is_underflow());
/// ```
#[inline]
pub fn add<T>(val: T, rhs: T) -> Result<T, ArithmeticError<T>>
where
    T: SignedInt,
{
    if rhs > T::ZERO && val > T::MAX - rhs {
        return Err(overflow(Operands::binary(Operation::Add, val, rhs)));
    }
    if rhs < T::ZERO && val < T::MIN - rhs {
        return Err(underflow(Operands::binary(Operation::Add, val, rhs)));
    }
    Ok(val + rhs)
}

/// Returns `val - rhs`.
///
/// Subtracting a negative `rhs` can only overflow, subtracting a positive
/// one can only underflow. `MAX + rhs` is representable for `rhs < 0`,
/// `MIN + rhs` for `rhs > 0`. For `rhs == MIN` the first bound is `-1`,
/// so every non-negative `val` is rejected.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::ops::guarded;
/// assert_eq!(guarded::sub(-100i8, 28), Ok(-128));
/// assert!(guarded::sub(-128i8, 1).unwrap_err().is_underflow());
/// assert!(guarded::sub(0i8, i8::MIN).unwrap_err().is_overflow());
/// assert_eq!(guarded::sub(-1i8, i8::MIN), Ok(127));
/// ```
#[inline]
pub fn sub<T>(val: T, rhs: T) -> Result<T, ArithmeticError<T>>
where
    T: SignedInt,
{
    if rhs < T::ZERO && val > T::MAX + rhs {
        return Err(overflow(Operands::binary(Operation::Sub, val, rhs)));
    }
    if rhs > T::ZERO && val < T::MIN + rhs {
        return Err(underflow(Operands::binary(Operation::Sub, val, rhs)));
    }
    Ok(val - rhs)
}

/// Returns `val * rhs`.
///
/// The check is split by operand signs. Each case divides a bound by an
/// operand whose sign makes the quotient representable: the divisor is
/// either positive, or the dividend is `MAX`, so `MIN / -1` never occurs.
/// Truncating division rounds toward zero, which is the ceiling for the
/// negative quotients compared against below.
///
/// | signs          | rejected when      | kind      |
/// |----------------|--------------------|-----------|
/// | `val > 0, rhs > 0` | `rhs > MAX / val` | overflow  |
/// | `val > 0, rhs < 0` | `rhs < MIN / val` | underflow |
/// | `val < 0, rhs > 0` | `val < MIN / rhs` | underflow |
/// | `val < 0, rhs < 0` | `rhs < MAX / val` | overflow  |
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::ops::guarded;
/// assert_eq!(guarded::mul(-16i8, 8), Ok(-128));
/// assert!(guarded::mul(16i8, 8).unwrap_err().is_overflow());
/// assert!(guarded::mul(i8::MIN, -1).unwrap_err().is_overflow());
/// assert!(guarded::mul(-128i8, -2).unwrap_err().is_overflow());
/// assert!(guarded::mul(2i8, -65).unwrap_err().is_underflow());
/// ```
#[inline]
pub fn mul<T>(val: T, rhs: T) -> Result<T, ArithmeticError<T>>
where
    T: SignedInt,
{
    let zero = T::ZERO;
    if val > zero {
        if rhs > zero && rhs > T::MAX / val {
            return Err(overflow(Operands::binary(Operation::Mul, val, rhs)));
        }
        if rhs < zero && rhs < T::MIN / val {
            return Err(underflow(Operands::binary(Operation::Mul, val, rhs)));
        }
    } else if val < zero {
        if rhs > zero && val < T::MIN / rhs {
            return Err(underflow(Operands::binary(Operation::Mul, val, rhs)));
        }
        if rhs < zero && rhs < T::MAX / val {
            return Err(overflow(Operands::binary(Operation::Mul, val, rhs)));
        }
    }
    Ok(val * rhs)
}

/// Returns `val / rhs`, truncating toward zero.
///
/// Fails with `Domain` for `rhs == 0` and with `Underflow` for `MIN / -1`,
/// the only quotient that is not representable. `-1 / MIN` is `0`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::ops::guarded;
/// assert_eq!(guarded::div(127i8, -1), Ok(-127));
/// assert_eq!(guarded::div(-1i8, i8::MIN), Ok(0));
/// assert!(guarded::div(-128i8, -1).unwrap_err().is_underflow());
/// assert!(guarded::div(7i8, 0).unwrap_err().is_domain());
/// ```
#[inline]
pub fn div<T>(val: T, rhs: T) -> Result<T, ArithmeticError<T>>
where
    T: SignedInt,
{
    if rhs == T::ZERO {
        return Err(domain(Operands::binary(Operation::Div, val, rhs)));
    }
    if val < T::NEG_MAX && rhs == T::MINUS_ONE {
        return Err(underflow(Operands::binary(Operation::Div, val, rhs)));
    }
    Ok(val / rhs)
}

/// Returns `val % rhs` with the sign of `val`.
///
/// Fails with `Domain` for `rhs == 0`. The magnitude of the result is below
/// `|rhs|`, so it always fits. `MIN % -1` is `0`; the native operator would
/// trap on it, so that case is answered without dividing.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::ops::guarded;
/// assert_eq!(guarded::rem(-7i8, 3), Ok(-1));
/// assert_eq!(guarded::rem(i8::MIN, -1), Ok(0));
/// assert!(guarded::rem(5i8, 0).unwrap_err().is_domain());
/// ```
#[inline]
pub fn rem<T>(val: T, rhs: T) -> Result<T, ArithmeticError<T>>
where
    T: SignedInt,
{
    if rhs == T::ZERO {
        return Err(domain(Operands::binary(Operation::Rem, val, rhs)));
    }
    if rhs == T::MINUS_ONE {
        return Ok(T::ZERO);
    }
    Ok(val % rhs)
}
