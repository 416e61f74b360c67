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

//! # Arithmetic Errors
//!
//! Failure types reported by guarded arithmetic and range-checked
//! conversions. Every failure falls into exactly one of three kinds:
//!
//! - `Overflow`: the exact result would exceed `MAX`.
//! - `Underflow`: the exact result would fall below `MIN` (this includes
//!   the quotient `MIN / -1`).
//! - `Domain`: the operation is undefined for its operands, i.e. division
//!   or remainder by zero.
//!
//! The offending operands travel with the error so callers can report them.

use crate::num::SignedInt;
use std::fmt::Display;

/// The arithmetic operation that was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition, `lhs + rhs`.
    Add,
    /// Subtraction, `lhs - rhs`.
    Sub,
    /// Multiplication, `lhs * rhs`.
    Mul,
    /// Truncating division, `lhs / rhs`.
    Div,
    /// Truncating remainder, `lhs % rhs`.
    Rem,
    /// Negation, `-lhs`.
    Neg,
    /// Increment by one.
    Increment,
    /// Decrement by one.
    Decrement,
}

impl Operation {
    /// Returns the operator symbol for this operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint_core::error::Operation;
    /// assert_eq!(Operation::Mul.symbol(), "*");
    /// assert_eq!(Operation::Increment.symbol(), "++");
    /// ```
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Neg => "-",
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }

    /// Returns `true` for operations that take a right-hand operand.
    #[inline]
    pub const fn is_binary(&self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Rem
        )
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The kind of an `ArithmeticError`, without its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticErrorKind {
    /// The result would exceed the maximum representable value.
    Overflow,
    /// The result would fall below the minimum representable value.
    Underflow,
    /// The operation is undefined for the operands.
    Domain,
}

impl Display for ArithmeticErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow => write!(f, "overflow"),
            Self::Underflow => write!(f, "underflow"),
            Self::Domain => write!(f, "domain error"),
        }
    }
}

/// The operands of a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operands<T> {
    /// The rejected operation.
    pub operation: Operation,
    /// The left-hand (or only) operand.
    pub lhs: T,
    /// The right-hand operand, `None` for unary operations.
    pub rhs: Option<T>,
}

impl<T> Operands<T> {
    #[inline]
    pub(crate) const fn unary(operation: Operation, lhs: T) -> Self {
        Self {
            operation,
            lhs,
            rhs: None,
        }
    }

    #[inline]
    pub(crate) const fn binary(operation: Operation, lhs: T, rhs: T) -> Self {
        Self {
            operation,
            lhs,
            rhs: Some(rhs),
        }
    }
}

impl<T> Display for Operands<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.operation, &self.rhs) {
            (op, Some(rhs)) if op.is_binary() => write!(f, "{} {} {}", self.lhs, op, rhs),
            (Operation::Neg, _) => write!(f, "{}({})", self.operation, self.lhs),
            (op, _) => write!(f, "{}{}", op, self.lhs),
        }
    }
}

/// The error type for guarded arithmetic.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::error::{ArithmeticError, ArithmeticErrorKind, Operation};
/// # use safeint_core::num::ops::guarded;
/// let err = guarded::add(127i8, 1).unwrap_err();
/// assert_eq!(err.kind(), ArithmeticErrorKind::Overflow);
/// assert_eq!(err.operation(), Operation::Add);
/// assert_eq!(err.to_string(), "arithmetic overflow: 127 + 1 is out of range for i8");
///
/// match guarded::div(5i8, 0) {
///     Err(ArithmeticError::Domain(operands)) => assert_eq!(operands.lhs, 5),
///     other => panic!("expected a domain error, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError<T> {
    /// The result would exceed `MAX`.
    Overflow(Operands<T>),
    /// The result would fall below `MIN`.
    Underflow(Operands<T>),
    /// The operation is undefined for the operands.
    Domain(Operands<T>),
}

impl<T> ArithmeticError<T> {
    /// Returns the kind of this error.
    #[inline]
    pub const fn kind(&self) -> ArithmeticErrorKind {
        match self {
            Self::Overflow(_) => ArithmeticErrorKind::Overflow,
            Self::Underflow(_) => ArithmeticErrorKind::Underflow,
            Self::Domain(_) => ArithmeticErrorKind::Domain,
        }
    }

    /// Returns the operands of the rejected operation.
    #[inline]
    pub const fn operands(&self) -> &Operands<T> {
        match self {
            Self::Overflow(o) | Self::Underflow(o) | Self::Domain(o) => o,
        }
    }

    /// Returns the rejected operation.
    #[inline]
    pub const fn operation(&self) -> Operation {
        self.operands().operation
    }

    /// Returns `true` if this is an overflow error.
    #[inline]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }

    /// Returns `true` if this is an underflow error.
    #[inline]
    pub const fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow(_))
    }

    /// Returns `true` if this is a domain error.
    #[inline]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

impl<T> Display for ArithmeticError<T>
where
    T: SignedInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow(o) | Self::Underflow(o) => write!(
                f,
                "arithmetic {}: {} is out of range for {}",
                self.kind(),
                o,
                T::NAME
            ),
            Self::Domain(o) => write!(f, "arithmetic domain error: {} is undefined", o),
        }
    }
}

impl<T> std::error::Error for ArithmeticError<T> where T: SignedInt {}

/// The error type for range-checked conversions between integer widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    /// The source value, rendered as text.
    pub value: String,
    /// The name of the target type (e.g., "i8").
    pub target: &'static str,
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Value {} does not fit in target type {}",
            self.value, self.target
        )
    }
}

impl std::error::Error for ConversionError {}
