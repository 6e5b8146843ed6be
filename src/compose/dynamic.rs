//! Function objects whose arity is only known at run time.
//!
//! [`AnyFn`] is the closed set of the three wrapper kinds. Its composition
//! operations check arity when the operands are combined and report a
//! [`CompositionError`] instead of building an ill-formed pipeline. Once a
//! composition succeeds, invoking the result cannot fail for arity reasons.

use std::fmt;

use super::binary::BinaryFn;
use super::combinators::train;
use super::function::{Arity, Function, Shareable};
use super::nullary::NullaryFn;
use super::unary::UnaryFn;
use crate::error::CompositionError;

fn reject(operation: &'static str, expected: Arity, found: Arity) -> CompositionError {
    tracing::debug!(operation, %expected, %found, "rejected composition");
    CompositionError::ArityMismatch {
        operation,
        expected,
        found,
    }
}

/// A function object of any arity over arguments of type `T`.
///
/// # Examples
///
/// ```rust
/// use advent::compose::{AnyFn, Arity, BinaryFn, UnaryFn};
/// use advent::error::CompositionError;
///
/// let add: AnyFn<i32, i32> = BinaryFn::new(|left: i32, right: i32| left + right).into();
/// let double: AnyFn<i32, i32> = UnaryFn::new(|value: i32| value * 2).into();
///
/// let add_then_double = add.clone().pipe(double).unwrap();
/// assert_eq!(add_then_double.apply(vec![1, 2]), Ok(6));
///
/// // A binary function cannot receive the output of a pipeline stage.
/// assert_eq!(
///     add_then_double.pipe(add).unwrap_err(),
///     CompositionError::ArityMismatch {
///         operation: "pipe",
///         expected: Arity::Unary,
///         found: Arity::Binary,
///     }
/// );
/// ```
pub enum AnyFn<'a, T, R> {
    /// A function object taking no arguments.
    Nullary(NullaryFn<'a, R>),
    /// A function object taking one argument.
    Unary(UnaryFn<'a, T, R>),
    /// A function object taking two arguments.
    Binary(BinaryFn<'a, T, T, R>),
}

impl<'a, T, R> AnyFn<'a, T, R> {
    /// Returns the arity of the wrapped function object.
    pub const fn arity(&self) -> Arity {
        match self {
            Self::Nullary(_) => Arity::Nullary,
            Self::Unary(_) => Arity::Unary,
            Self::Binary(_) => Arity::Binary,
        }
    }

    /// Returns the debug name of the wrapped function object, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Nullary(function) => function.name(),
            Self::Unary(function) => function.name(),
            Self::Binary(function) => function.name(),
        }
    }

    /// Invokes the wrapped function object with as many arguments as its
    /// arity requires.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::ArgumentCount`] when the number of
    /// arguments differs from the arity. The function object is not invoked
    /// in that case.
    pub fn apply(&self, arguments: Vec<T>) -> Result<R, CompositionError> {
        let found = arguments.len();
        let mut arguments = arguments.into_iter();
        match (self, arguments.next(), arguments.next(), arguments.next()) {
            (Self::Nullary(function), None, None, None) => Ok(function.call()),
            (Self::Unary(function), Some(argument), None, None) => Ok(function.call(argument)),
            (Self::Binary(function), Some(left), Some(right), None) => {
                Ok(function.call(left, right))
            }
            _ => Err(CompositionError::ArgumentCount {
                expected: self.arity().count(),
                found,
            }),
        }
    }

    /// Unwraps a nullary function object.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::TypeMismatch`] for any other kind.
    pub fn into_nullary(self) -> Result<NullaryFn<'a, R>, CompositionError> {
        match self {
            Self::Nullary(function) => Ok(function),
            other => Err(CompositionError::TypeMismatch {
                expected: Arity::Nullary,
                found: other.arity(),
            }),
        }
    }

    /// Unwraps a unary function object.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::TypeMismatch`] for any other kind.
    pub fn into_unary(self) -> Result<UnaryFn<'a, T, R>, CompositionError> {
        match self {
            Self::Unary(function) => Ok(function),
            other => Err(CompositionError::TypeMismatch {
                expected: Arity::Unary,
                found: other.arity(),
            }),
        }
    }

    /// Unwraps a binary function object.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::TypeMismatch`] for any other kind.
    pub fn into_binary(self) -> Result<BinaryFn<'a, T, T, R>, CompositionError> {
        match self {
            Self::Binary(function) => Ok(function),
            other => Err(CompositionError::TypeMismatch {
                expected: Arity::Binary,
                found: other.arity(),
            }),
        }
    }
}

impl<'a, T: 'a, R: 'a> AnyFn<'a, T, R> {
    /// Composes left to right, keeping the arity of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::ArityMismatch`] when `next` is not unary.
    pub fn pipe<S: 'a>(self, next: AnyFn<'a, R, S>) -> Result<AnyFn<'a, T, S>, CompositionError> {
        let AnyFn::Unary(next) = next else {
            return Err(reject("pipe", Arity::Unary, next.arity()));
        };
        Ok(match self {
            Self::Nullary(function) => AnyFn::Nullary(function.pipe(next)),
            Self::Unary(function) => AnyFn::Unary(function.pipe(next)),
            Self::Binary(function) => AnyFn::Binary(function.pipe(next)),
        })
    }

    /// Applies `outer` to whatever `inner` produces. Never fails: the result
    /// simply has the arity of `inner`.
    pub fn atop<X: 'a>(outer: UnaryFn<'a, X, R>, inner: AnyFn<'a, T, X>) -> Self {
        match inner {
            AnyFn::Nullary(function) => Self::Nullary(super::atop(outer, function)),
            AnyFn::Unary(function) => Self::Unary(super::atop(outer, function)),
            AnyFn::Binary(function) => Self::Binary(super::atop(outer, function)),
        }
    }

    /// Fan-out/fan-in: `try_train(f, g, h)(..) == g(f(..), h(..))`.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::ArityMismatch`] when `left` and `right`
    /// have different arities; `expected` is the arity of `left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use advent::compose::{AnyFn, BinaryFn, UnaryFn};
    ///
    /// let negate: AnyFn<i32, i32> = UnaryFn::new(|value: i32| -value).into();
    /// let add: AnyFn<i32, i32> = BinaryFn::new(|left: i32, right: i32| left + right).into();
    /// let pair = BinaryFn::new(|left: i32, right: i32| (left, right));
    ///
    /// assert!(AnyFn::try_train(negate, pair, add).is_err());
    /// ```
    pub fn try_train<X, Y>(
        left: AnyFn<'a, T, X>,
        combiner: BinaryFn<'a, X, Y, R>,
        right: AnyFn<'a, T, Y>,
    ) -> Result<Self, CompositionError>
    where
        T: Clone,
        X: 'a,
        Y: 'a,
    {
        match (left, right) {
            (AnyFn::Nullary(left), AnyFn::Nullary(right)) => {
                Ok(Self::Nullary(train(left, combiner, right)))
            }
            (AnyFn::Unary(left), AnyFn::Unary(right)) => {
                Ok(Self::Unary(train(left, combiner, right)))
            }
            (AnyFn::Binary(left), AnyFn::Binary(right)) => {
                Ok(Self::Binary(train(left, combiner, right)))
            }
            (left, right) => Err(reject("train", left.arity(), right.arity())),
        }
    }

    /// Swaps the arguments of a binary function object.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::ArityMismatch`] for non-binary operands.
    pub fn flip(self) -> Result<Self, CompositionError> {
        match self {
            Self::Binary(function) => Ok(Self::Binary(function.flip())),
            other => Err(reject("flip", Arity::Binary, other.arity())),
        }
    }

    /// Fixes the first argument of a binary function object.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::ArityMismatch`] for non-binary operands.
    pub fn bind_left(self, argument: T) -> Result<Self, CompositionError>
    where
        T: Clone + fmt::Debug + Shareable,
    {
        match self {
            Self::Binary(function) => Ok(Self::Unary(function.bind_left(argument))),
            other => Err(reject("bind_left", Arity::Binary, other.arity())),
        }
    }

    /// Fixes the last argument: binary becomes unary, unary becomes nullary.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::ArityMismatch`] for nullary operands.
    pub fn bind_right(self, argument: T) -> Result<Self, CompositionError>
    where
        T: Clone + fmt::Debug + Shareable,
    {
        match self {
            Self::Binary(function) => Ok(Self::Unary(function.bind_right(argument))),
            Self::Unary(function) => Ok(Self::Nullary(function.bind(argument))),
            Self::Nullary(_) => Err(reject("bind_right", Arity::Unary, Arity::Nullary)),
        }
    }
}

impl<T, R> Clone for AnyFn<'_, T, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Nullary(function) => Self::Nullary(function.clone()),
            Self::Unary(function) => Self::Unary(function.clone()),
            Self::Binary(function) => Self::Binary(function.clone()),
        }
    }
}

impl<'a, T, R> From<NullaryFn<'a, R>> for AnyFn<'a, T, R> {
    fn from(function: NullaryFn<'a, R>) -> Self {
        Self::Nullary(function)
    }
}

impl<'a, T, R> From<UnaryFn<'a, T, R>> for AnyFn<'a, T, R> {
    fn from(function: UnaryFn<'a, T, R>) -> Self {
        Self::Unary(function)
    }
}

impl<'a, T, R> From<BinaryFn<'a, T, T, R>> for AnyFn<'a, T, R> {
    fn from(function: BinaryFn<'a, T, T, R>) -> Self {
        Self::Binary(function)
    }
}

impl<T, R> fmt::Display for AnyFn<'_, T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nullary(function) => write!(formatter, "{function}"),
            Self::Unary(function) => write!(formatter, "{function}"),
            Self::Binary(function) => write!(formatter, "{function}"),
        }
    }
}

impl<T, R> fmt::Debug for AnyFn<'_, T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nullary(function) => formatter.debug_tuple("Nullary").field(function).finish(),
            Self::Unary(function) => formatter.debug_tuple("Unary").field(function).finish(),
            Self::Binary(function) => formatter.debug_tuple("Binary").field(function).finish(),
        }
    }
}
