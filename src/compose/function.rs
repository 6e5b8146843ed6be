//! The shared invocation capability of all function objects.
//!
//! Every function object in this crate has a fixed [`Arity`] that is part of
//! its type. The [`Function`] trait abstracts over the three wrapper kinds so
//! that arity-preserving operations ([`pipe`](Function::pipe),
//! [`train`](super::train), [`atop`](super::atop)) can be written once and
//! still produce a wrapper of the right kind.
//!
//! # Arity Preservation
//!
//! ```text
//! NullaryFn<'a, R>       | UnaryFn<'a, R, S> = NullaryFn<'a, S>
//! UnaryFn<'a, A, R>      | UnaryFn<'a, R, S> = UnaryFn<'a, A, S>
//! BinaryFn<'a, A, B, R>  | UnaryFn<'a, R, S> = BinaryFn<'a, A, B, S>
//! ```

use std::fmt;

use super::unary::UnaryFn;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer holding a wrapped callable.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc` and wrapped
/// callables must be `Send + Sync`. Otherwise it is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type Shared<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type Shared<T> = std::rc::Rc<T>;

/// Marker for values that may be captured by a function object.
///
/// Without the `arc` feature every type is `Shareable`. With it, only
/// `Send + Sync` types are, which makes every function object `Send + Sync`.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> Shareable for T {}

/// Marker for values that may be captured by a function object.
///
/// Without the `arc` feature every type is `Shareable`. With it, only
/// `Send + Sync` types are, which makes every function object `Send + Sync`.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}

/// Debug name attached to a function object.
pub type Name = Shared<str>;

const ANONYMOUS: &str = "_";

/// Renders an optional operand name, `_` when anonymous.
pub(crate) fn label(name: Option<&str>) -> &str {
    name.unwrap_or(ANONYMOUS)
}

/// Joins two optional operand names with an infix operator, e.g. `"f | g"`.
///
/// Returns `None` when neither operand is named.
pub(crate) fn infix_name(left: Option<&str>, operator: &str, right: Option<&str>) -> Option<Name> {
    if left.is_none() && right.is_none() {
        return None;
    }
    let rendered = format!(
        "{} {operator} {}",
        left.unwrap_or(ANONYMOUS),
        right.unwrap_or(ANONYMOUS)
    );
    Some(Name::from(rendered))
}

/// Renders a combinator application over optional operand names, e.g.
/// `"train(f, g, h)"`.
///
/// Returns `None` when no operand is named.
pub(crate) fn call_name(combinator: &str, operands: &[Option<&str>]) -> Option<Name> {
    if operands.iter().all(Option::is_none) {
        return None;
    }
    let rendered = operands
        .iter()
        .map(|operand| operand.unwrap_or(ANONYMOUS))
        .collect::<Vec<_>>()
        .join(", ");
    Some(Name::from(format!("{combinator}({rendered})")))
}

// =============================================================================
// Arity
// =============================================================================

/// Number of arguments a function object accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Arity {
    /// No arguments: a deferred computation or generator source.
    Nullary,
    /// One argument: a transform, predicate or terminal reducer.
    Unary,
    /// Two arguments: a combining operator.
    Binary,
}

impl Arity {
    /// Returns the number of arguments as a plain count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use advent::compose::Arity;
    ///
    /// assert_eq!(Arity::Nullary.count(), 0);
    /// assert_eq!(Arity::Binary.count(), 2);
    /// ```
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Nullary => 0,
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Nullary => "nullary",
            Self::Unary => "unary",
            Self::Binary => "binary",
        };
        formatter.write_str(label)
    }
}

// =============================================================================
// Function
// =============================================================================

/// A function object of fixed arity.
///
/// Implemented by [`NullaryFn`](super::NullaryFn), [`UnaryFn`] and
/// [`BinaryFn`](super::BinaryFn). The arguments of an invocation are packed
/// into [`Arguments`](Function::Arguments): `()`, `A` or `(A, B)`.
///
/// `'a` bounds everything a function object captures, so a function object
/// over borrowed arguments (`&'a str`) composes like one over owned ones.
///
/// # Laws
///
/// ## Pipe Associativity
///
/// ```text
/// f.pipe(g).pipe(h) == f.pipe(g.pipe(h))
/// ```
///
/// ## Pipe Identity
///
/// ```text
/// f.pipe(identity()) == f
/// ```
///
/// # Examples
///
/// ```rust
/// use advent::compose::{BinaryFn, Function, UnaryFn};
///
/// let add = BinaryFn::named("add", |left: i32, right: i32| left + right);
/// let double = UnaryFn::named("double", |value: i32| value * 2);
///
/// let add_then_double = add.pipe(double);
/// assert_eq!(add_then_double.call(3, 4), 14);
/// assert_eq!(add_then_double.name(), Some("add | double"));
/// ```
pub trait Function<'a>: Clone + Shareable + 'a {
    /// The packed arguments of one invocation.
    type Arguments: 'a;

    /// The value produced by one invocation.
    type Output: 'a;

    /// The wrapper of the same arity producing `S` instead of `Output`.
    type Lifted<S: 'a>: Function<'a, Arguments = Self::Arguments, Output = S>;

    /// The arity of this wrapper kind.
    const ARITY: Arity;

    /// Invokes the wrapped callable with packed arguments.
    fn invoke(&self, arguments: Self::Arguments) -> Self::Output;

    /// Returns the debug name, if any.
    fn name(&self) -> Option<&str>;

    /// Builds a wrapper of this arity from a callable over packed arguments.
    fn lift<S, G>(name: Option<Name>, function: G) -> Self::Lifted<S>
    where
        S: 'a,
        G: Fn(Self::Arguments) -> S + Shareable + 'a;

    /// Returns the arity of this function object.
    fn arity(&self) -> Arity {
        Self::ARITY
    }

    /// Composes left to right: the output of `self` becomes the sole input of
    /// `next`. The result keeps the arity of `self`.
    ///
    /// The right-hand side is always a [`UnaryFn`]; anything else is rejected
    /// by the type checker:
    ///
    /// ```compile_fail
    /// use advent::compose::{BinaryFn, Function, UnaryFn};
    ///
    /// let double = UnaryFn::new(|value: i32| value * 2);
    /// let add = BinaryFn::new(|left: i32, right: i32| left + right);
    /// let _ = double.pipe(add);
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use advent::compose::{Function, NullaryFn, UnaryFn};
    ///
    /// let source = NullaryFn::new(|| vec![1, 2, 3]);
    /// let total = UnaryFn::new(|values: Vec<i32>| values.iter().sum::<i32>());
    ///
    /// assert_eq!(source.pipe(total).call(), 6);
    /// ```
    fn pipe<S>(self, next: UnaryFn<'a, Self::Output, S>) -> Self::Lifted<S>
    where
        S: 'a,
    {
        let name = infix_name(self.name(), "|", next.name());
        Self::lift(name, move |arguments| next.call(self.invoke(arguments)))
    }

    /// Pipes the `Ok` value of a fallible function object into `next`,
    /// passing any `Err` through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use advent::compose::{Function, UnaryFn};
    ///
    /// let parse = UnaryFn::new(|text: String| text.parse::<i32>());
    /// let double = UnaryFn::new(|value: i32| value * 2);
    /// let parse_and_double = parse.pipe_ok(double);
    ///
    /// assert_eq!(parse_and_double.call("21".to_string()), Ok(42));
    /// assert!(parse_and_double.call("x".to_string()).is_err());
    /// ```
    fn pipe_ok<T, E, S>(self, next: UnaryFn<'a, T, S>) -> Self::Lifted<Result<S, E>>
    where
        Self: Function<'a, Output = Result<T, E>>,
        T: 'a,
        E: 'a,
        S: 'a,
    {
        let name = infix_name(self.name(), "|?", next.name());
        Self::lift(name, move |arguments| {
            self.invoke(arguments).map(|value| next.call(value))
        })
    }
}
