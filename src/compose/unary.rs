//! Function objects taking one argument.

use std::fmt;

use super::function::{Arity, Function, Name, Shareable, Shared};
use super::nullary::NullaryFn;

#[cfg(feature = "arc")]
type UnaryCallable<'a, A, R> = dyn Fn(A) -> R + Send + Sync + 'a;

#[cfg(not(feature = "arc"))]
type UnaryCallable<'a, A, R> = dyn Fn(A) -> R + 'a;

/// A transform, predicate or terminal reducer from `A` to `R`.
///
/// `UnaryFn` is the only kind allowed on the right-hand side of
/// [`pipe`](Function::pipe), and the kind every catalog operator produces.
/// The wrapped callable lives for `'a`; `A` itself may borrow.
///
/// # Examples
///
/// ```rust
/// use advent::compose::{Function, UnaryFn};
///
/// let length = UnaryFn::named("length", |text: String| text.len());
/// let is_long = UnaryFn::named("is_long", |size: usize| size > 3);
///
/// let pipeline = length.pipe(is_long);
/// assert!(pipeline.call("hello".to_string()));
/// assert!(!pipeline.call("hi".to_string()));
/// ```
pub struct UnaryFn<'a, A, R> {
    name: Option<Name>,
    function: Shared<UnaryCallable<'a, A, R>>,
}

impl<'a, A, R> UnaryFn<'a, A, R> {
    /// Wraps an anonymous callable.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> R + Shareable + 'a,
    {
        Self {
            name: None,
            function: Shared::new(function),
        }
    }

    /// Wraps a callable under a debug name.
    pub fn named<F>(name: impl Into<Name>, function: F) -> Self
    where
        F: Fn(A) -> R + Shareable + 'a,
    {
        Self::new(function).with_name(name)
    }

    pub(crate) fn from_parts<F>(name: Option<Name>, function: F) -> Self
    where
        F: Fn(A) -> R + Shareable + 'a,
    {
        Self {
            name,
            function: Shared::new(function),
        }
    }

    /// Returns this function object under a new debug name.
    #[must_use]
    pub fn with_name(self, name: impl Into<Name>) -> Self {
        Self {
            name: Some(name.into()),
            function: self.function,
        }
    }

    /// Returns the debug name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Applies the wrapped callable.
    pub fn call(&self, argument: A) -> R {
        (self.function)(argument)
    }
}

impl<'a, A: 'a, R: 'a> UnaryFn<'a, A, R> {
    /// Fixes the argument, producing a deferred computation `() ↦ f(argument)`.
    ///
    /// The argument is cloned on every call of the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use advent::compose::UnaryFn;
    ///
    /// let double = UnaryFn::named("double", |value: i32| value * 2);
    /// let deferred = double.bind(21);
    ///
    /// assert_eq!(deferred.call(), 42);
    /// assert_eq!(deferred.name(), Some("double >> 21"));
    /// ```
    pub fn bind(self, argument: A) -> NullaryFn<'a, R>
    where
        A: Clone + fmt::Debug + Shareable,
    {
        let name = self
            .name
            .as_deref()
            .map(|name| Name::from(format!("{name} >> {argument:?}")));
        NullaryFn::from_parts(name, move || self.call(argument.clone()))
    }
}

impl<A, R> Clone for UnaryFn<'_, A, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            function: Shared::clone(&self.function),
        }
    }
}

impl<'a, A: 'a, R: 'a> Function<'a> for UnaryFn<'a, A, R> {
    type Arguments = A;
    type Output = R;
    type Lifted<S: 'a> = UnaryFn<'a, A, S>;

    const ARITY: Arity = Arity::Unary;

    fn invoke(&self, arguments: Self::Arguments) -> Self::Output {
        self.call(arguments)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn lift<S, G>(name: Option<Name>, function: G) -> Self::Lifted<S>
    where
        S: 'a,
        G: Fn(Self::Arguments) -> S + Shareable + 'a,
    {
        UnaryFn::from_parts(name, function)
    }
}

impl<A, R> fmt::Display for UnaryFn<'_, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(formatter, "UnaryFn({name})"),
            None => write!(formatter, "UnaryFn(<anonymous>)"),
        }
    }
}

impl<A, R> fmt::Debug for UnaryFn<'_, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("UnaryFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// IntoUnary
// =============================================================================

/// Conversion into a [`UnaryFn`].
///
/// Catalog factories accept `impl IntoUnary<'a, A, R>` so that a closure and an
/// already-wrapped function object can be passed interchangeably.
///
/// # Examples
///
/// ```rust
/// use advent::compose::{IntoUnary, UnaryFn};
///
/// let from_closure = (|value: i32| value + 1).into_unary();
/// let from_wrapper = UnaryFn::named("inc", |value: i32| value + 1).into_unary();
///
/// assert_eq!(from_closure.call(1), from_wrapper.call(1));
/// assert_eq!(from_wrapper.name(), Some("inc"));
/// ```
pub trait IntoUnary<'a, A, R> {
    /// Performs the conversion.
    fn into_unary(self) -> UnaryFn<'a, A, R>;
}

impl<'a, A, R, F> IntoUnary<'a, A, R> for F
where
    F: Fn(A) -> R + Shareable + 'a,
{
    fn into_unary(self) -> UnaryFn<'a, A, R> {
        UnaryFn::new(self)
    }
}

impl<'a, A, R> IntoUnary<'a, A, R> for UnaryFn<'a, A, R> {
    fn into_unary(self) -> UnaryFn<'a, A, R> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn call_forwards_the_argument() {
        let negate = UnaryFn::new(|value: i64| -value);
        assert_eq!(negate.call(5), -5);
    }

    #[rstest]
    fn bind_of_anonymous_function_is_anonymous() {
        let negate = UnaryFn::new(|value: i64| -value);
        let deferred = negate.bind(3);

        assert_eq!(deferred.call(), -3);
        assert_eq!(deferred.name(), None);
    }

    #[rstest]
    fn bind_clones_the_argument_per_call() {
        let length = UnaryFn::new(|text: String| text.len());
        let deferred = length.bind("four".to_string());

        assert_eq!(deferred.call(), 4);
        assert_eq!(deferred.call(), 4);
    }

    #[rstest]
    fn pipe_names_both_sides() {
        let length = UnaryFn::named("length", |text: String| text.len());
        let double = UnaryFn::named("double", |size: usize| size * 2);

        assert_eq!(length.pipe(double).name(), Some("length | double"));
    }

    #[rstest]
    fn debug_shows_the_name() {
        let length = UnaryFn::named("length", |text: String| text.len());
        assert_eq!(format!("{length:?}"), "UnaryFn { name: Some(\"length\"), .. }");
    }
}
