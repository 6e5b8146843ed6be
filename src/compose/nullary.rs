//! Function objects taking no arguments.

use std::fmt;

use super::function::{Arity, Function, Name, Shareable, Shared};

#[cfg(feature = "arc")]
type NullaryCallable<'a, R> = dyn Fn() -> R + Send + Sync + 'a;

#[cfg(not(feature = "arc"))]
type NullaryCallable<'a, R> = dyn Fn() -> R + 'a;

/// A deferred computation producing `R`.
///
/// A `NullaryFn` is typically the source of a pipeline: a range, a file
/// reader, or a bound unary function. Every call re-runs the wrapped callable,
/// so a pipeline starting from a `NullaryFn` is restartable by calling it
/// again.
///
/// Cloning is cheap: clones share the wrapped callable.
///
/// # Examples
///
/// ```rust
/// use advent::compose::{Function, NullaryFn, UnaryFn};
///
/// let answer = NullaryFn::named("answer", || 21);
/// let double = UnaryFn::named("double", |value: i32| value * 2);
///
/// let pipeline = answer.pipe(double);
/// assert_eq!(pipeline.call(), 42);
/// assert_eq!(pipeline.name(), Some("answer | double"));
/// ```
pub struct NullaryFn<'a, R> {
    name: Option<Name>,
    function: Shared<NullaryCallable<'a, R>>,
}

impl<'a, R> NullaryFn<'a, R> {
    /// Wraps an anonymous callable.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn() -> R + Shareable + 'a,
    {
        Self {
            name: None,
            function: Shared::new(function),
        }
    }

    /// Wraps a callable under a debug name.
    pub fn named<F>(name: impl Into<Name>, function: F) -> Self
    where
        F: Fn() -> R + Shareable + 'a,
    {
        Self::new(function).with_name(name)
    }

    pub(crate) fn from_parts<F>(name: Option<Name>, function: F) -> Self
    where
        F: Fn() -> R + Shareable + 'a,
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

    /// Runs the wrapped callable.
    pub fn call(&self) -> R {
        (self.function)()
    }
}

impl<R> Clone for NullaryFn<'_, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            function: Shared::clone(&self.function),
        }
    }
}

impl<'a, R: 'a> Function<'a> for NullaryFn<'a, R> {
    type Arguments = ();
    type Output = R;
    type Lifted<S: 'a> = NullaryFn<'a, S>;

    const ARITY: Arity = Arity::Nullary;

    fn invoke(&self, (): Self::Arguments) -> Self::Output {
        self.call()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn lift<S, G>(name: Option<Name>, function: G) -> Self::Lifted<S>
    where
        S: 'a,
        G: Fn(Self::Arguments) -> S + Shareable + 'a,
    {
        NullaryFn::from_parts(name, move || function(()))
    }
}

impl<R> fmt::Display for NullaryFn<'_, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(formatter, "NullaryFn({name})"),
            None => write!(formatter, "NullaryFn(<anonymous>)"),
        }
    }
}

impl<R> fmt::Debug for NullaryFn<'_, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NullaryFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
