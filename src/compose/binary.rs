//! Function objects taking two arguments.

use std::fmt;

use super::function::{Arity, Function, Name, Shareable, Shared, call_name};
use super::unary::UnaryFn;

#[cfg(feature = "arc")]
type BinaryCallable<'a, A, B, R> = dyn Fn(A, B) -> R + Send + Sync + 'a;

#[cfg(not(feature = "arc"))]
type BinaryCallable<'a, A, B, R> = dyn Fn(A, B) -> R + 'a;

/// A combining operator from `(A, B)` to `R`.
///
/// Fixing one argument with [`bind_left`](BinaryFn::bind_left) or
/// [`bind_right`](BinaryFn::bind_right) turns it into a [`UnaryFn`];
/// [`flip`](BinaryFn::flip) swaps its argument order.
///
/// # Examples
///
/// ```rust
/// use advent::compose::BinaryFn;
///
/// let subtract = BinaryFn::named("sub", |left: i32, right: i32| left - right);
///
/// assert_eq!(subtract.call(10, 3), 7);
/// assert_eq!(subtract.clone().bind_left(10).call(3), 7);
/// assert_eq!(subtract.clone().bind_right(3).call(10), 7);
/// assert_eq!(subtract.flip().call(3, 10), 7);
/// ```
pub struct BinaryFn<'a, A, B, R> {
    name: Option<Name>,
    function: Shared<BinaryCallable<'a, A, B, R>>,
}

impl<'a, A, B, R> BinaryFn<'a, A, B, R> {
    /// Wraps an anonymous callable.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A, B) -> R + Shareable + 'a,
    {
        Self {
            name: None,
            function: Shared::new(function),
        }
    }

    /// Wraps a callable under a debug name.
    pub fn named<F>(name: impl Into<Name>, function: F) -> Self
    where
        F: Fn(A, B) -> R + Shareable + 'a,
    {
        Self::new(function).with_name(name)
    }

    pub(crate) fn from_parts<F>(name: Option<Name>, function: F) -> Self
    where
        F: Fn(A, B) -> R + Shareable + 'a,
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
    pub fn call(&self, left: A, right: B) -> R {
        (self.function)(left, right)
    }
}

impl<'a, A: 'a, B: 'a, R: 'a> BinaryFn<'a, A, B, R> {
    /// Fixes the first argument: `x ↦ f(argument, x)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use advent::compose::BinaryFn;
    ///
    /// let subtract = BinaryFn::named("sub", |left: i32, right: i32| left - right);
    /// let from_ten = subtract.bind_left(10);
    ///
    /// assert_eq!(from_ten.call(3), 7);
    /// assert_eq!(from_ten.name(), Some("10 << sub"));
    /// ```
    pub fn bind_left(self, argument: A) -> UnaryFn<'a, B, R>
    where
        A: Clone + fmt::Debug + Shareable,
    {
        let name = self
            .name
            .as_deref()
            .map(|name| Name::from(format!("{argument:?} << {name}")));
        UnaryFn::from_parts(name, move |right| self.call(argument.clone(), right))
    }

    /// Fixes the second argument: `x ↦ f(x, argument)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use advent::compose::BinaryFn;
    ///
    /// let subtract = BinaryFn::named("sub", |left: i32, right: i32| left - right);
    /// let minus_three = subtract.bind_right(3);
    ///
    /// assert_eq!(minus_three.call(10), 7);
    /// assert_eq!(minus_three.name(), Some("sub >> 3"));
    /// ```
    pub fn bind_right(self, argument: B) -> UnaryFn<'a, A, R>
    where
        B: Clone + fmt::Debug + Shareable,
    {
        let name = self
            .name
            .as_deref()
            .map(|name| Name::from(format!("{name} >> {argument:?}")));
        UnaryFn::from_parts(name, move |left| self.call(left, argument.clone()))
    }

    /// Swaps the argument order: `flip(f)(b, a) == f(a, b)`.
    ///
    /// Flipping twice yields a function equivalent to the original.
    #[must_use]
    pub fn flip(self) -> BinaryFn<'a, B, A, R> {
        let name = call_name("flip", &[self.name()]);
        BinaryFn::from_parts(name, move |second, first| self.call(first, second))
    }
}

impl<A, B, R> Clone for BinaryFn<'_, A, B, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            function: Shared::clone(&self.function),
        }
    }
}

impl<'a, A: 'a, B: 'a, R: 'a> Function<'a> for BinaryFn<'a, A, B, R> {
    type Arguments = (A, B);
    type Output = R;
    type Lifted<S: 'a> = BinaryFn<'a, A, B, S>;

    const ARITY: Arity = Arity::Binary;

    fn invoke(&self, (left, right): Self::Arguments) -> Self::Output {
        self.call(left, right)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn lift<S, G>(name: Option<Name>, function: G) -> Self::Lifted<S>
    where
        S: 'a,
        G: Fn(Self::Arguments) -> S + Shareable + 'a,
    {
        BinaryFn::from_parts(name, move |left, right| function((left, right)))
    }
}

impl<A, B, R> fmt::Display for BinaryFn<'_, A, B, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(formatter, "BinaryFn({name})"),
            None => write!(formatter, "BinaryFn(<anonymous>)"),
        }
    }
}

impl<A, B, R> fmt::Debug for BinaryFn<'_, A, B, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BinaryFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// IntoBinary
// =============================================================================

/// Conversion into a [`BinaryFn`].
///
/// The binary counterpart of [`IntoUnary`](super::IntoUnary).
pub trait IntoBinary<'a, A, B, R> {
    /// Performs the conversion.
    fn into_binary(self) -> BinaryFn<'a, A, B, R>;
}

impl<'a, A, B, R, F> IntoBinary<'a, A, B, R> for F
where
    F: Fn(A, B) -> R + Shareable + 'a,
{
    fn into_binary(self) -> BinaryFn<'a, A, B, R> {
        BinaryFn::new(self)
    }
}

impl<'a, A, B, R> IntoBinary<'a, A, B, R> for BinaryFn<'a, A, B, R> {
    fn into_binary(self) -> BinaryFn<'a, A, B, R> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn power() -> BinaryFn<'static, i64, u32, i64> {
        BinaryFn::named("pow", |base: i64, exponent: u32| base.pow(exponent))
    }

    #[rstest]
    fn flip_swaps_argument_types() {
        let flipped = power().flip();
        // flipped(3, 2) = pow(2, 3)
        assert_eq!(flipped.call(3, 2), 8);
        assert_eq!(flipped.name(), Some("flip(pow)"));
    }

    #[rstest]
    fn double_flip_restores_argument_order() {
        let restored = power().flip().flip();
        assert_eq!(restored.call(2, 10), 1024);
        assert_eq!(restored.name(), Some("flip(flip(pow))"));
    }

    #[rstest]
    fn bind_left_fixes_first_argument() {
        let powers_of_two = power().bind_left(2);
        assert_eq!(powers_of_two.call(5), 32);
    }

    #[rstest]
    fn bind_right_fixes_second_argument() {
        let square = power().bind_right(2);
        assert_eq!(square.call(9), 81);
        assert_eq!(square.name(), Some("pow >> 2"));
    }

    #[rstest]
    fn pipe_keeps_binary_arity() {
        let describe = UnaryFn::new(|value: i64| format!("<{value}>"));
        let described_power = power().pipe(describe);

        assert_eq!(described_power.arity(), Arity::Binary);
        assert_eq!(described_power.call(3, 3), "<27>");
        assert_eq!(described_power.name(), Some("pow | _"));
    }
}
