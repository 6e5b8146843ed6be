//! Combinators over function objects.
//!
//! This module provides the combinators used to recombine function objects
//! without invoking them:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Ignores its input and returns a fixed value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`atop`]: Applies a unary function to the result of any function (B combinator)
//! - [`substitute`]: Feeds a projection of the input back with the input (S combinator)
//! - [`train`]: Fan-out/fan-in over two functions of the same arity
//!
//! All of them are arity-checked by the type system: `train` only accepts
//! outer operands taking the same arguments, and `atop` only accepts a unary
//! outer function. For run-time arity checking see [`AnyFn`](super::AnyFn).

use std::fmt;

use super::binary::{BinaryFn, IntoBinary};
use super::function::{Function, Shareable, call_name};
use super::unary::{IntoUnary, UnaryFn};

/// Returns the identity function object.
///
/// The identity is the unit element of [`pipe`](Function::pipe):
/// `f.pipe(identity())` behaves like `f`.
///
/// # Examples
///
/// ```rust
/// use advent::compose::identity;
///
/// assert_eq!(identity().call(42), 42);
/// assert_eq!(identity::<&str>().name(), Some("identity"));
/// ```
pub fn identity<'a, T: 'a>() -> UnaryFn<'a, T, T> {
    UnaryFn::named("identity", |value| value)
}

/// Returns a function object that ignores its input and yields `value`.
///
/// Also known as the K combinator in combinatory logic.
///
/// # Examples
///
/// ```rust
/// use advent::compose::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five.call("ignored"), 5);
/// ```
pub fn constant<'a, T, U>(value: T) -> UnaryFn<'a, U, T>
where
    T: Clone + fmt::Debug + Shareable + 'a,
    U: 'a,
{
    let name = format!("constant({value:?})");
    UnaryFn::named(name, move |_| value.clone())
}

/// Swaps the arguments of a binary function object.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f))(a, b) == f(a, b)`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```rust
/// use advent::compose::{BinaryFn, flip};
///
/// let divide = BinaryFn::new(|numerator: f64, denominator: f64| numerator / denominator);
/// let flipped_divide = flip(divide);
///
/// // flipped_divide(10.0, 2.0) = divide(2.0, 10.0) = 0.2
/// assert!((flipped_divide.call(10.0, 2.0) - 0.2).abs() < f64::EPSILON);
/// ```
pub fn flip<'a, A, B, R>(function: impl IntoBinary<'a, A, B, R>) -> BinaryFn<'a, B, A, R>
where
    A: 'a,
    B: 'a,
    R: 'a,
{
    function.into_binary().flip()
}

/// Applies `outer` to whatever `inner` produces: `atop(f, g)(..) == f(g(..))`.
///
/// The result has the arity of `inner`. This is [`pipe`](Function::pipe)
/// with its operands reversed.
///
/// # Examples
///
/// ```rust
/// use advent::compose::{BinaryFn, UnaryFn, atop};
///
/// let negate = UnaryFn::named("negate", |value: i32| -value);
/// let add = BinaryFn::named("add", |left: i32, right: i32| left + right);
///
/// let negated_sum = atop(negate, add);
/// assert_eq!(negated_sum.call(2, 3), -5);
/// assert_eq!(negated_sum.name(), Some("atop(negate, add)"));
/// ```
pub fn atop<'a, G, R>(outer: impl IntoUnary<'a, G::Output, R>, inner: G) -> G::Lifted<R>
where
    G: Function<'a>,
    R: 'a,
{
    let outer = outer.into_unary();
    let name = call_name("atop", &[outer.name(), inner.name()]);
    G::lift(name, move |arguments| outer.call(inner.invoke(arguments)))
}

/// Combines two derived values with a binary combiner:
/// `train(f, g, h)(..) == g(f(..), h(..))`.
///
/// `left` and `right` must take the same arguments; the result takes them too.
/// `left` is evaluated before `right`.
///
/// # Examples
///
/// ```rust
/// use advent::compose::{BinaryFn, train};
///
/// let minimum = BinaryFn::named("min", |left: i32, right: i32| left.min(right));
/// let maximum = BinaryFn::named("max", |left: i32, right: i32| left.max(right));
/// let pair = BinaryFn::named("pair", |low: i32, high: i32| (low, high));
///
/// let ordered = train(minimum, pair, maximum);
/// assert_eq!(ordered.call(9, 2), (2, 9));
/// assert_eq!(ordered.name(), Some("train(min, pair, max)"));
/// ```
///
/// Operands of different arity do not type-check:
///
/// ```compile_fail
/// use advent::compose::{BinaryFn, UnaryFn, train};
///
/// let negate = UnaryFn::new(|value: i32| -value);
/// let add = BinaryFn::new(|left: i32, right: i32| left + right);
/// let pair = BinaryFn::new(|left: i32, right: i32| (left, right));
/// let _ = train(negate, pair, add);
/// ```
pub fn train<'a, F, H, R>(
    left: F,
    combiner: impl IntoBinary<'a, F::Output, H::Output, R>,
    right: H,
) -> F::Lifted<R>
where
    F: Function<'a>,
    H: Function<'a, Arguments = F::Arguments>,
    F::Arguments: Clone,
    R: 'a,
{
    let combiner = combiner.into_binary();
    let name = call_name("train", &[left.name(), combiner.name(), right.name()]);
    F::lift(name, move |arguments: F::Arguments| {
        let left_value = left.invoke(arguments.clone());
        let right_value = right.invoke(arguments);
        combiner.call(left_value, right_value)
    })
}

/// Feeds the input to `projector`, builds a unary function from the result,
/// and applies that to the same input: `substitute(f, p)(x) == f(p(x))(x)`.
///
/// Also known as the S combinator in combinatory logic.
///
/// # Examples
///
/// ```rust
/// use advent::compose::{UnaryFn, substitute};
///
/// // Subtract the minimum from every element.
/// let normalise = substitute(
///     |minimum: i32| UnaryFn::new(move |values: Vec<i32>| {
///         values.into_iter().map(|value| value - minimum).collect::<Vec<_>>()
///     }),
///     |values: Vec<i32>| values.iter().copied().min().unwrap_or(0),
/// );
///
/// assert_eq!(normalise.call(vec![5, 3, 9]), vec![2, 0, 6]);
/// ```
pub fn substitute<'a, A, P, R, F>(
    function: F,
    projector: impl IntoUnary<'a, A, P>,
) -> UnaryFn<'a, A, R>
where
    A: Clone + 'a,
    P: 'a,
    R: 'a,
    F: Fn(P) -> UnaryFn<'a, A, R> + Shareable + 'a,
{
    let projector = projector.into_unary();
    let name = call_name("substitute", &[None, projector.name()]);
    UnaryFn::from_parts(name, move |argument: A| {
        function(projector.call(argument.clone())).call(argument)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::NullaryFn;
    use rstest::rstest;

    #[rstest]
    fn identity_with_unit() {
        identity().call(());
    }

    #[rstest]
    fn constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello.call(42), "hello");
        assert_eq!(always_hello.name(), Some("constant(\"hello\")"));
    }

    #[rstest]
    fn flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        // flipped_power(3, 2) = power(2, 3) = 8
        assert_eq!(flipped_power.call(3, 2), 8);
    }

    #[rstest]
    fn train_over_nullary_operands() {
        let width = NullaryFn::named("width", || 3);
        let height = NullaryFn::named("height", || 4);
        let area = train(width, |left: i32, right: i32| left * right, height);

        assert_eq!(area.call(), 12);
        assert_eq!(area.name(), Some("train(width, _, height)"));
    }

    #[rstest]
    fn train_over_unary_operands() {
        let count = UnaryFn::new(|values: Vec<f64>| values.len() as f64);
        let total = UnaryFn::new(|values: Vec<f64>| values.iter().sum::<f64>());
        let mean = train(total, |sum: f64, size: f64| sum / size, count);

        assert!((mean.call(vec![1.0, 2.0, 6.0]) - 3.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn atop_over_nullary_operand() {
        let source = NullaryFn::new(|| "abc".to_string());
        let shout = atop(|text: String| text.to_uppercase(), source);

        assert_eq!(shout.call(), "ABC");
        assert_eq!(shout.name(), None);
    }
}
