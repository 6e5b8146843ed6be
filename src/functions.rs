//! Conversion and adapter helpers.

use std::str::FromStr;

use crate::compose::{BinaryFn, Shareable, UnaryFn};

/// Converts the argument with [`Into`].
///
/// # Examples
///
/// ```rust
/// use advent::functions::to;
///
/// let widen = to::<i64, i32>();
/// assert_eq!(widen.call(-3), -3_i64);
/// ```
pub fn to<'a, T, A>() -> UnaryFn<'a, A, T>
where
    A: Into<T> + 'a,
    T: 'a,
{
    UnaryFn::named("to", |value: A| value.into())
}

/// Collects a sequence into any [`FromIterator`] container.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
///
/// use advent::functions::collect;
///
/// let unique = collect::<BTreeSet<_>, _>();
/// assert_eq!(unique.call(vec![3, 1, 3]).into_iter().collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub fn collect<'a, C, I>() -> UnaryFn<'a, I, C>
where
    I: IntoIterator + 'a,
    C: FromIterator<I::Item> + 'a,
{
    UnaryFn::named("collect", |items: I| items.into_iter().collect())
}

/// Parses the argument with [`FromStr`].
///
/// The parse error is returned, not raised, so the result composes with
/// [`pipe_ok`](crate::compose::Function::pipe_ok).
///
/// # Examples
///
/// ```rust
/// use advent::functions::parse;
///
/// let number = parse::<u8, &str>();
/// assert_eq!(number.call("42"), Ok(42));
/// assert!(number.call("256").is_err());
/// ```
pub fn parse<'a, T, S>() -> UnaryFn<'a, S, Result<T, T::Err>>
where
    T: FromStr + 'a,
    S: AsRef<str> + 'a,
{
    UnaryFn::named("parse", |text: S| text.as_ref().trim().parse())
}

/// Wraps a plain callable as a unary function object.
pub fn apply<'a, A, R, F>(callable: F) -> UnaryFn<'a, A, R>
where
    A: 'a,
    R: 'a,
    F: Fn(A) -> R + Shareable + 'a,
{
    UnaryFn::named("apply", callable)
}

/// Builds a pair from its two arguments.
///
/// # Examples
///
/// ```rust
/// use advent::compose::train;
/// use advent::functions::pair;
/// use advent::operators::{max, min};
///
/// let ordered = train(min(), pair(), max());
/// assert_eq!(ordered.call(9, 2), (2, 9));
/// ```
pub fn pair<'a, A: 'a, B: 'a>() -> BinaryFn<'a, A, B, (A, B)> {
    BinaryFn::named("pair", |left: A, right: B| (left, right))
}
