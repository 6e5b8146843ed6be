//! Arithmetic operators.
//!
//! Operators defined by a `std::ops` trait accept any type implementing it;
//! the others are generic over [`Number`], [`Integral`] or [`Real`].

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::numeric::{Integral, Number, Real};
use crate::compose::{BinaryFn, UnaryFn};

/// Returns `value` unchanged.
pub fn plus<'a, T: 'a>() -> UnaryFn<'a, T, T> {
    UnaryFn::named("plus", |value: T| value)
}

/// Returns `-value`.
pub fn minus<'a, T: Neg<Output = T> + 'a>() -> UnaryFn<'a, T, T> {
    UnaryFn::named("minus", |value: T| -value)
}

/// Returns `value + 1`.
pub fn inc<'a, T: Number>() -> UnaryFn<'a, T, T> {
    UnaryFn::named("inc", |value: T| value + T::ONE)
}

/// Returns `value - 1`.
pub fn dec<'a, T: Number>() -> UnaryFn<'a, T, T> {
    UnaryFn::named("dec", |value: T| value - T::ONE)
}

/// Returns `left + right`.
///
/// # Examples
///
/// ```rust
/// use advent::operators::add;
///
/// assert_eq!(add().call(2, 3), 5);
/// assert_eq!(add().call(String::from("ab"), "cd"), "abcd");
/// ```
pub fn add<'a, T, U>() -> BinaryFn<'a, T, U, T>
where
    T: Add<U, Output = T> + 'a,
    U: 'a,
{
    BinaryFn::named("add", |left: T, right: U| left + right)
}

/// Returns `left - right`.
///
/// # Examples
///
/// ```rust
/// use advent::operators::sub;
///
/// let from_ten = sub().bind_left(10);
/// assert_eq!(from_ten.call(3), 7);
/// assert_eq!(from_ten.name(), Some("10 << sub"));
/// ```
pub fn sub<'a, T: Sub<Output = T> + 'a>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("sub", |left: T, right: T| left - right)
}

/// Returns `left * right`.
pub fn mul<'a, T: Mul<Output = T> + 'a>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("mul", |left: T, right: T| left * right)
}

/// Returns `left / right`, truncating for integers.
///
/// # Panics
///
/// The integer operator panics if `right` is zero.
pub fn div<'a, T: Div<Output = T> + 'a>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("div", |left: T, right: T| left / right)
}

/// Returns the floored quotient of `left` and `right`.
///
/// # Panics
///
/// The operator panics if `right` is zero.
///
/// # Examples
///
/// ```rust
/// use advent::operators::idiv;
///
/// assert_eq!(idiv().call(-7, 2), -4);
/// ```
pub fn idiv<'a, T: Integral>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("idiv", |left: T, right: T| left.floor_div(right))
}

/// Returns the floored remainder of `left` and `right`, with the sign of
/// `right`.
///
/// # Panics
///
/// The operator panics if `right` is zero.
///
/// # Examples
///
/// ```rust
/// use advent::operators::modulo;
///
/// assert_eq!(modulo().call(-7, 3), 2);
/// assert_eq!(modulo().call(7, -3), -2);
/// ```
pub fn modulo<'a, T: Integral>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("mod", |left: T, right: T| left.floor_mod(right))
}

/// Returns `base` raised to `exponent`.
pub fn pow<'a, T: Integral>() -> BinaryFn<'a, T, u32, T> {
    BinaryFn::named("pow", |base: T, exponent: u32| base.power(exponent))
}

/// Returns the absolute value.
///
/// # Panics
///
/// Overflows for the `MIN` of a signed integer, see [`Number::magnitude`].
pub fn abs<'a, T: Number>() -> UnaryFn<'a, T, T> {
    UnaryFn::named("abs", |value: T| value.magnitude())
}

/// Returns `1`, `0` or `-1` according to the sign of the value.
pub fn sign<'a, T: Number>() -> UnaryFn<'a, T, T> {
    UnaryFn::named("sign", |value: T| value.sign())
}

/// Returns the absolute difference of the operands.
pub fn diff<'a, T: Number>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("diff", |left: T, right: T| left.distance(right))
}

/// Returns the smaller operand, `left` among equals.
pub fn min<'a, T: PartialOrd + 'a>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("min", |left: T, right: T| if right < left { right } else { left })
}

/// Returns the larger operand, `left` among equals.
pub fn max<'a, T: PartialOrd + 'a>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("max", |left: T, right: T| if right > left { right } else { left })
}

/// Returns the greatest common divisor.
///
/// # Panics
///
/// Panics when the divisor does not fit in `T`, see [`Integral::gcd`].
pub fn gcd<'a, T: Integral>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("gcd", |left: T, right: T| left.gcd(right))
}

/// Returns the least common multiple.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::fold;
/// use advent::operators::lcm;
///
/// let common_period = fold(1_u64, lcm());
/// assert_eq!(common_period.call(vec![4, 6, 10]), 60);
/// ```
pub fn lcm<'a, T: Integral>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("lcm", |left: T, right: T| left.lcm(right))
}

/// Returns whether the value is divisible by two.
pub fn even<'a, T: Integral>() -> UnaryFn<'a, T, bool> {
    UnaryFn::named("even", |value: T| value.is_even())
}

/// Returns whether the value is not divisible by two.
pub fn odd<'a, T: Integral>() -> UnaryFn<'a, T, bool> {
    UnaryFn::named("odd", |value: T| !value.is_even())
}

/// Rounds toward negative infinity.
pub fn floor<'a, T: Real>() -> UnaryFn<'a, T, T> {
    UnaryFn::named("floor", |value: T| value.round_down())
}

/// Rounds toward positive infinity.
pub fn ceil<'a, T: Real>() -> UnaryFn<'a, T, T> {
    UnaryFn::named("ceil", |value: T| value.round_up())
}
