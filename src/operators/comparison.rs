//! Comparison and logic operators.

use crate::compose::{BinaryFn, UnaryFn};

/// Returns `left == right`.
pub fn eq<'a, T: PartialEq + 'a>() -> BinaryFn<'a, T, T, bool> {
    BinaryFn::named("eq", |left: T, right: T| left == right)
}

/// Returns `left != right`.
pub fn ne<'a, T: PartialEq + 'a>() -> BinaryFn<'a, T, T, bool> {
    BinaryFn::named("ne", |left: T, right: T| left != right)
}

/// Returns `left < right`.
///
/// # Examples
///
/// ```rust
/// use advent::operators::lt;
///
/// let below_ten = lt().bind_right(10);
/// assert!(below_ten.call(3));
/// assert!(!below_ten.call(10));
/// ```
pub fn lt<'a, T: PartialOrd + 'a>() -> BinaryFn<'a, T, T, bool> {
    BinaryFn::named("lt", |left: T, right: T| left < right)
}

/// Returns `left <= right`.
pub fn le<'a, T: PartialOrd + 'a>() -> BinaryFn<'a, T, T, bool> {
    BinaryFn::named("le", |left: T, right: T| left <= right)
}

/// Returns `left > right`.
pub fn gt<'a, T: PartialOrd + 'a>() -> BinaryFn<'a, T, T, bool> {
    BinaryFn::named("gt", |left: T, right: T| left > right)
}

/// Returns `left >= right`.
pub fn ge<'a, T: PartialOrd + 'a>() -> BinaryFn<'a, T, T, bool> {
    BinaryFn::named("ge", |left: T, right: T| left >= right)
}

/// Returns `!value`.
pub fn logic_not<'a>() -> UnaryFn<'a, bool, bool> {
    UnaryFn::named("logic_not", |value: bool| !value)
}

/// Returns `left || right`.
pub fn logic_or<'a>() -> BinaryFn<'a, bool, bool, bool> {
    BinaryFn::named("logic_or", |left: bool, right: bool| left || right)
}

/// Returns `left && right`.
pub fn logic_and<'a>() -> BinaryFn<'a, bool, bool, bool> {
    BinaryFn::named("logic_and", |left: bool, right: bool| left && right)
}

/// Returns whether exactly one operand is `true`.
pub fn logic_xor<'a>() -> BinaryFn<'a, bool, bool, bool> {
    BinaryFn::named("logic_xor", |left: bool, right: bool| left != right)
}
