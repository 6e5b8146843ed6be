//! Bitwise operators.

use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use crate::compose::{BinaryFn, UnaryFn};

/// Returns `!value`.
pub fn bit_not<'a, T: Not<Output = T> + 'a>() -> UnaryFn<'a, T, T> {
    UnaryFn::named("bit_not", |value: T| !value)
}

/// Returns `left | right`.
pub fn bit_or<'a, T: BitOr<Output = T> + 'a>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("bit_or", |left: T, right: T| left | right)
}

/// Returns `left & right`.
pub fn bit_and<'a, T: BitAnd<Output = T> + 'a>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("bit_and", |left: T, right: T| left & right)
}

/// Returns `left ^ right`.
pub fn bit_xor<'a, T: BitXor<Output = T> + 'a>() -> BinaryFn<'a, T, T, T> {
    BinaryFn::named("bit_xor", |left: T, right: T| left ^ right)
}

/// Returns `value << shift`.
///
/// # Examples
///
/// ```rust
/// use advent::operators::bit_lsh;
///
/// let times_eight = bit_lsh::<u32>().bind_right(3);
/// assert_eq!(times_eight.call(5), 40);
/// ```
pub fn bit_lsh<'a, T: Shl<u32, Output = T> + 'a>() -> BinaryFn<'a, T, u32, T> {
    BinaryFn::named("bit_lsh", |value: T, shift: u32| value << shift)
}

/// Returns `value >> shift`.
pub fn bit_rsh<'a, T: Shr<u32, Output = T> + 'a>() -> BinaryFn<'a, T, u32, T> {
    BinaryFn::named("bit_rsh", |value: T, shift: u32| value >> shift)
}
