//! Scalar operators as function objects.
//!
//! Each factory returns a fresh, named [`UnaryFn`](crate::compose::UnaryFn)
//! or [`BinaryFn`](crate::compose::BinaryFn) wrapping one primitive
//! operation. Binary operators are typically specialised with
//! [`bind_left`](crate::compose::BinaryFn::bind_left) or
//! [`bind_right`](crate::compose::BinaryFn::bind_right), or handed to a
//! reducer:
//!
//! ```rust
//! use advent::algorithms::{map, reduce};
//! use advent::operators::{add, mul};
//! use advent::pipe;
//!
//! let tripled_total = pipe!(map(mul().bind_right(3)), reduce(add()));
//! assert_eq!(tripled_total.call(vec![1, 2, 3]), Some(18));
//! ```
//!
//! # Overview
//!
//! - **Comparison**: [`eq`], [`ne`], [`lt`], [`le`], [`gt`], [`ge`]
//! - **Logic**: [`logic_not`], [`logic_or`], [`logic_and`], [`logic_xor`]
//! - **Bitwise**: [`bit_not`], [`bit_or`], [`bit_and`], [`bit_xor`],
//!   [`bit_lsh`], [`bit_rsh`]
//! - **Arithmetic**: [`plus`], [`minus`], [`inc`], [`dec`], [`add`], [`sub`],
//!   [`mul`], [`div`], [`idiv`], [`modulo`], [`pow`], [`abs`], [`sign`],
//!   [`diff`], [`min`], [`max`], [`gcd`], [`lcm`], [`even`], [`odd`]
//! - **Rounding**: [`floor`], [`ceil`]

mod arithmetic;
mod bitwise;
mod comparison;
mod numeric;

pub use arithmetic::{
    abs, add, ceil, dec, diff, div, even, floor, gcd, idiv, inc, lcm, max, min, minus, modulo,
    mul, odd, plus, pow, sign, sub,
};
pub use bitwise::{bit_and, bit_lsh, bit_not, bit_or, bit_rsh, bit_xor};
pub use comparison::{eq, ge, gt, le, logic_and, logic_not, logic_or, logic_xor, lt, ne};
pub use numeric::{Integral, Number, Real};
