//! Numeric traits backing the arithmetic operators.
//!
//! Implemented for every primitive integer ([`Integral`]) and for `f32` and
//! `f64` ([`Real`]). Integer division and remainder are floored: the
//! quotient rounds toward negative infinity and the remainder takes the sign
//! of the divisor.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use crate::compose::Shareable;

/// A primitive number.
pub trait Number:
    Copy + PartialOrd + Debug + Add<Output = Self> + Sub<Output = Self> + Shareable + 'static
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Returns the absolute value.
    ///
    /// # Panics
    ///
    /// The absolute value of a signed integer's `MIN` does not fit in the
    /// type: this panics in debug builds and returns `MIN` in release builds.
    #[must_use]
    fn magnitude(self) -> Self;

    /// Returns `1`, `0` or `-1` according to the sign of `self`.
    ///
    /// Zero, and for reals NaN, map to zero.
    #[must_use]
    fn sign(self) -> Self;

    /// Returns the absolute difference of `self` and `other`.
    #[must_use]
    fn distance(self, other: Self) -> Self {
        if self > other {
            self - other
        } else {
            other - self
        }
    }
}

/// A primitive integer.
///
/// # Examples
///
/// ```rust
/// use advent::operators::Integral;
///
/// assert_eq!((-7_i32).floor_div(2), -4);
/// assert_eq!((-7_i32).floor_mod(2), 1);
/// assert_eq!(7_i32.floor_mod(-2), -1);
/// assert_eq!(12_u32.gcd(18), 6);
/// ```
pub trait Integral: Number + Ord + Eq + std::hash::Hash + Mul<Output = Self> {
    /// Floored division.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    fn floor_div(self, other: Self) -> Self;

    /// Floored remainder, with the sign of `other`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    fn floor_mod(self, other: Self) -> Self;

    /// Raises `self` to the power `exponent`.
    #[must_use]
    fn power(self, exponent: u32) -> Self;

    /// Returns `self + step`, or `None` on overflow.
    fn advance(self, step: Self) -> Option<Self>;

    /// Greatest common divisor; never negative, zero only for `gcd(0, 0)`.
    ///
    /// Signed integers compute it on the unsigned magnitudes, so `MIN` is a
    /// valid operand.
    ///
    /// # Panics
    ///
    /// Panics if the divisor does not fit in `Self`, which only happens for
    /// `gcd(MIN, MIN)` and `gcd(MIN, 0)` of a signed integer.
    #[must_use]
    fn gcd(self, other: Self) -> Self {
        let mut left = self.magnitude();
        let mut right = other.magnitude();
        while right != Self::ZERO {
            let remainder = left.floor_mod(right);
            left = right;
            right = remainder;
        }
        left
    }

    /// Least common multiple; never negative, zero if either operand is zero.
    ///
    /// # Panics
    ///
    /// Overflows like `*` when the multiple does not fit in `Self`.
    #[must_use]
    fn lcm(self, other: Self) -> Self {
        if self == Self::ZERO || other == Self::ZERO {
            return Self::ZERO;
        }
        (self.floor_div(self.gcd(other)) * other).magnitude()
    }

    /// Returns whether `self` is divisible by two.
    fn is_even(self) -> bool {
        self.floor_mod(Self::ONE + Self::ONE) == Self::ZERO
    }
}

/// A primitive floating point number.
pub trait Real: Number {
    /// Rounds toward negative infinity.
    #[must_use]
    fn round_down(self) -> Self;

    /// Rounds toward positive infinity.
    #[must_use]
    fn round_up(self) -> Self;
}

macro_rules! impl_signed {
    ($($integer:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl Number for $integer {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn magnitude(self) -> Self {
                    self.abs()
                }

                fn sign(self) -> Self {
                    self.signum()
                }
            }

            impl Integral for $integer {
                fn floor_div(self, other: Self) -> Self {
                    let quotient = self / other;
                    if self % other != 0 && ((self < 0) != (other < 0)) {
                        quotient - 1
                    } else {
                        quotient
                    }
                }

                fn floor_mod(self, other: Self) -> Self {
                    let remainder = self % other;
                    if remainder != 0 && ((remainder < 0) != (other < 0)) {
                        remainder + other
                    } else {
                        remainder
                    }
                }

                fn power(self, exponent: u32) -> Self {
                    self.pow(exponent)
                }

                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }

                fn gcd(self, other: Self) -> Self {
                    let mut left: $unsigned = self.unsigned_abs();
                    let mut right: $unsigned = other.unsigned_abs();
                    while right != 0 {
                        let remainder = left % right;
                        left = right;
                        right = remainder;
                    }
                    match Self::try_from(left) {
                        Ok(divisor) => divisor,
                        Err(_) => panic!(
                            "gcd({self}, {other}) does not fit in {}",
                            stringify!($integer)
                        ),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Number for $integer {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn magnitude(self) -> Self {
                    self
                }

                fn sign(self) -> Self {
                    Self::from(self != 0)
                }
            }

            impl Integral for $integer {
                fn floor_div(self, other: Self) -> Self {
                    self / other
                }

                fn floor_mod(self, other: Self) -> Self {
                    self % other
                }

                fn power(self, exponent: u32) -> Self {
                    self.pow(exponent)
                }

                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_real {
    ($($real:ty),* $(,)?) => {
        $(
            impl Number for $real {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn magnitude(self) -> Self {
                    self.abs()
                }

                fn sign(self) -> Self {
                    if self > 0.0 {
                        1.0
                    } else if self < 0.0 {
                        -1.0
                    } else {
                        0.0
                    }
                }
            }

            impl Real for $real {
                fn round_down(self) -> Self {
                    self.floor()
                }

                fn round_up(self) -> Self {
                    self.ceil()
                }
            }
        )*
    };
}

impl_signed!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_real!(f32, f64);
