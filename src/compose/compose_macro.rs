//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes function
//! objects from right to left, following the mathematical notation.

/// Composes function objects from right to left.
///
/// `compose!(f, g, h)` is equivalent to `atop(f, atop(g, h))`: the rightmost
/// operand is applied first and determines the arity of the result.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity(), f) == f`
/// - **Right Identity**: `compose!(f, identity()) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `atop(f, g)`
/// - `compose!(f, g, h, ...)` - Composes any number of function objects
///
/// Every operand but the last may be a plain closure; the last one must be a
/// function object.
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use advent::compose;
/// use advent::compose::UnaryFn;
///
/// let double = UnaryFn::named("double", |value: i32| value * 2);
///
/// // compose!(f, g)(x) = f(g(x)) = add_one(double(5)) = add_one(10) = 11
/// let composed = compose!(|value: i32| value + 1, double);
/// assert_eq!(composed.call(5), 11);
/// ```
///
/// ## Over a binary operator
///
/// ```
/// use advent::compose;
/// use advent::compose::BinaryFn;
///
/// let add = BinaryFn::named("add", |left: i32, right: i32| left + right);
/// let negate = |value: i32| -value;
/// let describe = |value: i32| format!("result: {value}");
///
/// let composed = compose!(describe, negate, add);
/// assert_eq!(composed.call(2, 3), "result: -5");
/// ```
#[macro_export]
macro_rules! compose {
    // Single function object: returned as is
    ($function:expr $(,)?) => {
        $function
    };

    // compose!(f, g, ...) = atop(f, compose!(g, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::atop($outer_function, $crate::compose!($($remaining_functions),+))
    };
}

#[cfg(test)]
mod tests {
    use crate::compose::{BinaryFn, UnaryFn};

    #[test]
    fn test_compose_single() {
        let double = UnaryFn::new(|value: i32| value * 2);
        let composed = compose!(double);
        assert_eq!(composed.call(5), 10);
    }

    #[test]
    fn test_compose_two() {
        let add_one = UnaryFn::named("add_one", |value: i32| value + 1);
        let double = UnaryFn::named("double", |value: i32| value * 2);
        let composed = compose!(add_one, double);
        assert_eq!(composed.call(5), 11);
        assert_eq!(composed.name(), Some("atop(add_one, double)"));
    }

    #[test]
    fn test_compose_three() {
        let add_one = |value: i32| value + 1;
        let double = |value: i32| value * 2;
        let square = UnaryFn::new(|value: i32| value * value);
        let composed = compose!(add_one, double, square);
        assert_eq!(composed.call(3), 19);
    }

    #[test]
    fn test_compose_keeps_binary_arity() {
        let subtract = BinaryFn::new(|left: i32, right: i32| left - right);
        let composed = compose!(|value: i32| value.abs(), subtract);
        assert_eq!(composed.call(3, 10), 7);
    }
}
