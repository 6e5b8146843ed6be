/// Chains function objects from left to right.
///
/// `pipe!(f, g, h)` is equivalent to `f.pipe(g).pipe(h)`: the output of each
/// stage becomes the sole input of the next, and the result keeps the arity
/// of `f`.
///
/// The first operand must be a function object ([`NullaryFn`], [`UnaryFn`]
/// or [`BinaryFn`]). Every later operand may be a [`UnaryFn`] or a plain
/// closure, which is wrapped anonymously.
///
/// # Relationship with compose!
///
/// `pipe!(f, g, h)` builds the same function as `compose!(h, g, f)`.
///
/// # Syntax
///
/// - `pipe!(f)` - Returns `f` unchanged
/// - `pipe!(f, g)` - Returns `f | g`
/// - `pipe!(f, g, h, ...)` - Returns `f | g | h | ...`
///
/// [`NullaryFn`]: crate::compose::NullaryFn
/// [`UnaryFn`]: crate::compose::UnaryFn
/// [`BinaryFn`]: crate::compose::BinaryFn
///
/// # Examples
///
/// ## Building a pipeline
///
/// ```
/// use advent::compose::UnaryFn;
/// use advent::pipe;
///
/// let double = UnaryFn::named("double", |value: i32| value * 2);
/// let add_one = UnaryFn::named("add_one", |value: i32| value + 1);
///
/// let pipeline = pipe!(double, add_one);
/// assert_eq!(pipeline.call(5), 11);
/// assert_eq!(pipeline.name(), Some("double | add_one"));
/// ```
///
/// ## Starting from a binary operator
///
/// ```
/// use advent::compose::BinaryFn;
/// use advent::pipe;
///
/// let add = BinaryFn::new(|left: i32, right: i32| left + right);
///
/// let pipeline = pipe!(add, |sum: i32| sum * sum, |square: i32| square.to_string());
/// assert_eq!(pipeline.call(1, 2), "9");
/// ```
///
/// ## Starting from a generator
///
/// ```
/// use advent::compose::NullaryFn;
/// use advent::pipe;
///
/// let source = NullaryFn::new(|| vec![3, 1, 2]);
/// let pipeline = pipe!(source, |values: Vec<i32>| values.len());
/// assert_eq!(pipeline.call(), 3);
/// ```
#[macro_export]
macro_rules! pipe {
    // Single function object: return as is
    ($function:expr $(,)?) => {
        $function
    };

    // Two stages: pipe the second into the first
    ($function:expr, $next:expr $(,)?) => {
        $crate::compose::Function::pipe(
            $function,
            $crate::compose::IntoUnary::into_unary($next),
        )
    };

    // Multiple stages: pipe left to right recursively
    ($function:expr, $next:expr, $($remaining:expr),+ $(,)?) => {
        $crate::pipe!($crate::pipe!($function, $next), $($remaining),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::compose::{NullaryFn, UnaryFn};

    #[test]
    fn test_pipe_single() {
        let double = UnaryFn::named("double", |value: i32| value * 2);
        let pipeline = pipe!(double);
        assert_eq!(pipeline.call(5), 10);
        assert_eq!(pipeline.name(), Some("double"));
    }

    #[test]
    fn test_pipe_two() {
        let double = UnaryFn::new(|value: i32| value * 2);
        // double(5) = 10, add_one(10) = 11
        let pipeline = pipe!(double, |value: i32| value + 1);
        assert_eq!(pipeline.call(5), 11);
    }

    #[test]
    fn test_pipe_three() {
        let square = UnaryFn::named("square", |value: i32| value * value);
        let double = UnaryFn::named("double", |value: i32| value * 2);
        let add_one = UnaryFn::named("add_one", |value: i32| value + 1);
        // square(3) = 9, double(9) = 18, add_one(18) = 19
        let pipeline = pipe!(square, double, add_one);
        assert_eq!(pipeline.call(3), 19);
        assert_eq!(pipeline.name(), Some("square | double | add_one"));
    }

    #[test]
    fn test_pipe_keeps_nullary_arity() {
        let source = NullaryFn::new(|| 4);
        let pipeline = pipe!(source, |value: i32| value * 10, |value: i32| value + 2);
        assert_eq!(pipeline.call(), 42);
    }
}
