#![cfg(feature = "compose")]
//! Property-based tests for the composition laws.
//!
//! ## Pipe Laws
//! - **Associativity**: `(f | g) | h == f | (g | h)`, including the order in
//!   which the stages run
//! - **Identity**: `identity | f == f == f | identity`
//! - **Atop**: `atop(f, g) == g | f`
//!
//! ## Bind Laws
//! - **Left**: `bind_left(f, a)(b) == f(a, b)`
//! - **Right**: `bind_right(f, b)(a) == f(a, b)`
//! - **Unary**: `bind(f, a)() == f(a)`
//!
//! ## Flip Laws
//! - **Definition**: `flip(f)(b, a) == f(a, b)`
//! - **Involution**: `flip(flip(f)) == f`
//!
//! ## Train Laws
//! - **Fan-out/fan-in**: `train(f, g, h)(..) == g(f(..), h(..))` for arities
//!   0, 1 and 2

use std::sync::{Arc, Mutex};

use advent::compose::{BinaryFn, Function, NullaryFn, UnaryFn, atop, identity, train};
use proptest::prelude::*;

fn stage(
    label: char,
    log: &Arc<Mutex<String>>,
    function: fn(i64) -> i64,
) -> UnaryFn<'static, i64, i64> {
    let log = Arc::clone(log);
    UnaryFn::new(move |value: i64| {
        log.lock().unwrap().push(label);
        function(value)
    })
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    /// Associativity: both groupings compute the same value in the same order
    #[test]
    fn prop_pipe_associativity(x in any::<i64>()) {
        let log = Arc::new(Mutex::new(String::new()));
        let f = stage('f', &log, |n| n.wrapping_add(1));
        let g = stage('g', &log, |n| n.wrapping_mul(3));
        let h = stage('h', &log, |n| n.wrapping_sub(7));

        let left = f.clone().pipe(g.clone()).pipe(h.clone());
        let right = f.pipe(g.pipe(h));

        let left_value = left.call(x);
        let left_order = std::mem::take(&mut *log.lock().unwrap());
        let right_value = right.call(x);
        let right_order = std::mem::take(&mut *log.lock().unwrap());

        prop_assert_eq!(left_value, right_value);
        prop_assert_eq!(left_order.as_str(), "fgh");
        prop_assert_eq!(right_order.as_str(), "fgh");
    }

    /// Associativity holds when the first stage is binary
    #[test]
    fn prop_pipe_associativity_binary_source(a in any::<i32>(), b in any::<i32>()) {
        let f = BinaryFn::new(|left: i32, right: i32| left.wrapping_sub(right));
        let g = UnaryFn::new(|n: i32| i64::from(n) * 2);
        let h = UnaryFn::new(|n: i64| n.to_string());

        let left = f.clone().pipe(g.clone()).pipe(h.clone());
        let right = f.pipe(g.pipe(h));

        prop_assert_eq!(left.call(a, b), right.call(a, b));
    }

    /// Identity is neutral on both sides
    #[test]
    fn prop_pipe_identity(x in any::<i32>()) {
        let f = UnaryFn::new(|n: i32| n.wrapping_mul(5));

        prop_assert_eq!(identity().pipe(f.clone()).call(x), f.call(x));
        prop_assert_eq!(f.clone().pipe(identity()).call(x), f.call(x));
    }

    /// Atop is pipe with the operands reversed
    #[test]
    fn prop_atop_is_reversed_pipe(a in any::<i32>(), b in any::<i32>()) {
        let outer = UnaryFn::new(|n: i32| n.wrapping_neg());
        let inner = BinaryFn::new(|left: i32, right: i32| left.wrapping_mul(right));

        prop_assert_eq!(
            atop(outer.clone(), inner.clone()).call(a, b),
            inner.pipe(outer).call(a, b)
        );
    }
}

// =============================================================================
// Bind Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_bind_left(a in any::<i32>(), b in any::<i32>()) {
        let f = BinaryFn::new(|left: i32, right: i32| left.wrapping_sub(right));
        prop_assert_eq!(f.clone().bind_left(a).call(b), f.call(a, b));
    }

    #[test]
    fn prop_bind_right(a in any::<i32>(), b in any::<i32>()) {
        let f = BinaryFn::new(|left: i32, right: i32| left.wrapping_sub(right));
        prop_assert_eq!(f.clone().bind_right(b).call(a), f.call(a, b));
    }

    #[test]
    fn prop_bind_unary(a in any::<i32>()) {
        let f = UnaryFn::new(|n: i32| n.wrapping_mul(n));
        prop_assert_eq!(f.clone().bind(a).call(), f.call(a));
    }

    /// Binding both sides in either order agrees
    #[test]
    fn prop_bind_both_sides(a in any::<i32>(), b in any::<i32>()) {
        let f = BinaryFn::new(|left: i32, right: i32| left.wrapping_sub(right));
        prop_assert_eq!(
            f.clone().bind_left(a).bind(b).call(),
            f.bind_right(b).bind(a).call()
        );
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_flip_definition(a in any::<i32>(), b in ".{0,8}") {
        let f = BinaryFn::new(|count: i32, text: String| format!("{count}:{text}"));
        prop_assert_eq!(f.clone().flip().call(b.clone(), a), f.call(a, b));
    }

    #[test]
    fn prop_flip_involution(a in any::<i32>(), b in any::<i32>()) {
        let f = BinaryFn::new(|left: i32, right: i32| left.wrapping_sub(right));
        prop_assert_eq!(f.clone().flip().flip().call(a, b), f.call(a, b));
    }
}

// =============================================================================
// Train Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_train_nullary(a in any::<i32>(), b in any::<i32>()) {
        let f = NullaryFn::new(move || a);
        let h = NullaryFn::new(move || b);
        let g = BinaryFn::new(|left: i32, right: i32| left.wrapping_add(right));

        prop_assert_eq!(train(f.clone(), g.clone(), h.clone()).call(), g.call(f.call(), h.call()));
    }

    #[test]
    fn prop_train_unary(x in any::<i32>()) {
        let f = UnaryFn::new(|n: i32| n.wrapping_mul(2));
        let h = UnaryFn::new(|n: i32| n.wrapping_add(9));
        let g = BinaryFn::new(|left: i32, right: i32| (left, right));

        prop_assert_eq!(train(f.clone(), g.clone(), h.clone()).call(x), g.call(f.call(x), h.call(x)));
    }

    #[test]
    fn prop_train_binary(a in any::<i32>(), b in any::<i32>()) {
        let f = BinaryFn::new(|left: i32, right: i32| left.min(right));
        let h = BinaryFn::new(|left: i32, right: i32| left.max(right));
        let g = BinaryFn::new(|low: i32, high: i32| (low, high));

        let ordered = train(f, g, h).call(a, b);
        prop_assert!(ordered.0 <= ordered.1);
        prop_assert_eq!(ordered, (a.min(b), a.max(b)));
    }
}
