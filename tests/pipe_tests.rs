#![cfg(feature = "compose")]
//! Tests for the `pipe!` and `compose!` macros.

use advent::compose::{BinaryFn, NullaryFn, UnaryFn};
use advent::{compose, pipe};
use rstest::rstest;

fn double() -> UnaryFn<'static, i32, i32> {
    UnaryFn::named("double", |value: i32| value * 2)
}

fn increment() -> UnaryFn<'static, i32, i32> {
    UnaryFn::named("increment", |value: i32| value + 1)
}

// =============================================================================
// pipe!
// =============================================================================

#[rstest]
fn test_pipe_single_operand_is_unchanged() {
    let alone = pipe!(double());
    assert_eq!(alone.call(4), 8);
    assert_eq!(alone.name(), Some("double"));
}

#[rstest]
fn test_pipe_runs_left_to_right() {
    let pipeline = pipe!(increment(), double());
    assert_eq!(pipeline.call(3), 8);
    assert_eq!(pipeline.name(), Some("increment | double"));
}

#[rstest]
fn test_pipe_accepts_closures_after_the_first_operand() {
    let pipeline = pipe!(double(), |value: i32| value - 1, |value: i32| value.to_string());
    assert_eq!(pipeline.call(5), "9");
    assert_eq!(pipeline.name(), Some("double | _ | _"));
}

#[rstest]
fn test_pipe_from_nullary_source() {
    let pipeline = pipe!(NullaryFn::named("ten", || 10), double(), increment());
    assert_eq!(pipeline.call(), 21);
}

#[rstest]
fn test_pipe_from_binary_source() {
    let add = BinaryFn::named("add", |left: i32, right: i32| left + right);
    let pipeline = pipe!(add, double(), increment());

    assert_eq!(pipeline.call(2, 3), 11);
    assert_eq!(pipeline.name(), Some("add | double | increment"));
}

#[rstest]
fn test_pipe_groupings_agree() {
    let left_grouped = pipe!(pipe!(increment(), double()), increment());
    let right_grouped = pipe!(increment(), pipe!(double(), increment()));

    for value in -10..10 {
        assert_eq!(left_grouped.call(value), right_grouped.call(value));
    }
}

// =============================================================================
// compose!
// =============================================================================

#[rstest]
fn test_compose_runs_right_to_left() {
    let composed = compose!(double(), increment());
    assert_eq!(composed.call(3), 8);
    assert_eq!(composed.name(), Some("atop(double, increment)"));
}

#[rstest]
fn test_compose_is_reversed_pipe() {
    let composed = compose!(increment(), double(), UnaryFn::new(|value: i32| value - 3));
    let piped = pipe!(UnaryFn::new(|value: i32| value - 3), double(), increment());

    for value in -10..10 {
        assert_eq!(composed.call(value), piped.call(value));
    }
}

#[rstest]
fn test_compose_keeps_arity_of_last_operand() {
    let composed = compose!(
        double(),
        BinaryFn::new(|left: i32, right: i32| left * right)
    );
    assert_eq!(composed.call(3, 4), 24);
}
