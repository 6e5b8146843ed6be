#![cfg(all(
    feature = "algorithms",
    feature = "generators",
    feature = "operators",
    feature = "functions"
))]
//! End-to-end pipelines built from the catalog.
//!
//! These tests combine generators, sequence algorithms and scalar operators
//! the way a puzzle script does, and check that composed pipelines are pure:
//! calling one twice on the same input gives the same result.

use advent::algorithms::{filter, map, sliding, sum};
use advent::Sequence;
use advent::compose::{AnyFn, Arity, Function, train};
use advent::error::CompositionError;
use advent::functions::pair;
use advent::generators::range;
use advent::operators::{abs, even, max, min, sub};
use advent::pipe;
use rstest::rstest;

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn test_sum_of_even_numbers_in_range() {
    let even_total = pipe!(range(1, 10), filter(even()), sum());
    assert_eq!(even_total.call(), 20);
}

#[rstest]
fn test_window_sums() {
    let window_sums = pipe!(sliding::<Vec<i32>>(3), map(sum()));
    assert_eq!(
        window_sums.call(vec![1, 2, 3, 4, 5]).collect::<Vec<_>>(),
        vec![6, 9, 12]
    );
    assert_eq!(window_sums.name(), Some("sliding(3) | map(sum)"));
}

#[rstest]
#[case(3, 7, (3, 7))]
#[case(9, 2, (2, 9))]
#[case(4, 4, (4, 4))]
fn test_min_max_train(#[case] left: i32, #[case] right: i32, #[case] expected: (i32, i32)) {
    let ordered = train(min(), pair(), max());
    assert_eq!(ordered.call(left, right), expected);
}

#[rstest]
fn test_bind_left_subtraction() {
    let from_ten = sub().bind_left(10);
    assert_eq!(from_ten.call(3), 7);
}

#[rstest]
fn test_pipe_rejects_binary_right_operand_dynamically() {
    let even_total: AnyFn<i32, i32> = pipe!(range(1, 10), filter(even()), sum()).into();
    let subtract: AnyFn<i32, i32> = sub().into();

    assert_eq!(
        even_total.pipe(subtract).unwrap_err(),
        CompositionError::ArityMismatch {
            operation: "pipe",
            expected: Arity::Unary,
            found: Arity::Binary,
        }
    );
}

// =============================================================================
// Purity
// =============================================================================

#[rstest]
fn test_generator_pipeline_is_idempotent() {
    let even_squares = pipe!(
        range(1, 20),
        filter(even()),
        map(|value: i32| value * value),
        |values: Sequence<i32>| values.collect::<Vec<_>>()
    );

    let first = even_squares.call();
    let second = even_squares.call();
    assert_eq!(first, second);
    assert_eq!(first.len(), 9);
}

#[rstest]
fn test_unary_pipeline_is_idempotent() {
    let window_sums = pipe!(
        sliding::<Vec<i32>>(2),
        map(sum()),
        |values: Sequence<i32>| values.collect::<Vec<_>>()
    );
    let input = vec![5, -1, 8, 0];

    assert_eq!(window_sums.call(input.clone()), window_sums.call(input));
}

#[rstest]
fn test_binary_pipeline_is_idempotent() {
    let spread = sub::<i64>().pipe(abs());
    assert_eq!(spread.call(3, 10), spread.call(3, 10));
    assert_eq!(spread.call(3, 10), 7);
}
