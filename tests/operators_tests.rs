#![cfg(feature = "operators")]
//! Tests for the scalar operators, alone and composed.

use advent::compose::{Function, flip, train};
use advent::operators::{
    Integral, abs, add, bit_and, bit_lsh, bit_not, bit_or, bit_rsh, bit_xor, ceil, dec, diff, div,
    eq, even, floor, gcd, ge, gt, idiv, inc, lcm, le, logic_and, logic_not, logic_or, logic_xor,
    lt, max, min, minus, modulo, mul, ne, odd, plus, pow, sign, sub,
};
use rstest::rstest;

// =============================================================================
// Comparison and Logic
// =============================================================================

#[rstest]
#[case(1, 2, [false, true, true, true, false, false])]
#[case(2, 2, [true, false, false, true, false, true])]
#[case(3, 2, [false, true, false, false, true, true])]
fn test_comparisons(#[case] left: i32, #[case] right: i32, #[case] expected: [bool; 6]) {
    let results = [
        eq().call(left, right),
        ne().call(left, right),
        lt().call(left, right),
        le().call(left, right),
        gt().call(left, right),
        ge().call(left, right),
    ];
    assert_eq!(results, expected);
}

#[rstest]
#[case(false, false)]
#[case(false, true)]
#[case(true, false)]
#[case(true, true)]
fn test_logic_truth_table(#[case] left: bool, #[case] right: bool) {
    assert_eq!(logic_and().call(left, right), left && right);
    assert_eq!(logic_or().call(left, right), left || right);
    assert_eq!(logic_xor().call(left, right), left != right);
    assert_eq!(logic_not().call(left), !left);
}

#[rstest]
fn test_bound_comparison_as_predicate() {
    let below_ten = lt().bind_right(10);
    assert!(below_ten.call(3));
    assert!(!below_ten.call(10));
    assert_eq!(below_ten.name(), Some("lt >> 10"));
}

// =============================================================================
// Bitwise
// =============================================================================

#[rstest]
fn test_bitwise_operators() {
    assert_eq!(bit_and().call(0b1010_u8, 0b0110), 0b0010);
    assert_eq!(bit_or().call(0b1010_u8, 0b0110), 0b1110);
    assert_eq!(bit_xor().call(0b1010_u8, 0b0110), 0b1100);
    assert_eq!(bit_not().call(0_u16), u16::MAX);
    assert_eq!(bit_lsh().call(3_u32, 4), 48);
    assert_eq!(bit_rsh().call(48_u32, 4), 3);
}

// =============================================================================
// Arithmetic
// =============================================================================

#[rstest]
fn test_unary_arithmetic() {
    assert_eq!(plus().call(5), 5);
    assert_eq!(minus().call(5), -5);
    assert_eq!(inc().call(5), 6);
    assert_eq!(dec().call(5), 4);
    assert_eq!(abs().call(-5), 5);
    assert_eq!(sign().call(-5), -1);
}

#[rstest]
fn test_binary_arithmetic() {
    assert_eq!(add().call(7, 3), 10);
    assert_eq!(sub().call(7, 3), 4);
    assert_eq!(mul().call(7, 3), 21);
    assert_eq!(div().call(7, 3), 2);
    assert_eq!(pow().call(7, 3), 343);
    assert_eq!(diff().call(3, 7), 4);
}

#[rstest]
#[case(7, 3, 2, 1)]
#[case(-7, 3, -3, 2)]
#[case(7, -3, -3, -2)]
#[case(-7, -3, 2, -1)]
fn test_floored_division(
    #[case] left: i64,
    #[case] right: i64,
    #[case] quotient: i64,
    #[case] remainder: i64,
) {
    assert_eq!(idiv().call(left, right), quotient);
    assert_eq!(modulo().call(left, right), remainder);
    assert_eq!(quotient * right + remainder, left);
}

#[rstest]
fn test_modulo_is_named_mod() {
    assert_eq!(modulo::<i32>().name(), Some("mod"));
}

#[rstest]
fn test_gcd_lcm_parity() {
    assert_eq!(gcd().call(-12, 18), 6);
    assert_eq!(lcm().call(6_u64, 8), 24);
    assert_eq!(lcm().call(0, 5), 0);
    assert!(even().call(0_u8));
    assert!(odd().call(-3_i16));
}

#[rstest]
fn test_min_max_on_floats() {
    assert!((min().call(1.5, -2.0) + 2.0_f64).abs() < f64::EPSILON);
    assert!((max().call(1.5, -2.0) - 1.5_f64).abs() < f64::EPSILON);
}

#[rstest]
fn test_rounding() {
    assert!((floor().call(-0.5_f32) + 1.0).abs() < f32::EPSILON);
    assert!((ceil().call(-0.5_f32) - 0.0).abs() < f32::EPSILON);
}

#[rstest]
fn test_integral_trait_on_unsigned() {
    assert_eq!(7_u32.floor_div(2), 3);
    assert_eq!(7_u32.floor_mod(2), 1);
    assert_eq!(u8::MAX.advance(1), None);
    assert_eq!(3_u8.advance(4), Some(7));
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn test_operators_compose() {
    let halve_then_count_up = idiv().bind_right(2).pipe(inc());
    assert_eq!(halve_then_count_up.call(9), 5);
    assert_eq!(halve_then_count_up.name(), Some("idiv >> 2 | inc"));
}

#[rstest]
fn test_flipped_subtraction() {
    let subtract_from = flip(sub());
    assert_eq!(subtract_from.call(3, 10), 7);
    assert_eq!(subtract_from.name(), Some("flip(sub)"));
}

#[rstest]
fn test_train_of_operators() {
    let sum_and_difference = train(add(), |total: i32, gap: i32| (total, gap), diff());
    assert_eq!(sum_and_difference.call(4, 9), (13, 5));
}
