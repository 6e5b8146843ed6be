#![cfg(feature = "generators")]
//! Tests for the pipeline sources: ranges, collections and file readers.

use std::io::Write;

use advent::compose::{Function, UnaryFn};
use advent::error::CatalogError;
use advent::generators::{
    infinite_range, irange, irange_by, iterate, range, range_by, read_file, read_file_lines,
};
use rstest::rstest;

// =============================================================================
// Ranges
// =============================================================================

#[rstest]
fn test_range_matches_std_range() {
    assert_eq!(range(-3, 3).call().collect::<Vec<_>>(), (-3..3).collect::<Vec<_>>());
    assert_eq!(irange(-3, 3).call().collect::<Vec<_>>(), (-3..=3).collect::<Vec<_>>());
}

#[rstest]
#[case(1, 10, 3, vec![1, 4, 7])]
#[case(10, 1, -3, vec![10, 7, 4])]
#[case(1, 1, 1, vec![])]
fn test_range_by(#[case] begin: i64, #[case] end: i64, #[case] step: i64, #[case] expected: Vec<i64>) {
    assert_eq!(range_by(begin, end, step).call().collect::<Vec<_>>(), expected);
}

#[rstest]
#[case(1, 10, 3, vec![1, 4, 7, 10])]
#[case(10, 1, -3, vec![10, 7, 4, 1])]
#[case(1, 1, -1, vec![1])]
fn test_irange_by(#[case] begin: i64, #[case] end: i64, #[case] step: i64, #[case] expected: Vec<i64>) {
    assert_eq!(irange_by(begin, end, step).call().collect::<Vec<_>>(), expected);
}

#[rstest]
#[should_panic(expected = "range step must not be zero")]
fn test_irange_by_rejects_zero_step() {
    let _ = irange_by(0_u8, 1, 0);
}

#[rstest]
fn test_infinite_range_is_restartable() {
    let naturals = infinite_range(0_u32, 1);
    let first: Vec<u32> = naturals.call().take(3).collect();
    let again: Vec<u32> = naturals.call().skip(1).take(3).collect();

    assert_eq!(first, vec![0, 1, 2]);
    assert_eq!(again, vec![1, 2, 3]);
    assert_eq!(naturals.name(), Some("infinite_range(0, 1)"));
}

#[rstest]
fn test_infinite_range_counts_down() {
    let countdown: Vec<i8> = infinite_range(-120_i8, -4).call().collect();
    assert_eq!(countdown, vec![-120, -124, -128]);
}

#[rstest]
fn test_iterate_restarts_collection() {
    let letters = iterate("abc".chars().collect::<Vec<_>>());
    let first: String = letters.call().collect();
    let second: String = letters.call().skip(1).collect();

    assert_eq!(first, "abc");
    assert_eq!(second, "bc");
}

// =============================================================================
// Files
// =============================================================================

#[rstest]
fn test_read_file_lines_into_pipeline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "12").unwrap();
    writeln!(file, "30").unwrap();

    let total = read_file_lines(file.path()).pipe_ok(UnaryFn::new(|lines: Vec<String>| {
        lines
            .iter()
            .map(|line| line.parse::<i32>().unwrap_or_default())
            .sum::<i32>()
    }));

    assert_eq!(total.call().unwrap(), 42);
}

#[rstest]
fn test_read_file_sees_changes_between_calls() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "first").unwrap();
    let contents = read_file(file.path());
    assert_eq!(contents.call().unwrap(), "first");

    write!(file, " second").unwrap();
    assert_eq!(contents.call().unwrap(), "first second");
}

#[rstest]
fn test_read_file_error_names_the_path() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("absent.txt");

    let error = read_file(&path).call().unwrap_err();
    assert!(matches!(error, CatalogError::ReadFile { .. }));
    assert!(error.to_string().contains("absent.txt"));
}
