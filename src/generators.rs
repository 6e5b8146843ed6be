//! Sources: nullary function objects that start a pipeline.
//!
//! Every generator is a [`NullaryFn`]. Calling it produces a fresh value, so
//! a pipeline built on a generator can be restarted, even after a previous
//! sequence was exhausted, by calling it again.
//!
//! ```rust
//! use advent::algorithms::{filter, sum};
//! use advent::generators::range;
//! use advent::operators::even;
//! use advent::pipe;
//!
//! let even_total = pipe!(range(1, 10), filter(even()), sum());
//! assert_eq!(even_total.call(), 20);
//! assert_eq!(even_total.call(), 20);
//! ```
//!
//! The file readers open and close their file inside one call and report
//! failures as [`CatalogError`] values instead of panicking.

use std::fs;
use std::io::{self, BufRead};
use std::iter;
use std::path::{Path, PathBuf};

use crate::Sequence;
use crate::compose::{NullaryFn, Shareable};
use crate::error::CatalogError;
use crate::operators::Integral;

// =============================================================================
// Collections
// =============================================================================

/// Iterates over a clone of `collection` on every call.
///
/// # Examples
///
/// ```rust
/// use advent::generators::iterate;
///
/// let letters = iterate(vec!['a', 'b']);
/// assert_eq!(letters.call().collect::<String>(), "ab");
/// assert_eq!(letters.call().count(), 2);
/// ```
pub fn iterate<'a, C>(collection: C) -> NullaryFn<'a, Sequence<'a, C::Item>>
where
    C: IntoIterator + Clone + Shareable + 'a,
    C::IntoIter: 'a,
    C::Item: 'a,
{
    NullaryFn::named("iterate", move || -> Sequence<'a, C::Item> {
        Box::new(collection.clone().into_iter())
    })
}

// =============================================================================
// Ranges
// =============================================================================

fn stepped<T: Integral>(begin: T, end: T, step: T, inclusive: bool) -> Sequence<'static, T> {
    let ascending = step > T::ZERO;
    let mut next = Some(begin);
    Box::new(iter::from_fn(move || {
        let current = next?;
        let within = match (ascending, inclusive) {
            (true, false) => current < end,
            (true, true) => current <= end,
            (false, false) => current > end,
            (false, true) => current >= end,
        };
        if !within {
            next = None;
            return None;
        }
        next = current.advance(step);
        Some(current)
    }))
}

fn assert_step<T: Integral>(step: T) {
    assert!(step != T::ZERO, "range step must not be zero");
}

/// Counts from `begin` up to, but excluding, `end`.
///
/// # Examples
///
/// ```rust
/// use advent::generators::range;
///
/// assert_eq!(range(1, 5).call().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
/// assert_eq!(range(5, 1).call().count(), 0);
/// ```
pub fn range<T: Integral>(begin: T, end: T) -> NullaryFn<'static, Sequence<'static, T>> {
    NullaryFn::named(format!("range({begin:?}, {end:?})"), move || {
        stepped(begin, end, T::ONE, false)
    })
}

/// Counts from `begin` towards `end` in increments of `step`, excluding
/// `end`. A negative `step` counts down.
///
/// # Panics
///
/// Panics if `step` is zero.
///
/// # Examples
///
/// ```rust
/// use advent::generators::range_by;
///
/// assert_eq!(range_by(10, 0, -3).call().collect::<Vec<_>>(), vec![10, 7, 4, 1]);
/// ```
pub fn range_by<T: Integral>(
    begin: T,
    end: T,
    step: T,
) -> NullaryFn<'static, Sequence<'static, T>> {
    assert_step(step);
    NullaryFn::named(
        format!("range_by({begin:?}, {end:?}, {step:?})"),
        move || stepped(begin, end, step, false),
    )
}

/// Counts from `begin` up to and including `end`.
///
/// # Examples
///
/// ```rust
/// use advent::generators::irange;
///
/// assert_eq!(irange(1_u8, 3).call().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(irange(250_u8, 255).call().count(), 6);
/// ```
pub fn irange<T: Integral>(begin: T, end: T) -> NullaryFn<'static, Sequence<'static, T>> {
    NullaryFn::named(format!("irange({begin:?}, {end:?})"), move || {
        stepped(begin, end, T::ONE, true)
    })
}

/// Counts from `begin` towards `end` in increments of `step`, including
/// `end` when a step lands on it. A negative `step` counts down.
///
/// # Panics
///
/// Panics if `step` is zero.
pub fn irange_by<T: Integral>(
    begin: T,
    end: T,
    step: T,
) -> NullaryFn<'static, Sequence<'static, T>> {
    assert_step(step);
    NullaryFn::named(
        format!("irange_by({begin:?}, {end:?}, {step:?})"),
        move || stepped(begin, end, step, true),
    )
}

/// Counts from `first` in increments of `step` without an upper bound.
///
/// The sequence ends only when the next value would overflow `T`.
///
/// # Examples
///
/// ```rust
/// use advent::generators::infinite_range;
///
/// let odd = infinite_range(1_u64, 2);
/// assert_eq!(odd.call().take(4).collect::<Vec<_>>(), vec![1, 3, 5, 7]);
/// ```
pub fn infinite_range<T: Integral>(
    first: T,
    step: T,
) -> NullaryFn<'static, Sequence<'static, T>> {
    NullaryFn::named(
        format!("infinite_range({first:?}, {step:?})"),
        move || -> Sequence<'static, T> {
            Box::new(iter::successors(Some(first), move |current| {
                current.advance(step)
            }))
        },
    )
}

// =============================================================================
// Input
// =============================================================================

/// Reads one line from standard input, without its line terminator.
///
/// End of input is reported as [`CatalogError::ReadInput`] with
/// [`io::ErrorKind::UnexpectedEof`].
pub fn read_input() -> NullaryFn<'static, Result<String, CatalogError>> {
    NullaryFn::named("read_input", || read_line(io::stdin().lock()))
}

fn read_line(mut reader: impl BufRead) -> Result<String, CatalogError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(CatalogError::ReadInput)?;
    if read == 0 {
        return Err(CatalogError::ReadInput(io::Error::from(
            io::ErrorKind::UnexpectedEof,
        )));
    }
    let content = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(content);
    Ok(line)
}

fn load(path: &Path) -> Result<String, CatalogError> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            tracing::debug!(path = %path.display(), bytes = contents.len(), "read file");
            Ok(contents)
        }
        Err(source) => {
            tracing::warn!(path = %path.display(), error = %source, "failed to read file");
            Err(CatalogError::ReadFile {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Reads the whole file at `path` on every call.
///
/// # Examples
///
/// ```rust
/// use advent::generators::read_file;
///
/// let missing = read_file("no/such/file.txt");
/// assert!(missing.call().is_err());
/// ```
pub fn read_file(path: impl Into<PathBuf>) -> NullaryFn<'static, Result<String, CatalogError>> {
    let path = path.into();
    NullaryFn::named(format!("read_file({})", path.display()), move || {
        load(&path)
    })
}

/// Reads the file at `path` on every call and splits it into lines, without
/// line terminators.
///
/// # Examples
///
/// ```rust,no_run
/// use advent::compose::{Function, UnaryFn};
/// use advent::generators::read_file_lines;
///
/// let blank_lines = read_file_lines("input.txt").pipe_ok(UnaryFn::new(|lines: Vec<String>| {
///     lines.iter().filter(|line| line.is_empty()).count()
/// }));
/// let _ = blank_lines.call();
/// ```
pub fn read_file_lines(
    path: impl Into<PathBuf>,
) -> NullaryFn<'static, Result<Vec<String>, CatalogError>> {
    let path = path.into();
    NullaryFn::named(format!("read_file_lines({})", path.display()), move || {
        let lines: Vec<String> = load(&path)?.lines().map(str::to_string).collect();
        tracing::debug!(path = %path.display(), lines = lines.len(), "split file into lines");
        Ok(lines)
    })
}
