//! Regular expression helpers as function objects.
//!
//! Patterns use the syntax of the [`regex`] crate and are compiled once,
//! when the function object is built. An invalid pattern is therefore
//! reported by the factory, before anything is piped or invoked.
//!
//! ```rust
//! use advent::patterns::regex_captures;
//!
//! let moves = regex_captures(r"move (\d+) from (\d+)").unwrap();
//! assert_eq!(moves.call("move 3 from 1"), vec![vec!["3", "1"]]);
//! ```

use regex::Regex;

use crate::compose::UnaryFn;
use crate::error::CatalogError;

fn compile(pattern: &str) -> Result<Regex, CatalogError> {
    tracing::trace!(pattern, "compiling pattern");
    Regex::new(pattern).map_err(|source| CatalogError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Splits at every match of `pattern`.
///
/// With `Some(limit)`, at most `limit` splits are made.
///
/// # Errors
///
/// Returns [`CatalogError::Pattern`] if `pattern` is not a valid regular
/// expression.
///
/// # Examples
///
/// ```rust
/// use advent::patterns::regex_split;
///
/// let fields = regex_split(r"[,;]\s*", None).unwrap();
/// assert_eq!(fields.call("a, b;c"), vec!["a", "b", "c"]);
/// ```
pub fn regex_split<'a, S: AsRef<str> + 'a>(
    pattern: &str,
    limit: Option<usize>,
) -> Result<UnaryFn<'a, S, Vec<String>>, CatalogError> {
    let regex = compile(pattern)?;
    Ok(UnaryFn::named(
        format!("regex_split({pattern:?})"),
        move |text: S| {
            let text = text.as_ref();
            match limit {
                Some(limit) => regex
                    .splitn(text, limit.saturating_add(1))
                    .map(str::to_string)
                    .collect(),
                None => regex.split(text).map(str::to_string).collect(),
            }
        },
    ))
}

/// Replaces every match of `pattern` with `replacement`.
///
/// The replacement may refer to capture groups as `$1` or `${name}`.
///
/// # Errors
///
/// Returns [`CatalogError::Pattern`] if `pattern` is not a valid regular
/// expression.
///
/// # Examples
///
/// ```rust
/// use advent::patterns::regex_replace;
///
/// let swap = regex_replace(r"(\w+)=(\w+)", "$2=$1").unwrap();
/// assert_eq!(swap.call("a=1 b=2"), "1=a 2=b");
/// ```
pub fn regex_replace<'a, S: AsRef<str> + 'a>(
    pattern: &str,
    replacement: impl Into<String>,
) -> Result<UnaryFn<'a, S, String>, CatalogError> {
    let regex = compile(pattern)?;
    let replacement = replacement.into();
    Ok(UnaryFn::named(
        format!("regex_replace({pattern:?})"),
        move |text: S| {
            regex
                .replace_all(text.as_ref(), replacement.as_str())
                .into_owned()
        },
    ))
}

/// Returns every match of `pattern`.
///
/// A pattern without capture groups yields the whole matches; a pattern
/// with groups yields the first group of each match, empty when the group
/// did not participate.
///
/// # Errors
///
/// Returns [`CatalogError::Pattern`] if `pattern` is not a valid regular
/// expression.
///
/// # Examples
///
/// ```rust
/// use advent::patterns::regex_find_all;
///
/// let numbers = regex_find_all(r"-?\d+").unwrap();
/// assert_eq!(numbers.call("x=-3, y=14"), vec!["-3", "14"]);
///
/// let keys = regex_find_all(r"(\w+)=\w+").unwrap();
/// assert_eq!(keys.call("a=1 b=2"), vec!["a", "b"]);
/// ```
pub fn regex_find_all<'a, S: AsRef<str> + 'a>(
    pattern: &str,
) -> Result<UnaryFn<'a, S, Vec<String>>, CatalogError> {
    let regex = compile(pattern)?;
    let group = usize::from(regex.captures_len() > 1);
    Ok(UnaryFn::named(
        format!("regex_find_all({pattern:?})"),
        move |text: S| {
            regex
                .captures_iter(text.as_ref())
                .map(|captures| {
                    captures
                        .get(group)
                        .map_or_else(String::new, |found| found.as_str().to_string())
                })
                .collect()
        },
    ))
}

/// Returns the capture groups of every match of `pattern`, one `Vec` per
/// match, with groups that did not participate as empty strings.
///
/// # Errors
///
/// Returns [`CatalogError::Pattern`] if `pattern` is not a valid regular
/// expression.
pub fn regex_captures<'a, S: AsRef<str> + 'a>(
    pattern: &str,
) -> Result<UnaryFn<'a, S, Vec<Vec<String>>>, CatalogError> {
    let regex = compile(pattern)?;
    Ok(UnaryFn::named(
        format!("regex_captures({pattern:?})"),
        move |text: S| {
            regex
                .captures_iter(text.as_ref())
                .map(|captures| {
                    captures
                        .iter()
                        .skip(1)
                        .map(|group| {
                            group.map_or_else(String::new, |found| found.as_str().to_string())
                        })
                        .collect()
                })
                .collect()
        },
    ))
}
