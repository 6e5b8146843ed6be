//! String utilities as function objects.
//!
//! Every factory accepts any `AsRef<str>` input and produces owned
//! `String`s, so text read from a file and string literals can be fed to
//! the same pipeline.
//!
//! ```rust
//! use advent::algorithms::map;
//! use advent::textual::{join, split_by, trim};
//! use advent::pipe;
//!
//! let normalise = pipe!(split_by(",", None), map(trim()), join(";"));
//! assert_eq!(normalise.call(" a , b,c "), "a;b;c");
//! ```
//!
//! The `is_*` predicates classify a whole string: they are `false` for the
//! empty string, except [`is_ascii`].

use crate::compose::UnaryFn;

fn split_whitespace_limited(text: &str, limit: Option<usize>) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = text.trim_start();
    while !rest.is_empty() {
        if limit.is_some_and(|limit| pieces.len() == limit) {
            pieces.push(rest.to_string());
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                pieces.push(rest[..end].to_string());
                rest = rest[end..].trim_start();
            }
            None => {
                pieces.push(rest.to_string());
                break;
            }
        }
    }
    pieces
}

/// Concatenates the strings, placing `connector` between them.
///
/// # Examples
///
/// ```rust
/// use advent::textual::join;
///
/// assert_eq!(join(", ").call(vec!["a", "b", "c"]), "a, b, c");
/// assert_eq!(join("-").call(Vec::<String>::new()), "");
/// ```
pub fn join<'a, I>(connector: impl Into<String>) -> UnaryFn<'a, I, String>
where
    I: IntoIterator + 'a,
    I::Item: AsRef<str>,
{
    let connector = connector.into();
    UnaryFn::named(format!("join({connector:?})"), move |items: I| {
        let mut joined = String::new();
        for (position, item) in items.into_iter().enumerate() {
            if position > 0 {
                joined.push_str(&connector);
            }
            joined.push_str(item.as_ref());
        }
        joined
    })
}

/// Removes leading and trailing whitespace.
pub fn trim<'a, S: AsRef<str> + 'a>() -> UnaryFn<'a, S, String> {
    UnaryFn::named("trim", |text: S| text.as_ref().trim().to_string())
}

/// Removes leading whitespace.
pub fn trim_left<'a, S: AsRef<str> + 'a>() -> UnaryFn<'a, S, String> {
    UnaryFn::named("trim_left", |text: S| text.as_ref().trim_start().to_string())
}

/// Removes trailing whitespace.
pub fn trim_right<'a, S: AsRef<str> + 'a>() -> UnaryFn<'a, S, String> {
    UnaryFn::named("trim_right", |text: S| text.as_ref().trim_end().to_string())
}

/// Splits at runs of whitespace, never producing empty pieces.
///
/// With `Some(limit)`, at most `limit` splits are made and the remainder,
/// without its leading whitespace, is the last piece.
///
/// # Examples
///
/// ```rust
/// use advent::textual::split;
///
/// assert_eq!(split(None).call("  move 3 from  1 "), vec!["move", "3", "from", "1"]);
/// assert_eq!(split(Some(1)).call("move 3 from 1"), vec!["move", "3 from 1"]);
/// ```
pub fn split<'a, S: AsRef<str> + 'a>(limit: Option<usize>) -> UnaryFn<'a, S, Vec<String>> {
    UnaryFn::named("split", move |text: S| {
        split_whitespace_limited(text.as_ref(), limit)
    })
}

/// Splits at every occurrence of `separator`, keeping empty pieces.
///
/// With `Some(limit)`, at most `limit` splits are made.
///
/// # Panics
///
/// Panics if `separator` is empty.
///
/// # Examples
///
/// ```rust
/// use advent::textual::split_by;
///
/// assert_eq!(split_by(",", None).call("a,,b"), vec!["a", "", "b"]);
/// assert_eq!(split_by(": ", Some(1)).call("key: a: b"), vec!["key", "a: b"]);
/// ```
pub fn split_by<'a, S: AsRef<str> + 'a>(
    separator: impl Into<String>,
    limit: Option<usize>,
) -> UnaryFn<'a, S, Vec<String>> {
    let separator = separator.into();
    assert!(!separator.is_empty(), "separator must not be empty");
    UnaryFn::named(format!("split_by({separator:?})"), move |text: S| {
        let text = text.as_ref();
        match limit {
            Some(limit) => text
                .splitn(limit.saturating_add(1), separator.as_str())
                .map(str::to_string)
                .collect(),
            None => text
                .split(separator.as_str())
                .map(str::to_string)
                .collect(),
        }
    })
}

/// Replaces every occurrence of `old` with `new`.
pub fn replace<'a, S: AsRef<str> + 'a>(
    old: impl Into<String>,
    new: impl Into<String>,
) -> UnaryFn<'a, S, String> {
    let old = old.into();
    let new = new.into();
    UnaryFn::named(format!("replace({old:?}, {new:?})"), move |text: S| {
        text.as_ref().replace(old.as_str(), &new)
    })
}

/// Replaces every occurrence of each string in `olds` with `new`, one after
/// another.
///
/// # Examples
///
/// ```rust
/// use advent::textual::replace_many;
///
/// let strip_punctuation = replace_many([",", ".", "!"], "");
/// assert_eq!(strip_punctuation.call("Hi, there!"), "Hi there");
/// ```
pub fn replace_many<'a, S, O>(
    olds: impl IntoIterator<Item = O>,
    new: impl Into<String>,
) -> UnaryFn<'a, S, String>
where
    S: AsRef<str> + 'a,
    O: Into<String>,
{
    let olds: Vec<String> = olds.into_iter().map(Into::into).collect();
    let new = new.into();
    UnaryFn::named("replace_many", move |text: S| {
        olds.iter()
            .fold(text.as_ref().to_string(), |replaced, old| {
                replaced.replace(old.as_str(), &new)
            })
    })
}

/// Returns up to `size` characters starting at character `position`.
///
/// Out-of-range positions and sizes are clamped to the string.
///
/// # Examples
///
/// ```rust
/// use advent::textual::substring;
///
/// assert_eq!(substring(1, 3).call("añejo"), "ñej");
/// assert_eq!(substring(3, 10).call("abcd"), "d");
/// assert_eq!(substring(9, 1).call("abcd"), "");
/// ```
pub fn substring<'a, S: AsRef<str> + 'a>(position: usize, size: usize) -> UnaryFn<'a, S, String> {
    UnaryFn::named(format!("substring({position}, {size})"), move |text: S| {
        text.as_ref().chars().skip(position).take(size).collect()
    })
}

/// Returns whether the string contains `needle`.
pub fn contains<'a, S: AsRef<str> + 'a>(needle: impl Into<String>) -> UnaryFn<'a, S, bool> {
    let needle = needle.into();
    UnaryFn::named(format!("contains({needle:?})"), move |text: S| {
        text.as_ref().contains(needle.as_str())
    })
}

/// Returns whether the string starts with `prefix`.
pub fn starts_with<'a, S: AsRef<str> + 'a>(prefix: impl Into<String>) -> UnaryFn<'a, S, bool> {
    let prefix = prefix.into();
    UnaryFn::named(format!("starts_with({prefix:?})"), move |text: S| {
        text.as_ref().starts_with(prefix.as_str())
    })
}

/// Returns whether the string ends with `suffix`.
pub fn ends_with<'a, S: AsRef<str> + 'a>(suffix: impl Into<String>) -> UnaryFn<'a, S, bool> {
    let suffix = suffix.into();
    UnaryFn::named(format!("ends_with({suffix:?})"), move |text: S| {
        text.as_ref().ends_with(suffix.as_str())
    })
}

fn classify<'a, S: AsRef<str> + 'a>(name: &str, class: fn(char) -> bool) -> UnaryFn<'a, S, bool> {
    UnaryFn::named(name, move |text: S| {
        let text = text.as_ref();
        !text.is_empty() && text.chars().all(class)
    })
}

/// Returns whether the string is non-empty and all whitespace.
pub fn is_space<'a, S: AsRef<str> + 'a>() -> UnaryFn<'a, S, bool> {
    classify("is_space", char::is_whitespace)
}

/// Returns whether the string is non-empty and all alphanumeric.
pub fn is_alnum<'a, S: AsRef<str> + 'a>() -> UnaryFn<'a, S, bool> {
    classify("is_alnum", char::is_alphanumeric)
}

/// Returns whether the string is non-empty and all alphabetic.
pub fn is_alpha<'a, S: AsRef<str> + 'a>() -> UnaryFn<'a, S, bool> {
    classify("is_alpha", char::is_alphabetic)
}

/// Returns whether the string is non-empty and all ASCII decimal digits.
pub fn is_digit<'a, S: AsRef<str> + 'a>() -> UnaryFn<'a, S, bool> {
    classify("is_digit", |character| character.is_ascii_digit())
}

/// Returns whether the string has an uppercase character and no lowercase
/// one.
///
/// # Examples
///
/// ```rust
/// use advent::textual::is_upper;
///
/// assert!(is_upper().call("ABC-1"));
/// assert!(!is_upper().call("123"));
/// assert!(!is_upper().call("ABc"));
/// ```
pub fn is_upper<'a, S: AsRef<str> + 'a>() -> UnaryFn<'a, S, bool> {
    UnaryFn::named("is_upper", |text: S| {
        let text = text.as_ref();
        text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
    })
}

/// Returns whether the string has a lowercase character and no uppercase
/// one.
pub fn is_lower<'a, S: AsRef<str> + 'a>() -> UnaryFn<'a, S, bool> {
    UnaryFn::named("is_lower", |text: S| {
        let text = text.as_ref();
        text.chars().any(char::is_lowercase) && !text.chars().any(char::is_uppercase)
    })
}

/// Returns whether every character is ASCII; `true` for the empty string.
pub fn is_ascii<'a, S: AsRef<str> + 'a>() -> UnaryFn<'a, S, bool> {
    UnaryFn::named("is_ascii", |text: S| text.as_ref().is_ascii())
}
