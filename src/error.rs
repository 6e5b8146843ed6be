//! Error types for composition and for the operation catalog.
//!
//! Composition errors are reported when function objects are combined, never
//! when they are invoked. Failures of a wrapped callable are not represented
//! here: they reach the caller exactly as the callable produced them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::compose::Arity;

/// An arity contract violated while combining dynamic function objects.
///
/// # Examples
///
/// ```rust
/// use advent::compose::Arity;
/// use advent::error::CompositionError;
///
/// let error = CompositionError::ArityMismatch {
///     operation: "pipe",
///     expected: Arity::Unary,
///     found: Arity::Binary,
/// };
/// assert_eq!(
///     error.to_string(),
///     "pipe: expected a unary function, found a binary function"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// An operand has an arity the operation cannot accept.
    #[error("{operation}: expected a {expected} function, found a {found} function")]
    ArityMismatch {
        /// The composition operation that rejected the operand.
        operation: &'static str,
        /// The arity the operation requires.
        expected: Arity,
        /// The arity of the rejected operand.
        found: Arity,
    },

    /// A function object is not of the requested wrapper kind.
    #[error("expected a {expected} function object, found a {found} one")]
    TypeMismatch {
        /// The requested wrapper kind.
        expected: Arity,
        /// The actual wrapper kind.
        found: Arity,
    },

    /// A function object was invoked with the wrong number of arguments.
    #[error("expected {expected} argument(s), found {found}")]
    ArgumentCount {
        /// The arity of the function object.
        expected: usize,
        /// The number of arguments supplied.
        found: usize,
    },
}

/// A failure of a catalog operation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A regular expression failed to compile.
    #[cfg(feature = "patterns")]
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        /// The rejected pattern.
        pattern: String,
        /// The compiler error.
        #[source]
        source: regex::Error,
    },

    /// A file could not be read.
    #[error("failed to read `{}`: {source}", .path.display())]
    ReadFile {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read.
    #[error("failed to read standard input: {0}")]
    ReadInput(#[source] io::Error),
}
