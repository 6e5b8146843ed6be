//! # advent
//!
//! Point-free function composition for small data-processing programs.
//!
//! ## Overview
//!
//! Programs are assembled from function objects of fixed arity and run by
//! calling the composed result. The crate provides:
//!
//! - **Function Composition**: `NullaryFn`, `UnaryFn`, `BinaryFn`, pipe, bind,
//!   flip, train and atop, plus the `pipe!` and `compose!` macros
//! - **Sequence Algorithms**: Lazy map, filter, scan, windowing, grouping and
//!   reductions
//! - **Operators**: Comparison, logic, bitwise and arithmetic operators as
//!   function objects
//! - **Text and Patterns**: String utilities and regular expression helpers
//! - **Generators**: Ranges, collections and file readers as pipeline sources
//!
//! ## Feature Flags
//!
//! - `compose`: Function objects and their composition algebra
//! - `algorithms`: Lazy sequence operators
//! - `operators`: Scalar operator table
//! - `textual`: String utilities
//! - `patterns`: Regular expression helpers
//! - `generators`: Pipeline sources
//! - `functions`: Conversion helpers
//! - `arc`: Thread-safe function objects backed by `Arc`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use advent::prelude::*;
//! use advent::{algorithms, generators, operators};
//!
//! let program = pipe!(
//!     generators::range(1, 10),
//!     algorithms::filter(operators::even()),
//!     algorithms::sum(),
//! );
//! assert_eq!(program.call(), 20);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the function-object types, the composition combinators and
/// the macros. Catalog modules are reached through their module path, since
/// several of them export factories with the same name (`split`, `min`).
///
/// # Usage
///
/// ```rust
/// use advent::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "compose")]
    pub use crate::error::{CatalogError, CompositionError};
}

#[cfg(feature = "compose")]
pub mod error;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "algorithms")]
pub mod algorithms;

#[cfg(feature = "operators")]
pub mod operators;

#[cfg(feature = "textual")]
pub mod textual;

#[cfg(feature = "patterns")]
pub mod patterns;

#[cfg(feature = "generators")]
pub mod generators;

#[cfg(feature = "functions")]
pub mod functions;

/// A lazy, single-pass sequence produced by a catalog operator.
///
/// `'a` is the lifetime of whatever the sequence still borrows, such as the
/// text behind `str::lines()`.
#[cfg(feature = "compose")]
pub type Sequence<'a, T> = Box<dyn Iterator<Item = T> + 'a>;
