//! Function objects and their composition algebra.
//!
//! This module wraps callables into function objects of fixed arity and
//! provides the operations that recombine them without invoking them. A
//! program is built by wiring function objects together point-free, then
//! run by calling the resulting function object.
//!
//! # Overview
//!
//! The wrapper kinds:
//!
//! - [`NullaryFn`]: A deferred computation or generator source
//! - [`UnaryFn`]: A transform, predicate or terminal reducer
//! - [`BinaryFn`]: A combining operator
//! - [`AnyFn`]: Any of the above, with arity checked at composition time
//!
//! The composition operations:
//!
//! - [`Function::pipe`] and [`pipe!`]: Compose left to right (data flow style)
//! - [`atop`] and [`compose!`]: Compose right to left (mathematical style)
//! - [`BinaryFn::bind_left`], [`BinaryFn::bind_right`], [`UnaryFn::bind`]: Fix an argument
//! - [`flip`]: Swap the arguments of a binary function
//! - [`train`]: Fan-out/fan-in over two functions of the same arity
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`substitute`]: Applies a function built from a projection of the input
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use advent::compose::{NullaryFn, UnaryFn};
//! use advent::pipe;
//!
//! let numbers = NullaryFn::named("numbers", || (1..10).collect::<Vec<i32>>());
//! let evens = UnaryFn::named("evens", |values: Vec<i32>| {
//!     values.into_iter().filter(|value| value % 2 == 0).collect::<Vec<_>>()
//! });
//! let total = UnaryFn::named("sum", |values: Vec<i32>| values.iter().sum::<i32>());
//!
//! let program = pipe!(numbers, evens, total);
//! assert_eq!(program.call(), 20);
//! assert_eq!(program.name(), Some("numbers | evens | sum"));
//! ```
//!
//! ## Binding
//!
//! ```
//! use advent::compose::BinaryFn;
//!
//! let subtract = BinaryFn::named("sub", |left: i32, right: i32| left - right);
//! assert_eq!(subtract.bind_left(10).call(3), 7);
//! ```
//!
//! ## Train
//!
//! ```
//! use advent::compose::{BinaryFn, train};
//!
//! let minimum = BinaryFn::new(|left: i32, right: i32| left.min(right));
//! let maximum = BinaryFn::new(|left: i32, right: i32| left.max(right));
//! let ordered = train(minimum, |low: i32, high: i32| (low, high), maximum);
//!
//! assert_eq!(ordered.call(3, 7), (3, 7));
//! assert_eq!(ordered.call(9, 2), (2, 9));
//! ```
//!
//! # Arity Checking
//!
//! Arity is part of the type of [`NullaryFn`], [`UnaryFn`] and [`BinaryFn`],
//! so an ill-formed composition over them does not compile. [`AnyFn`] moves
//! the same checks to run time and reports a
//! [`CompositionError`](crate::error::CompositionError) when operands are
//! combined, before anything is invoked.
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `f.pipe(g).pipe(h) == f.pipe(g.pipe(h))`
//! - **Left Identity**: `identity().pipe(f) == f`
//! - **Right Identity**: `f.pipe(identity()) == f`
//!
//! ## Flip Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`
//!
//! ## Bind Laws
//!
//! - **Left**: `f.bind_left(a)(b) == f(a, b)`
//! - **Right**: `f.bind_right(b)(a) == f(a, b)`
//!
//! ## Train Law
//!
//! - `train(f, g, h)(..) == g(f(..), h(..))`

mod binary;
mod combinators;
mod compose_macro;
mod dynamic;
mod function;
mod nullary;
mod pipe_macro;
mod unary;

pub use binary::{BinaryFn, IntoBinary};
pub use combinators::{atop, constant, flip, identity, substitute, train};
pub use dynamic::AnyFn;
pub use function::{Arity, Function, Name, Shareable};
pub(crate) use function::label;
pub use nullary::NullaryFn;
pub use unary::{IntoUnary, UnaryFn};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;

static_assertions::assert_impl_all!(NullaryFn<'static, i32>: Clone, Function<'static>);
static_assertions::assert_impl_all!(UnaryFn<'static, i32, i32>: Clone, Function<'static>);
static_assertions::assert_impl_all!(BinaryFn<'static, i32, i32, i32>: Clone, Function<'static>);
static_assertions::assert_impl_all!(AnyFn<'static, i32, i32>: Clone);
static_assertions::assert_impl_all!(
    UnaryFn<'static, &'static str, usize>: Clone, Function<'static>
);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(NullaryFn<'static, i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(UnaryFn<'static, i32, i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(BinaryFn<'static, i32, i32, i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(AnyFn<'static, i32, i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(UnaryFn<'static, i32, i32>: Send, Sync);
