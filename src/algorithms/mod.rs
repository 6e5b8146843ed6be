//! Lazy sequence operators as function objects.
//!
//! Every factory in this module returns a [`UnaryFn`](crate::compose::UnaryFn)
//! that accepts any [`IntoIterator`] and produces either a lazy
//! [`Sequence`](crate::Sequence) or a single value. The returned function
//! objects are ready to be piped:
//!
//! ```rust
//! use advent::algorithms::{filter, map, sum};
//! use advent::compose::NullaryFn;
//! use advent::pipe;
//!
//! let numbers = NullaryFn::new(|| 1..10);
//! let program = pipe!(numbers, filter(|value: i32| value % 2 == 0), map(|value: i32| value * value), sum());
//! assert_eq!(program.call(), 4 + 16 + 36 + 64);
//! ```
//!
//! # Overview
//!
//! - **Transforms**: [`map`], [`filter`], [`filter_not`], [`take`], [`drop`],
//!   [`tail`], [`distinct`], [`sort`], [`reverse`], [`cycle`], [`enumerate`],
//!   [`scan`], [`scan_from`]
//! - **Grouping**: [`partition`], [`padded_partition`], [`split_every`],
//!   [`split`], [`split_if`], [`group_by`], [`prefixes`], [`suffixes`]
//! - **Sliding windows**: [`sliding`], [`sliding_map`], [`sliding_filter`],
//!   [`sliding_filter_not`], [`sliding_reduce`], [`sliding_scan`]
//! - **Reductions**: [`reduce`], [`fold`], [`sum`], [`product`], [`min`],
//!   [`max`], [`all`], [`any`], [`none`], [`count`], [`count_if`], [`tally`]
//! - **Element access**: [`index`], [`index_if`], [`indices`],
//!   [`indices_if`], [`first`], [`head`], [`last`], [`pick`]
//!
//! # Sequences
//!
//! A [`Sequence`](crate::Sequence) is single-pass: once consumed it is gone.
//! To run a pipeline again, call it again; a pipeline whose source is a
//! [`NullaryFn`](crate::compose::NullaryFn) restarts from the source.
//!
//! Predicates, selectors and comparators receive clones of the elements, so
//! the elements of sequences passed through them must be [`Clone`].

mod grouping;
mod reduction;
mod transform;

pub use grouping::{
    group_by, padded_partition, partition, prefixes, sliding, sliding_filter, sliding_filter_not,
    sliding_map, sliding_reduce, sliding_scan, split, split_every, split_if, suffixes,
};
pub use reduction::{
    all, any, count, count_if, first, fold, head, index, index_if, indices, indices_if, last, max,
    min, none, pick, product, reduce, sum, tally,
};
pub use transform::{
    cycle, distinct, drop, enumerate, filter, filter_not, map, reverse, scan, scan_from, sort,
    tail, take,
};
