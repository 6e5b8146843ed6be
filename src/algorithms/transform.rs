//! Element-wise sequence transforms.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::Sequence;
use crate::compose::{IntoBinary, IntoUnary, Shareable, UnaryFn, label};

/// Applies `mapper` to each element.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::map;
///
/// let squares = map(|value: i32| value * value);
/// assert_eq!(squares.call(vec![1, 2, 3]).collect::<Vec<_>>(), vec![1, 4, 9]);
/// ```
pub fn map<'a, I, U>(mapper: impl IntoUnary<'a, I::Item, U>) -> UnaryFn<'a, I, Sequence<'a, U>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: 'a,
    U: 'a,
{
    let mapper = mapper.into_unary();
    let name = format!("map({})", label(mapper.name()));
    UnaryFn::named(name, move |items: I| -> Sequence<'a, U> {
        let mapper = mapper.clone();
        Box::new(items.into_iter().map(move |item| mapper.call(item)))
    })
}

/// Keeps the elements for which `predicate` holds.
///
/// The predicate receives a clone of each element.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::filter;
///
/// let evens = filter(|value: i32| value % 2 == 0);
/// assert_eq!(evens.call(1..=6).collect::<Vec<_>>(), vec![2, 4, 6]);
/// ```
pub fn filter<'a, I>(
    predicate: impl IntoUnary<'a, I::Item, bool>,
) -> UnaryFn<'a, I, Sequence<'a, I::Item>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    let predicate = predicate.into_unary();
    let name = format!("filter({})", label(predicate.name()));
    UnaryFn::named(name, move |items: I| -> Sequence<'a, I::Item> {
        let predicate = predicate.clone();
        Box::new(
            items
                .into_iter()
                .filter(move |item| predicate.call(item.clone())),
        )
    })
}

/// Keeps the elements for which `predicate` does not hold.
pub fn filter_not<'a, I>(
    predicate: impl IntoUnary<'a, I::Item, bool>,
) -> UnaryFn<'a, I, Sequence<'a, I::Item>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    let predicate = predicate.into_unary();
    let name = format!("filter_not({})", label(predicate.name()));
    UnaryFn::named(name, move |items: I| -> Sequence<'a, I::Item> {
        let predicate = predicate.clone();
        Box::new(
            items
                .into_iter()
                .filter(move |item| !predicate.call(item.clone())),
        )
    })
}

/// Returns the first `count` elements.
pub fn take<'a, I>(count: usize) -> UnaryFn<'a, I, Sequence<'a, I::Item>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    UnaryFn::named(format!("take({count})"), move |items: I| -> Sequence<'a, I::Item> {
        Box::new(items.into_iter().take(count))
    })
}

/// Returns all but the first `count` elements.
pub fn drop<'a, I>(count: usize) -> UnaryFn<'a, I, Sequence<'a, I::Item>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    UnaryFn::named(format!("drop({count})"), move |items: I| -> Sequence<'a, I::Item> {
        Box::new(items.into_iter().skip(count))
    })
}

/// Returns all but the first element.
pub fn tail<'a, I>() -> UnaryFn<'a, I, Sequence<'a, I::Item>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    drop(1).with_name("tail")
}

/// Returns each distinct element once, in order of first occurrence.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::distinct;
///
/// let unique = distinct();
/// assert_eq!(unique.call(vec![3, 1, 3, 2, 1]).collect::<Vec<_>>(), vec![3, 1, 2]);
/// ```
pub fn distinct<'a, I>() -> UnaryFn<'a, I, Sequence<'a, I::Item>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Eq + Hash + Clone + 'a,
{
    UnaryFn::named("distinct", |items: I| -> Sequence<'a, I::Item> {
        let mut seen = FxHashSet::default();
        Box::new(
            items
                .into_iter()
                .filter(move |item| seen.insert(item.clone())),
        )
    })
}

/// Sorts the elements with a strict weak "less than" comparator.
///
/// The sort is stable. The comparator receives clones of the elements.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::sort;
///
/// let descending = sort(|left: i32, right: i32| left > right);
/// assert_eq!(descending.call(vec![2, 9, 4]).collect::<Vec<_>>(), vec![9, 4, 2]);
/// ```
pub fn sort<'a, I>(
    less: impl IntoBinary<'a, I::Item, I::Item, bool>,
) -> UnaryFn<'a, I, Sequence<'a, I::Item>>
where
    I: IntoIterator + 'a,
    I::Item: Clone + 'a,
{
    let less = less.into_binary();
    let name = format!("sort({})", label(less.name()));
    UnaryFn::named(name, move |items: I| -> Sequence<'a, I::Item> {
        let mut sorted: Vec<I::Item> = items.into_iter().collect();
        sorted.sort_by(|left, right| {
            if less.call(left.clone(), right.clone()) {
                std::cmp::Ordering::Less
            } else if less.call(right.clone(), left.clone()) {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });
        Box::new(sorted.into_iter())
    })
}

/// Returns the elements in reverse order.
pub fn reverse<'a, I>() -> UnaryFn<'a, I, Sequence<'a, I::Item>>
where
    I: IntoIterator + 'a,
    I::Item: 'a,
{
    UnaryFn::named("reverse", |items: I| -> Sequence<'a, I::Item> {
        let buffered: Vec<I::Item> = items.into_iter().collect();
        Box::new(buffered.into_iter().rev())
    })
}

/// Repeats the elements indefinitely.
///
/// The first pass is read lazily and buffered; later passes replay the
/// buffer. An empty input yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::cycle;
///
/// let repeated = cycle();
/// assert_eq!(repeated.call(vec![1, 2]).take(5).collect::<Vec<_>>(), vec![1, 2, 1, 2, 1]);
/// ```
pub fn cycle<'a, I>() -> UnaryFn<'a, I, Sequence<'a, I::Item>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    UnaryFn::named("cycle", |items: I| -> Sequence<'a, I::Item> {
        Box::new(Cycle {
            source: Some(items.into_iter()),
            buffer: Vec::new(),
            position: 0,
        })
    })
}

struct Cycle<J: Iterator> {
    source: Option<J>,
    buffer: Vec<J::Item>,
    position: usize,
}

impl<J> Iterator for Cycle<J>
where
    J: Iterator,
    J::Item: Clone,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.as_mut() {
            if let Some(item) = source.next() {
                self.buffer.push(item.clone());
                return Some(item);
            }
            self.source = None;
        }
        if self.buffer.is_empty() {
            return None;
        }
        let item = self.buffer[self.position % self.buffer.len()].clone();
        self.position = (self.position + 1) % self.buffer.len();
        Some(item)
    }
}

/// Pairs each element with its index, counting from `start`.
pub fn enumerate<'a, I>(start: usize) -> UnaryFn<'a, I, Sequence<'a, (usize, I::Item)>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    UnaryFn::named(
        format!("enumerate({start})"),
        move |items: I| -> Sequence<'a, (usize, I::Item)> { Box::new((start..).zip(items)) },
    )
}

/// Returns the running reduction of the elements with `reducer`.
///
/// The first element is emitted unchanged.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::scan;
///
/// let running_total = scan(|total: i32, value: i32| total + value);
/// assert_eq!(running_total.call(vec![1, 2, 3, 4]).collect::<Vec<_>>(), vec![1, 3, 6, 10]);
/// ```
pub fn scan<'a, I>(
    reducer: impl IntoBinary<'a, I::Item, I::Item, I::Item>,
) -> UnaryFn<'a, I, Sequence<'a, I::Item>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    let reducer = reducer.into_binary();
    let name = format!("scan({})", label(reducer.name()));
    UnaryFn::named(name, move |items: I| -> Sequence<'a, I::Item> {
        let reducer = reducer.clone();
        let mut accumulator: Option<I::Item> = None;
        Box::new(items.into_iter().map(move |item| {
            let next = match accumulator.take() {
                Some(previous) => reducer.call(previous, item),
                None => item,
            };
            accumulator = Some(next.clone());
            next
        }))
    })
}

/// Returns the running reduction of the elements with `reducer`, starting
/// from `init`. The seed is emitted first.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::scan_from;
///
/// let lengths = scan_from(0, |total: usize, word: &str| total + word.len());
/// assert_eq!(lengths.call(vec!["ab", "cde"]).collect::<Vec<_>>(), vec![0, 2, 5]);
/// ```
pub fn scan_from<'a, I, U>(
    init: U,
    reducer: impl IntoBinary<'a, U, I::Item, U>,
) -> UnaryFn<'a, I, Sequence<'a, U>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: 'a,
    U: Clone + Shareable + 'a,
{
    let reducer = reducer.into_binary();
    let name = format!("scan_from({})", label(reducer.name()));
    UnaryFn::named(name, move |items: I| -> Sequence<'a, U> {
        let reducer = reducer.clone();
        let mut accumulator = init.clone();
        let seed = std::iter::once(accumulator.clone());
        Box::new(seed.chain(items.into_iter().map(move |item| {
            accumulator = reducer.call(accumulator.clone(), item);
            accumulator.clone()
        })))
    })
}
