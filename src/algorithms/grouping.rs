//! Chunking, splitting, grouping and sliding windows.
//!
//! Every operator here emits groups as `Vec`s. Operators that need to look
//! at the whole input (`group_by`, `prefixes`, `suffixes`) buffer it on
//! invocation; the others read their input lazily.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::Sequence;
use crate::compose::{IntoBinary, IntoUnary, Shareable, UnaryFn, label};

fn chunks<J: Iterator>(mut source: J, size: usize) -> impl Iterator<Item = Vec<J::Item>> {
    std::iter::from_fn(move || {
        let chunk: Vec<J::Item> = source.by_ref().take(size).collect();
        (!chunk.is_empty()).then_some(chunk)
    })
}

fn windows<J>(mut source: J, size: usize) -> impl Iterator<Item = Vec<J::Item>>
where
    J: Iterator,
    J::Item: Clone,
{
    let mut window = VecDeque::with_capacity(size);
    std::iter::from_fn(move || {
        while window.len() < size {
            window.push_back(source.next()?);
        }
        let current = window.iter().cloned().collect();
        window.pop_front();
        Some(current)
    })
}

fn split_groups<J, P>(
    source: J,
    mut is_separator: P,
    allow_empty: bool,
) -> impl Iterator<Item = Vec<J::Item>>
where
    J: Iterator,
    P: FnMut(&J::Item) -> bool,
{
    let mut source = source.fuse();
    let mut finished = false;
    std::iter::from_fn(move || {
        if finished {
            return None;
        }
        let mut group = Vec::new();
        loop {
            match source.next() {
                Some(item) if is_separator(&item) => {
                    if allow_empty || !group.is_empty() {
                        return Some(group);
                    }
                }
                Some(item) => group.push(item),
                None => {
                    finished = true;
                    return (!group.is_empty()).then_some(group);
                }
            }
        }
    })
}

fn assert_positive(size: usize, what: &str) {
    assert!(size > 0, "{what} size must be positive");
}

/// Groups the elements into chunks of `size`, dropping an incomplete last
/// chunk.
///
/// # Panics
///
/// Panics if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::partition;
///
/// let pairs = partition(2);
/// assert_eq!(pairs.call(1..=5).collect::<Vec<_>>(), vec![vec![1, 2], vec![3, 4]]);
/// ```
pub fn partition<'a, I>(size: usize) -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    assert_positive(size, "chunk");
    UnaryFn::named(
        format!("partition({size})"),
        move |items: I| -> Sequence<'a, Vec<I::Item>> {
            Box::new(chunks(items.into_iter(), size).filter(move |chunk| chunk.len() == size))
        },
    )
}

/// Groups the elements into chunks of `size`, completing the last chunk
/// with copies of `fill`.
///
/// # Panics
///
/// Panics if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::padded_partition;
///
/// let triples = padded_partition(3, 0);
/// assert_eq!(triples.call(vec![1, 2, 3, 4]).collect::<Vec<_>>(), vec![vec![1, 2, 3], vec![4, 0, 0]]);
/// ```
pub fn padded_partition<'a, I>(
    size: usize,
    fill: I::Item,
) -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + Shareable + 'a,
{
    assert_positive(size, "chunk");
    UnaryFn::named(
        format!("padded_partition({size})"),
        move |items: I| -> Sequence<'a, Vec<I::Item>> {
            let fill = fill.clone();
            Box::new(chunks(items.into_iter(), size).map(move |mut chunk| {
                chunk.resize(size, fill.clone());
                chunk
            }))
        },
    )
}

/// Groups the elements into chunks of `size`; the last chunk may be shorter.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn split_every<'a, I>(size: usize) -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    assert_positive(size, "chunk");
    UnaryFn::named(
        format!("split_every({size})"),
        move |items: I| -> Sequence<'a, Vec<I::Item>> { Box::new(chunks(items.into_iter(), size)) },
    )
}

/// Splits the elements at every occurrence of `separator`.
///
/// Separators are discarded. Empty groups (between adjacent separators or at
/// the start) are emitted only when `allow_empty` is set; a trailing group
/// is emitted when it is not empty.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::split;
///
/// let blocks = split(0, false);
/// assert_eq!(
///     blocks.call(vec![1, 2, 0, 0, 3, 0, 4]).collect::<Vec<_>>(),
///     vec![vec![1, 2], vec![3], vec![4]]
/// );
///
/// let with_empty = split(0, true);
/// assert_eq!(
///     with_empty.call(vec![1, 0, 0, 2]).collect::<Vec<_>>(),
///     vec![vec![1], vec![], vec![2]]
/// );
/// ```
pub fn split<'a, I>(
    separator: I::Item,
    allow_empty: bool,
) -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: PartialEq + Clone + Shareable + 'a,
{
    UnaryFn::named("split", move |items: I| -> Sequence<'a, Vec<I::Item>> {
        let separator = separator.clone();
        Box::new(split_groups(
            items.into_iter(),
            move |item| *item == separator,
            allow_empty,
        ))
    })
}

/// Splits the elements at every element satisfying `predicate`.
///
/// Follows the same rules as [`split`]. The predicate receives a clone of
/// each element.
pub fn split_if<'a, I>(
    predicate: impl IntoUnary<'a, I::Item, bool>,
    allow_empty: bool,
) -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    let predicate = predicate.into_unary();
    let name = format!("split_if({})", label(predicate.name()));
    UnaryFn::named(name, move |items: I| -> Sequence<'a, Vec<I::Item>> {
        let predicate = predicate.clone();
        Box::new(split_groups(
            items.into_iter(),
            move |item| predicate.call(item.clone()),
            allow_empty,
        ))
    })
}

/// Groups the elements by the key `selector` computes for them.
///
/// Groups appear in order of the first occurrence of their key, and keep
/// the input order of their elements.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::group_by;
///
/// let by_parity = group_by(|value: i32| value % 2);
/// assert_eq!(
///     by_parity.call(vec![1, 2, 3, 4, 5]).collect::<Vec<_>>(),
///     vec![vec![1, 3, 5], vec![2, 4]]
/// );
/// ```
pub fn group_by<'a, I, K>(
    selector: impl IntoUnary<'a, I::Item, K>,
) -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::Item: Clone + 'a,
    K: Eq + Hash + 'a,
{
    let selector = selector.into_unary();
    let name = format!("group_by({})", label(selector.name()));
    UnaryFn::named(name, move |items: I| -> Sequence<'a, Vec<I::Item>> {
        let mut slots: FxHashMap<K, usize> = FxHashMap::default();
        let mut groups: Vec<Vec<I::Item>> = Vec::new();
        for item in items {
            let key = selector.call(item.clone());
            let slot = *slots.entry(key).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(item);
        }
        Box::new(groups.into_iter())
    })
}

/// Returns every non-empty prefix, shortest first.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::prefixes;
///
/// assert_eq!(
///     prefixes().call("abc".chars()).collect::<Vec<_>>(),
///     vec![vec!['a'], vec!['a', 'b'], vec!['a', 'b', 'c']]
/// );
/// ```
pub fn prefixes<'a, I>() -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::Item: Clone + 'a,
{
    UnaryFn::named("prefixes", |items: I| -> Sequence<'a, Vec<I::Item>> {
        let buffered: Vec<I::Item> = items.into_iter().collect();
        Box::new((1..=buffered.len()).map(move |size| buffered[..size].to_vec()))
    })
}

/// Returns every non-empty suffix, longest first.
///
/// These are true suffixes (`[i..]`), not the prefixes of [`prefixes`] in
/// reverse order.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::suffixes;
///
/// assert_eq!(
///     suffixes().call(vec![1, 2, 3]).collect::<Vec<_>>(),
///     vec![vec![1, 2, 3], vec![2, 3], vec![3]]
/// );
/// ```
pub fn suffixes<'a, I>() -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::Item: Clone + 'a,
{
    UnaryFn::named("suffixes", |items: I| -> Sequence<'a, Vec<I::Item>> {
        let buffered: Vec<I::Item> = items.into_iter().collect();
        Box::new((0..buffered.len()).map(move |start| buffered[start..].to_vec()))
    })
}

/// Returns every window of `size` consecutive elements.
///
/// Inputs shorter than `size` yield no window.
///
/// # Panics
///
/// Panics if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::sliding;
///
/// assert_eq!(
///     sliding(3).call(vec![1, 2, 3, 4]).collect::<Vec<_>>(),
///     vec![vec![1, 2, 3], vec![2, 3, 4]]
/// );
/// ```
pub fn sliding<'a, I>(size: usize) -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    assert_positive(size, "window");
    UnaryFn::named(
        format!("sliding({size})"),
        move |items: I| -> Sequence<'a, Vec<I::Item>> {
            Box::new(windows(items.into_iter(), size))
        },
    )
}

/// Applies `mapper` to every window of `size` elements.
///
/// # Panics
///
/// Panics if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::sliding_map;
///
/// let sums = sliding_map(3, |window: Vec<i32>| window.iter().sum::<i32>());
/// assert_eq!(sums.call(vec![1, 2, 3, 4, 5]).collect::<Vec<_>>(), vec![6, 9, 12]);
/// ```
pub fn sliding_map<'a, I, U>(
    size: usize,
    mapper: impl IntoUnary<'a, Vec<I::Item>, U>,
) -> UnaryFn<'a, I, Sequence<'a, U>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
    U: 'a,
{
    assert_positive(size, "window");
    let mapper = mapper.into_unary();
    let name = format!("sliding_map({size}, {})", label(mapper.name()));
    UnaryFn::named(name, move |items: I| -> Sequence<'a, U> {
        let mapper = mapper.clone();
        Box::new(windows(items.into_iter(), size).map(move |window| mapper.call(window)))
    })
}

/// Keeps, within every window of `size` elements, the elements satisfying
/// `predicate`.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn sliding_filter<'a, I>(
    size: usize,
    predicate: impl IntoUnary<'a, I::Item, bool>,
) -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    let predicate = predicate.into_unary();
    let name = format!("sliding_filter({size}, {})", label(predicate.name()));
    sliding_map(size, move |window: Vec<I::Item>| {
        window
            .into_iter()
            .filter(|item| predicate.call(item.clone()))
            .collect::<Vec<_>>()
    })
    .with_name(name)
}

/// Keeps, within every window of `size` elements, the elements not
/// satisfying `predicate`.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn sliding_filter_not<'a, I>(
    size: usize,
    predicate: impl IntoUnary<'a, I::Item, bool>,
) -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    let predicate = predicate.into_unary();
    let name = format!("sliding_filter_not({size}, {})", label(predicate.name()));
    sliding_map(size, move |window: Vec<I::Item>| {
        window
            .into_iter()
            .filter(|item| !predicate.call(item.clone()))
            .collect::<Vec<_>>()
    })
    .with_name(name)
}

/// Reduces every window of `size` elements with `reducer`.
///
/// # Panics
///
/// Panics if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::sliding_reduce;
///
/// let maxima = sliding_reduce(2, |left: i32, right: i32| left.max(right));
/// assert_eq!(maxima.call(vec![1, 5, 2, 4]).collect::<Vec<_>>(), vec![5, 5, 4]);
/// ```
pub fn sliding_reduce<'a, I>(
    size: usize,
    reducer: impl IntoBinary<'a, I::Item, I::Item, I::Item>,
) -> UnaryFn<'a, I, Sequence<'a, I::Item>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    assert_positive(size, "window");
    let reducer = reducer.into_binary();
    let name = format!("sliding_reduce({size}, {})", label(reducer.name()));
    UnaryFn::named(name, move |items: I| -> Sequence<'a, I::Item> {
        let reducer = reducer.clone();
        Box::new(windows(items.into_iter(), size).filter_map(move |window| {
            window
                .into_iter()
                .reduce(|accumulator, item| reducer.call(accumulator, item))
        }))
    })
}

/// Returns the running reduction of every window of `size` elements.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn sliding_scan<'a, I>(
    size: usize,
    reducer: impl IntoBinary<'a, I::Item, I::Item, I::Item>,
) -> UnaryFn<'a, I, Sequence<'a, Vec<I::Item>>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    let reducer = reducer.into_binary();
    let name = format!("sliding_scan({size}, {})", label(reducer.name()));
    sliding_map(size, move |window: Vec<I::Item>| {
        let mut scanned: Vec<I::Item> = Vec::with_capacity(window.len());
        for item in window {
            let next = match scanned.last() {
                Some(previous) => reducer.call(previous.clone(), item),
                None => item,
            };
            scanned.push(next);
        }
        scanned
    })
    .with_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5, 6], vec![vec![1, 2, 3], vec![4, 5, 6]])]
    #[case(vec![1, 2, 3, 4], vec![vec![1, 2, 3]])]
    #[case(vec![1, 2], vec![])]
    fn partition_drops_remainder(#[case] input: Vec<i32>, #[case] expected: Vec<Vec<i32>>) {
        assert_eq!(partition(3).call(input).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn split_every_keeps_short_last_chunk() {
        assert_eq!(
            split_every(2).call(vec![1, 2, 3]).collect::<Vec<_>>(),
            vec![vec![1, 2], vec![3]]
        );
    }

    #[rstest]
    #[should_panic(expected = "chunk size must be positive")]
    fn partition_rejects_zero_size() {
        let _ = partition::<Vec<i32>>(0);
    }

    #[rstest]
    #[should_panic(expected = "window size must be positive")]
    fn sliding_rejects_zero_size() {
        let _ = sliding::<Vec<i32>>(0);
    }

    #[rstest]
    fn sliding_over_short_input_is_empty() {
        assert_eq!(sliding(4).call(vec![1, 2, 3]).count(), 0);
    }

    #[rstest]
    fn sliding_is_lazy_over_infinite_input() {
        let windows = sliding(2).call(0_u32..).take(2).collect::<Vec<_>>();
        assert_eq!(windows, vec![vec![0, 1], vec![1, 2]]);
    }

    #[rstest]
    fn split_if_discards_leading_separator_without_allow_empty() {
        let words = split_if(|character: char| character == ' ', false);
        assert_eq!(
            words.call(" ab  c".chars()).collect::<Vec<_>>(),
            vec![vec!['a', 'b'], vec!['c']]
        );
    }

    #[rstest]
    fn split_with_allow_empty_keeps_leading_group() {
        let groups = split(0, true);
        assert_eq!(
            groups.call(vec![0, 1]).collect::<Vec<_>>(),
            vec![vec![], vec![1]]
        );
    }

    #[rstest]
    fn group_by_keeps_first_seen_key_order() {
        let by_initial = group_by(|word: &str| word.chars().next());
        assert_eq!(
            by_initial
                .call(vec!["beta", "alpha", "bravo", "avocado"])
                .collect::<Vec<_>>(),
            vec![vec!["beta", "bravo"], vec!["alpha", "avocado"]]
        );
    }

    #[rstest]
    fn prefixes_of_empty_is_empty() {
        assert_eq!(prefixes().call(Vec::<i32>::new()).count(), 0);
    }

    #[rstest]
    fn sliding_filter_filters_inside_windows() {
        let evens = sliding_filter(3, |value: i32| value % 2 == 0);
        assert_eq!(
            evens.call(vec![1, 2, 3, 4]).collect::<Vec<_>>(),
            vec![vec![2], vec![2, 4]]
        );
    }

    #[rstest]
    fn sliding_filter_not_filters_inside_windows() {
        let odds = sliding_filter_not(2, |value: i32| value % 2 == 0);
        assert_eq!(
            odds.call(vec![1, 2, 3]).collect::<Vec<_>>(),
            vec![vec![1], vec![3]]
        );
    }

    #[rstest]
    fn sliding_scan_scans_each_window() {
        let running = sliding_scan(3, |left: i32, right: i32| left + right);
        assert_eq!(
            running.call(vec![1, 2, 3, 4]).collect::<Vec<_>>(),
            vec![vec![1, 3, 6], vec![2, 5, 9]]
        );
        assert_eq!(running.name(), Some("sliding_scan(3, _)"));
    }
}
