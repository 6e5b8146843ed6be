//! Terminal reducers and element access.
//!
//! Element access on a sequence that is too short yields `None`.

use std::iter::{Product, Sum};

use crate::Sequence;
use crate::compose::{IntoBinary, IntoUnary, Shareable, UnaryFn, label};

/// Reduces the elements with `reducer`, using the first element as seed.
///
/// Returns `None` for an empty input.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::reduce;
///
/// let longest = reduce(|left: String, right: String| if right.len() > left.len() { right } else { left });
/// assert_eq!(longest.call(vec!["ab".to_string(), "abc".to_string()]), Some("abc".to_string()));
/// assert_eq!(longest.call(Vec::new()), None);
/// ```
pub fn reduce<'a, I>(
    reducer: impl IntoBinary<'a, I::Item, I::Item, I::Item>,
) -> UnaryFn<'a, I, Option<I::Item>>
where
    I: IntoIterator + 'a,
    I::Item: 'a,
{
    let reducer = reducer.into_binary();
    let name = format!("reduce({})", label(reducer.name()));
    UnaryFn::named(name, move |items: I| {
        items
            .into_iter()
            .reduce(|accumulator, item| reducer.call(accumulator, item))
    })
}

/// Reduces the elements with `reducer`, starting from `init`.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::fold;
///
/// let digits = fold(0_u64, |number: u64, digit: u32| number * 10 + u64::from(digit));
/// assert_eq!(digits.call(vec![4, 0, 2]), 402);
/// ```
pub fn fold<'a, I, U>(init: U, reducer: impl IntoBinary<'a, U, I::Item, U>) -> UnaryFn<'a, I, U>
where
    I: IntoIterator + 'a,
    I::Item: 'a,
    U: Clone + Shareable + 'a,
{
    let reducer = reducer.into_binary();
    let name = format!("fold({})", label(reducer.name()));
    UnaryFn::named(name, move |items: I| {
        items
            .into_iter()
            .fold(init.clone(), |accumulator, item| reducer.call(accumulator, item))
    })
}

/// Returns the sum of the elements; zero for an empty input.
pub fn sum<'a, I>() -> UnaryFn<'a, I, I::Item>
where
    I: IntoIterator + 'a,
    I::Item: Sum + 'a,
{
    UnaryFn::named("sum", |items: I| items.into_iter().sum())
}

/// Returns the product of the elements; one for an empty input.
pub fn product<'a, I>() -> UnaryFn<'a, I, I::Item>
where
    I: IntoIterator + 'a,
    I::Item: Product + 'a,
{
    UnaryFn::named("product", |items: I| items.into_iter().product())
}

/// Returns the smallest element, the first one among equals.
pub fn min<'a, I>() -> UnaryFn<'a, I, Option<I::Item>>
where
    I: IntoIterator + 'a,
    I::Item: Ord + 'a,
{
    UnaryFn::named("min", |items: I| items.into_iter().min())
}

/// Returns the largest element, the last one among equals.
pub fn max<'a, I>() -> UnaryFn<'a, I, Option<I::Item>>
where
    I: IntoIterator + 'a,
    I::Item: Ord + 'a,
{
    UnaryFn::named("max", |items: I| items.into_iter().max())
}

/// Returns whether every element is `true`; `true` for an empty input.
pub fn all<'a, I>() -> UnaryFn<'a, I, bool>
where
    I: IntoIterator<Item = bool> + 'a,
{
    UnaryFn::named("all", |items: I| items.into_iter().all(|item| item))
}

/// Returns whether any element is `true`; `false` for an empty input.
pub fn any<'a, I>() -> UnaryFn<'a, I, bool>
where
    I: IntoIterator<Item = bool> + 'a,
{
    UnaryFn::named("any", |items: I| items.into_iter().any(|item| item))
}

/// Returns whether no element is `true`; `true` for an empty input.
pub fn none<'a, I>() -> UnaryFn<'a, I, bool>
where
    I: IntoIterator<Item = bool> + 'a,
{
    UnaryFn::named("none", |items: I| !items.into_iter().any(|item| item))
}

/// Returns the number of elements equal to `value`.
pub fn count<'a, I>(value: I::Item) -> UnaryFn<'a, I, usize>
where
    I: IntoIterator + 'a,
    I::Item: PartialEq + Shareable + 'a,
{
    UnaryFn::named("count", move |items: I| {
        items.into_iter().filter(|item| *item == value).count()
    })
}

/// Returns the number of elements satisfying `predicate`.
pub fn count_if<'a, I>(predicate: impl IntoUnary<'a, I::Item, bool>) -> UnaryFn<'a, I, usize>
where
    I: IntoIterator + 'a,
    I::Item: 'a,
{
    let predicate = predicate.into_unary();
    let name = format!("count_if({})", label(predicate.name()));
    UnaryFn::named(name, move |items: I| {
        items
            .into_iter()
            .map(|item| predicate.call(item))
            .filter(|matched| *matched)
            .count()
    })
}

/// Returns the position of the first element equal to `value`.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::index;
///
/// let find_seven = index(7);
/// assert_eq!(find_seven.call(vec![1, 7, 7]), Some(1));
/// assert_eq!(find_seven.call(vec![1, 2]), None);
/// ```
pub fn index<'a, I>(value: I::Item) -> UnaryFn<'a, I, Option<usize>>
where
    I: IntoIterator + 'a,
    I::Item: PartialEq + Shareable + 'a,
{
    UnaryFn::named("index", move |items: I| {
        items.into_iter().position(|item| item == value)
    })
}

/// Returns the position of the first element satisfying `predicate`.
pub fn index_if<'a, I>(
    predicate: impl IntoUnary<'a, I::Item, bool>,
) -> UnaryFn<'a, I, Option<usize>>
where
    I: IntoIterator + 'a,
    I::Item: 'a,
{
    let predicate = predicate.into_unary();
    let name = format!("index_if({})", label(predicate.name()));
    UnaryFn::named(name, move |items: I| {
        items.into_iter().position(|item| predicate.call(item))
    })
}

/// Returns the positions of all elements equal to `value`.
pub fn indices<'a, I>(value: I::Item) -> UnaryFn<'a, I, Sequence<'a, usize>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: PartialEq + Clone + Shareable + 'a,
{
    UnaryFn::named("indices", move |items: I| -> Sequence<'a, usize> {
        let value = value.clone();
        Box::new(
            items
                .into_iter()
                .enumerate()
                .filter_map(move |(position, item)| (item == value).then_some(position)),
        )
    })
}

/// Returns the positions of all elements satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use advent::algorithms::indices_if;
///
/// let blanks = indices_if(|character: char| character == ' ');
/// assert_eq!(blanks.call("a b c".chars()).collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub fn indices_if<'a, I>(
    predicate: impl IntoUnary<'a, I::Item, bool>,
) -> UnaryFn<'a, I, Sequence<'a, usize>>
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    let predicate = predicate.into_unary();
    let name = format!("indices_if({})", label(predicate.name()));
    UnaryFn::named(name, move |items: I| -> Sequence<'a, usize> {
        let predicate = predicate.clone();
        Box::new(
            items
                .into_iter()
                .enumerate()
                .filter_map(move |(position, item)| predicate.call(item).then_some(position)),
        )
    })
}

/// Returns the first element.
pub fn first<'a, I>() -> UnaryFn<'a, I, Option<I::Item>>
where
    I: IntoIterator + 'a,
    I::Item: 'a,
{
    UnaryFn::named("first", |items: I| items.into_iter().next())
}

/// Returns the first element. Same as [`first`].
pub fn head<'a, I>() -> UnaryFn<'a, I, Option<I::Item>>
where
    I: IntoIterator + 'a,
    I::Item: 'a,
{
    first().with_name("head")
}

/// Returns the last element.
pub fn last<'a, I>() -> UnaryFn<'a, I, Option<I::Item>>
where
    I: IntoIterator + 'a,
    I::Item: 'a,
{
    UnaryFn::named("last", |items: I| items.into_iter().last())
}

/// Returns the element at `position`, counting from zero.
pub fn pick<'a, I>(position: usize) -> UnaryFn<'a, I, Option<I::Item>>
where
    I: IntoIterator + 'a,
    I::Item: 'a,
{
    UnaryFn::named(format!("pick({position})"), move |items: I| {
        items.into_iter().nth(position)
    })
}

/// Returns the number of elements.
pub fn tally<'a, I>() -> UnaryFn<'a, I, usize>
where
    I: IntoIterator + 'a,
{
    UnaryFn::named("tally", |items: I| items.into_iter().count())
}
