//! Terminal reducers.
//!
//! Each reducer drains its input exactly once. Empty input is never an error:
//! `sum` and `count` return zero, `min` and `max` return the caller's default.

use std::iter::Sum;

/// Total of all elements; the additive identity when empty.
#[inline]
pub fn sum<I, T>(iterable: I) -> T
where
    I: IntoIterator,
    T: Sum<I::Item>,
{
    iterable.into_iter().sum()
}

/// Total of a fallible sequence, stopping at the first `Err`.
///
/// ```
/// use aoc_solutions::utils::seq::try_sum;
///
/// let ok: Result<i32, &str> = try_sum([Ok(1), Ok(2)]);
/// assert_eq!(ok, Ok(3));
/// let err: Result<i32, &str> = try_sum([Ok(1), Err("bad"), Ok(2)]);
/// assert_eq!(err, Err("bad"));
/// ```
#[inline]
pub fn try_sum<I, T, E>(iterable: I) -> Result<T, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    T: Sum<T>,
{
    iterable.into_iter().sum()
}

/// Number of elements.
#[inline]
pub fn count<I: IntoIterator>(iterable: I) -> usize {
    iterable.into_iter().count()
}

/// Number of elements satisfying `predicate`.
pub fn count_where<I, P>(iterable: I, mut predicate: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    iterable.into_iter().filter(|item| predicate(item)).count()
}

/// Smallest element, or `default` when the sequence is empty.
///
/// ```
/// use aoc_solutions::utils::seq;
///
/// assert_eq!(seq::min([4, 2, 7], -1), 2);
/// assert_eq!(seq::min(Vec::<i32>::new(), -1), -1);
/// ```
pub fn min<I>(iterable: I, default: I::Item) -> I::Item
where
    I: IntoIterator,
    I::Item: Ord,
{
    iterable.into_iter().min().unwrap_or(default)
}

/// Largest element, or `default` when the sequence is empty.
pub fn max<I>(iterable: I, default: I::Item) -> I::Item
where
    I: IntoIterator,
    I::Item: Ord,
{
    iterable.into_iter().max().unwrap_or(default)
}
