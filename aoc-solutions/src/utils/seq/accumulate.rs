//! Running prefixes (left-fold partial results).

use std::borrow::Cow;
use std::iter::FusedIterator;

/// Ordered concatenation, the default operator of [`accumulate`].
///
/// `a.concat(b)` must keep `a`'s content before `b`'s; it need not be commutative.
pub trait Concat: Sized {
    fn concat(self, next: Self) -> Self;
}

impl Concat for String {
    fn concat(mut self, next: Self) -> Self {
        self.push_str(&next);
        self
    }
}

impl Concat for Cow<'_, str> {
    fn concat(self, next: Self) -> Self {
        self + next
    }
}

impl<T> Concat for Vec<T> {
    fn concat(mut self, mut next: Self) -> Self {
        self.append(&mut next);
        self
    }
}

/// Iterator over the running combination of a sequence.
///
/// The first element seeds the running value and is emitted as-is; each later
/// element is folded in with the operator and the new running value is emitted.
///
/// Created by [`accumulate`], [`accumulate_by`] or the matching
/// [`SeqExt`](super::SeqExt) methods.
pub struct Accumulate<I: Iterator, F> {
    iter: I,
    acc: Option<I::Item>,
    op: F,
}

impl<I: Iterator, F> Accumulate<I, F> {
    pub(super) fn new(iter: I, op: F) -> Self {
        Self {
            iter,
            acc: None,
            op,
        }
    }
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let next = match self.acc.take() {
            Some(acc) => (self.op)(acc, item),
            None => item,
        };
        self.acc = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> FusedIterator for Accumulate<I, F>
where
    I: FusedIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
}

/// Operator type used by [`accumulate`]
pub type ConcatFn<T> = fn(T, T) -> T;

/// Running concatenation of `iterable`.
///
/// ```
/// use aoc_solutions::utils::seq::accumulate;
///
/// let paths: Vec<String> = accumulate(["/", "a/", "e/"].map(String::from)).collect();
/// assert_eq!(paths, ["/", "/a/", "/a/e/"]);
/// ```
pub fn accumulate<I>(iterable: I) -> Accumulate<I::IntoIter, ConcatFn<I::Item>>
where
    I: IntoIterator,
    I::Item: Concat + Clone,
{
    Accumulate::new(iterable.into_iter(), <I::Item as Concat>::concat as ConcatFn<I::Item>)
}

/// Running left fold of `iterable` under `op`.
///
/// ```
/// use aoc_solutions::utils::seq::accumulate_by;
///
/// let totals: Vec<i32> = accumulate_by([3, 1, 4, 1, 5], |a, b| a + b).collect();
/// assert_eq!(totals, [3, 4, 8, 9, 14]);
/// ```
pub fn accumulate_by<I, F>(iterable: I, op: F) -> Accumulate<I::IntoIter, F>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    Accumulate::new(iterable.into_iter(), op)
}
