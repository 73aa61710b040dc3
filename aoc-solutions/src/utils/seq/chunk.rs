//! Grouping runs of elements separated by predicate-false elements.

use std::iter::FusedIterator;

/// Iterator over maximal runs of elements satisfying a predicate.
///
/// An element failing the predicate closes the current run and is dropped. Runs
/// are never empty: leading, trailing or repeated separators emit nothing.
///
/// Created by [`chunk_while`] or [`SeqExt::chunk_while`](super::SeqExt::chunk_while).
pub struct ChunkWhile<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> ChunkWhile<I, P> {
    pub(super) fn new(iter: I, predicate: P) -> Self {
        Self { iter, predicate }
    }
}

impl<I, P> Iterator for ChunkWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut group = Vec::new();
        for item in self.iter.by_ref() {
            if (self.predicate)(&item) {
                group.push(item);
            } else if !group.is_empty() {
                return Some(group);
            }
        }
        (!group.is_empty()).then_some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every group but the last is followed by a separator.
        let (_, hi) = self.iter.size_hint();
        (0, hi.map(|hi| hi.div_ceil(2)))
    }
}

impl<I, P> FusedIterator for ChunkWhile<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Splits `iterable` into groups of consecutive elements satisfying `predicate`.
///
/// ```
/// use aoc_solutions::utils::seq::chunk_while;
///
/// let groups: Vec<_> = chunk_while(["abc", "", "a", "b", "c", ""], |l| !l.is_empty()).collect();
/// assert_eq!(groups, vec![vec!["abc"], vec!["a", "b", "c"]]);
/// ```
pub fn chunk_while<I, P>(iterable: I, predicate: P) -> ChunkWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    ChunkWhile::new(iterable.into_iter(), predicate)
}
