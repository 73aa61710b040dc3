//! Stride-1 sliding windows.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::error::SeqError;

/// Iterator over overlapping windows of a fixed size.
///
/// Keeps the last `size` elements in a FIFO buffer. Every pull after the buffer
/// first fills emits a snapshot of it, so a source of length `n` produces
/// `n - size + 1` windows, or none when `n < size`.
///
/// Created by [`sliding_window`] or [`SeqExt::sliding_window`](super::SeqExt::sliding_window).
pub struct SlidingWindow<I: Iterator> {
    iter: I,
    size: usize,
    buf: VecDeque<I::Item>,
}

impl<I: Iterator> SlidingWindow<I> {
    pub(super) fn new(iter: I, size: usize) -> Result<Self, SeqError> {
        if size == 0 {
            return Err(SeqError::InvalidWindowSize(size));
        }
        Ok(Self {
            iter,
            size,
            buf: VecDeque::with_capacity(size),
        })
    }

    /// The window size this iterator was built with
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<I> Iterator for SlidingWindow<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self.buf.len() == self.size {
                self.buf.pop_front();
            }
            self.buf.push_back(item);
            if self.buf.len() == self.size {
                return Some(self.buf.iter().cloned().collect());
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Source elements that still have to arrive before the first window.
        let pending = (self.size - self.buf.len()).saturating_sub(1);
        let (lo, hi) = self.iter.size_hint();
        (
            lo.saturating_sub(pending),
            hi.map(|hi| hi.saturating_sub(pending)),
        )
    }
}

impl<I> FusedIterator for SlidingWindow<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}

/// Overlapping windows of `size` elements over `iterable`.
///
/// Fails with [`SeqError::InvalidWindowSize`] when `size` is zero, before any
/// element is pulled.
///
/// ```
/// use aoc_solutions::utils::seq::sliding_window;
///
/// let windows: Vec<_> = sliding_window([1, 2, 3, 4], 3).unwrap().collect();
/// assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4]]);
/// ```
pub fn sliding_window<I: IntoIterator>(
    iterable: I,
    size: usize,
) -> Result<SlidingWindow<I::IntoIter>, SeqError> {
    SlidingWindow::new(iterable.into_iter(), size)
}
