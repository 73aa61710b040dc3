//! Lazy Sequence Utilities
//!
//! Small, composable pull-based primitives shared by the puzzle solutions. Every
//! primitive wraps an upstream iterator and produces elements on demand; nothing
//! is materialized except the window buffer of [`SlidingWindow`] and the current
//! group of [`ChunkWhile`].
//!
//! # Primitives
//!
//! - [`range`]: `0..n`, restartable on every call
//! - [`enumerate`]: `(index, value)` pairs
//! - [`sliding_window`]: stride-1 overlapping windows, owned snapshots
//! - [`chunk_while`]: runs of predicate-true elements, separators dropped
//! - [`accumulate`] / [`accumulate_by`]: running prefixes
//!
//! # Reducers
//!
//! - [`sum`], [`try_sum`]: zero on empty input
//! - [`count`], [`count_where`]: zero on empty input
//! - [`min`], [`max`]: caller-supplied default on empty input
//!
//! The same operations are available as chain methods through [`SeqExt`].
//!
//! # Sources and restartability
//!
//! Any `IntoIterator` is a source. A chain over a collection or `&str` can be
//! rebuilt and run again; a chain over a one-shot producer is spent once it has
//! been drained. Fallible sources yield `Result` items, which every primitive
//! forwards untouched.
//!
//! # Example: windowed increases
//!
//! ```rust
//! use aoc_solutions::utils::seq::SeqExt;
//!
//! let depths = [199, 200, 208, 210, 200, 207, 240, 269, 260, 263];
//! let increases = depths
//!     .into_iter()
//!     .sliding_window(3)
//!     .unwrap()
//!     .map(|w| w.iter().sum::<i32>())
//!     .sliding_window(2)
//!     .unwrap()
//!     .count_where(|pair| pair[1] > pair[0]);
//! assert_eq!(increases, 5);
//! ```
//!
//! # Example: blank-line separated records
//!
//! ```rust
//! use aoc_solutions::utils::seq::{self, SeqExt};
//!
//! let input = "1000\n2000\n\n4000\n\n5000\n6000\n";
//! let best = seq::lines(input)
//!     .chunk_while(|line| !line.is_empty())
//!     .map(|group| group.iter().map(|l| l.parse::<u32>().unwrap()).sum::<u32>())
//!     .max_or(0);
//! assert_eq!(best, 11000);
//! ```

mod accumulate;
mod chunk;
mod error;
mod reduce;
mod source;
mod window;

pub use accumulate::{Accumulate, Concat, ConcatFn, accumulate, accumulate_by};
pub use chunk::{ChunkWhile, chunk_while};
pub use error::{LineError, SeqError};
pub use reduce::{count, count_where, max, min, sum, try_sum};
pub use source::{apply_n, chars, enumerate, lines, parse_lines, range, seq};
pub use window::{SlidingWindow, sliding_window};

/// Chain-style access to the sequence primitives and reducers.
///
/// Implemented for every iterator.
pub trait SeqExt: Iterator {
    /// See [`sliding_window`].
    fn sliding_window(self, size: usize) -> Result<SlidingWindow<Self>, SeqError>
    where
        Self: Sized,
    {
        SlidingWindow::new(self, size)
    }

    /// See [`chunk_while`].
    fn chunk_while<P>(self, predicate: P) -> ChunkWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        ChunkWhile::new(self, predicate)
    }

    /// See [`accumulate`].
    fn accumulate(self) -> Accumulate<Self, ConcatFn<Self::Item>>
    where
        Self: Sized,
        Self::Item: Concat + Clone,
    {
        Accumulate::new(self, <Self::Item as Concat>::concat as ConcatFn<Self::Item>)
    }

    /// See [`accumulate_by`].
    fn accumulate_by<F>(self, op: F) -> Accumulate<Self, F>
    where
        Self: Sized,
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        Accumulate::new(self, op)
    }

    /// See [`count_where`].
    fn count_where<P>(self, predicate: P) -> usize
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        count_where(self, predicate)
    }

    /// See [`min`].
    fn min_or(self, default: Self::Item) -> Self::Item
    where
        Self: Sized,
        Self::Item: Ord,
    {
        min(self, default)
    }

    /// See [`max`].
    fn max_or(self, default: Self::Item) -> Self::Item
    where
        Self: Sized,
        Self::Item: Ord,
    {
        max(self, default)
    }
}

impl<I: Iterator + ?Sized> SeqExt for I {}
