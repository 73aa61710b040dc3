//! Sequence sources and stateless primitives.
//!
//! Everything here hands back a plain `Iterator`. Sources built over a borrowed
//! collection or string can be restarted by calling the constructor again; a
//! source built over a one-shot producer cannot.

use std::fmt::Display;
use std::iter::Enumerate;
use std::ops::Range;
use std::str::{Chars, FromStr, Lines};

use super::error::LineError;

/// Wraps any iterable as a lazy sequence without copying it.
#[inline]
pub fn seq<I: IntoIterator>(iterable: I) -> I::IntoIter {
    iterable.into_iter()
}

/// The characters of `s`, in order.
#[inline]
pub fn chars(s: &str) -> Chars<'_> {
    s.chars()
}

/// The lines of `input` with line terminators removed.
///
/// A final trailing newline does not produce an empty last line, but blank lines
/// in the middle of the input are kept as `""` so they can act as separators.
#[inline]
pub fn lines(input: &str) -> Lines<'_> {
    input.lines()
}

/// Parses every line of `input` as `T`.
///
/// Surrounding whitespace is trimmed before parsing. Failures are yielded in place
/// as [`LineError`] carrying the 1-based line number, so a caller collecting into
/// `Result<Vec<T>, _>` stops at the first bad line.
pub fn parse_lines<T>(input: &str) -> impl Iterator<Item = Result<T, LineError>> + '_
where
    T: FromStr,
    T::Err: Display,
{
    input.lines().enumerate().map(|(idx, line)| {
        line.trim()
            .parse::<T>()
            .map_err(|e| LineError::new(idx + 1, e.to_string()))
    })
}

/// The integers `0..n`.
///
/// Each call returns a fresh sequence; `n == 0` yields nothing.
#[inline]
pub fn range(n: usize) -> Range<usize> {
    0..n
}

/// Pairs each element with its zero-based position.
#[inline]
pub fn enumerate<I: IntoIterator>(iterable: I) -> Enumerate<I::IntoIter> {
    iterable.into_iter().enumerate()
}

/// Applies `f` to `init` exactly `n` times and returns the result.
///
/// ```
/// use aoc_solutions::utils::seq::apply_n;
///
/// assert_eq!(apply_n(10, 1u32, |x| x * 2), 1024);
/// assert_eq!(apply_n(0, "unchanged", |_| "changed"), "unchanged");
/// ```
pub fn apply_n<T, F>(n: usize, init: T, mut f: F) -> T
where
    F: FnMut(T) -> T,
{
    range(n).fold(init, |acc, _| f(acc))
}
