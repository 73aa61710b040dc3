//! Fixed-size 2-D grid with row-major flat storage.

use aoc_solver::ParseError;

use super::seq::{self, SeqExt};

/// A `(row, col)` coordinate
pub type Pos = (usize, usize);

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rectangular grid of cells addressed by [`Pos`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Parse a character grid, one row per line.
    ///
    /// Rejects empty input and rows of differing width.
    pub fn parse<F>(input: &str, mut cell: F) -> Result<Self, ParseError>
    where
        F: FnMut(char) -> Result<T, ParseError>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (row, line) in seq::enumerate(seq::lines(input.trim_end())) {
            let before = cells.len();
            for c in seq::chars(line) {
                cells.push(cell(c)?);
            }
            let row_width = cells.len() - before;
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    return Err(ParseError::at_line(
                        row + 1,
                        format!("expected {w} cells, got {row_width}"),
                    ));
                }
                Some(_) => {}
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                width,
                height,
                cells,
            }),
            _ => Err(ParseError::MissingData("grid is empty".to_string())),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, (row, col): Pos) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Replace the cell at `pos`, returning the previous value.
    ///
    /// Returns `None` and leaves the grid untouched when `pos` is out of bounds.
    pub fn set(&mut self, pos: Pos, value: T) -> Option<T> {
        let i = self.index(pos)?;
        Some(std::mem::replace(&mut self.cells[i], value))
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let width = self.width;
        seq::range(self.height * width).map(move |i| (i / width, i % width))
    }

    /// In-bounds positions of the 8 cells surrounding `pos`
    pub fn neighbors8(&self, (row, col): Pos) -> impl Iterator<Item = Pos> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let pos = (row.checked_add_signed(dr)?, col.checked_add_signed(dc)?);
            self.index(pos).map(|_| pos)
        })
    }

    /// Number of cells satisfying `predicate`
    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.cells.iter().count_where(|cell| predicate(cell))
    }
}
