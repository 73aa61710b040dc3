//! The traits a puzzle solver implements

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data every part works from.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .enumerate()
///             .map(|(i, l)| l.parse::<u32>().map_err(|e| ParseError::at_line(i + 1, format!("{e}"))))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("3\n1").unwrap(), vec![3, 1]);
/// assert_eq!(Depths::parse("3\nx").unwrap_err().line(), Some(2));
/// ```
pub trait AocParser {
    /// Owned data, or views borrowing the input for `'a`
    type SharedData<'a>: 'a;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Part `N` of a puzzle.
///
/// Parts take the shared data mutably, so an earlier part can leave results
/// behind for a later one.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime dispatch from a part number to a [`PartSolver`] impl.
///
/// `#[derive(AocSolver)]` writes this for you:
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct LineCount;
///
/// impl AocParser for LineCount {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl PartSolver<1> for LineCount {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.lines().count().to_string())
///     }
/// }
///
/// let mut shared = LineCount::parse("a\nb").unwrap();
/// assert_eq!(LineCount::PARTS, 1);
/// assert_eq!(LineCount::solve_part(&mut shared, 1).unwrap(), "2");
/// assert!(matches!(
///     LineCount::solve_part(&mut shared, 2),
///     Err(SolveError::PartNotImplemented(2))
/// ));
/// ```
pub trait Solver: AocParser {
    /// Parts are numbered `1..=PARTS`
    const PARTS: u8;

    /// Fails with [`SolveError::PartNotImplemented`] for a part with no impl.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// [`Solver::solve_part`] behind a `1..=PARTS` check.
    ///
    /// Part 0 and parts above `PARTS` fail with [`SolveError::PartOutOfRange`]
    /// without reaching the solver.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if part == 0 || part > Self::PARTS {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
