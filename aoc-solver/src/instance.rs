//! A parsed input bound to its solver, and the boxed view the registry hands out

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};

#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Shared data for one input, parsed once and reused by every part.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end: Utc::now(),
        })
    }

    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Object-safe face of a [`SolverInstance`], whatever its solver type.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) {
///     println!("{}/{:02} parsed in {}", solver.year(), solver.day(), solver.parse_duration());
///     for (part, result) in (1..).zip(solver.solve_all()) {
///         match result {
///             Ok(r) => println!("  part {part}: {} ({})", r.answer, r.duration()),
///             Err(e) => println!("  part {part}: {e}"),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    /// Solve one part; parts outside `1..=parts()` are
    /// [`SolveError::PartOutOfRange`].
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }

    /// Every part in order. A failed part does not stop the later ones.
    fn solve_all(&mut self) -> Vec<Result<SolveResult, SolveError>> {
        (1..=self.parts()).map(|part| self.solve(part)).collect()
    }
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        Ok(SolveResult {
            answer,
            solve_start,
            solve_end: Utc::now(),
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }
}
