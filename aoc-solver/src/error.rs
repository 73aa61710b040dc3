//! Errors raised while parsing input, solving parts and looking solvers up

use std::error::Error as StdError;

use thiserror::Error;

/// Any error a part solver wants to report as its cause
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Input could not be turned into shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// One input line is malformed; `line` is 1-based
    #[error("invalid format (line {line}): {message}")]
    InvalidLine { line: usize, message: String },
    #[error("missing data: {0}")]
    MissingData(String),
    #[error("{0}")]
    Other(String),
}

impl ParseError {
    pub fn at_line(line: usize, message: impl Into<String>) -> Self {
        ParseError::InvalidLine {
            line,
            message: message.into(),
        }
    }

    /// The offending line, when the error points at one
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::InvalidLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SolveError {
    /// `solve_part` has no arm for this part
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part 0, or above the solver's `PARTS`
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input parsed but has no answer for this part
    #[error("no answer: {0}")]
    NoAnswer(String),
    #[error("solve failed: {0}")]
    SolveFailed(#[source] BoxError),
}

impl SolveError {
    pub fn failed(cause: impl Into<BoxError>) -> Self {
        SolveError::SolveFailed(cause.into())
    }
}

/// Errors from [`SolverRegistry`](crate::SolverRegistry) lookups
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solver registered for {0} day {1}")]
    NotFound(u16, u8),
    #[error("{0} day {1} is outside the supported calendar")]
    InvalidYearDay(u16, u8),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Errors from [`SolverRegistryBuilder`](crate::SolverRegistryBuilder)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("a solver is already registered for {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("{0} day {1} is outside the supported calendar")]
    InvalidYearDay(u16, u8),
}
