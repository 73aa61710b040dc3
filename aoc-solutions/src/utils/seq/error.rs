//! Error types for the sequence utilities

use aoc_solver::{ParseError, SolveError};
use thiserror::Error;

/// Error type for invalid primitive parameters
///
/// Raised when a primitive is constructed, never while it is being pulled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// Sliding windows need at least one element
    #[error("Window size must be positive, got {0}")]
    InvalidWindowSize(usize),
}

impl From<SeqError> for SolveError {
    fn from(e: SeqError) -> Self {
        SolveError::failed(e)
    }
}

/// A line of input that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("(line {line}) {message}")]
pub struct LineError {
    /// 1-based line number
    pub line: usize,
    /// Message from the underlying parser
    pub message: String,
}

impl LineError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl From<LineError> for ParseError {
    fn from(e: LineError) -> Self {
        ParseError::at_line(e.line, e.message)
    }
}
