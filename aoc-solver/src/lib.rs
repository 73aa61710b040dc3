//! Advent of Code Solver Library
//!
//! A small, type-safe harness for puzzle solvers. Each solver parses its input
//! once into shared data and answers one or more parts from it.
//!
//! # Overview
//!
//! - [`AocParser`] parses input into `SharedData<'a>` (owned or borrowing)
//! - [`PartSolver<N>`](PartSolver) answers part `N`
//! - [`Solver`] ties them together; usually generated by `#[derive(AocSolver)]`
//! - [`SolverInstance`] / [`DynSolver`] hold a parsed input and time each part
//! - [`SolverRegistryBuilder`] / [`SolverRegistry`] map (year, day) to solvers,
//!   either registered by hand or discovered as [`SolverPlugin`]s
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{
//!     AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder,
//! };
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Day1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Plugins
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] through `inventory`,
//! so a binary only needs to link the crate holding the solvers:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2022, day = 1, tags = ["grouping"])]
//! pub struct Solver;
//!
//! let registry = SolverRegistryBuilder::new().register_all_plugins()?.build();
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{BoxError, ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS_PER_YEAR, FIRST_YEAR, FactoryInfo, LAST_YEAR, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by code generated from the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
