//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions live under `my_solutions::year_YYYY::day_N`; each one derives
//! `AocSolver` and `AutoRegisterSolver`, so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find them. The shared
//! building blocks are in [`utils`]: lazy sequence primitives and a 2-D grid.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
