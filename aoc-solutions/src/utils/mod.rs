//! Helpers shared by the solutions

pub mod grid;
pub mod seq;
