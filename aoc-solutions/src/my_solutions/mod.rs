pub mod year_2021;
pub mod year_2022;
pub mod year_2025;

/// Parse `input` with `S` and answer every part, in order.
#[cfg(test)]
pub(crate) fn answers<S: aoc_solver::Solver>(input: &str) -> Vec<String> {
    use aoc_solver::{DynSolver, SolverInstance};

    SolverInstance::<S>::new(0, 0, input)
        .expect("example input parses")
        .solve_all()
        .into_iter()
        .map(|result| result.expect("example part solves").answer)
        .collect()
}
