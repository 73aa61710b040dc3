use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::seq::{self, SeqExt};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["window"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let depths = seq::parse_lines(input.trim()).collect::<Result<Vec<_>, _>>()?;
        Ok(depths)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(shared.iter().copied())?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let window_sums = shared
            .iter()
            .copied()
            .sliding_window(3)?
            .map(|w| seq::sum::<_, u64>(w.into_iter().map(u64::from)));
        Ok(count_increases(window_sums)?.to_string())
    }
}

fn count_increases<T: PartialOrd + Clone>(
    depths: impl Iterator<Item = T>,
) -> Result<usize, SolveError> {
    Ok(depths.sliding_window(2)?.count_where(|pair| pair[1] > pair[0]))
}
