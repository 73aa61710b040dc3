use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::utils::seq::{self, SeqExt};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1, tags = ["grouping"])]
pub struct Solver;

impl AocParser for Solver {
    /// Calories carried by each elf
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        seq::enumerate(seq::lines(input))
            .chunk_while(|(_, line)| !line.trim().is_empty())
            .map(|group| seq::try_sum(group.iter().map(|&(idx, line)| parse_calories(idx, line))))
            .collect()
    }
}

fn parse_calories(idx: usize, line: &str) -> Result<u64, ParseError> {
    line.trim()
        .parse::<u32>()
        .map(u64::from)
        .map_err(|e| ParseError::at_line(idx + 1, e.to_string()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(seq::max(shared.iter().copied(), 0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let top_three: u64 = seq::sum(shared.iter().copied().k_largest(3));
        Ok(top_three.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::answers;

    const EXAMPLE: &str = "\
1000
2000
3000

4000

5000
6000

7000
8000
9000

10000
";

    #[test]
    fn test_example() {
        assert_eq!(answers::<Solver>(EXAMPLE), vec!["24000", "45000"]);
    }

    #[test]
    fn test_groups_ignore_extra_blank_lines() {
        let totals = Solver::parse("\n\n1\n2\n\n\n\n3\n\n").unwrap();
        assert_eq!(totals, vec![3, 3]);
    }

    #[test]
    fn test_bad_calories_report_line_number() {
        let err = Solver::parse("1\n2\n\nx\n").unwrap_err();
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_totals_exceed_single_line_range() {
        let input = "4000000000\n4000000000\n\n1\n";
        assert_eq!(answers::<Solver>(input), vec!["8000000000", "8000000001"]);
    }

    #[test]
    fn test_empty_input_uses_defaults() {
        assert_eq!(answers::<Solver>(""), vec!["0", "0"]);
    }
}
