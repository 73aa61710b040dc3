use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::grid::{Grid, Pos};
use crate::utils::seq::{self, SeqExt};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid"])]
pub struct Solver;

/// A forklift can reach a roll with fewer than this many neighbouring rolls
const CROWDED: usize = 4;

impl AocParser for Solver {
    /// `true` where a roll of paper sits
    type SharedData<'a> = Grid<bool>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input.trim(), |c| match c {
            '@' => Ok(true),
            '.' => Ok(false),
            other => Err(ParseError::InvalidFormat(format!(
                "unexpected cell {other:?}"
            ))),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<bool> = shared;
        let reachable = grid
            .positions()
            .count_where(|&pos| is_reachable(grid, pos));
        Ok(reachable.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = shared.clone();
        // One item per round: how many rolls were lifted out.
        let rounds = std::iter::from_fn(|| {
            let lifted: Vec<Pos> = grid
                .positions()
                .filter(|&pos| is_reachable(&grid, pos))
                .collect();
            for &pos in &lifted {
                grid.set(pos, false);
            }
            (!lifted.is_empty()).then_some(lifted.len())
        });
        let removed: usize = seq::sum(rounds);
        Ok(removed.to_string())
    }
}

fn is_reachable(grid: &Grid<bool>, pos: Pos) -> bool {
    grid.get(pos).copied().unwrap_or(false)
        && grid
            .neighbors8(pos)
            .count_where(|&n| grid.get(n).copied().unwrap_or(false))
            < CROWDED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::answers;

    const EXAMPLE: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    #[test]
    fn test_example() {
        assert_eq!(answers::<Solver>(EXAMPLE), vec!["13", "43"]);
    }

    #[test]
    fn test_isolated_rolls_all_reachable() {
        assert_eq!(answers::<Solver>("@.@\n...\n@.@\n"), vec!["4", "4"]);
    }

    #[test]
    fn test_full_block_peels_in_rounds() {
        // Corners go first, then the rest of the 3x3 block.
        assert_eq!(answers::<Solver>("@@@\n@@@\n@@@\n"), vec!["4", "9"]);
    }

    #[test]
    fn test_rejects_unknown_cell() {
        assert!(Solver::parse("@x\n").is_err());
    }
}
