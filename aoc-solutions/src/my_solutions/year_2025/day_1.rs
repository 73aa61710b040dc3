use anyhow::bail;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::seq::{self, SeqExt};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["accumulate"])]
pub struct Solver;

const DIAL_SIZE: i32 = 100;
const DIAL_START: i32 = 50;

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<i32>,
    counts: Option<ZeroCounts>,
}

#[derive(Debug)]
pub struct ZeroCounts {
    /// Rotations that leave the dial on 0
    landed: usize,
    /// Clicks that pass over or land on 0
    clicked: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rotations = seq::enumerate(seq::lines(input.trim()))
            .map(|(idx, line)| {
                parse_rotation(line.trim()).map_err(|e| ParseError::at_line(idx + 1, e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData {
            rotations,
            counts: None,
        })
    }
}

/// `L68` turns left 68 clicks (negative), `R48` turns right 48 clicks
fn parse_rotation(line: &str) -> Result<i32, anyhow::Error> {
    let (sign, clicks) = match line.split_at_checked(1) {
        Some(("L", clicks)) => (-1, clicks),
        Some(("R", clicks)) => (1, clicks),
        _ => bail!("rotation must start with 'L' or 'R'"),
    };
    let clicks: i32 = clicks.parse()?;
    if clicks < 0 {
        bail!("rotation distance must be non negative");
    }
    Ok(sign * clicks)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).landed.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).clicked.to_string())
    }
}

fn zero_counts(shared: &mut SharedData) -> &ZeroCounts {
    let rotations = &shared.rotations;
    shared.counts.get_or_insert_with(|| {
        // Dial position before each rotation, then the final resting position.
        let positions = || {
            std::iter::once(DIAL_START)
                .chain(rotations.iter().copied())
                .accumulate_by(|pos, delta| (pos + delta.rem_euclid(DIAL_SIZE)) % DIAL_SIZE)
        };

        ZeroCounts {
            landed: positions().skip(1).count_where(|&pos| pos == 0),
            clicked: seq::sum(
                positions()
                    .zip(rotations.iter().copied())
                    .map(|(pos, delta)| zero_clicks(pos, delta)),
            ),
        }
    })
}

/// Times the dial shows 0 while turning `delta` clicks away from `pos`
fn zero_clicks(pos: i32, delta: i32) -> usize {
    let hits = if delta >= 0 {
        delta / DIAL_SIZE + (pos + delta % DIAL_SIZE) / DIAL_SIZE
    } else {
        let distance = -delta;
        if pos == 0 {
            distance / DIAL_SIZE
        } else if distance >= pos {
            (distance - pos) / DIAL_SIZE + 1
        } else {
            0
        }
    };
    hits as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::answers;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_example() {
        assert_eq!(answers::<Solver>(EXAMPLE), vec!["3", "6"]);
    }

    #[test]
    fn test_zero_clicks() {
        assert_eq!(zero_clicks(50, 1000), 10);
        assert_eq!(zero_clicks(50, -1000), 10);
        assert_eq!(zero_clicks(0, -100), 1);
        assert_eq!(zero_clicks(0, -99), 0);
        assert_eq!(zero_clicks(1, -1), 1);
        assert_eq!(zero_clicks(99, 1), 1);
        assert_eq!(zero_clicks(10, 5), 0);
    }

    #[test]
    fn test_maximal_rotations() {
        // 50 -> 97 -> 50, passing 0 every full turn.
        let input = "R2147483647\nL2147483647\n";
        assert_eq!(answers::<Solver>(input), vec!["0", "42949672"]);
        assert_eq!(zero_clicks(99, i32::MAX), 21474837);
    }

    #[test]
    fn test_rejects_bad_direction() {
        let err = Solver::parse("R10\nU5\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn test_empty_input_counts_nothing() {
        assert_eq!(answers::<Solver>(""), vec!["0", "0"]);
    }
}
