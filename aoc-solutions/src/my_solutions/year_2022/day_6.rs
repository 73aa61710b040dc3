use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::utils::seq::{self, SeqExt};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["window", "chars"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let signal = input.trim();
        if signal.is_empty() {
            return Err(ParseError::MissingData("empty datastream".to_string()));
        }
        Ok(signal)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(first_marker(shared, 4)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(first_marker(shared, 14)?.to_string())
    }
}

/// Characters processed when the first run of `size` distinct characters ends
fn first_marker(signal: &str, size: usize) -> Result<usize, SolveError> {
    seq::enumerate(seq::chars(signal).sliding_window(size)?)
        .find(|(_, window)| window.iter().all_unique())
        .map(|(start, _)| start + size)
        .ok_or_else(|| SolveError::NoAnswer(format!("no run of {size} distinct characters")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::answers;

    #[test]
    fn test_examples() {
        let cases = [
            ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19),
            ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
            ("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
            ("nznrnfrfntjfmvfwmzdfjlczfdtmvcdv", 10, 29),
            ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
        ];
        for (signal, start_of_packet, start_of_message) in cases {
            assert_eq!(
                answers::<Solver>(signal),
                vec![start_of_packet.to_string(), start_of_message.to_string()],
                "{signal}"
            );
        }
    }

    #[test]
    fn test_no_marker_is_an_error() {
        assert!(matches!(
            first_marker("aaaaaaa", 4),
            Err(SolveError::NoAnswer(_))
        ));
        assert!(matches!(
            first_marker("abc", 4),
            Err(SolveError::NoAnswer(_))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            Solver::parse("\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
