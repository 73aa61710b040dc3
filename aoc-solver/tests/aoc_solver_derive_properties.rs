//! Property-based tests for `#[derive(AocSolver)]`

use aoc_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, SolveError, Solver, SolverInstance,
};
use proptest::prelude::*;

fn parse_numbers(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| {
            l.parse()
                .map_err(|_| ParseError::InvalidFormat(format!("bad int {l:?}")))
        })
        .collect()
}

fn to_input(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

/// Part 1 leaves its answer in the shared data for part 2
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Handoff;

struct Running {
    numbers: Vec<i64>,
    total: Option<i64>,
}

impl AocParser for Handoff {
    type SharedData<'a> = Running;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Running {
            numbers: parse_numbers(input)?,
            total: None,
        })
    }
}

impl PartSolver<1> for Handoff {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = shared.numbers.iter().sum();
        shared.total = Some(total);
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Handoff {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = shared.total.ok_or_else(|| {
            SolveError::failed("part 1 has not run")
        })?;
        Ok((total * 2).to_string())
    }
}

/// Shared data borrowing straight from the input
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct LongestLine;

impl AocParser for LongestLine {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for LongestLine {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .max_by_key(|l| l.len())
            .copied()
            .unwrap_or_default()
            .to_string())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_dispatch_matches_part_solver(
        numbers in prop::collection::vec(1i64..10, 1..6),
        part in 1u8..=2,
    ) {
        let input = to_input(&numbers);
        let mut via_dispatch = SumProduct::parse(&input).unwrap();
        let mut direct = SumProduct::parse(&input).unwrap();

        let expected = match part {
            1 => <SumProduct as PartSolver<1>>::solve(&mut direct),
            _ => <SumProduct as PartSolver<2>>::solve(&mut direct),
        };
        prop_assert_eq!(SumProduct::solve_part(&mut via_dispatch, part).unwrap(), expected.unwrap());
    }

    #[test]
    fn prop_undeclared_part_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SumProduct::parse("1\n2").unwrap();
        match SumProduct::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }

    #[test]
    fn prop_mutation_visible_to_later_parts(numbers in prop::collection::vec(-50i64..50, 0..6)) {
        let input = to_input(&numbers);
        let total: i64 = numbers.iter().sum();

        let mut instance = SolverInstance::<Handoff>::new(2020, 1, &input).unwrap();
        prop_assert_eq!(instance.solve(1).unwrap().answer, total.to_string());
        prop_assert_eq!(instance.shared().total, Some(total));
        prop_assert_eq!(instance.solve(2).unwrap().answer, (total * 2).to_string());
    }
}

#[test]
fn test_part_count_from_attribute() {
    assert_eq!(SumProduct::PARTS, 2);
    assert_eq!(LongestLine::PARTS, 1);
}

#[test]
fn test_later_part_without_earlier_fails() {
    let mut shared = Handoff::parse("1\n2").unwrap();
    assert!(matches!(
        Handoff::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
}

#[test]
fn test_borrowed_shared_data() {
    let input = String::from("ab\nabcd\nabc");
    let mut instance = SolverInstance::<LongestLine>::new(2020, 2, &input).unwrap();
    assert_eq!(instance.shared().len(), 3);
    assert_eq!(instance.solve(1).unwrap().answer, "abcd");
    assert!(matches!(
        instance.solve(2),
        Err(SolveError::PartOutOfRange(2))
    ));
}

#[test]
fn test_solve_all_runs_parts_in_order() {
    let mut instance = SolverInstance::<Handoff>::new(2020, 3, "4\n5").unwrap();
    let answers: Vec<String> = instance
        .solve_all()
        .into_iter()
        .map(|r| r.unwrap().answer)
        .collect();
    assert_eq!(answers, vec!["9", "18"]);
}

#[test]
fn test_parse_error_reaches_caller() {
    let err = SolverInstance::<Handoff>::new(2020, 3, "4\nx").err();
    assert_eq!(
        err,
        Some(ParseError::InvalidFormat("bad int \"x\"".to_string()))
    );
}
