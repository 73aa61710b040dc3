use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::seq;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 6, tags = ["simulation"])]
pub struct Solver;

/// Fish count per timer value 0..=8
type Population = [u64; 9];

impl AocParser for Solver {
    type SharedData<'a> = Population;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        seq::enumerate(input.trim().split(','))
            .try_fold([0u64; 9], |mut population, (idx, timer)| {
                let timer: usize = timer
                    .trim()
                    .parse()
                    .map_err(|e| anyhow!("(fish {}) {}", idx + 1, e))?;
                let slot = population
                    .get_mut(timer)
                    .ok_or_else(|| anyhow!("(fish {}) timer {} is above 8", idx + 1, timer))?;
                *slot += 1;
                Ok::<_, anyhow::Error>(population)
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population_after(*shared, 80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population_after(*shared, 256).to_string())
    }
}

fn population_after(population: Population, days: usize) -> u64 {
    let end = seq::apply_n(days, population, |mut fish| {
        // Timer-0 fish land in slot 8 as newborns; the parents restart at 6.
        fish.rotate_left(1);
        fish[6] += fish[8];
        fish
    });
    seq::sum(end)
}
