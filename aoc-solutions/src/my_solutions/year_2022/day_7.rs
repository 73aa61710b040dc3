use std::collections::HashMap;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::seq::{self, SeqExt};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 7, tags = ["accumulate", "paths"])]
pub struct Solver;

const ROOT: &str = "/";
const SMALL_DIR_LIMIT: u64 = 100_000;
const DISK_SIZE: u64 = 70_000_000;
const SPACE_NEEDED: u64 = 30_000_000;

/// Total size of every directory, keyed by its full path ("/", "/a/", "/a/e/")
pub type DirSizes = HashMap<String, u64>;

impl AocParser for Solver {
    type SharedData<'a> = DirSizes;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut segments: Vec<String> = Vec::new();
        let mut sizes = DirSizes::new();

        for (idx, line) in seq::enumerate(seq::lines(input)) {
            read_line(line, &mut segments, &mut sizes)
                .map_err(|e| ParseError::at_line(idx + 1, e.to_string()))?;
        }
        Ok(sizes)
    }
}

/// Apply one line of terminal output to the directory stack and size table
fn read_line(
    line: &str,
    segments: &mut Vec<String>,
    sizes: &mut DirSizes,
) -> Result<(), anyhow::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] | ["$", "ls"] | ["dir", _] => {}
        ["$", "cd", "/"] => {
            segments.clear();
            segments.push(ROOT.to_string());
            sizes.entry(ROOT.to_string()).or_default();
        }
        ["$", "cd", ".."] => {
            if segments.len() <= 1 {
                bail!("cannot leave the root directory");
            }
            segments.pop();
        }
        ["$", "cd", name] => {
            if segments.is_empty() {
                bail!("`cd {name}` before `cd /`");
            }
            segments.push(format!("{name}/"));
        }
        [size, _name] => {
            let size: u64 = size
                .parse()
                .map_err(|e| anyhow!("bad file size {size:?}: {e}"))?;
            if segments.is_empty() {
                bail!("file listed before `cd /`");
            }
            // Every enclosing directory, outermost first.
            for path in segments.iter().cloned().accumulate() {
                *sizes.entry(path).or_default() += size;
            }
        }
        _ => bail!("unrecognised line {line:?}"),
    }
    Ok(())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = seq::sum(
            shared
                .values()
                .copied()
                .filter(|&size| size <= SMALL_DIR_LIMIT),
        );
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let used = *shared
            .get(ROOT)
            .ok_or_else(|| SolveError::NoAnswer("no root directory listed".to_string()))?;
        let needed = SPACE_NEEDED.saturating_sub(DISK_SIZE.saturating_sub(used));

        // Deleting the root always frees enough.
        let smallest = shared
            .values()
            .copied()
            .filter(|&size| size >= needed)
            .min_or(used);
        Ok(smallest.to_string())
    }
}
