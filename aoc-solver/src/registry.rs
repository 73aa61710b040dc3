//! Lookup from `(year, day)` to solver factories, filled by hand or from plugins

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

pub const FIRST_YEAR: u16 = 2015;
pub const LAST_YEAR: u16 = 2034;
pub const DAYS_PER_YEAR: u8 = 25;

const SLOTS: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize * DAYS_PER_YEAR as usize;

/// Slot of a calendar day in the flat table
fn slot(year: u16, day: u8) -> Option<usize> {
    let in_calendar = (FIRST_YEAR..=LAST_YEAR).contains(&year) && (1..=DAYS_PER_YEAR).contains(&day);
    in_calendar.then(|| {
        usize::from(year - FIRST_YEAR) * usize::from(DAYS_PER_YEAR) + usize::from(day - 1)
    })
}

fn date(slot: usize) -> (u16, u8) {
    let per_year = usize::from(DAYS_PER_YEAR);
    // Both quotient and remainder fit: slot < SLOTS.
    (
        FIRST_YEAR + (slot / per_year) as u16,
        (slot % per_year) as u8 + 1,
    )
}

/// Parses input into a ready-to-solve [`DynSolver`]
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
}

struct Entry {
    parts: u8,
    factory: SolverFactory,
}

/// Collects solvers, then freezes them into a [`SolverRegistry`].
///
/// Each calendar day takes at most one solver.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Words;
///
/// impl AocParser for Words {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.split_whitespace().collect())
///     }
/// }
///
/// impl Solver for Words {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.len().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Words>(2022, 1)
///     .unwrap()
///     .build();
///
/// let mut words = registry.create_solver(2022, 1, "to be or not").unwrap();
/// assert_eq!(words.solve(1).unwrap().answer, "4");
/// ```
pub struct SolverRegistryBuilder {
    slots: Vec<Option<Entry>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(SLOTS).collect(),
        }
    }

    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let slot = slot(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        let entry = &mut self.slots[slot];
        if entry.is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        *entry = Some(Entry {
            parts,
            factory: Box::new(factory),
        });
        Ok(self)
    }

    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance))
        })
    }

    /// Register every [`SolverPlugin`] linked into the binary
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the linked plugins `filter` accepts.
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let grids_of_2022 = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|p| p.year == 2022 && p.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        inventory::iter::<SolverPlugin>
            .into_iter()
            .filter(|plugin| filter(plugin))
            .try_fold(self, |builder, plugin| {
                plugin.solver.register_with(builder, plugin.year, plugin.day)
            })
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry { slots: self.slots }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SolverRegistry {
    slots: Vec<Option<Entry>>,
}

impl SolverRegistry {
    /// Parse `input` with the solver for `year`/`day`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let slot = slot(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self.slots[slot]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;
        Ok((entry.factory)(input)?)
    }

    /// Registered solvers in calendar order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.slots.iter().enumerate().filter_map(|(slot, entry)| {
            let (year, day) = date(slot);
            entry.as_ref().map(|e| FactoryInfo {
                year,
                day,
                parts: e.parts,
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        let entry = self.slots[slot(year, day)?].as_ref()?;
        Some(FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registration hook with the solver type erased, so one `inventory`
/// collection can hold every solver.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S: Solver + Sync + 'static> RegisterableSolver for S {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver waiting to be picked up by
/// [`SolverRegistryBuilder::register_solver_plugins`].
///
/// `#[derive(AutoRegisterSolver)]` submits these; a hand-written
/// `inventory::submit!` works too.
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_round_trips_calendar_edges() {
        for (year, day) in [(FIRST_YEAR, 1), (FIRST_YEAR, 25), (2024, 13), (LAST_YEAR, 25)] {
            let s = slot(year, day).unwrap();
            assert!(s < SLOTS);
            assert_eq!(date(s), (year, day));
        }
    }

    #[test]
    fn test_slot_rejects_outside_calendar() {
        assert_eq!(slot(FIRST_YEAR - 1, 1), None);
        assert_eq!(slot(LAST_YEAR + 1, 1), None);
        assert_eq!(slot(2020, 0), None);
        assert_eq!(slot(2020, 26), None);
    }
}
