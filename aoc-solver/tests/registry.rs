use aoc_solver::{
    AocParser, AocSolver, FactoryInfo, ParseError, PartSolver, RegistrationError, SolveError,
    SolverError, SolverPlugin, SolverRegistryBuilder,
};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct CharCount;

impl AocParser for CharCount {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("no input".into()));
        }
        Ok(input)
    }
}

impl PartSolver<1> for CharCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().count().to_string())
    }
}

impl PartSolver<2> for CharCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.lines().count().to_string())
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct Echo;

impl AocParser for Echo {
    type SharedData<'a> = String;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim().to_string())
    }
}

impl PartSolver<1> for Echo {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.clone())
    }
}

aoc_solver::inventory::submit! {
    SolverPlugin {
        year: 2016,
        day: 3,
        solver: &CharCount,
        tags: &["text"],
    }
}

aoc_solver::inventory::submit! {
    SolverPlugin {
        year: 2016,
        day: 4,
        solver: &Echo,
        tags: &[],
    }
}

#[test]
fn test_create_and_solve() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<CharCount>(2020, 5)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2020, 5, "ab\ncd").unwrap();
    assert_eq!((solver.year(), solver.day(), solver.parts()), (2020, 5, 2));
    assert_eq!(solver.solve(1).unwrap().answer, "5");
    assert_eq!(solver.solve(2).unwrap().answer, "2");
    assert!(solver.parse_end() >= solver.parse_start());
    assert!(matches!(
        solver.solve(3),
        Err(SolveError::PartOutOfRange(3))
    ));
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register_solver::<CharCount>(2020, 5)
        .unwrap()
        .register_solver::<Echo>(2020, 5);
    assert_eq!(
        result.err(),
        Some(RegistrationError::DuplicateSolver(2020, 5))
    );
}

#[test]
fn test_out_of_range_year_day() {
    for (year, day) in [(2014, 1), (2035, 1), (2020, 0), (2020, 26)] {
        assert_eq!(
            SolverRegistryBuilder::new()
                .register_solver::<Echo>(year, day)
                .err(),
            Some(RegistrationError::InvalidYearDay(year, day))
        );
    }

    let registry = SolverRegistryBuilder::new().build();
    assert!(matches!(
        registry.create_solver(2014, 1, ""),
        Err(SolverError::InvalidYearDay(2014, 1))
    ));
}

#[test]
fn test_lookup_failures() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<CharCount>(2020, 5)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2020, 6, "x"),
        Err(SolverError::NotFound(2020, 6))
    ));
    assert!(matches!(
        registry.create_solver(2020, 5, ""),
        Err(SolverError::Parse(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_info_ordered_by_year_then_day() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Echo>(2021, 1)
        .unwrap()
        .register_solver::<CharCount>(2015, 25)
        .unwrap()
        .register_solver::<Echo>(2015, 2)
        .unwrap()
        .build();

    let info: Vec<_> = registry.iter_info().collect();
    assert_eq!(
        info,
        vec![
            FactoryInfo { year: 2015, day: 2, parts: 1 },
            FactoryInfo { year: 2015, day: 25, parts: 2 },
            FactoryInfo { year: 2021, day: 1, parts: 1 },
        ]
    );
    assert_eq!(registry.len(), 3);
    assert!(registry.contains(2015, 25));
    assert_eq!(registry.get_info(2015, 3), None);
    assert!(SolverRegistryBuilder::default().build().is_empty());
}

#[test]
fn test_plugins_discovered() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert_eq!(registry.len(), 2);
    let mut echo = registry.create_solver(2016, 4, "  hi  ").unwrap();
    assert_eq!(echo.solve(1).unwrap().answer, "hi");
}

#[test]
fn test_plugins_filtered_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"text"))
        .unwrap()
        .build();

    assert!(registry.contains(2016, 3));
    assert!(!registry.contains(2016, 4));
    assert_eq!(registry.get_info(2016, 3).map(|info| info.parts), Some(2));
}

#[test]
fn test_plugins_clash_with_manual_registration() {
    let result = SolverRegistryBuilder::new()
        .register_solver::<Echo>(2016, 3)
        .unwrap()
        .register_all_plugins();
    assert_eq!(
        result.err(),
        Some(RegistrationError::DuplicateSolver(2016, 3))
    );
}
