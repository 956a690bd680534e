use numapprox::root_finding::steffensen::{Steffensen, SteffensenCfg};
use numapprox::root_finding::errors::{ConfigError, RootFindingError};
use numapprox::root_finding::RootSolver;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SteffensenCfg::new().set_tolerance(1e-10)?;
    let mut solver = Steffensen::new(f, 1.0, cfg)?;
    let root = solver.solve()?;

    assert!((root - 2.0_f64.sqrt()).abs() <= 1e-12);
    assert!(solver.count() <= 10);
    // f(x0) once, then the probe f(x + f(x)) and f(x_next) per iteration
    assert_eq!(solver.evaluations(), 1 + 2 * solver.count());
    Ok(())
}

#[test]
fn trace_starts_from_divided_difference_step() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SteffensenCfg::new().set_tolerance(1e-10)?;
    let mut solver = Steffensen::new(f, 1.0, cfg)?;
    solver.solve()?;

    let trace = solver.trace().approximations();
    assert_eq!(trace[0], 2.0);
    assert!((trace[1] - 5.0 / 3.0).abs() <= 1e-15);
    Ok(())
}

#[test]
fn triple_root_converges_slowly() -> TestResult {
    let f   = |x: f64| x * x * x;
    let cfg = SteffensenCfg::new().set_tolerance(1e-3)?;
    let mut solver = Steffensen::new(f, 0.5, cfg)?;
    let root = solver.solve()?;

    assert!(f(root).abs() < 1e-3);
    assert!(root > 0.0 && root < 0.1);
    assert!(solver.count() >= 3);
    Ok(())
}

#[test]
fn initial_guess_already_a_root() -> TestResult {
    let f = |x: f64| x - 1.0;
    let mut solver = Steffensen::new(f, 1.0, SteffensenCfg::new())?;

    assert_eq!(solver.solve()?, 1.0);
    assert_eq!(solver.count(), 0);
    assert_eq!(solver.evaluations(), 1);
    Ok(())
}

#[test]
fn flat_divided_difference() -> TestResult {
    // f(0) = 1 and f(0 + 1) = 1, so g = 0
    let f = |x: f64| if x < 10.0 { 1.0 } else { x - 11.0 };
    let mut solver = Steffensen::new(f, 0.0, SteffensenCfg::new())?;
    let err = solver.solve().unwrap_err();

    assert!(matches!(err, RootFindingError::DegenerateStep { x, denom, .. } if x == 0.0 && denom == 0.0));
    assert!(solver.trace().is_empty());
    Ok(())
}

#[test]
fn iteration_cap_keeps_partial_trace() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SteffensenCfg::new().set_tolerance(1e-12)?.set_max_iter(3)?;
    let mut solver = Steffensen::new(f, 1.0, cfg)?;
    let err = solver.solve().unwrap_err();

    let trace = solver.trace().approximations();
    assert_eq!(trace.len(), 3);
    assert!((trace[2] - 1.477_477_477_477_477_5).abs() <= 1e-12);
    assert!(matches!(err, RootFindingError::MaxIterationsExceeded { max_iter: 3, .. }));
    Ok(())
}

#[test]
fn non_finite_probe() -> TestResult {
    // probe x + f(x) is negative, outside the domain of sqrt
    let f = |x: f64| x.sqrt() - 2.0;
    let mut solver = Steffensen::new(f, 0.5, SteffensenCfg::new())?;
    let err = solver.solve().unwrap_err();

    assert!(matches!(err, RootFindingError::NonFiniteEvaluation { x, fx } if x < 0.0 && fx.is_nan()));
    assert_eq!(solver.evaluations(), 2);
    Ok(())
}

#[test]
fn non_finite_guess() {
    let err = Steffensen::new(|x: f64| x, f64::INFINITY, SteffensenCfg::new()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidGuess { .. }));
}
