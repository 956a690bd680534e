//! tests for the bisection root finding algorithm 
use numapprox::root_finding::bisection::{Bisection, BisectionCfg};
use numapprox::root_finding::errors::{ConfigError, RootFindingError};
use numapprox::root_finding::RootSolver;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-10;

    let cfg = BisectionCfg::new().set_tolerance(tol)?;
    let mut solver = Bisection::new(f, 0.0, 2.0, cfg)?;
    let root = solver.solve()?;

    assert!((root - 2.0_f64.sqrt()).abs() <= 1e-10);
    assert!(f(root).abs() < tol);
    assert!(solver.count() > 0 && solver.count() <= 40);
    assert_eq!(solver.count(), solver.trace().approximations().len());
    Ok(())
}

#[test]
fn trace_starts_with_successive_midpoints() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-6)?;
    let mut solver = Bisection::new(f, 0.0, 2.0, cfg)?;
    solver.solve()?;

    assert_eq!(&solver.trace().approximations()[..3], &[1.0, 1.5, 1.25]);
    Ok(())
}

#[test]
fn finds_negative_5() -> TestResult {
    let f   = |x: f64| x + 5.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-10)?;
    let mut solver = Bisection::new(f, -10.0, 0.0, cfg)?;

    // -5 is the first midpoint
    assert_eq!(solver.solve()?, -5.0);
    assert_eq!(solver.count(), 1);
    Ok(())
}

#[test]
fn reversed_bounds_are_accepted() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-8)?;
    let mut solver = Bisection::new(f, 2.0, 0.0, cfg)?;
    let root = solver.solve()?;

    assert!(f(root).abs() < 1e-8);
    Ok(())
}

#[test]
fn root_on_endpoint_counts_as_sign_change() -> TestResult {
    let f   = |x: f64| x;
    let mut solver = Bisection::new(f, 0.0, 1.0, BisectionCfg::new())?;
    let root = solver.solve()?;

    assert_eq!(root, 0.0078125);
    assert_eq!(solver.count(), 7);
    Ok(())
}

#[test]
fn cube_converges_on_first_midpoint() -> TestResult {
    let f   = |x: f64| x * x * x;
    let cfg = BisectionCfg::new().set_tolerance(1e-3)?;
    let mut solver = Bisection::new(f, -0.5, 0.5, cfg)?;

    assert_eq!(solver.solve()?, 0.0);
    assert_eq!(solver.count(), 1);
    Ok(())
}

#[test]
fn bracket_straddles_root_after_every_iteration() -> TestResult {
    let f = |x: f64| x * x * x - x - 2.0;

    for k in 1..=25 {
        let cfg = BisectionCfg::new().set_tolerance(1e-14)?.set_max_iter(k)?;
        let mut solver = Bisection::new(f, 1.0, 2.0, cfg)?;
        let _ = solver.solve();

        let (a, b) = solver.bracket().expect("bracket recorded");
        assert!(f(a) * f(b) < 0.0, "lost bracket after {k} iterations");
        assert_eq!((b - a).abs(), 0.5_f64.powi(k as i32));
    }
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let mut solver = Bisection::new(f, -1.0, 1.0, BisectionCfg::new())?;
    let err = solver.solve().unwrap_err();

    assert!(matches!(err, RootFindingError::NoSignChange { a, b, .. } if a == -1.0 && b == 1.0));
    assert_eq!(solver.count(), 0);
    assert_eq!(solver.solution(), None);
    Ok(())
}

#[test]
fn non_finite_eval() -> TestResult {
    let f   = |x: f64| x.sqrt() - 2.0; 
    let mut solver = Bisection::new(f, -1.0, 5.0, BisectionCfg::new())?;
    let err = solver.solve().unwrap_err(); 

    assert!(matches!(
        err, 
        RootFindingError::NonFiniteEvaluation { x, fx } 
        if x == -1.0 && fx.is_nan()));
    Ok(())
}

#[test]
fn iteration_cap_keeps_partial_trace() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-14)?.set_max_iter(5)?;
    let mut solver = Bisection::new(f, 0.0, 2.0, cfg)?;
    let err = solver.solve().unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::MaxIterationsExceeded { max_iter: 5, last, .. } if last == 1.4375
    ));
    assert_eq!(solver.trace().approximations(), &[1.0, 1.5, 1.25, 1.375, 1.4375]);
    assert_eq!(solver.solution(), None);
    Ok(())
}

#[test]
fn invalid_bounds() {
    let f = |x: f64| x;
    assert!(matches!(
        Bisection::new(f, f64::NAN, 1.0, BisectionCfg::new()).unwrap_err(),
        ConfigError::InvalidBounds { .. }
    ));
    assert!(matches!(
        Bisection::new(f, 1.0, 1.0, BisectionCfg::new()).unwrap_err(),
        ConfigError::InvalidBounds { a, b } if a == 1.0 && b == 1.0
    ));
}

#[test]
fn invalid_tolerance_rejected_by_setter() {
    let err = BisectionCfg::new().set_tolerance(0.0).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTolerance { got } if got == 0.0));

    let err = BisectionCfg::new().set_tolerance(f64::NAN).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTolerance { .. }));
}

#[test]
fn zero_max_iter_rejected_by_setter() {
    let err = BisectionCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMaxIter { got: 0 }));
}
