use numapprox::root_finding::false_position::{FalsePosition, FalsePositionCfg};
use numapprox::root_finding::errors::{ConfigError, RootFindingError};
use numapprox::root_finding::RootSolver;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-10;

    let cfg = FalsePositionCfg::new().set_tolerance(tol)?;
    let mut solver = FalsePosition::new(f, 0.0, 2.0, cfg)?;
    let root = solver.solve()?;

    assert!((root - 2.0_f64.sqrt()).abs() <= 1e-10);
    assert!(f(root).abs() < tol);
    assert_eq!(solver.count(), solver.trace().count());
    Ok(())
}

#[test]
fn first_trace_entry_is_first_chord_root() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = FalsePositionCfg::new().set_tolerance(1e-6)?;
    let mut solver = FalsePosition::new(f, 0.0, 2.0, cfg)?;
    solver.solve()?;

    let trace = solver.trace().approximations();
    assert_eq!(trace[0], 1.0);
    assert!((trace[1] - 4.0 / 3.0).abs() <= 1e-15);
    Ok(())
}

#[test]
fn convex_function_keeps_right_endpoint_fixed() -> TestResult {
    // x^2 - 2 is convex: every chord root lands left of the root, so `b` never moves
    let f   = |x: f64| x * x - 2.0;
    let cfg = FalsePositionCfg::new().set_tolerance(1e-10)?;
    let mut solver = FalsePosition::new(f, 0.0, 2.0, cfg)?;
    solver.solve()?;

    let (a, b) = solver.bracket().expect("bracket recorded");
    assert_eq!(b, 2.0);
    assert!(f(a) < 0.0);
    assert!(solver.trace().approximations().windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

#[test]
fn bracket_straddles_root_after_every_iteration() -> TestResult {
    let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;

    for k in 1..=10 {
        let cfg = FalsePositionCfg::new().set_tolerance(1e-14)?.set_max_iter(k)?;
        let mut solver = FalsePosition::new(f, 2.0, 3.0, cfg)?;
        let _ = solver.solve();

        let (a, b) = solver.bracket().expect("bracket recorded");
        assert!(f(a) * f(b) <= 0.0, "lost bracket after {k} iterations");
    }
    Ok(())
}

#[test]
fn stagnation_hits_iteration_cap() -> TestResult {
    let f   = |x: f64| x.powi(10) - 1.0;
    let cfg = FalsePositionCfg::new().set_tolerance(1e-12)?.set_max_iter(20)?;
    let mut solver = FalsePosition::new(f, 0.0, 1.3, cfg)?;
    let err = solver.solve().unwrap_err();

    assert!(matches!(err, RootFindingError::MaxIterationsExceeded { max_iter: 20, .. }));
    assert_eq!(solver.count(), 20);
    assert_eq!(solver.bracket().map(|(_, b)| b), Some(1.3));
    Ok(())
}

#[test]
fn no_sign_change_at_entry() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let mut solver = FalsePosition::new(f, -1.0, 1.0, FalsePositionCfg::new())?;
    let err = solver.solve().unwrap_err();

    assert!(matches!(err, RootFindingError::NoSignChange { fa, fb, .. } if fa == 2.0 && fb == 2.0));
    assert!(solver.trace().is_empty());
    Ok(())
}

#[test]
fn cube_converges_on_first_chord() -> TestResult {
    let f   = |x: f64| x * x * x;
    let cfg = FalsePositionCfg::new().set_tolerance(1e-3)?;
    let mut solver = FalsePosition::new(f, -0.5, 0.5, cfg)?;

    assert_eq!(solver.solve()?, 0.0);
    assert_eq!(solver.count(), 1);
    Ok(())
}

#[test]
fn invalid_bounds() {
    let err = FalsePosition::new(|x: f64| x, 0.0, f64::INFINITY, FalsePositionCfg::new()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBounds { .. }));
}
