use numapprox::root_finding::derivative::{Analytic, CentralDifference};
use numapprox::root_finding::newton::{Newton, NewtonCfg};
use numapprox::root_finding::errors::{ConfigError, RootFindingError};
use numapprox::root_finding::RootSolver;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2_with_central_difference() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = NewtonCfg::new().set_tolerance(1e-15)?;
    let mut solver = Newton::with_central_difference(f, 1.0, cfg)?;
    let root = solver.solve()?;

    assert!((root - 2.0_f64.sqrt()).abs() <= 1e-15);
    assert!(solver.count() <= 6);
    // f(x0) once, then two derivative probes and f(x_next) per iteration
    assert_eq!(solver.evaluations(), 1 + 3 * solver.count());
    Ok(())
}

#[test]
fn finds_sqrt_2_with_analytic_derivative() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_tolerance(1e-15)?;
    let mut solver = Newton::new(f, 1.0, Analytic(df), cfg)?;
    let root = solver.solve()?;

    assert!((root - 2.0_f64.sqrt()).abs() <= 1e-15);
    assert_eq!(solver.trace().approximations()[0], 1.5);
    assert_eq!(solver.evaluations(), 1 + solver.count());
    Ok(())
}

#[test]
fn initial_guess_already_a_root() -> TestResult {
    let f = |x: f64| x - 1.0;
    let mut solver = Newton::with_central_difference(f, 1.0, NewtonCfg::new())?;

    assert_eq!(solver.solve()?, 1.0);
    assert_eq!(solver.count(), 0);
    assert!(solver.trace().is_empty());
    Ok(())
}

#[test]
fn flat_tangent_from_central_difference() -> TestResult {
    // symmetric about x0 = 0, so the central difference is exactly zero
    let f = |x: f64| x * x + 1.0;
    let mut solver = Newton::with_central_difference(f, 0.0, NewtonCfg::new())?;
    let err = solver.solve().unwrap_err();

    assert!(matches!(err, RootFindingError::DegenerateStep { x, denom, .. } if x == 0.0 && denom == 0.0));
    Ok(())
}

#[test]
fn flat_tangent_from_analytic_derivative() -> TestResult {
    let f  = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;
    let mut solver = Newton::new(f, 0.0, Analytic(df), NewtonCfg::new())?;
    let err = solver.solve().unwrap_err();

    assert!(matches!(err, RootFindingError::DegenerateStep { denom, .. } if denom == 0.0));
    assert_eq!(solver.count(), 0);
    Ok(())
}

#[test]
fn non_finite_derivative() -> TestResult {
    let f  = |x: f64| x - 3.0;
    let df = |_: f64| f64::NAN;
    let mut solver = Newton::new(f, 0.0, Analytic(df), NewtonCfg::new())?;
    let err = solver.solve().unwrap_err();

    assert!(matches!(err, RootFindingError::DerivativeNotFinite { x, dfx } if x == 0.0 && dfx.is_nan()));
    Ok(())
}

#[test]
fn divergence_hits_iteration_cap() -> TestResult {
    let f   = |x: f64| x.atan();
    let df  = |x: f64| 1.0 / (1.0 + x * x);
    let cfg = NewtonCfg::new().set_max_iter(3)?;
    let mut solver = Newton::new(f, 1.5, Analytic(df), cfg)?;
    let err = solver.solve().unwrap_err();

    let trace = solver.trace().approximations();
    assert_eq!(trace.len(), 3);
    assert!((trace[0] + 1.694_079_600_553_819_5).abs() <= 1e-12);
    assert!((trace[1] - 2.321_126_961_438_388).abs()    <= 1e-12);
    assert!((trace[2] + 5.114_087_836_777_514).abs()    <= 1e-11);
    assert!(trace.windows(2).all(|w| w[1].abs() > w[0].abs()));
    assert!(matches!(
        err,
        RootFindingError::MaxIterationsExceeded { max_iter: 3, last, .. } if last == trace[2]
    ));
    Ok(())
}

#[test]
fn step_outside_domain_is_non_finite() -> TestResult {
    let f  = |x: f64| x.ln();
    let df = |x: f64| 1.0 / x;
    let mut solver = Newton::new(f, 3.0, Analytic(df), NewtonCfg::new())?;
    let err = solver.solve().unwrap_err();

    assert!(matches!(err, RootFindingError::NonFiniteEvaluation { x, fx } if x < 0.0 && fx.is_nan()));
    Ok(())
}

#[test]
fn difference_step_unrepresentable_at_max() -> TestResult {
    let f = |x: f64| x - 1.0;
    let mut solver = Newton::new(f, f64::MAX, CentralDifference, NewtonCfg::new())?;
    let err = solver.solve().unwrap_err();

    assert!(matches!(err, RootFindingError::FiniteDifferenceStepUnrepresentable { x, .. } if x == f64::MAX));
    Ok(())
}

#[test]
fn non_finite_guess() {
    let err = Newton::with_central_difference(|x: f64| x, f64::NAN, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidGuess { x0 } if x0.is_nan()));
}
