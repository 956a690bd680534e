//! Newton-Raphson method

use std::fmt;

use super::algorithms::Algorithm; 
use super::config::{CommonCfg, impl_common_cfg}; 
use super::derivative::{CentralDifference, Derivative}; 
use super::errors::{ConfigError, RootFindingError}; 
use super::estimator::{run, Evaluator, Start, Step, StepRule}; 
use super::trace::SolveRecord; 
use super::traits::RootSolver; 


/// Newton configuration.
/// 
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance, optional `max_iter`, label 
///              and true solution.
#[derive(Debug, Clone)] 
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self { 
        Self { common: CommonCfg::new(Algorithm::NEWTON) }
    }
}
impl Default for NewtonCfg { 
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);


/// Current iterate with its cached function value.
pub(crate) struct Iterate { 
    pub(crate) x:  f64, 
    pub(crate) fx: f64, 
}

/// Evaluates `f(x0)`; converged immediately if already within tolerance.
pub(crate) fn start_at<F>(
    x0: f64, 
    eval: &mut Evaluator<'_, F>, 
    tolerance: f64 
) -> Result<Start<Iterate>, RootFindingError> 
where F: FnMut(f64) -> f64 { 
    let fx = eval.eval(x0)?; 
    if fx.abs() < tolerance { 
        return Ok(Start::Converged(x0)); 
    }

    Ok(Start::Iterate(Iterate { x: x0, fx }))
}

/// Moves `it` to `x_next` and classifies the result against `tolerance`.
pub(crate) fn advance<F>(
    it: &mut Iterate, 
    x_next: f64, 
    eval: &mut Evaluator<'_, F>, 
    tolerance: f64 
) -> Result<Step, RootFindingError> 
where F: FnMut(f64) -> f64 { 
    let fx_next = eval.eval(x_next)?; 
    it.x  = x_next; 
    it.fx = fx_next; 

    if fx_next.abs() < tolerance { 
        Ok(Step::Converged(x_next)) 
    } else { 
        Ok(Step::Continue(x_next)) 
    }
}


struct NewtonRule<'d, D> { 
    x0: f64, 
    derivative: &'d mut D, 
}

impl<D> StepRule for NewtonRule<'_, D> 
where D: Derivative { 
    type State = Iterate; 
    const ALGORITHM: Algorithm = Algorithm::NEWTON; 

    fn start<F>(&mut self, eval: &mut Evaluator<'_, F>, tolerance: f64) 
        -> Result<Start<Iterate>, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        start_at(self.x0, eval, tolerance)
    }

    fn step<F>(&mut self, it: &mut Iterate, eval: &mut Evaluator<'_, F>, tolerance: f64) 
        -> Result<Step, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        let x   = it.x; 
        let dfx = { 
            let mut counted = |t: f64| eval.raw(t); 
            self.derivative.derivative(&mut counted, x)? 
        }; 
        if !dfx.is_finite() { 
            return Err(RootFindingError::DerivativeNotFinite { x, dfx }); 
        }

        // flat tangent
        let x_next = x - it.fx / dfx; 
        if dfx == 0.0 || !x_next.is_finite() { 
            return Err(RootFindingError::DegenerateStep { 
                algorithm: Self::ALGORITHM, x, denom: dfx 
            });
        }

        advance(it, x_next, eval, tolerance)
    }
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `func`       : function whose root is sought
/// - `x0`         : finite initial guess
/// - `derivative` : [`Derivative`] strategy ([`CentralDifference`] by default, 
///                  or [`super::derivative::Analytic`])
/// - `cfg`        : [`NewtonCfg`] (tolerance, optional `max_iter`)
///
/// # Behavior
/// - If `|f(x0)| < tolerance`, `x0` is returned unchanged with an empty trace.
/// - Otherwise `x_next = x - f(x) / f'(x)` is recorded every iteration, 
///   stopping once `|f(x_next)| < tolerance`.
///
/// # Errors (from [`RootSolver::solve`])
/// - [`RootFindingError::DegenerateStep`]        : `f'(x) == 0` or the step is non-finite. 
///                                                 A tiny nonzero `f'(x)` is not caught here; 
///                                                 its huge step usually surfaces as 
///                                                 `MaxIterationsExceeded` or `NonFiniteEvaluation`
/// - [`RootFindingError::DerivativeNotFinite`]   : derivative NaN/inf
/// - [`RootFindingError::FiniteDifferenceStepUnrepresentable`] : FD step unrepresentable near `x`
/// - [`RootFindingError::MaxIterationsExceeded`] : cap reached; trace kept
/// - [`RootFindingError::NonFiniteEvaluation`]   : `f(x)` produced NaN/inf
///
/// # Notes
/// - Convergence is *local only* and quadratic near simple roots. Poor 
///   guesses or ill-behaved functions can diverge or cycle.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub struct Newton<F, D = CentralDifference> { 
    func:       F, 
    x0:         f64, 
    derivative: D, 
    cfg:        NewtonCfg, 
    record:     SolveRecord, 
}

impl<F, D> Newton<F, D> 
where 
    F: FnMut(f64) -> f64, 
    D: Derivative 
{ 
    pub fn new(func: F, x0: f64, derivative: D, cfg: NewtonCfg) -> Result<Self, ConfigError> { 
        if !x0.is_finite() { 
            return Err(ConfigError::InvalidGuess { x0 }); 
        }

        Ok(Self { func, x0, derivative, cfg, record: SolveRecord::default() })
    }

    pub fn x0(&self) -> f64 { self.x0 }
    pub fn cfg(&self) -> &NewtonCfg { &self.cfg }
}

impl<F> Newton<F, CentralDifference> 
where F: FnMut(f64) -> f64 { 
    /// Newton with the default central-difference derivative.
    pub fn with_central_difference(func: F, x0: f64, cfg: NewtonCfg) -> Result<Self, ConfigError> { 
        Self::new(func, x0, CentralDifference, cfg)
    }
}

// `func` omitted: closures have no `Debug`
impl<F, D> fmt::Debug for Newton<F, D> 
where D: fmt::Debug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Newton")
            .field("x0", &self.x0)
            .field("derivative", &self.derivative)
            .field("cfg", &self.cfg)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl<F, D> RootSolver for Newton<F, D> 
where 
    F: FnMut(f64) -> f64, 
    D: Derivative 
{ 
    fn algorithm(&self) -> Algorithm { Algorithm::NEWTON }
    fn common(&self) -> &CommonCfg { self.cfg.common() }
    fn record(&self) -> &SolveRecord { &self.record }

    fn solve(&mut self) -> Result<f64, RootFindingError> { 
        let mut rule = NewtonRule { x0: self.x0, derivative: &mut self.derivative }; 
        run(&mut rule, &mut self.func, &self.cfg.common, &mut self.record)
    }
}
