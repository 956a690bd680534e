//! Steffensen's method

use std::fmt;

use super::algorithms::Algorithm; 
use super::config::{CommonCfg, impl_common_cfg}; 
use super::errors::{ConfigError, RootFindingError}; 
use super::estimator::{run, Evaluator, Start, Step, StepRule}; 
use super::newton::{advance, start_at, Iterate}; 
use super::trace::SolveRecord; 
use super::traits::RootSolver; 


/// Steffensen configuration.
/// 
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance, optional `max_iter`, label 
///              and true solution.
#[derive(Debug, Clone)] 
pub struct SteffensenCfg {
    common: CommonCfg,
}
impl SteffensenCfg {
    #[must_use]
    pub fn new() -> Self { 
        Self { common: CommonCfg::new(Algorithm::STEFFENSEN) }
    }
}
impl Default for SteffensenCfg { 
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SteffensenCfg);


struct SteffensenRule { 
    x0: f64, 
}

impl StepRule for SteffensenRule { 
    type State = Iterate; 
    const ALGORITHM: Algorithm = Algorithm::STEFFENSEN; 

    fn start<F>(&mut self, eval: &mut Evaluator<'_, F>, tolerance: f64) 
        -> Result<Start<Iterate>, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        start_at(self.x0, eval, tolerance)
    }

    fn step<F>(&mut self, it: &mut Iterate, eval: &mut Evaluator<'_, F>, tolerance: f64) 
        -> Result<Step, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        let (x, fx) = (it.x, it.fx); 
        if fx == 0.0 { 
            return Err(RootFindingError::DegenerateStep { 
                algorithm: Self::ALGORITHM, x, denom: fx 
            });
        }

        // divided-difference slope over [x, x + f(x)]
        let g = eval.eval(x + fx)? / fx - 1.0; 
        let x_next = x - fx / g; 
        if g == 0.0 || !g.is_finite() || !x_next.is_finite() { 
            return Err(RootFindingError::DegenerateStep { 
                algorithm: Self::ALGORITHM, x, denom: g 
            });
        }

        advance(it, x_next, eval, tolerance)
    }
}


/// Finds a root of `func` using 
/// [Steffensen's method](https://en.wikipedia.org/wiki/Steffensen%27s_method).
///
/// Quadratic convergence like Newton's method, without a derivative: 
/// the slope is the divided difference `g = f(x + f(x)) / f(x) - 1`, and 
/// `x_next = x - f(x) / g`.
///
/// # Behavior
/// - If `|f(x0)| < tolerance`, `x0` is returned unchanged with an empty trace.
/// - Otherwise `x_next` is recorded every iteration, stopping once 
///   `|f(x_next)| < tolerance`.
///
/// # Errors (from [`RootSolver::solve`])
/// - [`RootFindingError::DegenerateStep`]        : `f(x) == 0` before the slope, `g == 0`, 
///                                                 or a non-finite step
/// - [`RootFindingError::MaxIterationsExceeded`] : cap reached; trace kept
/// - [`RootFindingError::NonFiniteEvaluation`]   : `f(x)` or `f(x + f(x))` produced NaN/inf
///
/// # Warning 
/// - The probe point `x + f(x)` is only close to `x` when `|f(x)|` is small; 
///   far from a root the slope estimate can be poor.
pub struct Steffensen<F> { 
    func:   F, 
    x0:     f64, 
    cfg:    SteffensenCfg, 
    record: SolveRecord, 
}

impl<F> Steffensen<F> 
where F: FnMut(f64) -> f64 { 
    pub fn new(func: F, x0: f64, cfg: SteffensenCfg) -> Result<Self, ConfigError> { 
        if !x0.is_finite() { 
            return Err(ConfigError::InvalidGuess { x0 }); 
        }

        Ok(Self { func, x0, cfg, record: SolveRecord::default() })
    }

    pub fn x0(&self) -> f64 { self.x0 }
    pub fn cfg(&self) -> &SteffensenCfg { &self.cfg }
}

impl<F> fmt::Debug for Steffensen<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Steffensen")
            .field("x0", &self.x0)
            .field("cfg", &self.cfg)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl<F> RootSolver for Steffensen<F> 
where F: FnMut(f64) -> f64 { 
    fn algorithm(&self) -> Algorithm { Algorithm::STEFFENSEN }
    fn common(&self) -> &CommonCfg { self.cfg.common() }
    fn record(&self) -> &SolveRecord { &self.record }

    fn solve(&mut self) -> Result<f64, RootFindingError> { 
        let mut rule = SteffensenRule { x0: self.x0 }; 
        run(&mut rule, &mut self.func, &self.cfg.common, &mut self.record)
    }
}
