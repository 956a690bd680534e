//! False position (regula falsi) method

use std::fmt;

use super::algorithms::Algorithm;
use super::bisection::Bracket;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{ConfigError, RootFindingError};
use super::estimator::{run, Evaluator, Start, Step, StepRule};
use super::signs::{same_sign, sign};
use super::trace::SolveRecord;
use super::traits::RootSolver;


/// False position configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`] with tolerance, optional `max_iter`, label 
///              and true solution. 
///
/// # Notes 
/// └ Only the classic endpoint rule is provided; no Illinois-style 
///   down-weighting of a retained endpoint is applied. 
#[derive(Debug, Clone)]
pub struct FalsePositionCfg {
    common: CommonCfg,
}
impl FalsePositionCfg { 
    #[must_use]
    pub fn new() -> Self { 
        Self { common: CommonCfg::new(Algorithm::FALSE_POSITION) }
    } 
}
impl Default for FalsePositionCfg { 
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(FalsePositionCfg);


/// x-intercept of the chord through `(a, fa)` and `(b, fb)`.
///
/// # Returns 
/// - `Ok(c)` with `c = a - fa / m`, `m = (fb - fa) / (b - a)` 
/// - `Err(DegenerateStep)` if the slope `m` is zero or non-finite 
#[inline]
fn chord_root(a: f64, b: f64, fa: f64, fb: f64) -> Result<f64, RootFindingError> { 
    let slope = (fb - fa) / (b - a); 
    if slope == 0.0 || !slope.is_finite() { 
        return Err(RootFindingError::DegenerateStep { 
            algorithm: Algorithm::FALSE_POSITION, x: a, denom: slope 
        });
    }

    Ok(a - fa / slope)
}


struct FalsePositionRule { 
    a: f64, 
    b: f64, 
}

impl StepRule for FalsePositionRule { 
    type State = Bracket; 
    const ALGORITHM: Algorithm = Algorithm::FALSE_POSITION; 

    fn start<F>(&mut self, eval: &mut Evaluator<'_, F>, _tolerance: f64) 
        -> Result<Start<Bracket>, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        let (a, b) = (self.a, self.b); 
        let fa = eval.eval(a)?; 
        let fb = eval.eval(b)?; 
        if same_sign(fa, fb) { 
            return Err(RootFindingError::NoSignChange { 
                algorithm: Self::ALGORITHM, a, b, fa, fb 
            });
        }

        Ok(Start::Iterate(Bracket::new(a, b, fa, fb)))
    }

    fn step<F>(&mut self, s: &mut Bracket, eval: &mut Evaluator<'_, F>, tolerance: f64) 
        -> Result<Step, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        let (a, b, fa, fb) = s.parts(); 
        let c  = chord_root(a, b, fa, fb)?; 
        let fc = eval.eval(c)?; 
        if fc.abs() < tolerance { 
            return Ok(Step::Converged(c)); 
        }

        // classic rule; one endpoint may stay fixed for many iterations
        if sign(fc) * sign(fa) > 0 { 
            s.replace_a(c, fc); 
        } else { 
            s.replace_b(c, fc); 
        }

        Ok(Step::Continue(c))
    }

    fn bracket(s: &Bracket) -> Option<(f64, f64)> { 
        Some(s.bounds()) 
    }
}


/// Finds a root of a function using the 
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Each iteration records the root `c` of the chord through the current 
/// bracket endpoints and stops once `|f(c)| < tolerance`. If `f(c) * f(a) > 0` 
/// then `a` is replaced by `c`, otherwise `b` is.
///
/// # Errors (from [`RootSolver::solve`])
/// ┌ [`RootFindingError::NoSignChange`]          - `sign(f(a)) == sign(f(b))` at entry 
/// ├ [`RootFindingError::DegenerateStep`]        - chord slope is zero 
/// ├ [`RootFindingError::MaxIterationsExceeded`] - cap reached; trace kept 
/// └ [`RootFindingError::NonFiniteEvaluation`]   - `f(x)` produced NaN/inf 
///
/// # Warning 
/// └ On functions with strong one-sided curvature one endpoint can stagnate, 
///   giving slower-than-bisection convergence. This is the method's known 
///   behavior and is not corrected here. 
pub struct FalsePosition<F> { 
    func:   F, 
    a:      f64, 
    b:      f64, 
    cfg:    FalsePositionCfg, 
    record: SolveRecord, 
}

impl<F> FalsePosition<F> 
where F: FnMut(f64) -> f64 { 
    pub fn new(func: F, a: f64, b: f64, cfg: FalsePositionCfg) -> Result<Self, ConfigError> { 
        if !(a.is_finite() && b.is_finite()) || a == b { 
            return Err(ConfigError::InvalidBounds { a, b }); 
        }

        Ok(Self { func, a, b, cfg, record: SolveRecord::default() })
    }

    pub fn bounds(&self) -> (f64, f64) { (self.a, self.b) }
    pub fn cfg(&self) -> &FalsePositionCfg { &self.cfg }

    /// Bracket held when the last solve stopped.
    pub fn bracket(&self) -> Option<(f64, f64)> { 
        self.record.bracket() 
    }
}

impl<F> fmt::Debug for FalsePosition<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FalsePosition")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("cfg", &self.cfg)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl<F> RootSolver for FalsePosition<F> 
where F: FnMut(f64) -> f64 { 
    fn algorithm(&self) -> Algorithm { Algorithm::FALSE_POSITION }
    fn common(&self) -> &CommonCfg { self.cfg.common() }
    fn record(&self) -> &SolveRecord { &self.record }

    fn solve(&mut self) -> Result<f64, RootFindingError> { 
        let mut rule = FalsePositionRule { a: self.a, b: self.b }; 
        run(&mut rule, &mut self.func, &self.cfg.common, &mut self.record)
    }
}
