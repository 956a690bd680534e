//! Bisection method

use std::fmt;

use super::algorithms::Algorithm;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{ConfigError, RootFindingError};
use super::estimator::{run, Evaluator, Start, Step, StepRule};
use super::signs::same_sign;
use super::trace::SolveRecord;
use super::traits::RootSolver;


/// Bisection configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`] with tolerance, optional `max_iter`, label 
///              and true solution. 
///
/// # Defaults
/// ┌ `tolerance` = 0.01 
/// └ `max_iter`  = [`Algorithm::default_max_iter`] 
#[derive(Debug, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg { 
    #[must_use]
    pub fn new() -> Self { 
        Self { common: CommonCfg::new(Algorithm::BISECTION) }
    } 
}
impl Default for BisectionCfg { 
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);


/// Midpoint of [a, b]
#[inline] 
pub(crate) fn midpoint(a: f64, b: f64) -> f64 { 
    a + (b - a) * 0.5
}


/// Bracket state carried between iterations, with cached endpoint values.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bracket { 
    a:  f64, 
    b:  f64, 
    fa: f64, 
    fb: f64, 
}
impl Bracket { 
    pub(crate) fn new(a: f64, b: f64, fa: f64, fb: f64) -> Self { 
        Self { a, b, fa, fb }
    }

    #[inline] pub(crate) fn parts(&self) -> (f64, f64, f64, f64) { (self.a, self.b, self.fa, self.fb) }
    #[inline] pub(crate) fn bounds(&self) -> (f64, f64) { (self.a, self.b) }

    #[inline] pub(crate) fn replace_a(&mut self, x: f64, fx: f64) { self.a = x; self.fa = fx; }
    #[inline] pub(crate) fn replace_b(&mut self, x: f64, fx: f64) { self.b = x; self.fb = fx; }
}

struct BisectionRule { 
    a: f64, 
    b: f64, 
}

impl StepRule for BisectionRule { 
    type State = Bracket; 
    const ALGORITHM: Algorithm = Algorithm::BISECTION; 

    fn start<F>(&mut self, eval: &mut Evaluator<'_, F>, _tolerance: f64) 
        -> Result<Start<Bracket>, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        let fa = eval.eval(self.a)?; 
        let fb = eval.eval(self.b)?; 
        Ok(Start::Iterate(Bracket::new(self.a, self.b, fa, fb)))
    }

    fn step<F>(&mut self, s: &mut Bracket, eval: &mut Evaluator<'_, F>, tolerance: f64) 
        -> Result<Step, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        let (a, b, fa, fb) = s.parts(); 

        // re-verified every iteration, not only on entry
        if same_sign(fa, fb) { 
            return Err(RootFindingError::NoSignChange { 
                algorithm: Self::ALGORITHM, a, b, fa, fb 
            });
        }

        let m  = midpoint(a, b); 
        let fm = eval.eval(m)?; 
        if fm.abs() < tolerance { 
            return Ok(Step::Converged(m)); 
        }

        // keep the half that still straddles the sign change
        if same_sign(fm, fa) { 
            s.replace_a(m, fm); 
        } else { 
            s.replace_b(m, fm); 
        }

        Ok(Step::Continue(m))
    }

    fn bracket(s: &Bracket) -> Option<(f64, f64)> { 
        Some(s.bounds()) 
    }
}


/// Finds a root of a function using the 
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Each iteration records the midpoint `m` of the current bracket and stops 
/// once `|f(m)| < tolerance`. Otherwise the endpoint whose function value 
/// shares `f(m)`'s sign is replaced by `m`, halving the bracket width.
///
/// # Construction 
/// - `a`, `b` must be finite and distinct; either order is accepted.
///
/// # Errors (from [`RootSolver::solve`])
/// ┌ [`RootFindingError::NoSignChange`]          - `sign(f(a)) == sign(f(b))`, checked at 
/// │                                               the start of every iteration 
/// ├ [`RootFindingError::MaxIterationsExceeded`] - cap reached; trace kept 
/// └ [`RootFindingError::NonFiniteEvaluation`]   - `f(x)` produced NaN/inf 
///
/// # Notes 
/// └ A root sitting exactly on an endpoint (`f(a) == 0`) still counts as a 
///   sign change; the bracket then shrinks towards that endpoint. 
pub struct Bisection<F> { 
    func:   F, 
    a:      f64, 
    b:      f64, 
    cfg:    BisectionCfg, 
    record: SolveRecord, 
}

impl<F> Bisection<F> 
where F: FnMut(f64) -> f64 { 
    pub fn new(func: F, a: f64, b: f64, cfg: BisectionCfg) -> Result<Self, ConfigError> { 
        if !(a.is_finite() && b.is_finite()) || a == b { 
            return Err(ConfigError::InvalidBounds { a, b }); 
        }

        Ok(Self { func, a, b, cfg, record: SolveRecord::default() })
    }

    pub fn bounds(&self) -> (f64, f64) { (self.a, self.b) }
    pub fn cfg(&self) -> &BisectionCfg { &self.cfg }

    /// Bracket held when the last solve stopped.
    pub fn bracket(&self) -> Option<(f64, f64)> { 
        self.record.bracket() 
    }
}

// `func` omitted: closures have no `Debug`
impl<F> fmt::Debug for Bisection<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bisection")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("cfg", &self.cfg)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl<F> RootSolver for Bisection<F> 
where F: FnMut(f64) -> f64 { 
    fn algorithm(&self) -> Algorithm { Algorithm::BISECTION }
    fn common(&self) -> &CommonCfg { self.cfg.common() }
    fn record(&self) -> &SolveRecord { &self.record }

    fn solve(&mut self) -> Result<f64, RootFindingError> { 
        let mut rule = BisectionRule { a: self.a, b: self.b }; 
        run(&mut rule, &mut self.func, &self.cfg.common, &mut self.record)
    }
}
