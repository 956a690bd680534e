use std::fmt;

use super::algorithms::Algorithm;
use super::bisection::Bracket;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{ConfigError, RootFindingError};
use super::estimator::{run, Evaluator, Start, Step, StepRule};
use super::signs::opposite_sign;
use super::trace::SolveRecord;
use super::traits::RootSolver;


/// Secant configuration 
///
/// # Fields 
/// - `common` : [`CommonCfg`] with tolerance, optional `max_iter`, label 
///              and true solution. 
///
/// # Validation 
/// - [`SecantCfg::set_tolerance`] rejects values below 
///   [`Algorithm::min_tolerance`] (`0.01`) with 
///   [`ConfigError::ToleranceBelowFloor`]. The default tolerance sits 
///   exactly on the floor. 
#[derive(Debug, Clone)]
pub struct SecantCfg { 
    common: CommonCfg, 
}
impl SecantCfg { 
    #[must_use]
    pub fn new() -> Self { 
        Self { common: CommonCfg::new(Algorithm::SECANT) }
    }
}
impl Default for SecantCfg { 
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line 
/// connecting `(x1, fx1)` and `(x2, fx2)` 
///
/// # Returns 
/// - `Ok(x_secant)` if denominator `fx2 - fx1` is non-zero 
/// - `Err(DegenerateStep)` if the denominator vanishes or the 
///   intercept is not finite
///
/// The intercept lies between `x1` and `x2` whenever `fx1` and `fx2` have 
/// opposite signs, so the pair keeps bracketing the root. The form 
/// `x1 - fx1 (x2 - x1) / (fx1 - fx2)` is not used: it steps away from it.
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x1, fx1): (f64, f64), 
    (x2, fx2): (f64, f64), 
) -> Result<f64, RootFindingError> {
    let denom = fx2 - fx1;
    let x     = ( x1 * fx2 - x2 * fx1 ) / denom; 
    if denom == 0.0 || !x.is_finite() {
        return Err(RootFindingError::DegenerateStep { 
            algorithm: Algorithm::SECANT, x: x1, denom 
        });
    } 

    Ok(x)
}


struct SecantRule { 
    a: f64, 
    b: f64, 
}

impl StepRule for SecantRule { 
    type State = Bracket; 
    const ALGORITHM: Algorithm = Algorithm::SECANT; 

    /// The only sign check; later pairs are not re-verified. 
    fn start<F>(&mut self, eval: &mut Evaluator<'_, F>, _tolerance: f64) 
        -> Result<Start<Bracket>, RootFindingError> 
    where F: FnMut(f64) -> f64 { 
        let (a, b) = (self.a, self.b); 
        let fa = eval.eval(a)?; 
        let fb = eval.eval(b)?; 
        if !opposite_sign(fa, fb) { 
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
        let x  = calculate_secant_x_intercept((a, fa), (b, fb))?; 
        let fx = eval.eval(x)?; 
        if fx.abs() < tolerance { 
            return Ok(Step::Converged(x)); 
        }

        if opposite_sign(fa, fx) { 
            s.replace_b(x, fx); 
        } else if opposite_sign(fb, fx) { 
            s.replace_a(x, fx); 
        } else { 
            return Err(RootFindingError::NoSignChange { 
                algorithm: Self::ALGORITHM, a, b, fa, fb 
            });
        }

        Ok(Step::Continue(x))
    }

    fn bracket(s: &Bracket) -> Option<(f64, f64)> { 
        Some(s.bounds()) 
    }
}


/// Finds a root of a function using a bracket-checked 
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `a`    : First endpoint. Must be finite and not equal to `b`
/// - `b`    : Second endpoint. Must be finite and not equal to `a`
/// - `cfg`  : [`SecantCfg`] (tolerance >= 0.01, optional `max_iter`)
///
/// # Errors (from [`RootSolver::solve`])
/// - [`RootFindingError::NoSignChange`]          : `f(a) * f(b) >= 0` at entry
/// - [`RootFindingError::DegenerateStep`]        : `f(a) - f(b) == 0`
/// - [`RootFindingError::MaxIterationsExceeded`] : cap reached; trace kept
/// - [`RootFindingError::NonFiniteEvaluation`]   : `f(x)` produced NaN/inf
///
/// # Behavior
/// - Update: `x` is the x-intercept of the line through `(a, f(a))` and 
///   `(b, f(b))`, recorded every iteration; stops once `|f(x)| < tolerance`.
/// - Pair selection: whichever of `(a, x)` or `(x, b)` has function values of 
///   opposite sign becomes the next pair.
///
/// # Notes
/// - The sign precondition is checked once at entry only; unlike bisection 
///   the pair is not re-verified on later iterations.
pub struct Secant<F> { 
    func:   F, 
    a:      f64, 
    b:      f64, 
    cfg:    SecantCfg, 
    record: SolveRecord, 
}

impl<F> Secant<F> 
where F: FnMut(f64) -> f64 { 
    pub fn new(func: F, a: f64, b: f64, cfg: SecantCfg) -> Result<Self, ConfigError> { 
        if !(a.is_finite() && b.is_finite()) || a == b { 
            return Err(ConfigError::InvalidBounds { a, b }); 
        }

        Ok(Self { func, a, b, cfg, record: SolveRecord::default() })
    }

    pub fn bounds(&self) -> (f64, f64) { (self.a, self.b) }
    pub fn cfg(&self) -> &SecantCfg { &self.cfg }

    /// Pair held when the last solve stopped.
    pub fn bracket(&self) -> Option<(f64, f64)> { 
        self.record.bracket() 
    }
}

impl<F> fmt::Debug for Secant<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secant")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("cfg", &self.cfg)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl<F> RootSolver for Secant<F> 
where F: FnMut(f64) -> f64 { 
    fn algorithm(&self) -> Algorithm { Algorithm::SECANT }
    fn common(&self) -> &CommonCfg { self.cfg.common() }
    fn record(&self) -> &SolveRecord { &self.record }

    fn solve(&mut self) -> Result<f64, RootFindingError> { 
        let mut rule = SecantRule { a: self.a, b: self.b }; 
        run(&mut rule, &mut self.func, &self.cfg.common, &mut self.record)
    }
}
