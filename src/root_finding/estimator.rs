//! Shared iterative-estimator driver.  
//!
//! Every solver supplies a [`StepRule`] (precondition check plus update 
//! rule); [`run`] owns everything else: 
//!
//! ┌ reset the [`SolveRecord`]  
//! ├ resolve `max_iter` from config  
//! ├ record exactly one approximation per iteration  
//! ├ stop on convergence, or raise [`RootFindingError::MaxIterationsExceeded`]  
//! └ count evaluations, reject non-finite `f(x)`, emit `tracing` events  


use tracing::{debug, trace};

use super::algorithms::Algorithm;
use super::config::CommonCfg;
use super::errors::RootFindingError;
use super::trace::SolveRecord;


/// Wraps the user function; counts evaluations and enforces finiteness.
pub(crate) struct Evaluator<'f, F> { 
    func:  &'f mut F, 
    evals: usize, 
}

impl<'f, F> Evaluator<'f, F> 
where F: FnMut(f64) -> f64 { 
    pub(crate) fn new(func: &'f mut F) -> Self { 
        Self { func, evals: 0 }
    }

    /// `f(x)`, or [`RootFindingError::NonFiniteEvaluation`] on NaN/inf.
    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> { 
        let fx = { self.evals += 1; (self.func)(x) }; 
        if !fx.is_finite() { 
            return Err(RootFindingError::NonFiniteEvaluation { x, fx });
        }

        Ok(fx)
    }

    /// Counted but unchecked `f(x)`, for derivative strategies.
    #[inline]
    pub(crate) fn raw(&mut self, x: f64) -> f64 { 
        self.evals += 1; 
        (self.func)(x)
    }

    pub(crate) fn evals(&self) -> usize { 
        self.evals 
    }
}


/// Result of checking a rule's precondition at solve entry.
pub(crate) enum Start<S> { 
    /// The starting point already satisfies the tolerance; nothing is recorded. 
    Converged(f64), 
    Iterate(S), 
}

/// Approximation produced by one iteration. Both variants are recorded.
pub(crate) enum Step { 
    Converged(f64), 
    Continue(f64), 
}


/// Algorithm-specific half of a solver. 
pub(crate) trait StepRule { 
    type State; 
    const ALGORITHM: Algorithm; 

    /// Precondition check and initial state.
    fn start<F>(
        &mut self, 
        eval: &mut Evaluator<'_, F>, 
        tolerance: f64 
    ) -> Result<Start<Self::State>, RootFindingError> 
    where F: FnMut(f64) -> f64; 

    /// Produces the next approximation and updates `state`.
    fn step<F>(
        &mut self, 
        state: &mut Self::State, 
        eval: &mut Evaluator<'_, F>, 
        tolerance: f64 
    ) -> Result<Step, RootFindingError> 
    where F: FnMut(f64) -> f64; 

    /// Current bracket, for methods that keep one.
    fn bracket(_state: &Self::State) -> Option<(f64, f64)> { 
        None 
    }
}


/// Runs `rule` to convergence, recording into `record`.
pub(crate) fn run<R, F>(
    rule: &mut R, 
    func: &mut F, 
    common: &CommonCfg, 
    record: &mut SolveRecord 
) -> Result<f64, RootFindingError> 
where 
    R: StepRule, 
    F: FnMut(f64) -> f64 
{ 
    record.reset(); 

    let algorithm = R::ALGORITHM; 
    let tolerance = common.tolerance(); 
    let max_iter  = common.resolved_max_iter(); 
    debug!(%algorithm, tolerance, max_iter, "solve started");

    let mut eval = Evaluator::new(func); 
    let result   = iterate(rule, &mut eval, tolerance, max_iter, record); 
    record.set_evaluations(eval.evals()); 

    match &result { 
        Ok(root) => { 
            record.set_solution(*root); 
            debug!(%algorithm, iterations = record.trace().count(), root, "solve converged");
        }
        Err(e) => { 
            debug!(%algorithm, iterations = record.trace().count(), error = %e, "solve failed");
        }
    }

    result
}

fn iterate<R, F>(
    rule: &mut R, 
    eval: &mut Evaluator<'_, F>, 
    tolerance: f64, 
    max_iter: usize, 
    record: &mut SolveRecord 
) -> Result<f64, RootFindingError> 
where 
    R: StepRule, 
    F: FnMut(f64) -> f64 
{ 
    let algorithm = R::ALGORITHM; 
    let mut state = match rule.start(eval, tolerance)? { 
        Start::Converged(x)   => return Ok(x), 
        Start::Iterate(state) => state, 
    };
    record.set_bracket(R::bracket(&state)); 

    for iteration in 1..=max_iter { 
        let step = rule.step(&mut state, eval, tolerance)?; 
        record.set_bracket(R::bracket(&state)); 

        let (x, converged) = match step { 
            Step::Converged(x) => (x, true), 
            Step::Continue(x)  => (x, false), 
        }; 
        record.trace_mut().push(x); 
        trace!(%algorithm, iteration, x, "approximation recorded");

        if converged { 
            return Ok(x); 
        }
    }

    Err(RootFindingError::MaxIterationsExceeded { 
        algorithm, 
        max_iter, 
        last      : record.trace().last().unwrap_or(f64::NAN), 
    })
}
