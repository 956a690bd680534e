//! Iteration history kept by every solver. 
//!
//! ┌ [`ConvergenceTrace`] : ordered approximations, one per iteration  
//! └ [`SolveRecord`]      : trace plus the rest of a `solve` call's outcome  
//!     ├ `evaluations` : function evaluations spent  
//!     ├ `solution`    : estimate of the last successful solve  
//!     └ `bracket`     : last bracket held (bracketing methods only)  
//!
//! Both are reset at the start of every `solve` and left untouched on 
//! failure, so a partial trace can be inspected after an error. 


/// Ordered approximations produced by an iterative solver.
///
/// Index `0` is the first refinement after the initial guess; the 
/// iteration count is always the number of recorded approximations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvergenceTrace {
    approximations: Vec<f64>,
}

impl ConvergenceTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of iterations recorded.
    #[inline]
    pub fn count(&self) -> usize {
        self.approximations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.approximations.is_empty()
    }

    /// Approximations in iteration order.
    #[inline]
    pub fn approximations(&self) -> &[f64] {
        &self.approximations
    }

    /// Most recent approximation, if any.
    #[inline]
    pub fn last(&self) -> Option<f64> {
        self.approximations.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.approximations.iter()
    }

    pub(crate) fn push(&mut self, x: f64) {
        self.approximations.push(x);
    }

    pub(crate) fn clear(&mut self) {
        self.approximations.clear();
    }
}

impl<'a> IntoIterator for &'a ConvergenceTrace {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.approximations.iter()
    }
}


/// Outcome of the most recent `solve` call on a solver.
#[derive(Debug, Clone, Default)]
pub struct SolveRecord {
    trace:       ConvergenceTrace,
    evaluations: usize,
    solution:    Option<f64>,
    bracket:     Option<(f64, f64)>,
}

impl SolveRecord {
    pub fn trace(&self)       -> &ConvergenceTrace { &self.trace }
    pub fn evaluations(&self) -> usize { self.evaluations }
    pub fn solution(&self)    -> Option<f64> { self.solution }
    pub fn bracket(&self)     -> Option<(f64, f64)> { self.bracket }

    pub(crate) fn reset(&mut self) {
        self.trace.clear();
        self.evaluations = 0;
        self.solution    = None;
        self.bracket     = None;
    }

    pub(crate) fn trace_mut(&mut self) -> &mut ConvergenceTrace { &mut self.trace }

    pub(crate) fn set_evaluations(&mut self, v: usize)            { self.evaluations = v; }
    pub(crate) fn set_solution   (&mut self, v: f64)              { self.solution    = Some(v); }
    pub(crate) fn set_bracket    (&mut self, v: Option<(f64, f64)>) { self.bracket   = v; }
}
