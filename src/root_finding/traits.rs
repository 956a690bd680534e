use super::algorithms::Algorithm;
use super::config::CommonCfg;
use super::errors::RootFindingError;
use super::report::RootFindingReport;
use super::trace::{ConvergenceTrace, SolveRecord};

/// Shared surface of every iterative root-finder. 
///
/// Construct a solver once, call [`RootSolver::solve`], then read the 
/// iteration count and trace. Each `solve` starts from a clean record.
pub trait RootSolver {
    fn algorithm(&self) -> Algorithm;

    /// Shared configuration (tolerance, cap, label, true solution).
    fn common(&self) -> &CommonCfg;

    /// Outcome of the most recent `solve`.
    fn record(&self) -> &SolveRecord;

    /// Resets the record and runs the convergence loop.
    fn solve(&mut self) -> Result<f64, RootFindingError>;

    /// Iterations performed by the last `solve`; equals `trace().count()`.
    #[inline]
    fn count(&self) -> usize {
        self.record().trace().count()
    }

    #[inline]
    fn trace(&self) -> &ConvergenceTrace {
        self.record().trace()
    }

    #[inline]
    fn solution(&self) -> Option<f64> {
        self.record().solution()
    }

    #[inline]
    fn evaluations(&self) -> usize {
        self.record().evaluations()
    }

    /// `|solution - true_solution|` when both are known.
    fn error(&self) -> Option<f64> {
        let solution = self.solution()?;
        self.common().true_solution().map(|t| (solution - t).abs())
    }

    /// Summary for presentation; `None` until a solve has succeeded.
    fn report(&self) -> Option<RootFindingReport> {
        let common = self.common();
        self.solution().map(|solution| {
            RootFindingReport::new(
                self.algorithm(),
                common.label(),
                solution,
                common.true_solution(),
                self.evaluations(),
                self.trace().approximations(),
            )
        })
    }
}
