//! Root-finding error types.  
//! 
//! ┌ [`ConfigError`]      : invalid configuration  
//! │  ├ tolerance non-positive, non-finite, or under a method's floor  
//! │  ├ `max_iter` of zero  
//! │  └ non-finite or degenerate bounds / starting point  
//! │
//! └ [`RootFindingError`] : errors raised by `solve`  
//!     ├ bracket precondition violated (no sign change)  
//!     ├ degenerate step (zero slope, derivative or divided difference)  
//!     ├ iteration cap reached without convergence  
//!     └ non-finite function or derivative evaluation  
//!
//! All errors are raised where they are detected and never retried. 


use thiserror::Error; 
use super::algorithms::Algorithm; 


/// Invalid solver configuration.  
/// 
/// - Raised by config setters and solver constructors, before any 
///   function evaluation takes place.
#[derive(Debug, Error)]
pub enum ConfigError { 
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("tolerance {got} below the {floor} floor required by {algorithm}")]
    ToleranceBelowFloor { algorithm: Algorithm, got: f64, floor: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid bounds: a and b must be finite and distinct. got [{a}, {b}]")] 
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 }, 

    #[error("invalid true solution: must be finite. got {got}")]
    InvalidTrueSolution { got: f64 },
}


/// Root-finding runtime errors.  
/// 
/// ┌ [`RootFindingError::Config`]                : see [`ConfigError`]  
/// ├ [`RootFindingError::NoSignChange`]          : bracket precondition violated  
/// ├ [`RootFindingError::DegenerateStep`]        : zero denominator mid-iteration  
/// ├ [`RootFindingError::MaxIterationsExceeded`] : cap reached; trace kept on the solver  
/// ├ [`RootFindingError::NonFiniteEvaluation`]   : `f(x)` is NaN/inf  
/// ├ [`RootFindingError::DerivativeNotFinite`]   : `f'(x)` is NaN/inf  
/// └ [`RootFindingError::FiniteDifferenceStepUnrepresentable`]
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{algorithm}: no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { algorithm: Algorithm, a: f64, b: f64, fa: f64, fb: f64 },

    #[error("{algorithm}: degenerate step at x={x}, denominator={denom}")]
    DegenerateStep { algorithm: Algorithm, x: f64, denom: f64 },

    #[error("{algorithm}: no convergence after {max_iter} iterations, last estimate {last}")]
    MaxIterationsExceeded { algorithm: Algorithm, max_iter: usize, last: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("finite-difference step not representable at x={x}, h={h}; \
             try an analytic derivative"
    )]
    FiniteDifferenceStepUnrepresentable { x: f64, h: f64 },
}
