//! Numerical approximation routines.
//!
//! ┌ [`root_finding`] : iterative scalar root-finders with convergence traces
//! │   ├ bisection, false position, bracket-checked secant
//! │   └ newton, steffensen
//! └ [`polynomial`]   : Horner evaluation and near-zero grid scanning

pub mod root_finding;
pub mod polynomial;
