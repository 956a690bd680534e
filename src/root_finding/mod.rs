// common helpers 
pub mod algorithms; 
pub mod config;
pub mod derivative; 
pub mod errors; 
pub mod report; 
pub mod trace; 
pub mod traits;
pub use traits::RootSolver;
pub(crate) mod estimator; 
pub(crate) mod signs; 

// algorithms 
pub mod bisection;
pub mod false_position;
pub mod secant;
pub mod newton;
pub mod steffensen;
