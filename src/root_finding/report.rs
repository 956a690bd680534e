//! Defines the [`RootFindingReport`] struct handed to presentation layers 
//! (plotting, CLI summaries) after a successful solve. 

use super::algorithms::Algorithm;


/// Read-only summary of a successful solve.  
/// 
/// [`RootFindingReport`]
/// - `algorithm_name` : algorithm name (e.g. `"bisection"`)  
/// - `label`          : human-readable form of `f`, if configured  
/// - `solution`       : final estimate  
/// - `error`          : `|solution - true_solution|`, if a true solution was configured  
/// - `iterations`     : iteration count, equal to `approximations.len()`  
/// - `evaluations`    : function evaluations spent  
/// - `approximations` : the convergence trace, in iteration order  
#[derive(Debug, Clone, PartialEq)] 
pub struct RootFindingReport {
    pub algorithm_name : &'static str, 
    pub label          : Option<String>, 
    pub solution       : f64, 
    pub error          : Option<f64>, 
    pub iterations     : usize, 
    pub evaluations    : usize, 
    pub approximations : Vec<f64>, 
}

impl RootFindingReport { 
    pub(crate) fn new(
        algorithm: Algorithm, 
        label: Option<&str>, 
        solution: f64, 
        true_solution: Option<f64>, 
        evaluations: usize, 
        approximations: &[f64], 
    ) -> Self { 
        Self { 
            algorithm_name : algorithm.algorithm_name(), 
            label          : label.map(str::to_owned), 
            solution, 
            error          : true_solution.map(|t| (solution - t).abs()), 
            iterations     : approximations.len(), 
            evaluations, 
            approximations : approximations.to_vec(), 
        }
    }
}
