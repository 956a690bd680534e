//! Shared configuration for root-finding algorithms.  
//! 
//! Provides [`CommonCfg`] with the default tolerance and iteration cap, 
//! used by all root-finding configs.
//!
//! [`CommonCfg`] : universal fields  
//! ├ `tolerance`     : stop once `|f(x)| < tolerance`  
//! ├ `max_iter`      : iteration cap (optional, see [`Algorithm::default_max_iter`])  
//! ├ `label`         : human-readable form of `f` (optional)  
//! └ `true_solution` : known root, used for reporting only (optional)  
//!
//! [`CommonCfg::new`] initializes configuration with default values. 


use super::algorithms::Algorithm; 

pub const DEFAULT_TOLERANCE: f64 = 0.01;


#[derive(Debug, Clone)]
pub struct CommonCfg {
    algorithm:     Algorithm, 
    tolerance:     f64,
    max_iter:      Option<usize>,
    label:         Option<String>, 
    true_solution: Option<f64>, 
}

impl CommonCfg {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { 
            algorithm, 
            tolerance     : DEFAULT_TOLERANCE, 
            max_iter      : None, 
            label         : None, 
            true_solution : None, 
        }
    }

    // getters  
    pub fn algorithm(&self)     -> Algorithm { self.algorithm }
    pub fn tolerance(&self)     -> f64 { self.tolerance }
    pub fn max_iter(&self)      -> Option<usize> { self.max_iter }
    pub fn label(&self)         -> Option<&str> { self.label.as_deref() }
    pub fn true_solution(&self) -> Option<f64> { self.true_solution }

    /// `max_iter` if set, otherwise [`Algorithm::default_max_iter`]. 
    pub fn resolved_max_iter(&self) -> usize { 
        self.max_iter.unwrap_or(self.algorithm.default_max_iter())
    }

    // setters (internal) 
    pub(crate) fn with_tolerance     (&mut self, v: f64)    { self.tolerance     = v; }
    pub(crate) fn with_max_iter      (&mut self, v: usize)  { self.max_iter      = Some(v); }
    pub(crate) fn with_label         (&mut self, v: String) { self.label         = Some(v); }
    pub(crate) fn with_true_solution (&mut self, v: f64)    { self.true_solution = Some(v); }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            /// Shared settings (tolerance, cap, label, true solution).
            pub fn common(&self) -> &$crate::root_finding::config::CommonCfg { 
                &self.common 
            }
            pub fn tolerance(&self) -> f64 { self.common.tolerance() }
            pub fn max_iter(&self)  -> Option<usize> { self.common.max_iter() }

            pub fn set_tolerance(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidTolerance { got: v }
                    );
                }

                let algorithm = self.common.algorithm(); 
                if let Some(floor) = algorithm.min_tolerance() { 
                    if v < floor { 
                        return Err(
                            $crate::root_finding::errors::ConfigError::ToleranceBelowFloor { 
                                algorithm, got: v, floor 
                            }
                        );
                    }
                }
                self.common.with_tolerance(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }
            pub fn set_label(mut self, v: impl Into<String>) -> Self { 
                self.common.with_label(v.into()); 
                self
            }
            pub fn set_true_solution(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if !v.is_finite() { 
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidTrueSolution { got: v }
                    );
                }
                self.common.with_true_solution(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg; 
