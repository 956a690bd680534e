//! Root-finding algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods, 
//! along with the shared [`DEFAULT_MAX_ITER`] iteration cap.  


/// Iteration cap used when `max_iter` is unset in a solver config. 
pub const DEFAULT_MAX_ITER: usize = 1000; 


/// Root-finding algorithm variants. 
/// - [`Algorithm::Bracket`]  : bracket methods, sign change kept every step 
/// - [`Algorithm::Open`]     : open methods, single starting point 
/// - [`Algorithm::Compound`] : secant steps over a pair checked for a sign change once 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm { 
    Bracket(BracketFamily), 
    Open(OpenFamily),
    Compound(CompoundFamily)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily { 
    Bisection,
    FalsePosition, 
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily { 
    Newton, 
    Steffensen, 
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)] 
pub enum CompoundFamily { 
    Secant 
}

impl Algorithm { 
    pub const BISECTION:      Algorithm = Algorithm::Bracket(BracketFamily::Bisection); 
    pub const FALSE_POSITION: Algorithm = Algorithm::Bracket(BracketFamily::FalsePosition); 
    pub const SECANT:         Algorithm = Algorithm::Compound(CompoundFamily::Secant); 
    pub const NEWTON:         Algorithm = Algorithm::Open(OpenFamily::Newton); 
    pub const STEFFENSEN:     Algorithm = Algorithm::Open(OpenFamily::Steffensen); 

    /// Default iteration cap if `max_iter` is unset in config. 
    pub const fn default_max_iter(self) -> usize { 
        match self { 
            Algorithm::Bracket(_) 
            | Algorithm::Open(_) 
            | Algorithm::Compound(_) => DEFAULT_MAX_ITER, 
        }
    }

    /// Smallest tolerance a method accepts, if it restricts one. 
    pub const fn min_tolerance(self) -> Option<f64> { 
        match self { 
            Algorithm::Compound(CompoundFamily::Secant) => Some(0.01), 
            _                                           => None, 
        }
    }

    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Bracket(BracketFamily::Bisection)     => "bisection", 
            Algorithm::Bracket(BracketFamily::FalsePosition) => "false_position", 
            Algorithm::Open(OpenFamily::Newton)              => "newton",
            Algorithm::Open(OpenFamily::Steffensen)          => "steffensen",
            Algorithm::Compound(CompoundFamily::Secant)      => "secant",   
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
