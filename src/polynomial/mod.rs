pub mod errors; 
pub mod horner; 

pub use horner::{horner, evaluate, HornerCfg, PolynomialScanner, ZeroScan};
