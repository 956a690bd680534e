//! Derivative strategies for Newton's method.
//!
//! ┌ [`Derivative`]        : strategy trait, `(f, x) -> f'(x)`  
//! ├ [`CentralDifference`] : central finite difference with ULP rescue (default)  
//! └ [`Analytic`]          : user-supplied derivative closure  
//!
//! Newton only depends on the trait; the differencing scheme is swappable.


use super::errors::RootFindingError;


/// Approximates `f'(x)`.
///
/// Implementations may evaluate `f` any number of times. Returned values 
/// are checked by the caller: a non-finite derivative is rejected, and a 
/// zero derivative is treated as a degenerate (flat tangent) step.
pub trait Derivative {
    fn derivative<F>(&mut self, f: &mut F, x: f64) -> Result<f64, RootFindingError>
    where F: FnMut(f64) -> f64;
}


/// ULP helpers for finite-difference fallback near representability edges 
#[inline] 
fn next_up(x: f64) -> f64 { 
    if x.is_nan() || x == f64::INFINITY { return x; }
    // smallest positive subnormal 
    if x == 0.0 { return f64::from_bits(1); } 
    
    let bits   = x.to_bits(); 
    let bumped = if x > 0.0 { bits + 1 } else { bits - 1 }; 
    f64::from_bits(bumped)
}
#[inline] 
fn next_down(x: f64) -> f64 { 
    if x.is_nan() || x == f64::NEG_INFINITY { return x; } 
    // largest negative subnormal 
    if x == 0.0 { return -f64::from_bits(1); } 

    let bits   = x.to_bits(); 
    let bumped = if x > 0.0 { bits - 1 } else { bits + 1 };
    f64::from_bits(bumped)
}


/// Central finite difference `(f(x + h) - f(x - h)) / 2h`.
///
/// # Step 
/// - `h = eps^{1/3} * max(|x|, 1)` 
/// - if `x ± h` overflows or rounds back onto `x`, the neighbouring 
///   representable values are used instead 
/// - if those collapse too, fails with 
///   [`RootFindingError::FiniteDifferenceStepUnrepresentable`] 
#[derive(Debug, Clone, Copy, Default)]
pub struct CentralDifference;

impl Derivative for CentralDifference {
    fn derivative<F>(&mut self, f: &mut F, x: f64) -> Result<f64, RootFindingError>
    where F: FnMut(f64) -> f64 {
        let mut h  = f64::EPSILON.cbrt() * x.abs().max(1.0); 
        let mut xp = x + h; 
        let mut xm = x - h; 

        // try rescue if representability collapses 
        if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x { 
            xp = next_up(x); 
            xm = next_down(x); 
            h  = 0.5 * (xp - xm); 

            if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x { 
                return Err(RootFindingError::FiniteDifferenceStepUnrepresentable { x, h });
            }
        }

        Ok((f(xp) - f(xm)) / (2.0 * h))
    }
}


/// Exact derivative supplied by the caller.
#[derive(Clone, Copy)]
pub struct Analytic<G>(pub G);

impl<G> std::fmt::Debug for Analytic<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Analytic(..)")
    }
}

impl<G> Derivative for Analytic<G> 
where G: FnMut(f64) -> f64 {
    fn derivative<F>(&mut self, _f: &mut F, x: f64) -> Result<f64, RootFindingError>
    where F: FnMut(f64) -> f64 {
        Ok((self.0)(x))
    }
}
