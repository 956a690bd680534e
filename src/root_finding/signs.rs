//! Sign utilities for root-finding algorithms.
//! - `sign`          : three-valued sign, `0` for zero and NaN  
//! - `same_sign`     : `true` if both values have the same three-valued sign  
//! - `opposite_sign` : `true` if the product is strictly negative

/// Three-valued sign of `x`: `-1`, `0` or `1`. 
#[inline]
pub(crate) fn sign(x: f64) -> i8 {
    if x > 0.0 { 
        1 
    } else if x < 0.0 { 
        -1 
    } else { 
        0 
    }
}


/// Returns `true` if `x` and `y` have the same three-valued sign.
///
/// A zero only matches another zero, so a bracket with a root sitting 
/// exactly on one endpoint still counts as a sign change. 
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    sign(x) == sign(y)
}


/// Returns `true` if `x * y < 0`.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    sign(x) * sign(y) < 0
}
