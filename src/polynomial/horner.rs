//! Horner Polynomial Evaluation and Zero Scanning
//!
//! Evaluates a polynomial, coefficients ordered from highest to lowest 
//! degree, with [Horner's scheme](https://en.wikipedia.org/wiki/Horner%27s_method):
//!
//! ```text
//! p(x) = (...((c[0] * x + c[1]) * x + c[2]) * x + ...) + c[n-1]
//! ```
//!
//! [`PolynomialScanner`] samples `p` on the uniform grid `a, a + step, ...` 
//! (end point `b` excluded) and returns a [`ZeroScan`]. Flagging near-zero 
//! samples is a separate thresholding step on the scan; several adjacent 
//! samples may be flagged around the same true root.


use tracing::debug;

use crate::polynomial::errors::PolynomialError;

pub const DEFAULT_STEP:      f64 = 0.1;
pub const DEFAULT_THRESHOLD: f64 = 0.01;

/// Largest grid a scan will allocate.
pub const MAX_SAMPLES: usize = 1 << 24;


/// Evaluates the polynomial `coeffs` (highest degree first) at `x`.
///
/// An empty coefficient slice is the zero polynomial.
#[inline]
pub fn horner(coeffs: &[f64], x: f64) -> f64 { 
    match coeffs.split_first() { 
        Some((&first, rest)) => rest.iter().fold(first, |acc, &c| acc * x + c), 
        None                 => 0.0, 
    }
}


/// Scanner configuration 
///
/// # Fields 
/// - `step`      : grid spacing, default [`DEFAULT_STEP`] 
/// - `threshold` : a sample is a zero candidate if `|p(x)| < threshold`, 
///                 default [`DEFAULT_THRESHOLD`] 
/// - `label`     : human-readable form of the polynomial (optional) 
#[derive(Debug, Clone)]
pub struct HornerCfg { 
    step:      f64, 
    threshold: f64, 
    label:     Option<String>, 
}
impl HornerCfg { 
    #[must_use]
    pub fn new() -> Self { 
        Self { step: DEFAULT_STEP, threshold: DEFAULT_THRESHOLD, label: None }
    }

    pub fn set_step(mut self, v: f64) -> Result<Self, PolynomialError> { 
        if !v.is_finite() || v <= 0.0 { 
            return Err(PolynomialError::InvalidStep { got: v }); 
        }
        self.step = v; 
        Ok(self)
    }
    pub fn set_threshold(mut self, v: f64) -> Result<Self, PolynomialError> { 
        if !v.is_finite() || v <= 0.0 { 
            return Err(PolynomialError::InvalidThreshold { got: v }); 
        }
        self.threshold = v; 
        Ok(self)
    }
    pub fn set_label(mut self, v: impl Into<String>) -> Self { 
        self.label = Some(v.into()); 
        self
    }

    pub fn step(&self)      -> f64 { self.step }
    pub fn threshold(&self) -> f64 { self.threshold }
    pub fn label(&self)     -> Option<&str> { self.label.as_deref() }
}
impl Default for HornerCfg { 
    fn default() -> Self { Self::new() }
}


/// Number of grid points `ceil((b - a) / step)`.
///
/// The span is divided piecewise when `b - a` overflows. Counts that are 
/// not finite or exceed [`MAX_SAMPLES`] are rejected rather than allocated.
fn sample_count(a: f64, b: f64, step: f64) -> Result<usize, PolynomialError> { 
    let span = b - a; 
    let n = if span.is_finite() { 
        (span / step).ceil() 
    } else { 
        (b / step - a / step).ceil() 
    }; 
    if !n.is_finite() || n > MAX_SAMPLES as f64 { 
        return Err(PolynomialError::TooManySamples { got: n, max: MAX_SAMPLES }); 
    }

    Ok(n as usize)
}

/// Uniform grid `a + i * step` for `i in 0..n`.
fn grid(a: f64, n: usize, step: f64) -> Vec<f64> { 
    (0..n).map(|i| a + i as f64 * step).collect()
}

fn validate_coeffs(coeffs: &[f64]) -> Result<(), PolynomialError> { 
    if coeffs.is_empty() { 
        return Err(PolynomialError::EmptyPolynomial); 
    }
    if let Some((idx, &got)) = coeffs.iter().enumerate().find(|(_, c)| !c.is_finite()) { 
        return Err(PolynomialError::NonFiniteCoefficient { idx, got }); 
    }
    Ok(())
}

fn validate_interval(a: f64, b: f64) -> Result<(), PolynomialError> { 
    if !(a.is_finite() && b.is_finite()) || a >= b { 
        return Err(PolynomialError::InvalidInterval { a, b }); 
    }
    Ok(())
}


/// Samples `coeffs` on the grid from `a` (inclusive) to `b` (exclusive) 
/// with spacing `step`.
///
/// # Returns 
/// Parallel vectors `(xs, ys)` in ascending `x` order.
///
/// # Errors 
/// - [`PolynomialError::EmptyPolynomial`] / [`PolynomialError::NonFiniteCoefficient`] 
/// - [`PolynomialError::InvalidInterval`] : `a`, `b` not finite or `a >= b` 
/// - [`PolynomialError::InvalidStep`]     : `step` not finite or `<= 0` 
/// - [`PolynomialError::TooManySamples`]  : grid larger than [`MAX_SAMPLES`] 
pub fn evaluate(
    coeffs: &[f64], 
    a: f64, 
    b: f64, 
    step: f64 
) -> Result<(Vec<f64>, Vec<f64>), PolynomialError> { 
    validate_coeffs(coeffs)?; 
    validate_interval(a, b)?; 
    if !step.is_finite() || step <= 0.0 { 
        return Err(PolynomialError::InvalidStep { got: step }); 
    }

    let n  = sample_count(a, b, step)?; 
    let xs = grid(a, n, step); 
    let ys = xs.iter().map(|&x| horner(coeffs, x)).collect(); 
    Ok((xs, ys))
}


/// Polynomial sampled over `[a, b)`.
#[derive(Debug, Clone)]
pub struct PolynomialScanner { 
    coeffs:  Vec<f64>, 
    a:       f64, 
    b:       f64, 
    cfg:     HornerCfg, 
    samples: usize, 
}

impl PolynomialScanner { 
    pub fn new(coeffs: Vec<f64>, a: f64, b: f64, cfg: HornerCfg) -> Result<Self, PolynomialError> { 
        validate_coeffs(&coeffs)?; 
        validate_interval(a, b)?; 
        let samples = sample_count(a, b, cfg.step)?; 
        Ok(Self { coeffs, a, b, cfg, samples })
    }

    pub fn coeffs(&self) -> &[f64] { &self.coeffs }
    pub fn bounds(&self) -> (f64, f64) { (self.a, self.b) }
    pub fn cfg(&self)    -> &HornerCfg { &self.cfg }

    /// Grid size, fixed at construction.
    pub fn samples(&self) -> usize { self.samples }

    /// Degree of the polynomial as written (leading zeros included).
    pub fn degree(&self) -> usize { 
        self.coeffs.len() - 1 
    }

    /// `p(x)` at a single point.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 { 
        horner(&self.coeffs, x) 
    }

    /// Samples the polynomial over the configured grid.
    pub fn evaluate(&self) -> ZeroScan { 
        let xs = grid(self.a, self.samples, self.cfg.step); 
        let ys: Vec<f64> = xs.iter().map(|&x| self.eval(x)).collect(); 
        let scan = ZeroScan { xs, ys, threshold: self.cfg.threshold }; 

        debug!(
            degree = self.degree(), 
            samples = scan.len(), 
            candidates = scan.candidate_indices().count(), 
            "polynomial scanned"
        );
        scan
    }
}


/// Result of a [`PolynomialScanner::evaluate`] run.
///
/// [`ZeroScan`]
/// - `xs`        : sampled x-values, ascending 
/// - `ys`        : `p(x)` for each sample 
/// - `threshold` : zero-proximity threshold used by the candidate helpers 
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroScan { 
    xs:        Vec<f64>, 
    ys:        Vec<f64>, 
    threshold: f64, 
}

impl ZeroScan { 
    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }
    pub fn threshold(&self) -> f64 { self.threshold }

    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    /// Parallel `(xs, ys)` vectors.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) { 
        (self.xs, self.ys) 
    }

    fn candidate_indices(&self) -> impl Iterator<Item = usize> + '_ { 
        self.ys.iter()
            .enumerate()
            .filter(move |(_, y)| y.abs() < self.threshold)
            .map(|(i, _)| i)
    }

    /// Samples with `|p(x)| < threshold`, in ascending `x`.
    pub fn candidates(&self) -> Vec<(f64, f64)> { 
        self.candidate_indices()
            .map(|i| (self.xs[i], self.ys[i]))
            .collect()
    }

    /// Runs of adjacent candidate samples, as index ranges into `xs`/`ys`.
    ///
    /// Each run usually surrounds a single root; a root can still produce 
    /// several runs if `p` grazes the threshold. 
    pub fn candidate_groups(&self) -> Vec<std::ops::Range<usize>> { 
        let mut groups: Vec<std::ops::Range<usize>> = Vec::new(); 
        for i in self.candidate_indices() { 
            match groups.last_mut() { 
                Some(run) if run.end == i => run.end = i + 1, 
                _                         => groups.push(i..i + 1), 
            }
        }
        groups
    }

    /// One estimate per candidate group: the sample with the smallest `|p(x)|`.
    pub fn zero_estimates(&self) -> Vec<f64> { 
        self.candidate_groups()
            .into_iter()
            .filter_map(|run| { 
                run.min_by(|&i, &j| self.ys[i].abs().total_cmp(&self.ys[j].abs()))
                    .map(|i| self.xs[i])
            })
            .collect()
    }
}
