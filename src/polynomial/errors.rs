use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolynomialError {
    #[error("empty coefficient vector")]
    EmptyPolynomial,

    #[error("non-finite coefficient at index {idx}: {got}")]
    NonFiniteCoefficient { idx: usize, got: f64 },

    #[error("invalid interval: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },

    #[error("invalid step {got}: must be finite and > 0")]
    InvalidStep { got: f64 },

    #[error("invalid threshold {got}: must be finite and > 0")]
    InvalidThreshold { got: f64 },

    #[error("grid of {got} samples exceeds the limit of {max}")]
    TooManySamples { got: f64, max: usize },
}
