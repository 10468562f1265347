use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("scale bounds must be finite: x1={x1}, x2={x2}")]
    InvalidBounds { x1: f64, x2: f64 },

    #[error("logarithmic scale bounds must be finite and > 0: x1={x1}, x2={x2}")]
    InvalidLogBounds { x1: f64, x2: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
