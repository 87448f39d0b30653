use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid content rect: width={width}, height={height}")]
    InvalidContentRect { width: f64, height: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("viewport decode failed: expected {expected} bytes, got {actual}")]
    Decode { expected: usize, actual: usize },
}
