use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("value kind mismatch: expected {expected}, found {found}")]
    InvalidKind {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("series not found: {0}")]
    SeriesNotFound(u64),

    #[error("index {index} out of range (len={len})")]
    IndexOutOfRange { index: usize, len: usize },
}
