use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no cached frame to restore")]
    NoCachedFrame,

    #[error("drawing backend error: {0}")]
    Backend(String),
}
