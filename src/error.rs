use thiserror::Error;

pub type GapChartResult<T> = Result<T, GapChartError>;

#[derive(Debug, Error)]
pub enum GapChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("render failed: {0}")]
    Render(String),
}
