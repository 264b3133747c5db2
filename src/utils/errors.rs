use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Error while deserializing: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;

impl From<ChartError> for String {
    fn from(e: ChartError) -> Self {
        e.to_string()
    }
}
