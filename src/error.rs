use thiserror::Error;

pub type WaterfallResult<T> = Result<T, WaterfallError>;

#[derive(Debug, Error)]
pub enum WaterfallError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
