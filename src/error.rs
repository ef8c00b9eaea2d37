use thiserror::Error;

pub type Result<T> = std::result::Result<T, PowersetError>;

#[derive(Debug, Error)]
pub enum PowersetError {
    #[error("invalid agent specification: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
