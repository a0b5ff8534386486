use thiserror::Error;

#[derive(Debug, Error)]
pub enum VarfreqError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Security error: {0}")]
    Security(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VarfreqError>;
