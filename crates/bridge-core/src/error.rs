use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("member not found: {0}")]
    MemberNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
