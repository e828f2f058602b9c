use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReceiptError>;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
