use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaxWeightError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record at line {line}: expected 3 fields, got {found}")]
    MalformedRecord { line: usize, found: usize },

    #[error("Invalid food item: {0}")]
    InvalidFood(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MaxWeightError>;
