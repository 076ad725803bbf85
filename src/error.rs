use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Duplicate card ID in column: {0}")]
    DuplicateCard(String),

    #[error("Column not found at index {0}")]
    ColumnNotFound(usize),

    #[error("Invalid card ID: {0:?}")]
    InvalidCardId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Timer runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
