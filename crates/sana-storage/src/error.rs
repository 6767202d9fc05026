use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to begin transaction: {0}")]
    Begin(String),

    #[error("commit failed: {0}")]
    Commit(String),

    #[error("write conflict on {resource}")]
    WriteConflict { resource: &'static str },

    #[error("query failed: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
