use jiff::Timestamp;
use thiserror::Error;
use uuid::Uuid;

use sana_scales::error::ScaleError;
use sana_storage::error::StoreError;

/// Workflow-level errors. Each variant maps to a distinct client-facing
/// message; `Storage` is reported generically to the client while the
/// workflow logs the underlying cause.
#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: Uuid },

    #[error("appointment conflict for therapist {therapist_id} at {start}")]
    Conflict {
        therapist_id: Uuid,
        start: Timestamp,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
