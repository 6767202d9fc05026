use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A patient record. `user_id` links to the authenticated account supplied
/// by the identity collaborator; `id` is the clinical record id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Therapist {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub specialty: Option<String>,
}
