use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pending or completed administration of a clinical scale to a patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleAssignment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub therapist_id: Uuid,
    pub scale_id: String,
    pub due_date: jiff::civil::Date,
    pub status: AssignmentStatus,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Active,
    Completed,
}

/// Immutable record of one completed assignment: the raw responses, the
/// computed total, and the automatic interpretation text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleResult {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub patient_id: Uuid,
    pub scale_id: String,
    pub total: i64,
    pub responses: BTreeMap<String, i64>,
    pub severity_label: String,
    pub interpretation: String,
    pub completed_at: Timestamp,
}
