use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A severity-tagged clinical flag raised for a patient.
///
/// The alert references its trigger (a scale result or an emotional
/// check-in) by id only — a weak reference for lookup, not ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalAlert {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub therapist_id: Option<Uuid>,
    pub severity: AlertSeverity,
    pub source: AlertSource,
    pub message: String,
    pub resolved: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Media,
    Alta,
    Critica,
}

impl AlertSeverity {
    /// Alta and crítica alerts are treated as high risk in reporting.
    pub fn is_high_risk(&self) -> bool {
        matches!(self, AlertSeverity::Alta | AlertSeverity::Critica)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum AlertSource {
    ScaleResult(Uuid),
    CheckIn(Uuid),
}
