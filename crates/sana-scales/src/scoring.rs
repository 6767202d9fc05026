use serde::{Deserialize, Serialize};

/// One questionnaire item: an id, the prompt shown to the patient, and the
/// inclusive response range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleItem {
    pub id: String,
    pub prompt: String,
    pub min: i64,
    pub max: i64,
}

/// Ordinal severity tier for a scale total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl Severity {
    /// Clinical label as shown to patients and therapists.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Minimal => "mínima",
            Severity::Mild => "leve",
            Severity::Moderate => "moderada",
            Severity::ModeratelySevere => "moderadamente severa",
            Severity::Severe => "severa",
        }
    }
}

/// The outcome of scoring one completed administration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleScore {
    pub scale_id: String,
    pub total: i64,
    pub severity: Severity,
    pub interpretation: String,
}
