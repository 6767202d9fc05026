use serde::{Deserialize, Serialize};

use sana_core::models::alert::{AlertSeverity, ClinicalAlert};
use sana_core::models::appointment::{Appointment, AppointmentStatus};
use sana_core::models::checkin::EmotionalCheckIn;
use sana_core::models::scale::ScaleResult;

/// Input to the summary composer, assembled ahead of time by the reporting
/// layer. Every "whichever data happens to exist" question is settled here
/// with explicit optional fields; the composer never guesses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryBundle {
    pub patient_name: String,
    pub therapist_name: Option<String>,
    pub phq9: Option<ScaleOutcome>,
    pub gad7: Option<ScaleOutcome>,
    pub mood: Option<MoodStats>,
    pub sessions: Vec<SessionRecord>,
    pub incidents: Vec<IncidentRecord>,
}

/// The latest result of one scale. `severity_label` is the label persisted
/// with the result; when absent the composer falls back to the scale's own
/// breakpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleOutcome {
    pub scale_id: String,
    pub total: i64,
    pub severity_label: Option<String>,
}

impl From<&ScaleResult> for ScaleOutcome {
    fn from(result: &ScaleResult) -> Self {
        Self {
            scale_id: result.scale_id.clone(),
            total: result.total,
            severity_label: Some(result.severity_label.clone()),
        }
    }
}

/// Mood check-in aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodStats {
    pub count: usize,
    pub mean_valence: f64,
}

impl MoodStats {
    /// Aggregate a set of check-ins. Empty input yields `None`, which the
    /// composer renders as no mood section at all.
    pub fn from_check_ins(check_ins: &[EmotionalCheckIn]) -> Option<Self> {
        if check_ins.is_empty() {
            return None;
        }
        let sum: i64 = check_ins.iter().map(|c| c.valence).sum();
        Some(Self {
            count: check_ins.len(),
            mean_valence: sum as f64 / check_ins.len() as f64,
        })
    }
}

/// One therapy session, reduced to what adherence reporting needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub status: AppointmentStatus,
}

impl From<&Appointment> for SessionRecord {
    fn from(appointment: &Appointment) -> Self {
        Self {
            status: appointment.status,
        }
    }
}

/// One clinical incident, reduced to severity and open/closed state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub severity: AlertSeverity,
    pub open: bool,
}

impl From<&ClinicalAlert> for IncidentRecord {
    fn from(alert: &ClinicalAlert) -> Self {
        Self {
            severity: alert.severity,
            open: !alert.resolved,
        }
    }
}
