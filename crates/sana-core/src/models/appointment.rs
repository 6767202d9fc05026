use jiff::{Span, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booked (or formerly booked) therapy session slot.
///
/// Appointments are never deleted; cancellation and no-show are status
/// changes so the history stays queryable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub therapist_id: Uuid,
    pub start: Timestamp,
    pub duration_minutes: i64,
    pub status: AppointmentStatus,
    pub reason: Option<String>,
    pub session_token: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl Appointment {
    /// End of the booked interval. Intervals are half-open: [start, end).
    pub fn end(&self) -> Timestamp {
        self.start
            .saturating_add(Span::new().minutes(self.duration_minutes))
            .expect("minute spans carry no calendar units")
    }

    /// Whether this appointment still occupies its slot on the therapist's
    /// calendar. Cancelled and no-show appointments free the slot.
    pub fn blocks_calendar(&self) -> bool {
        matches!(
            self.status,
            AppointmentStatus::Scheduled | AppointmentStatus::Completed
        )
    }
}
