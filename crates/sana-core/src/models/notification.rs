use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-facing notification record, queued for delivery by the
/// notification collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub kind: NotificationKind,
    pub body: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    AppointmentBooked,
    ScaleCompleted,
    AlertRaised,
}

impl Notification {
    pub fn new(recipient_id: Uuid, kind: NotificationKind, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipient_id,
            kind,
            body: body.into(),
            created_at: Timestamp::now(),
        }
    }
}
