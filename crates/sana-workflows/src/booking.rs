use jiff::{Span, Timestamp};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use sana_core::models::appointment::{Appointment, AppointmentStatus};
use sana_core::models::notification::{Notification, NotificationKind};
use sana_core::token;
use sana_storage::store::{ClinicStore, ClinicTx};

use crate::conflict;
use crate::error::ClinicError;

/// Shortest bookable session.
pub const MIN_SESSION_MINUTES: i64 = 30;
/// Longest bookable session. Guards the calendar against all-day holds.
pub const MAX_SESSION_MINUTES: i64 = 480;

#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    /// Authenticated account of the requesting patient, as supplied by the
    /// identity collaborator.
    pub user_id: Uuid,
    pub therapist_id: Uuid,
    pub start: Timestamp,
    pub duration_minutes: i64,
    pub reason: Option<String>,
}

/// Book an appointment as one atomic unit: resolve the patient and
/// therapist, check the therapist's calendar for conflicts, persist the
/// appointment with a fresh session token, and queue a notification for
/// the therapist. Any failure rolls the whole transaction back.
pub async fn book_appointment<S: ClinicStore>(
    store: &S,
    request: &BookingRequest,
) -> Result<Appointment, ClinicError> {
    if request.duration_minutes < MIN_SESSION_MINUTES {
        return Err(ClinicError::Validation(format!(
            "session duration must be at least {MIN_SESSION_MINUTES} minutes, got {}",
            request.duration_minutes
        )));
    }
    if request.duration_minutes > MAX_SESSION_MINUTES {
        return Err(ClinicError::Validation(format!(
            "session duration must be at most {MAX_SESSION_MINUTES} minutes, got {}",
            request.duration_minutes
        )));
    }
    let end = request
        .start
        .checked_add(Span::new().minutes(request.duration_minutes))
        .map_err(|e| ClinicError::Validation(format!("invalid appointment interval: {e}")))?;

    info!(
        therapist_id = %request.therapist_id,
        start = %request.start,
        duration_minutes = request.duration_minutes,
        "booking appointment"
    );

    let mut tx = store.begin().await?;
    match book_in_tx(&mut tx, request, end).await {
        Ok(appointment) => {
            tx.commit().await?;
            info!(appointment_id = %appointment.id, "appointment booked");
            Ok(appointment)
        }
        Err(e) => {
            if let ClinicError::Storage(source) = &e {
                error!(
                    therapist_id = %request.therapist_id,
                    start = %request.start,
                    error = %source,
                    "storage failure during booking"
                );
            }
            tx.rollback().await?;
            Err(e)
        }
    }
}

async fn book_in_tx<T: ClinicTx>(
    tx: &mut T,
    request: &BookingRequest,
    end: Timestamp,
) -> Result<Appointment, ClinicError> {
    let patient = tx
        .find_patient_by_user(request.user_id)
        .await?
        .ok_or(ClinicError::NotFound {
            resource: "patient",
            id: request.user_id,
        })?;
    let therapist = tx
        .find_therapist(request.therapist_id)
        .await?
        .ok_or(ClinicError::NotFound {
            resource: "therapist",
            id: request.therapist_id,
        })?;

    let existing = tx.appointments_for_therapist(therapist.id).await?;
    if let Some(clash) = conflict::find_conflict(&existing, request.start, end) {
        warn!(
            therapist_id = %therapist.id,
            start = %request.start,
            clash_id = %clash.id,
            "appointment conflict"
        );
        return Err(ClinicError::Conflict {
            therapist_id: therapist.id,
            start: request.start,
        });
    }

    let session_token = token::new_session_token();
    let appointment = Appointment {
        id: Uuid::new_v4(),
        patient_id: patient.id,
        therapist_id: therapist.id,
        start: request.start,
        duration_minutes: request.duration_minutes,
        status: AppointmentStatus::Scheduled,
        reason: request.reason.clone(),
        session_token: session_token.clone(),
        created_at: Timestamp::now(),
    };
    tx.insert_appointment(appointment.clone()).await?;

    let body = format!(
        "Nueva cita con {} el {}. Acceso a la sesión: {}",
        patient.full_name,
        request.start,
        token::session_url(&session_token),
    );
    tx.insert_notification(Notification::new(
        therapist.user_id,
        NotificationKind::AppointmentBooked,
        body,
    ))
    .await?;

    Ok(appointment)
}
