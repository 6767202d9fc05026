use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use sana_core::models::alert::{AlertSeverity, AlertSource, ClinicalAlert};
use sana_core::models::checkin::EmotionalCheckIn;
use sana_storage::store::{ClinicStore, ClinicTx};

use crate::error::ClinicError;

/// A valence at or below this creates a `media` alert for follow-up.
pub const LOW_VALENCE_ALERT: i64 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub user_id: Uuid,
    pub valence: i64,
    pub activation: i64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckInOutcome {
    pub check_in: EmotionalCheckIn,
    pub alert: Option<ClinicalAlert>,
}

/// Record an emotional check-in for the requesting patient. A very low
/// valence additionally raises a `media` alert referencing the check-in.
pub async fn record_check_in<S: ClinicStore>(
    store: &S,
    request: &CheckInRequest,
) -> Result<CheckInOutcome, ClinicError> {
    let mut tx = store.begin().await?;
    match record_in_tx(&mut tx, request).await {
        Ok(outcome) => {
            tx.commit().await?;
            info!(
                check_in_id = %outcome.check_in.id,
                valence = outcome.check_in.valence,
                "check-in recorded"
            );
            Ok(outcome)
        }
        Err(e) => {
            if let ClinicError::Storage(source) = &e {
                error!(
                    user_id = %request.user_id,
                    error = %source,
                    "storage failure during check-in"
                );
            }
            tx.rollback().await?;
            Err(e)
        }
    }
}

async fn record_in_tx<T: ClinicTx>(
    tx: &mut T,
    request: &CheckInRequest,
) -> Result<CheckInOutcome, ClinicError> {
    let patient = tx
        .find_patient_by_user(request.user_id)
        .await?
        .ok_or(ClinicError::NotFound {
            resource: "patient",
            id: request.user_id,
        })?;

    let check_in = EmotionalCheckIn::new(
        patient.id,
        request.valence,
        request.activation,
        request.notes.clone(),
    )
    .map_err(|e| ClinicError::Validation(e.to_string()))?;
    tx.insert_check_in(check_in.clone()).await?;

    let alert = if check_in.valence <= LOW_VALENCE_ALERT {
        let alert = ClinicalAlert {
            id: Uuid::new_v4(),
            patient_id: patient.id,
            therapist_id: None,
            severity: AlertSeverity::Media,
            source: AlertSource::CheckIn(check_in.id),
            message: format!(
                "Registro emocional con valencia muy baja ({}) de {}",
                check_in.valence, patient.full_name
            ),
            resolved: false,
            created_at: Timestamp::now(),
        };
        warn!(
            patient_id = %patient.id,
            valence = check_in.valence,
            "low-valence check-in alert raised"
        );
        tx.insert_alert(alert.clone()).await?;
        Some(alert)
    } else {
        None
    };

    Ok(CheckInOutcome { check_in, alert })
}
