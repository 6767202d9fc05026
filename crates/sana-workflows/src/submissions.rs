use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use sana_core::models::alert::{AlertSeverity, AlertSource, ClinicalAlert};
use sana_core::models::notification::{Notification, NotificationKind};
use sana_core::models::scale::{AssignmentStatus, ScaleResult};
use sana_scales::alerts::{AlertThresholds, AlertTier};
use sana_scales::score_scale;
use sana_storage::store::{ClinicStore, ClinicTx};

use crate::error::ClinicError;

#[derive(Debug, Clone, Deserialize)]
pub struct ScaleSubmission {
    pub assignment_id: Uuid,
    pub responses: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub result: ScaleResult,
    pub alert: Option<ClinicalAlert>,
}

/// Complete a scale assignment: score the responses, persist the immutable
/// result, mark the assignment completed, and — when the total crosses the
/// alert thresholds — raise a clinical alert for the assigning therapist.
/// One transaction; nothing is retained on failure.
pub async fn submit_scale<S: ClinicStore>(
    store: &S,
    thresholds: &AlertThresholds,
    submission: &ScaleSubmission,
) -> Result<SubmissionOutcome, ClinicError> {
    info!(assignment_id = %submission.assignment_id, "submitting scale responses");

    let mut tx = store.begin().await?;
    match submit_in_tx(&mut tx, thresholds, submission).await {
        Ok(outcome) => {
            tx.commit().await?;
            info!(
                result_id = %outcome.result.id,
                total = outcome.result.total,
                alert = outcome.alert.is_some(),
                "scale submission recorded"
            );
            Ok(outcome)
        }
        Err(e) => {
            if let ClinicError::Storage(source) = &e {
                error!(
                    assignment_id = %submission.assignment_id,
                    error = %source,
                    "storage failure during scale submission"
                );
            }
            tx.rollback().await?;
            Err(e)
        }
    }
}

async fn submit_in_tx<T: ClinicTx>(
    tx: &mut T,
    thresholds: &AlertThresholds,
    submission: &ScaleSubmission,
) -> Result<SubmissionOutcome, ClinicError> {
    let assignment =
        tx.find_assignment(submission.assignment_id)
            .await?
            .ok_or(ClinicError::NotFound {
                resource: "scale assignment",
                id: submission.assignment_id,
            })?;
    if assignment.status != AssignmentStatus::Active {
        return Err(ClinicError::Validation(format!(
            "assignment {} is already completed",
            assignment.id
        )));
    }
    let therapist = tx
        .find_therapist(assignment.therapist_id)
        .await?
        .ok_or(ClinicError::NotFound {
            resource: "therapist",
            id: assignment.therapist_id,
        })?;

    let score = score_scale(&assignment.scale_id, &submission.responses)?;

    let result = ScaleResult {
        id: Uuid::new_v4(),
        assignment_id: assignment.id,
        patient_id: assignment.patient_id,
        scale_id: score.scale_id.clone(),
        total: score.total,
        responses: submission.responses.clone(),
        severity_label: score.severity.label().to_string(),
        interpretation: score.interpretation.clone(),
        completed_at: Timestamp::now(),
    };

    tx.complete_assignment(assignment.id).await?;
    tx.insert_scale_result(result.clone()).await?;
    tx.insert_notification(Notification::new(
        therapist.user_id,
        NotificationKind::ScaleCompleted,
        format!("Escala completada: {}", score.interpretation),
    ))
    .await?;

    let tier = thresholds.evaluate(&assignment.scale_id, score.total)?;
    let alert = match tier {
        AlertTier::None => None,
        AlertTier::High | AlertTier::Critical => {
            let severity = if tier == AlertTier::Critical {
                AlertSeverity::Critica
            } else {
                AlertSeverity::Alta
            };
            let alert = ClinicalAlert {
                id: Uuid::new_v4(),
                patient_id: assignment.patient_id,
                therapist_id: Some(assignment.therapist_id),
                severity,
                source: AlertSource::ScaleResult(result.id),
                message: format!("Umbral de alerta superado. {}", score.interpretation),
                resolved: false,
                created_at: Timestamp::now(),
            };
            warn!(
                patient_id = %assignment.patient_id,
                scale_id = %result.scale_id,
                total = score.total,
                tier = ?tier,
                "clinical alert raised"
            );
            tx.insert_alert(alert.clone()).await?;
            tx.insert_notification(Notification::new(
                therapist.user_id,
                NotificationKind::AlertRaised,
                alert.message.clone(),
            ))
            .await?;
            Some(alert)
        }
    };

    Ok(SubmissionOutcome { result, alert })
}
