use std::collections::BTreeMap;

use jiff::Timestamp;
use uuid::Uuid;

use sana_core::models::alert::{AlertSeverity, AlertSource};
use sana_core::models::notification::NotificationKind;
use sana_core::models::person::{Patient, Therapist};
use sana_core::models::scale::{AssignmentStatus, ScaleAssignment};
use sana_scales::alerts::AlertThresholds;
use sana_storage::memory::MemoryStore;
use sana_workflows::error::ClinicError;
use sana_workflows::submissions::{ScaleSubmission, submit_scale};

const PHQ9_ITEMS: [&str; 9] = [
    "interes",
    "animo",
    "sueno",
    "cansancio",
    "apetito",
    "autoestima",
    "concentracion",
    "agitacion",
    "ideacion",
];

fn phq9_responses(total: i64) -> BTreeMap<String, i64> {
    let mut remaining = total;
    let mut map = BTreeMap::new();
    for item in PHQ9_ITEMS {
        let value = remaining.min(3);
        map.insert(item.to_string(), value);
        remaining -= value;
    }
    map
}

async fn clinic_with_assignment(scale_id: &str) -> (MemoryStore, ScaleAssignment, Therapist) {
    let store = MemoryStore::new();
    let patient = Patient {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        full_name: "Marta Ruiz".to_string(),
    };
    let therapist = Therapist {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        full_name: "Dr. Andrés Soto".to_string(),
        specialty: None,
    };
    let assignment = ScaleAssignment {
        id: Uuid::new_v4(),
        patient_id: patient.id,
        therapist_id: therapist.id,
        scale_id: scale_id.to_string(),
        due_date: jiff::civil::date(2024, 6, 15),
        status: AssignmentStatus::Active,
        created_at: Timestamp::now(),
    };
    store.seed_patient(patient).await;
    store.seed_therapist(therapist.clone()).await;
    store.seed_assignment(assignment.clone()).await;
    (store, assignment, therapist)
}

#[tokio::test]
async fn submission_persists_result_and_completes_assignment() {
    let (store, assignment, therapist) = clinic_with_assignment("phq9").await;
    let thresholds = AlertThresholds::default();

    let outcome = submit_scale(
        &store,
        &thresholds,
        &ScaleSubmission {
            assignment_id: assignment.id,
            responses: phq9_responses(8),
        },
    )
    .await
    .unwrap();

    assert_eq!(outcome.result.total, 8);
    assert_eq!(outcome.result.severity_label, "leve");
    assert!(outcome.alert.is_none());

    let state = store.snapshot().await;
    assert_eq!(state.assignments[0].status, AssignmentStatus::Completed);
    assert_eq!(state.results.len(), 1);
    assert!(state.alerts.is_empty());
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].recipient_id, therapist.user_id);
    assert_eq!(state.notifications[0].kind, NotificationKind::ScaleCompleted);
}

#[tokio::test]
async fn high_total_raises_alta_alert() {
    let (store, assignment, _) = clinic_with_assignment("phq9").await;
    let thresholds = AlertThresholds::default();

    let outcome = submit_scale(
        &store,
        &thresholds,
        &ScaleSubmission {
            assignment_id: assignment.id,
            responses: phq9_responses(16),
        },
    )
    .await
    .unwrap();

    let alert = outcome.alert.unwrap();
    assert_eq!(alert.severity, AlertSeverity::Alta);
    assert_eq!(alert.source, AlertSource::ScaleResult(outcome.result.id));
    assert_eq!(alert.therapist_id, Some(assignment.therapist_id));

    let state = store.snapshot().await;
    assert_eq!(state.alerts.len(), 1);
    // Completion notice plus the alert notice.
    assert_eq!(state.notifications.len(), 2);
    assert!(
        state
            .notifications
            .iter()
            .any(|n| n.kind == NotificationKind::AlertRaised)
    );
}

#[tokio::test]
async fn critical_total_raises_critica_alert() {
    let (store, assignment, _) = clinic_with_assignment("phq9").await;
    let thresholds = AlertThresholds::default();

    let outcome = submit_scale(
        &store,
        &thresholds,
        &ScaleSubmission {
            assignment_id: assignment.id,
            responses: phq9_responses(20),
        },
    )
    .await
    .unwrap();

    assert_eq!(outcome.alert.unwrap().severity, AlertSeverity::Critica);
}

#[tokio::test]
async fn unknown_assignment_is_not_found() {
    let store = MemoryStore::new();
    let err = submit_scale(
        &store,
        &AlertThresholds::default(),
        &ScaleSubmission {
            assignment_id: Uuid::new_v4(),
            responses: phq9_responses(5),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ClinicError::NotFound { .. }));
}

#[tokio::test]
async fn completed_assignment_cannot_be_resubmitted() {
    let (store, assignment, _) = clinic_with_assignment("phq9").await;
    let thresholds = AlertThresholds::default();
    let submission = ScaleSubmission {
        assignment_id: assignment.id,
        responses: phq9_responses(5),
    };

    submit_scale(&store, &thresholds, &submission).await.unwrap();
    let err = submit_scale(&store, &thresholds, &submission)
        .await
        .unwrap_err();
    assert!(matches!(err, ClinicError::Validation(_)));

    // The first result is the only one.
    assert_eq!(store.snapshot().await.results.len(), 1);
}

#[tokio::test]
async fn unknown_scale_rolls_back_everything() {
    let (store, assignment, _) = clinic_with_assignment("escala-inventada").await;

    let err = submit_scale(
        &store,
        &AlertThresholds::default(),
        &ScaleSubmission {
            assignment_id: assignment.id,
            responses: phq9_responses(5),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ClinicError::Scale(_)));

    let state = store.snapshot().await;
    assert_eq!(state.assignments[0].status, AssignmentStatus::Active);
    assert!(state.results.is_empty());
    assert!(state.notifications.is_empty());
}

#[tokio::test]
async fn invalid_responses_roll_back_everything() {
    let (store, assignment, _) = clinic_with_assignment("phq9").await;
    let mut responses = phq9_responses(5);
    responses.insert("ideacion".to_string(), 7);

    let err = submit_scale(
        &store,
        &AlertThresholds::default(),
        &ScaleSubmission {
            assignment_id: assignment.id,
            responses,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ClinicError::Scale(_)));

    let state = store.snapshot().await;
    assert_eq!(state.assignments[0].status, AssignmentStatus::Active);
    assert!(state.results.is_empty());
}
