use uuid::Uuid;

use sana_core::models::alert::{AlertSeverity, AlertSource};
use sana_core::models::person::Patient;
use sana_storage::memory::MemoryStore;
use sana_workflows::checkins::{CheckInRequest, record_check_in};
use sana_workflows::error::ClinicError;

async fn clinic() -> (MemoryStore, Patient) {
    let store = MemoryStore::new();
    let patient = Patient {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        full_name: "Marta Ruiz".to_string(),
    };
    store.seed_patient(patient.clone()).await;
    (store, patient)
}

#[tokio::test]
async fn check_in_is_persisted() {
    let (store, patient) = clinic().await;

    let outcome = record_check_in(
        &store,
        &CheckInRequest {
            user_id: patient.user_id,
            valence: 4,
            activation: 2,
            notes: Some("Mejor semana".to_string()),
        },
    )
    .await
    .unwrap();

    assert!(outcome.alert.is_none());
    let state = store.snapshot().await;
    assert_eq!(state.check_ins.len(), 1);
    assert_eq!(state.check_ins[0].patient_id, patient.id);
    assert!(state.alerts.is_empty());
}

#[tokio::test]
async fn out_of_range_valence_is_rejected() {
    let (store, patient) = clinic().await;

    for valence in [0, 6] {
        let err = record_check_in(
            &store,
            &CheckInRequest {
                user_id: patient.user_id,
                valence,
                activation: 3,
                notes: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ClinicError::Validation(_)));
    }

    assert!(store.snapshot().await.check_ins.is_empty());
}

#[tokio::test]
async fn lowest_valence_raises_media_alert() {
    let (store, patient) = clinic().await;

    let outcome = record_check_in(
        &store,
        &CheckInRequest {
            user_id: patient.user_id,
            valence: 1,
            activation: 2,
            notes: None,
        },
    )
    .await
    .unwrap();

    let alert = outcome.alert.unwrap();
    assert_eq!(alert.severity, AlertSeverity::Media);
    assert_eq!(alert.source, AlertSource::CheckIn(outcome.check_in.id));
    assert_eq!(store.snapshot().await.alerts.len(), 1);
}

#[tokio::test]
async fn unknown_patient_is_not_found() {
    let store = MemoryStore::new();
    let err = record_check_in(
        &store,
        &CheckInRequest {
            user_id: Uuid::new_v4(),
            valence: 3,
            activation: 3,
            notes: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ClinicError::NotFound { .. }));
}
