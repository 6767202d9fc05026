use jiff::Timestamp;
use uuid::Uuid;

use sana_core::models::appointment::{Appointment, AppointmentStatus};
use sana_core::models::person::Patient;
use sana_core::models::scale::{AssignmentStatus, ScaleAssignment};
use sana_core::token;
use sana_storage::memory::MemoryStore;
use sana_storage::store::{ClinicStore, ClinicTx};

fn appointment(therapist_id: Uuid) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        therapist_id,
        start: "2024-06-01T10:00:00Z".parse::<Timestamp>().unwrap(),
        duration_minutes: 60,
        status: AppointmentStatus::Scheduled,
        reason: None,
        session_token: token::new_session_token(),
        created_at: Timestamp::now(),
    }
}

#[tokio::test]
async fn staged_writes_are_invisible_until_commit() {
    let store = MemoryStore::new();
    let therapist_id = Uuid::new_v4();

    let mut tx = store.begin().await.unwrap();
    tx.insert_appointment(appointment(therapist_id))
        .await
        .unwrap();

    // Still invisible: the write is only staged.
    let visible = tx.appointments_for_therapist(therapist_id).await.unwrap();
    assert!(visible.is_empty());

    tx.commit().await.unwrap();
    assert_eq!(store.snapshot().await.appointments.len(), 1);
}

#[tokio::test]
async fn rollback_discards_staged_writes() {
    let store = MemoryStore::new();
    let therapist_id = Uuid::new_v4();

    let mut tx = store.begin().await.unwrap();
    tx.insert_appointment(appointment(therapist_id))
        .await
        .unwrap();
    tx.rollback().await.unwrap();

    assert!(store.snapshot().await.appointments.is_empty());
}

#[tokio::test]
async fn completing_an_assignment_applies_on_commit() {
    let store = MemoryStore::new();
    let assignment = ScaleAssignment {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        therapist_id: Uuid::new_v4(),
        scale_id: "phq9".to_string(),
        due_date: jiff::civil::date(2024, 6, 15),
        status: AssignmentStatus::Active,
        created_at: Timestamp::now(),
    };
    store.seed_assignment(assignment.clone()).await;

    let mut tx = store.begin().await.unwrap();
    tx.complete_assignment(assignment.id).await.unwrap();
    tx.commit().await.unwrap();

    let state = store.snapshot().await;
    assert_eq!(state.assignments[0].status, AssignmentStatus::Completed);
}

#[tokio::test]
async fn completing_a_missing_assignment_fails() {
    let store = MemoryStore::new();
    let mut tx = store.begin().await.unwrap();
    assert!(tx.complete_assignment(Uuid::new_v4()).await.is_err());
    tx.rollback().await.unwrap();
}

#[tokio::test]
async fn reads_see_previously_committed_state() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();
    store
        .seed_patient(Patient {
            id: Uuid::new_v4(),
            user_id,
            full_name: "Lucía Fernández".to_string(),
        })
        .await;

    let mut tx = store.begin().await.unwrap();
    let found = tx.find_patient_by_user(user_id).await.unwrap();
    tx.rollback().await.unwrap();

    assert_eq!(found.unwrap().full_name, "Lucía Fernández");
}
