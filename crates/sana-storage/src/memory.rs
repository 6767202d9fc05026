use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;
use uuid::Uuid;

use sana_core::models::alert::ClinicalAlert;
use sana_core::models::appointment::Appointment;
use sana_core::models::checkin::EmotionalCheckIn;
use sana_core::models::notification::Notification;
use sana_core::models::person::{Patient, Therapist};
use sana_core::models::scale::{AssignmentStatus, ScaleAssignment, ScaleResult};

use crate::error::StoreError;
use crate::store::{ClinicStore, ClinicTx};

/// The committed state of the clinic.
#[derive(Debug, Clone, Default)]
pub struct ClinicState {
    pub patients: Vec<Patient>,
    pub therapists: Vec<Therapist>,
    pub appointments: Vec<Appointment>,
    pub assignments: Vec<ScaleAssignment>,
    pub results: Vec<ScaleResult>,
    pub alerts: Vec<ClinicalAlert>,
    pub check_ins: Vec<EmotionalCheckIn>,
    pub notifications: Vec<Notification>,
}

/// In-memory store with serializable transactions.
///
/// A transaction holds the state mutex for its whole lifetime, so
/// concurrent check-then-insert sequences — two bookings racing for the
/// same slot — execute one after the other. Writes are staged and applied
/// only on commit; rollback drops them.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<ClinicState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed_patient(&self, patient: Patient) {
        self.state.lock().await.patients.push(patient);
    }

    pub async fn seed_therapist(&self, therapist: Therapist) {
        self.state.lock().await.therapists.push(therapist);
    }

    pub async fn seed_appointment(&self, appointment: Appointment) {
        self.state.lock().await.appointments.push(appointment);
    }

    pub async fn seed_assignment(&self, assignment: ScaleAssignment) {
        self.state.lock().await.assignments.push(assignment);
    }

    /// A clone of the committed state, for inspection.
    pub async fn snapshot(&self) -> ClinicState {
        self.state.lock().await.clone()
    }
}

#[derive(Default)]
struct Staged {
    appointments: Vec<Appointment>,
    results: Vec<ScaleResult>,
    alerts: Vec<ClinicalAlert>,
    check_ins: Vec<EmotionalCheckIn>,
    notifications: Vec<Notification>,
    completed_assignments: Vec<Uuid>,
}

pub struct MemoryTx {
    guard: OwnedMutexGuard<ClinicState>,
    staged: Staged,
}

impl ClinicStore for MemoryStore {
    type Tx = MemoryTx;

    async fn begin(&self) -> Result<MemoryTx, StoreError> {
        Ok(MemoryTx {
            guard: self.state.clone().lock_owned().await,
            staged: Staged::default(),
        })
    }
}

impl ClinicTx for MemoryTx {
    async fn find_patient_by_user(
        &mut self,
        user_id: Uuid,
    ) -> Result<Option<Patient>, StoreError> {
        Ok(self
            .guard
            .patients
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn find_therapist(
        &mut self,
        therapist_id: Uuid,
    ) -> Result<Option<Therapist>, StoreError> {
        Ok(self
            .guard
            .therapists
            .iter()
            .find(|t| t.id == therapist_id)
            .cloned())
    }

    async fn appointments_for_therapist(
        &mut self,
        therapist_id: Uuid,
    ) -> Result<Vec<Appointment>, StoreError> {
        Ok(self
            .guard
            .appointments
            .iter()
            .filter(|a| a.therapist_id == therapist_id)
            .cloned()
            .collect())
    }

    async fn insert_appointment(&mut self, appointment: Appointment) -> Result<(), StoreError> {
        self.staged.appointments.push(appointment);
        Ok(())
    }

    async fn find_assignment(
        &mut self,
        assignment_id: Uuid,
    ) -> Result<Option<ScaleAssignment>, StoreError> {
        Ok(self
            .guard
            .assignments
            .iter()
            .find(|a| a.id == assignment_id)
            .cloned())
    }

    async fn complete_assignment(&mut self, assignment_id: Uuid) -> Result<(), StoreError> {
        if !self.guard.assignments.iter().any(|a| a.id == assignment_id) {
            return Err(StoreError::Query(format!(
                "assignment {assignment_id} does not exist"
            )));
        }
        self.staged.completed_assignments.push(assignment_id);
        Ok(())
    }

    async fn insert_scale_result(&mut self, result: ScaleResult) -> Result<(), StoreError> {
        self.staged.results.push(result);
        Ok(())
    }

    async fn insert_alert(&mut self, alert: ClinicalAlert) -> Result<(), StoreError> {
        self.staged.alerts.push(alert);
        Ok(())
    }

    async fn insert_check_in(&mut self, check_in: EmotionalCheckIn) -> Result<(), StoreError> {
        self.staged.check_ins.push(check_in);
        Ok(())
    }

    async fn insert_notification(&mut self, notification: Notification) -> Result<(), StoreError> {
        self.staged.notifications.push(notification);
        Ok(())
    }

    async fn commit(mut self) -> Result<(), StoreError> {
        debug!(
            appointments = self.staged.appointments.len(),
            results = self.staged.results.len(),
            alerts = self.staged.alerts.len(),
            check_ins = self.staged.check_ins.len(),
            notifications = self.staged.notifications.len(),
            "committing staged writes"
        );
        let state = &mut *self.guard;

        for id in &self.staged.completed_assignments {
            match state.assignments.iter_mut().find(|a| a.id == *id) {
                Some(assignment) => assignment.status = AssignmentStatus::Completed,
                None => {
                    return Err(StoreError::Commit(format!(
                        "assignment {id} vanished before commit"
                    )));
                }
            }
        }

        state.appointments.append(&mut self.staged.appointments);
        state.results.append(&mut self.staged.results);
        state.alerts.append(&mut self.staged.alerts);
        state.check_ins.append(&mut self.staged.check_ins);
        state.notifications.append(&mut self.staged.notifications);
        Ok(())
    }

    async fn rollback(self) -> Result<(), StoreError> {
        // Staged writes are dropped with the transaction.
        Ok(())
    }
}
