use uuid::Uuid;

use sana_core::models::alert::ClinicalAlert;
use sana_core::models::appointment::Appointment;
use sana_core::models::checkin::EmotionalCheckIn;
use sana_core::models::notification::Notification;
use sana_core::models::person::{Patient, Therapist};
use sana_core::models::scale::{ScaleAssignment, ScaleResult};

use crate::error::StoreError;

/// The storage collaborator. `begin` opens a transaction; every workflow
/// runs its reads and writes inside one and ends it with `commit` or
/// `rollback`.
#[allow(async_fn_in_trait)]
pub trait ClinicStore {
    type Tx: ClinicTx;

    async fn begin(&self) -> Result<Self::Tx, StoreError>;
}

/// One open transaction.
///
/// Implementations must give the check-then-insert sequences at least
/// read-committed isolation with protection against concurrent writers on
/// the same therapist calendar — either row locking for the transaction's
/// lifetime or conflict detection surfaced as [`StoreError::WriteConflict`].
/// Writes become visible to other transactions only on `commit`.
#[allow(async_fn_in_trait)]
pub trait ClinicTx {
    async fn find_patient_by_user(&mut self, user_id: Uuid)
    -> Result<Option<Patient>, StoreError>;

    async fn find_therapist(&mut self, therapist_id: Uuid)
    -> Result<Option<Therapist>, StoreError>;

    /// All appointments on a therapist's calendar, regardless of status.
    /// Callers filter to the calendar-blocking ones.
    async fn appointments_for_therapist(
        &mut self,
        therapist_id: Uuid,
    ) -> Result<Vec<Appointment>, StoreError>;

    async fn insert_appointment(&mut self, appointment: Appointment) -> Result<(), StoreError>;

    async fn find_assignment(
        &mut self,
        assignment_id: Uuid,
    ) -> Result<Option<ScaleAssignment>, StoreError>;

    /// Mark an assignment completed. The assignment must exist.
    async fn complete_assignment(&mut self, assignment_id: Uuid) -> Result<(), StoreError>;

    async fn insert_scale_result(&mut self, result: ScaleResult) -> Result<(), StoreError>;

    async fn insert_alert(&mut self, alert: ClinicalAlert) -> Result<(), StoreError>;

    async fn insert_check_in(&mut self, check_in: EmotionalCheckIn) -> Result<(), StoreError>;

    async fn insert_notification(&mut self, notification: Notification) -> Result<(), StoreError>;

    async fn commit(self) -> Result<(), StoreError>;

    async fn rollback(self) -> Result<(), StoreError>;
}
