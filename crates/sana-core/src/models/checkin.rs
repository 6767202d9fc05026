use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Bounds for the valence and activation ratings (inclusive).
pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

/// A patient's self-reported emotional state. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalCheckIn {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub valence: i64,
    pub activation: i64,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl EmotionalCheckIn {
    /// Build a check-in, enforcing the 1–5 bounds on both ratings.
    pub fn new(
        patient_id: Uuid,
        valence: i64,
        activation: i64,
        notes: Option<String>,
    ) -> Result<Self, CoreError> {
        for (field, value) in [("valence", valence), ("activation", activation)] {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                return Err(CoreError::OutOfRange {
                    field,
                    value,
                    min: RATING_MIN,
                    max: RATING_MAX,
                });
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            patient_id,
            valence,
            activation,
            notes,
            created_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let patient = Uuid::new_v4();
        assert!(EmotionalCheckIn::new(patient, 1, 5, None).is_ok());
        assert!(EmotionalCheckIn::new(patient, 5, 1, None).is_ok());
    }

    #[test]
    fn out_of_range_ratings_rejected() {
        let patient = Uuid::new_v4();
        let err = EmotionalCheckIn::new(patient, 0, 3, None).unwrap_err();
        assert!(matches!(err, CoreError::OutOfRange { field: "valence", .. }));
        let err = EmotionalCheckIn::new(patient, 3, 6, None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::OutOfRange {
                field: "activation",
                ..
            }
        ));
    }
}
