use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;
use crate::normalize_scale_id;

/// Alert tier for a scale total. Critical takes precedence over high when
/// both thresholds are met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertTier {
    None,
    High,
    Critical,
}

/// Inclusive lower bounds for the high and critical tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub high: i64,
    pub critical: i64,
}

/// The single threshold table for the whole system.
///
/// Every caller that raises alerts evaluates through this table, so the
/// tier for a given (scale, score) pair has exactly one answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertThresholds {
    table: BTreeMap<String, ThresholdPair>,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        let mut table = BTreeMap::new();
        table.insert(
            "phq9".to_string(),
            ThresholdPair {
                high: 15,
                critical: 20,
            },
        );
        table.insert(
            "gad7".to_string(),
            ThresholdPair {
                high: 10,
                critical: 15,
            },
        );
        Self { table }
    }
}

impl AlertThresholds {
    /// Map a (scale, total) pair to an alert tier.
    pub fn evaluate(&self, scale_name: &str, total: i64) -> Result<AlertTier, ScaleError> {
        let id = normalize_scale_id(scale_name);
        let pair = self
            .table
            .get(&id)
            .ok_or_else(|| ScaleError::UnknownScale(scale_name.to_string()))?;

        if total >= pair.critical {
            Ok(AlertTier::Critical)
        } else if total >= pair.high {
            Ok(AlertTier::High)
        } else {
            Ok(AlertTier::None)
        }
    }

    pub fn get(&self, scale_name: &str) -> Option<ThresholdPair> {
        self.table.get(&normalize_scale_id(scale_name)).copied()
    }

    pub(crate) fn set(&mut self, scale_id: String, pair: ThresholdPair) {
        self.table.insert(scale_id, pair);
    }
}
