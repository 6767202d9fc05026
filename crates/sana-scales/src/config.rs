use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::alerts::{AlertThresholds, ThresholdPair};
use crate::error::ConfigError;
use crate::normalize_scale_id;

/// Partial threshold overrides, as deserialized from the override file.
///
/// Example:
/// ```json
/// { "scales": { "phq9": { "critical": 18 } } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdOverrides {
    #[serde(default)]
    pub scales: BTreeMap<String, ThresholdOverride>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdOverride {
    #[serde(default)]
    pub high: Option<i64>,
    #[serde(default)]
    pub critical: Option<i64>,
}

impl AlertThresholds {
    /// Defaults with a set of overrides merged on top. Overriding a scale
    /// the table does not know is a configuration error, not a way to
    /// register new scales.
    pub fn with_overrides(overrides: &ThresholdOverrides) -> Result<Self, ConfigError> {
        let mut thresholds = Self::default();

        for (name, over) in &overrides.scales {
            let id = normalize_scale_id(name);
            let current = thresholds
                .get(&id)
                .ok_or_else(|| ConfigError::UnknownScale(name.clone()))?;
            thresholds.set(
                id,
                ThresholdPair {
                    high: over.high.unwrap_or(current.high),
                    critical: over.critical.unwrap_or(current.critical),
                },
            );
        }

        Ok(thresholds)
    }

    /// Load the threshold table, applying overrides from a JSON file when
    /// one exists at `path`. A missing file means defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let overrides: ThresholdOverrides = serde_json::from_str(&contents)?;
        let thresholds = Self::with_overrides(&overrides)?;

        info!(path = %path.display(), "alert threshold overrides loaded");
        Ok(thresholds)
    }
}
