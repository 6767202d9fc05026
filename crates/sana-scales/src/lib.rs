//! sana-scales
//!
//! Clinical scale definitions and scoring. Pure data and arithmetic — no
//! storage dependency. Defines the items, scoring breakpoints, and alert
//! thresholds for each supported scale.

pub mod alerts;
pub mod config;
pub mod error;
pub mod scales;
pub mod scoring;

use std::collections::BTreeMap;

use error::ScaleError;
use scoring::{ScaleItem, ScaleScore, Severity};

/// Trait implemented by each clinical scale.
pub trait Scale: Send + Sync {
    /// Canonical identifier for this scale (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9", "GAD-7").
    fn name(&self) -> &str;

    /// The items this scale administers, in presentation order.
    fn items(&self) -> &[ScaleItem];

    /// Classify a total score into a severity tier.
    fn classify(&self, total: i64) -> Severity;

    /// Automatic interpretation text for a total score.
    fn interpretation(&self, total: i64) -> String {
        format!(
            "{}: puntuación total {} — severidad {}",
            self.name(),
            total,
            self.classify(total).label(),
        )
    }
}

/// Normalize a caller-supplied scale name to its canonical id.
/// "PHQ-9", "phq_9", and "phq9" all resolve to "phq9".
pub fn normalize_scale_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Return all registered scales.
pub fn all_scales() -> Vec<Box<dyn Scale>> {
    vec![
        Box::new(scales::phq9::Phq9),
        Box::new(scales::gad7::Gad7),
    ]
}

/// Look up a scale by name. Accepts any spelling that normalizes to a
/// registered id.
pub fn get_scale(name: &str) -> Option<Box<dyn Scale>> {
    let id = normalize_scale_id(name);
    all_scales().into_iter().find(|s| s.id() == id)
}

/// Score one completed administration of a scale.
///
/// The total is the sum of all response values. Every item must be
/// answered, every response must name a known item, and every value must
/// lie within the item's range.
pub fn score_scale(
    scale_name: &str,
    responses: &BTreeMap<String, i64>,
) -> Result<ScaleScore, ScaleError> {
    let scale =
        get_scale(scale_name).ok_or_else(|| ScaleError::UnknownScale(scale_name.to_string()))?;

    let items = scale.items();
    let mut total = 0i64;

    for (item_id, value) in responses {
        let item = items
            .iter()
            .find(|i| i.id == *item_id)
            .ok_or_else(|| ScaleError::UnknownItem {
                scale_id: scale.id().to_string(),
                item_id: item_id.clone(),
            })?;
        if *value < item.min || *value > item.max {
            return Err(ScaleError::ResponseOutOfRange {
                scale_id: scale.id().to_string(),
                item_id: item_id.clone(),
                value: *value,
                min: item.min,
                max: item.max,
            });
        }
        total += value;
    }

    if let Some(missing) = items.iter().find(|i| !responses.contains_key(&i.id)) {
        return Err(ScaleError::MissingItem {
            scale_id: scale.id().to_string(),
            item_id: missing.id.clone(),
        });
    }

    let severity = scale.classify(total);
    Ok(ScaleScore {
        scale_id: scale.id().to_string(),
        total,
        severity,
        interpretation: scale.interpretation(total),
    })
}
