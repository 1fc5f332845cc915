//! # Deterioration Factor
//!
//! Degradation reduction factor dK from the deterioration survey:
//!
//! ```text
//! dK = max(0.7, 1 − Σ checked points / Σ existing points)
//! ```
//!
//! Only building parts that exist take part. With no applicable items there
//! is no reduction (dK = 1.0).

use serde::{Deserialize, Serialize};

/// Lower clamp of dK
pub const MIN_DETERIORATION_FACTOR: f64 = 0.7;

/// Building part a checklist item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeteriorationCategory {
    Foundation,
    ExteriorWall,
    Roof,
    LivingRoom,
    Bathroom,
    Balcony,
    Gutter,
    Attic,
    UnderFloor,
}

/// One inspection checkpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeteriorationItem {
    pub id: String,
    pub category: DeteriorationCategory,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Weight of the item
    pub points: u32,
    /// Degradation observed
    pub checked: bool,
    /// The building part is physically present
    pub exists: bool,
}

/// Deterioration survey totals and resulting dK
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeteriorationResult {
    /// Snapshot of the surveyed items
    pub items: Vec<DeteriorationItem>,
    pub total_deterioration_points: u32,
    pub total_existence_points: u32,
    /// Reduction factor, within [0.7, 1.0]
    pub dk: f64,
}

impl DeteriorationResult {
    /// Number of existing items with observed degradation
    pub fn deteriorated_count(&self) -> usize {
        self.items.iter().filter(|i| i.exists && i.checked).count()
    }
}

/// Compute dK from the survey items.
pub fn deterioration_factor(items: &[DeteriorationItem]) -> DeteriorationResult {
    let existing = items.iter().filter(|i| i.exists);

    // Totals saturate at u32::MAX
    let (total_existence_points, total_deterioration_points) =
        existing.fold((0u32, 0u32), |(exist, det), item| {
            let det = if item.checked { det.saturating_add(item.points) } else { det };
            (exist.saturating_add(item.points), det)
        });

    let dk = if total_existence_points == 0 {
        1.0
    } else {
        let raw = 1.0 - f64::from(total_deterioration_points) / f64::from(total_existence_points);
        raw.max(MIN_DETERIORATION_FACTOR)
    };

    DeteriorationResult {
        items: items.to_vec(),
        total_deterioration_points,
        total_existence_points,
        dk,
    }
}
