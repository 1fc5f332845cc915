//! # Wall Strength
//!
//! Shear capacity of single walls and of all walls on a floor in one
//! direction (Qu).
//!
//! ```text
//! Qw = Fw × L × Kj
//!   Fw = base strength (kN/m)
//!   L  = wall length (m)
//!   Kj = joint reduction factor
//! ```
//!
//! A back-surface finish adds its own `Fw × L × Kj`.
//!
//! ## Example
//!
//! ```rust
//! use taishin_core::calculations::wall_strength::single_wall_strength;
//! use taishin_core::tables::WallSpecType;
//! use taishin_core::walls::{WallDirection, WallSegment};
//!
//! let wall = WallSegment::new("w1", 1, WallDirection::X, WallSpecType::Brace45x90Single, 1.0);
//! assert!((single_wall_strength(&wall) - 5.88).abs() < 1e-9);
//! ```

use crate::tables::WallSpecType;
use crate::walls::{WallDirection, WallSegment};

/// Shear capacity of one wall (kN).
///
/// A `custom` wall without `custom_base_strength` counts as 0. A `custom`
/// back surface also counts as 0: there is no field carrying its strength.
pub fn single_wall_strength(wall: &WallSegment) -> f64 {
    if !wall.is_wall() {
        return 0.0;
    }

    let kj = wall.joint_spec.reduction_factor();
    let mut strength = base_strength(wall) * wall.length * kj;

    if let Some(back) = wall.back_surface {
        // None and Custom both have no table value
        if let Some(back_fw) = back.base_strength() {
            strength += back_fw * wall.length * kj;
        }
    }

    strength
}

fn base_strength(wall: &WallSegment) -> f64 {
    match wall.wall_type {
        WallSpecType::Custom => wall.custom_base_strength.unwrap_or(0.0),
        other => other.base_strength().unwrap_or(0.0),
    }
}

/// Available capacity Qu of a floor in one direction (kN)
pub fn strength_sum(walls: &[WallSegment], floor: u8, direction: WallDirection) -> f64 {
    walls
        .iter()
        .filter(|w| w.is_on(floor, direction))
        .map(single_wall_strength)
        .sum()
}

/// Total length of actual walls on a floor in one direction (m).
///
/// Openings (`none`) are excluded.
pub fn length_sum(walls: &[WallSegment], floor: u8, direction: WallDirection) -> f64 {
    walls
        .iter()
        .filter(|w| w.is_on(floor, direction) && w.is_wall())
        .map(|w| w.length)
        .sum()
}
