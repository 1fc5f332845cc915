//! # Wall Segments
//!
//! One record per shear-resisting wall run, as entered from the floor plan.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "id": "w-1",
//!   "floor": 1,
//!   "direction": "X",
//!   "wall_type": "brace_45x90_single",
//!   "length": 1.82,
//!   "height": 2.7,
//!   "joint_spec": "hardware_complete",
//!   "position_x": 910.0,
//!   "position_y": 0.0,
//!   "back_surface": "gypsum_12"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::tables::{JointSpec, WallSpecType};

/// Default storey height (m)
pub const DEFAULT_WALL_HEIGHT_M: f64 = 2.7;

/// In-plane direction a wall resists lateral force in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WallDirection {
    X,
    Y,
}

impl WallDirection {
    pub const ALL: [WallDirection; 2] = [WallDirection::X, WallDirection::Y];

    /// The other plan direction
    pub fn perpendicular(&self) -> WallDirection {
        match self {
            WallDirection::X => WallDirection::Y,
            WallDirection::Y => WallDirection::X,
        }
    }
}

impl std::fmt::Display for WallDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WallDirection::X => write!(f, "X"),
            WallDirection::Y => write!(f, "Y"),
        }
    }
}

fn default_height() -> f64 {
    DEFAULT_WALL_HEIGHT_M
}

/// A single wall run.
///
/// Positions are plan coordinates in millimetres and act as moment arms for
/// the centre-of-rigidity calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    /// Identifier, unique within a project
    #[serde(default)]
    pub id: String,

    /// Floor the wall stands on (1 or 2)
    pub floor: u8,

    pub direction: WallDirection,

    pub wall_type: WallSpecType,

    /// Wall length (m)
    pub length: f64,

    /// Wall height (m)
    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default)]
    pub joint_spec: JointSpec,

    /// X coordinate (mm)
    #[serde(default)]
    pub position_x: f64,

    /// Y coordinate (mm)
    #[serde(default)]
    pub position_y: f64,

    /// Base strength (kN/m) used when `wall_type` is `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_base_strength: Option<f64>,

    /// Finish on the back face, adding its own base strength
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_surface: Option<WallSpecType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WallSegment {
    /// Create a wall with full hardware, default height and no back finish.
    pub fn new(
        id: impl Into<String>,
        floor: u8,
        direction: WallDirection,
        wall_type: WallSpecType,
        length: f64,
    ) -> Self {
        WallSegment {
            id: id.into(),
            floor,
            direction,
            wall_type,
            length,
            height: DEFAULT_WALL_HEIGHT_M,
            joint_spec: JointSpec::HardwareComplete,
            position_x: 0.0,
            position_y: 0.0,
            custom_base_strength: None,
            back_surface: None,
            note: None,
        }
    }

    /// Builder: set the plan position (mm)
    pub fn at(mut self, position_x: f64, position_y: f64) -> Self {
        self.position_x = position_x;
        self.position_y = position_y;
        self
    }

    /// Builder: set the joint detail
    pub fn with_joint(mut self, joint_spec: JointSpec) -> Self {
        self.joint_spec = joint_spec;
        self
    }

    /// Builder: set the back-surface finish
    pub fn with_back_surface(mut self, back_surface: WallSpecType) -> Self {
        self.back_surface = Some(back_surface);
        self
    }

    /// Builder: set a custom base strength (kN/m)
    pub fn with_custom_strength(mut self, base_strength: f64) -> Self {
        self.custom_base_strength = Some(base_strength);
        self
    }

    /// Whether this wall is on the given floor and resists the given direction
    pub fn is_on(&self, floor: u8, direction: WallDirection) -> bool {
        self.floor == floor && self.direction == direction
    }

    /// Whether the record is an actual wall rather than an opening
    pub fn is_wall(&self) -> bool {
        self.wall_type != WallSpecType::None
    }

    /// Coordinate along the given plan axis (mm)
    pub fn position_along(&self, axis: WallDirection) -> f64 {
        match axis {
            WallDirection::X => self.position_x,
            WallDirection::Y => self.position_y,
        }
    }
}
