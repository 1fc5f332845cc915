//! # Building Information
//!
//! Immutable per-run description of the house being diagnosed: construction
//! method, age, storeys, roof weight class, foundation, ground, seismic region
//! and per-floor footprint.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "construction_method": "conventional",
//!   "build_year": 1978,
//!   "number_of_floors": 2,
//!   "roof_weight": "heavy",
//!   "foundation_type": "unreinforced_concrete",
//!   "ground_type": "normal",
//!   "region_coefficient_z": 1.0,
//!   "snow_depth_m": 0.0,
//!   "floor_areas": { "floor1": 60.0, "floor2": 50.0 },
//!   "floor_shapes": {
//!     "floor1": { "width": 9100.0, "depth": 7280.0, "is_regular": true },
//!     "floor2": { "width": 7280.0, "depth": 7280.0, "is_regular": true }
//!   },
//!   "diagnosis_date": "2024-04-01"
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Maximum number of storeys covered by the general diagnosis method
pub const MAX_FLOORS: u8 = 3;

/// Structural system of the house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionMethod {
    /// Conventional post-and-beam framing (zairai jikugumi)
    #[default]
    Conventional,
    /// Platform framing (2x4)
    #[serde(alias = "2x4")]
    PlatformFrame,
}

impl ConstructionMethod {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConstructionMethod::Conventional => "Conventional post-and-beam",
            ConstructionMethod::PlatformFrame => "Platform frame (2x4)",
        }
    }
}

/// Roof weight class used by the required-capacity table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofWeight {
    /// Clay tile and similar
    Heavy,
    /// Slate / cement tile
    Moderate,
    /// Metal sheet
    Light,
}

impl RoofWeight {
    /// All roof weight variants for UI selection
    pub const ALL: [RoofWeight; 3] = [RoofWeight::Heavy, RoofWeight::Moderate, RoofWeight::Light];

    /// Short code matching the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            RoofWeight::Heavy => "heavy",
            RoofWeight::Moderate => "moderate",
            RoofWeight::Light => "light",
        }
    }
}

impl std::fmt::Display for RoofWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Foundation construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundationType {
    /// Reinforced concrete strip footing
    RebarConcreteSpread,
    /// Unreinforced concrete strip footing
    UnreinforcedConcrete,
    /// Reinforced concrete mat
    RebarConcreteMat,
    /// Posts on loose stones
    Stone,
    Other,
}

impl FoundationType {
    /// Foundations considered seismically weak
    pub fn is_weak(&self) -> bool {
        matches!(self, FoundationType::Stone | FoundationType::UnreinforcedConcrete)
    }

    /// Any concrete strip or mat foundation
    pub fn is_concrete(&self) -> bool {
        matches!(
            self,
            FoundationType::RebarConcreteSpread
                | FoundationType::RebarConcreteMat
                | FoundationType::UnreinforcedConcrete
        )
    }
}

/// Ground classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundType {
    Good,
    Normal,
    /// Soft ground amplifies the required capacity
    Soft,
}

impl GroundType {
    /// Ground amplification factor applied to the required capacity
    pub fn factor(&self) -> f64 {
        match self {
            GroundType::Good => 1.0,
            GroundType::Normal => 1.0,
            GroundType::Soft => 1.5,
        }
    }
}

/// Rectangular plan of one floor, in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorShape {
    /// Extent along X (mm)
    pub width: f64,
    /// Extent along Y (mm)
    pub depth: f64,
    /// Whether the plan is close to a plain rectangle
    pub is_regular: bool,
}

impl FloorShape {
    pub fn new(width: f64, depth: f64) -> Self {
        FloorShape {
            width,
            depth,
            is_regular: true,
        }
    }
}

/// Footprint area per floor (m²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FloorAreas {
    pub floor1: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor3: Option<f64>,
}

impl FloorAreas {
    /// Area of the given floor, 0.0 when not recorded
    pub fn get(&self, floor: u8) -> f64 {
        match floor {
            1 => self.floor1,
            2 => self.floor2.unwrap_or(0.0),
            3 => self.floor3.unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

/// Plan shapes for the floors that take part in the eccentricity check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorShapes {
    pub floor1: FloorShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor2: Option<FloorShape>,
}

impl FloorShapes {
    /// Shape of the given floor if recorded
    pub fn get(&self, floor: u8) -> Option<&FloorShape> {
        match floor {
            1 => Some(&self.floor1),
            2 => self.floor2.as_ref(),
            _ => None,
        }
    }
}

/// Building-wide information for one diagnosis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingInfo {
    #[serde(default)]
    pub construction_method: ConstructionMethod,

    /// Year of construction
    pub build_year: i32,

    /// Number of storeys (1-3)
    pub number_of_floors: u8,

    pub roof_weight: RoofWeight,

    pub foundation_type: FoundationType,

    pub ground_type: GroundType,

    /// Seismic region coefficient Z (typically 0.7-1.0)
    pub region_coefficient_z: f64,

    /// Design snow depth (m)
    #[serde(default)]
    pub snow_depth_m: f64,

    pub floor_areas: FloorAreas,

    pub floor_shapes: FloorShapes,

    pub diagnosis_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
}

impl BuildingInfo {
    /// Floors evaluated by the detailed diagnosis (the method covers floor 1 and floor 2)
    pub fn evaluated_floors(&self) -> Vec<u8> {
        if self.number_of_floors >= 2 {
            vec![1, 2]
        } else {
            vec![1]
        }
    }

    /// Validate input parameters.
    ///
    /// The calculation functions do not call this; it is the caller's gate.
    pub fn validate(&self) -> CalcResult<()> {
        self.validate_with(true)
    }

    /// Validate input parameters, accepting a missing floor-2 plan shape
    /// unless `require_upper_shape` is set.
    pub fn validate_with(&self, require_upper_shape: bool) -> CalcResult<()> {
        if self.number_of_floors == 0 || self.number_of_floors > MAX_FLOORS {
            return Err(CalcError::invalid_input(
                "number_of_floors",
                self.number_of_floors.to_string(),
                "Number of floors must be between 1 and 3",
            ));
        }
        if self.region_coefficient_z <= 0.0 {
            return Err(CalcError::invalid_input(
                "region_coefficient_z",
                self.region_coefficient_z.to_string(),
                "Region coefficient must be positive",
            ));
        }
        if self.snow_depth_m < 0.0 {
            return Err(CalcError::invalid_input(
                "snow_depth_m",
                self.snow_depth_m.to_string(),
                "Snow depth cannot be negative",
            ));
        }

        let areas = [
            ("floor_areas.floor1", Some(self.floor_areas.floor1)),
            ("floor_areas.floor2", self.floor_areas.floor2),
            ("floor_areas.floor3", self.floor_areas.floor3),
        ];
        for (floor, (field, area)) in (1u8..).zip(areas) {
            match area {
                Some(a) if a < 0.0 => {
                    return Err(CalcError::invalid_input(field, a.to_string(), "Floor area cannot be negative"));
                }
                None if floor <= self.number_of_floors => {
                    return Err(CalcError::missing_field(field));
                }
                _ => {}
            }
        }

        if require_upper_shape && self.number_of_floors >= 2 && self.floor_shapes.floor2.is_none() {
            return Err(CalcError::missing_field("floor_shapes.floor2"));
        }
        for floor in 1..=2u8 {
            if let Some(shape) = self.floor_shapes.get(floor) {
                if shape.width <= 0.0 || shape.depth <= 0.0 {
                    return Err(CalcError::invalid_input(
                        format!("floor_shapes.floor{}", floor),
                        format!("{} x {}", shape.width, shape.depth),
                        "Plan dimensions must be positive",
                    ));
                }
            }
        }
        Ok(())
    }
}
