//! # taishin_core - Wood House Seismic Diagnosis Engine
//!
//! `taishin_core` evaluates the earthquake resistance of Japanese wooden
//! houses following the general diagnosis method for wood houses. All
//! inputs and outputs are JSON-serializable so a front end can hold the
//! data and re-run the diagnosis on every edit.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Static Tables**: Reference data is compiled in and read-only
//!
//! ## Quick Start
//!
//! ```rust
//! use taishin_core::building::*;
//! use taishin_core::calculations::{detailed_diagnosis, generate_plan};
//! use taishin_core::tables::{default_deterioration_items, WallSpecType};
//! use taishin_core::walls::{WallDirection, WallSegment};
//!
//! let building = BuildingInfo {
//!     construction_method: ConstructionMethod::Conventional,
//!     build_year: 1978,
//!     number_of_floors: 1,
//!     roof_weight: RoofWeight::Heavy,
//!     foundation_type: FoundationType::RebarConcreteSpread,
//!     ground_type: GroundType::Normal,
//!     region_coefficient_z: 1.0,
//!     snow_depth_m: 0.0,
//!     floor_areas: FloorAreas { floor1: 60.0, floor2: None, floor3: None },
//!     floor_shapes: FloorShapes { floor1: FloorShape::new(9100.0, 7280.0), floor2: None },
//!     diagnosis_date: chrono::NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
//!     address: None,
//!     owner_name: None,
//! };
//!
//! let walls = vec![
//!     WallSegment::new("x1", 1, WallDirection::X, WallSpecType::Plywood9Owari, 4.55).at(4550.0, 0.0),
//!     WallSegment::new("x2", 1, WallDirection::X, WallSpecType::Plywood9Owari, 4.55).at(4550.0, 7280.0),
//!     WallSegment::new("y1", 1, WallDirection::Y, WallSpecType::Plywood9Owari, 3.64).at(0.0, 3640.0),
//!     WallSegment::new("y2", 1, WallDirection::Y, WallSpecType::Plywood9Owari, 3.64).at(9100.0, 3640.0),
//! ];
//!
//! let result = detailed_diagnosis(&building, &walls, &default_deterioration_items()).unwrap();
//! let plan = generate_plan(&result);
//! println!("Iw = {:.2} ({})", result.overall_iw, result.overall_rating);
//! println!("{} suggestions", plan.suggestions.len());
//! ```
//!
//! ## Modules
//!
//! - [`building`] - Building information and classification enums
//! - [`walls`] - Wall segments
//! - [`tables`] - Static reference tables (wall specs, coefficients, costs, questions)
//! - [`calculations`] - Diagnosis calculations
//! - [`project`] - Project container, metadata, and settings
//! - [`errors`] - Structured error types
//! - [`file_io`] - Project files with atomic saves

pub mod building;
pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod project;
pub mod tables;
pub mod walls;

// Re-export commonly used types at crate root for convenience
pub use building::BuildingInfo;
pub use calculations::{
    correction_factor, detailed_diagnosis, deterioration_factor, eccentricity, generate_plan, length_sum,
    quarter_division_ratio, rating, required_capacity, score, single_wall_strength, strength_sum,
    DetailedDiagnosisResult, ReinforcementPlan, SimpleDiagnosisResult,
};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use project::{DiagnosisProject, DiagnosisSettings, MissingShapePolicy, ProjectMetadata};
pub use walls::{WallDirection, WallSegment};
