//! # Diagnosis Calculations
//!
//! All calculations are pure functions over immutable inputs:
//!
//! - Input records (`BuildingInfo`, `WallSegment`, `DeteriorationItem`, answers)
//! - `*Result` records (JSON-serializable), built fresh on every call
//! - Only the required-capacity lookup can fail, returning `CalcError`
//!
//! ## Available Calculations
//!
//! - [`wall_strength`] - Wall shear capacity Qu
//! - [`required_capacity`] - Required capacity Qr
//! - [`eccentricity`] - Eccentricity ratio Re and reduction factor eKfl
//! - [`deterioration`] - Deterioration reduction factor dK
//! - [`upper_structure`] - Upper-structure score Iw and rating
//! - [`simple_diagnosis`] - Ten-question screening
//! - [`reinforcement`] - Reinforcement plan
//! - [`shintaishin`] - Post-1981 owner verification method

pub mod deterioration;
pub mod eccentricity;
pub mod reinforcement;
pub mod required_capacity;
pub mod shintaishin;
pub mod simple_diagnosis;
pub mod upper_structure;
pub mod wall_strength;

// Re-export commonly used types
pub use deterioration::{deterioration_factor, DeteriorationCategory, DeteriorationItem, DeteriorationResult};
pub use eccentricity::{correction_factor, eccentricity, quarter_division_ratio, EccentricityResult};
pub use reinforcement::{generate_plan, Priority, ReinforcementPlan, ReinforcementSuggestion};
pub use required_capacity::required_capacity;
pub use simple_diagnosis::{score, SimpleDiagnosisResult, SimpleRating};
pub use upper_structure::{
    detailed_diagnosis, detailed_diagnosis_with_settings, rating, DetailedDiagnosisResult, DirectionalResult,
    StructuralRating, WallDirectionSummary, WallSummary,
};
pub use wall_strength::{length_sum, single_wall_strength, strength_sum};
