//! # Diagnosis Project
//!
//! The `DiagnosisProject` struct is the root container for one house: its
//! building information, wall inventory, deterioration survey and screening
//! answers. Projects serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! DiagnosisProject
//! ├── meta: ProjectMetadata (version, id, diagnostician, timestamps)
//! ├── settings: DiagnosisSettings (standard, missing-shape policy)
//! ├── building: BuildingInfo
//! ├── walls: Vec<WallSegment>
//! ├── deterioration_items: Vec<DeteriorationItem>
//! └── simple_answers: BTreeMap<u8, String>
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use taishin_core::project::DiagnosisProject;
//! # use taishin_core::building::BuildingInfo;
//! # fn building() -> BuildingInfo { unimplemented!() }
//!
//! let project = DiagnosisProject::new("Jane Inspector", building());
//! let result = project.run_detailed().unwrap();
//! println!("Iw = {:.2}", result.overall_iw);
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::building::BuildingInfo;
use crate::calculations::deterioration::DeteriorationItem;
use crate::calculations::reinforcement::{generate_plan, ReinforcementPlan};
use crate::calculations::simple_diagnosis::{score, SimpleDiagnosisResult};
use crate::calculations::upper_structure::{detailed_diagnosis_with_settings, DetailedDiagnosisResult};
use crate::errors::{CalcError, CalcResult};
use crate::tables::default_deterioration_items;
use crate::walls::{WallDirection, WallSegment};

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisProject {
    pub meta: ProjectMetadata,

    #[serde(default)]
    pub settings: DiagnosisSettings,

    pub building: BuildingInfo,

    #[serde(default)]
    pub walls: Vec<WallSegment>,

    #[serde(default)]
    pub deterioration_items: Vec<DeteriorationItem>,

    /// Screening answers, question id → option id
    #[serde(default)]
    pub simple_answers: BTreeMap<u8, String>,
}

impl DiagnosisProject {
    /// Create a project with an empty wall inventory and a fresh
    /// deterioration checklist.
    pub fn new(diagnostician: impl Into<String>, building: BuildingInfo) -> Self {
        let now = Utc::now();
        DiagnosisProject {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                diagnostician: diagnostician.into(),
                created: now,
                modified: now,
            },
            settings: DiagnosisSettings::default(),
            building,
            walls: Vec::new(),
            deterioration_items: default_deterioration_items(),
            simple_answers: BTreeMap::new(),
        }
    }

    /// Add a wall. Walls without an id get a fresh UUID.
    ///
    /// Returns the wall's id.
    pub fn add_wall(&mut self, mut wall: WallSegment) -> String {
        if wall.id.is_empty() {
            wall.id = Uuid::new_v4().to_string();
        }
        let id = wall.id.clone();
        self.walls.push(wall);
        self.touch();
        id
    }

    /// Remove a wall by id.
    ///
    /// Returns the removed wall if it existed.
    pub fn remove_wall(&mut self, id: &str) -> Option<WallSegment> {
        let index = self.walls.iter().position(|w| w.id == id)?;
        self.touch();
        Some(self.walls.remove(index))
    }

    /// Get a wall by id.
    pub fn wall(&self, id: &str) -> Option<&WallSegment> {
        self.walls.iter().find(|w| w.id == id)
    }

    /// Walls on a floor resisting a direction
    pub fn walls_on(&self, floor: u8, direction: WallDirection) -> impl Iterator<Item = &WallSegment> {
        self.walls.iter().filter(move |w| w.is_on(floor, direction))
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Validate the building information and the wall inventory.
    ///
    /// A missing floor-2 plan shape is only an error under
    /// `MissingShapePolicy::Reject`.
    pub fn validate(&self) -> CalcResult<()> {
        let require_upper_shape = self.settings.missing_shape_policy == MissingShapePolicy::Reject;
        self.building.validate_with(require_upper_shape)?;

        for wall in &self.walls {
            if wall.floor == 0 || wall.floor > 2 {
                return Err(CalcError::invalid_input(
                    format!("walls[{}].floor", wall.id),
                    wall.floor.to_string(),
                    "Walls can only be placed on floor 1 or 2",
                ));
            }
            if wall.is_wall() && wall.length <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("walls[{}].length", wall.id),
                    wall.length.to_string(),
                    "Wall length must be positive",
                ));
            }
            if wall.wall_type == crate::tables::WallSpecType::Custom && wall.custom_base_strength.is_none() {
                return Err(CalcError::missing_field(format!("walls[{}].custom_base_strength", wall.id)));
            }
        }
        Ok(())
    }

    /// Run the detailed diagnosis on the current data.
    pub fn run_detailed(&self) -> CalcResult<DetailedDiagnosisResult> {
        detailed_diagnosis_with_settings(&self.building, &self.walls, &self.deterioration_items, &self.settings)
    }

    /// Run the detailed diagnosis and derive a reinforcement plan from it.
    pub fn run_plan(&self) -> CalcResult<(DetailedDiagnosisResult, ReinforcementPlan)> {
        let result = self.run_detailed()?;
        let plan = generate_plan(&result);
        Ok((result, plan))
    }

    /// Score the screening answers, if any were given.
    pub fn run_simple(&self) -> Option<SimpleDiagnosisResult> {
        if self.simple_answers.is_empty() {
            None
        } else {
            Some(score(&self.simple_answers))
        }
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub id: Uuid,

    /// Name of the person performing the diagnosis
    pub diagnostician: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// What to do when a floor taking part in the diagnosis has no plan shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingShapePolicy {
    /// Skip the eccentricity check for that floor (eKfl = 1.0)
    #[default]
    Neutral,
    /// Fail the run with `CalcError::MissingField`
    Reject,
}

/// Per-project diagnosis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisSettings {
    /// Diagnosis standard the project follows
    pub standard: String,

    #[serde(default)]
    pub missing_shape_policy: MissingShapePolicy,
}

impl Default for DiagnosisSettings {
    fn default() -> Self {
        DiagnosisSettings {
            standard: "2012-general-method".to_string(),
            missing_shape_policy: MissingShapePolicy::Neutral,
        }
    }
}
