//! # Upper-Structure Score (Iw)
//!
//! Main entry point of the detailed diagnosis (general diagnosis method 1).
//!
//! ```text
//! Iw   = edQu / Qr
//! edQu = Qu × eKfl × dK
//!   Qu   = available capacity (sum of wall strengths)
//!   eKfl = eccentricity reduction factor
//!   dK   = deterioration reduction factor
//!   Qr   = required capacity
//! ```
//!
//! Every floor is evaluated in both plan directions; the building's score is
//! the lowest of those Iw values.
//!
//! ## Example
//!
//! ```rust,no_run
//! use taishin_core::calculations::upper_structure::detailed_diagnosis;
//! # use taishin_core::building::BuildingInfo;
//! # fn building() -> BuildingInfo { unimplemented!() }
//! let info: BuildingInfo = building();
//! let result = detailed_diagnosis(&info, &[], &[]).unwrap();
//! assert_eq!(result.overall_iw, 0.0);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::building::BuildingInfo;
use crate::calculations::deterioration::{deterioration_factor, DeteriorationItem, DeteriorationResult};
use crate::calculations::eccentricity::eccentricity;
use crate::calculations::required_capacity::required_capacity;
use crate::calculations::wall_strength::{length_sum, strength_sum};
use crate::errors::{CalcError, CalcResult};
use crate::project::{DiagnosisSettings, MissingShapePolicy};
use crate::walls::{WallDirection, WallSegment};

/// Structural rating from Iw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralRating {
    /// Iw ≥ 1.5
    Safe,
    /// 1.0 ≤ Iw < 1.5
    GenerallySafe,
    /// 0.7 ≤ Iw < 1.0
    SomewhatDanger,
    /// Iw < 0.7
    CollapseRisk,
}

impl StructuralRating {
    /// Short verdict
    pub fn label(&self) -> &'static str {
        match self {
            StructuralRating::Safe => "Will not collapse",
            StructuralRating::GenerallySafe => "Probably will not collapse",
            StructuralRating::SomewhatDanger => "May collapse",
            StructuralRating::CollapseRisk => "Likely to collapse",
        }
    }

    /// Advisory text shown with the verdict
    pub fn description(&self) -> &'static str {
        match self {
            StructuralRating::Safe => "The building is safe against earthquakes.",
            StructuralRating::GenerallySafe => {
                "The building is generally safe, but a major earthquake may still cause damage."
            }
            StructuralRating::SomewhatDanger => {
                "Seismic capacity is insufficient. Consider reinforcement."
            }
            StructuralRating::CollapseRisk => {
                "Seismic capacity is severely insufficient. Reinforcement is urgently needed."
            }
        }
    }
}

impl std::fmt::Display for StructuralRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rating for an Iw value. Lower bounds are inclusive; NaN and negatives
/// rate as collapse risk.
pub fn rating(iw: f64) -> StructuralRating {
    if iw >= 1.5 {
        StructuralRating::Safe
    } else if iw >= 1.0 {
        StructuralRating::GenerallySafe
    } else if iw >= 0.7 {
        StructuralRating::SomewhatDanger
    } else {
        StructuralRating::CollapseRisk
    }
}

/// Result for one floor in one direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalResult {
    pub floor: u8,
    pub direction: WallDirection,
    /// Available capacity (kN)
    pub qu: f64,
    /// Required capacity (kN)
    pub qr: f64,
    /// Capacity after eccentricity and deterioration reduction (kN)
    pub ed_qu: f64,
    pub iw: f64,
    pub rating: StructuralRating,
    pub eccentricity_ratio: f64,
    pub eccentricity_factor: f64,
    pub deterioration_factor: f64,
}

/// Wall quantity summary for one floor and direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallDirectionSummary {
    /// Length of actual walls (m)
    pub total_length: f64,
    /// Unreduced wall strength (kN)
    pub total_strength: f64,
    /// Required capacity (kN)
    pub required: f64,
    /// total_strength / required, 0 when nothing is required
    pub ratio: f64,
}

/// Wall summaries; floor 2 entries only for multi-storey buildings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSummary {
    pub floor1_x: WallDirectionSummary,
    pub floor1_y: WallDirectionSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor2_x: Option<WallDirectionSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor2_y: Option<WallDirectionSummary>,
}

/// Complete detailed-diagnosis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedDiagnosisResult {
    pub building_info: BuildingInfo,
    /// Floor-major, X before Y
    pub directional_results: Vec<DirectionalResult>,
    /// Lowest Iw over all floors and directions
    pub overall_iw: f64,
    pub overall_rating: StructuralRating,
    pub deterioration_score: DeteriorationResult,
    pub wall_summary: WallSummary,
}

impl DetailedDiagnosisResult {
    /// The governing (lowest Iw) floor/direction; first one on ties
    pub fn weakest(&self) -> Option<&DirectionalResult> {
        self.directional_results
            .iter()
            .reduce(|weakest, r| if r.iw < weakest.iw { r } else { weakest })
    }

    /// Result for a given floor and direction
    pub fn result_for(&self, floor: u8, direction: WallDirection) -> Option<&DirectionalResult> {
        self.directional_results
            .iter()
            .find(|r| r.floor == floor && r.direction == direction)
    }
}

/// Run the detailed diagnosis with default settings.
///
/// # Errors
///
/// `CalcError::CoefficientNotFound` when the required-capacity table has no
/// entry for this building.
pub fn detailed_diagnosis(
    building: &BuildingInfo,
    walls: &[WallSegment],
    deterioration_items: &[DeteriorationItem],
) -> CalcResult<DetailedDiagnosisResult> {
    detailed_diagnosis_with_settings(building, walls, deterioration_items, &DiagnosisSettings::default())
}

/// Run the detailed diagnosis.
///
/// dK is building-wide and shared by every floor and direction. A floor
/// without a plan shape either skips the eccentricity check (eKfl = 1.0) or
/// fails, depending on `settings.missing_shape_policy`.
pub fn detailed_diagnosis_with_settings(
    building: &BuildingInfo,
    walls: &[WallSegment],
    deterioration_items: &[DeteriorationItem],
    settings: &DiagnosisSettings,
) -> CalcResult<DetailedDiagnosisResult> {
    let deterioration_score = deterioration_factor(deterioration_items);
    let dk = deterioration_score.dk;

    let mut directional_results = Vec::with_capacity(4);

    for floor in building.evaluated_floors() {
        let qr = required_capacity(floor, building)?;
        let shape = building.floor_shapes.get(floor);

        if shape.is_none() {
            match settings.missing_shape_policy {
                MissingShapePolicy::Neutral => {
                    warn!("floor {} has no plan shape; eccentricity check skipped", floor);
                }
                MissingShapePolicy::Reject => {
                    return Err(CalcError::missing_field(format!("floor_shapes.floor{}", floor)));
                }
            }
        }

        for direction in WallDirection::ALL {
            let qu = strength_sum(walls, floor, direction);

            let (eccentricity_ratio, eccentricity_factor) = match shape {
                Some(shape) => {
                    let ec = eccentricity(walls, shape, floor, direction);
                    (ec.ratio, ec.correction_factor)
                }
                None => (0.0, 1.0),
            };

            let ed_qu = qu * eccentricity_factor * dk;
            let iw = if qr > 0.0 { ed_qu / qr } else { 0.0 };

            debug!(
                "floor {} {}: Qu={:.2} Qr={:.2} Re={:.3} eKfl={:.3} dK={:.3} Iw={:.3}",
                floor, direction, qu, qr, eccentricity_ratio, eccentricity_factor, dk, iw
            );

            directional_results.push(DirectionalResult {
                floor,
                direction,
                qu,
                qr,
                ed_qu,
                iw,
                rating: rating(iw),
                eccentricity_ratio,
                eccentricity_factor,
                deterioration_factor: dk,
            });
        }
    }

    let overall_iw = directional_results
        .iter()
        .map(|r| r.iw)
        .fold(f64::INFINITY, f64::min);
    let wall_summary = build_wall_summary(walls, building)?;

    Ok(DetailedDiagnosisResult {
        building_info: building.clone(),
        directional_results,
        overall_iw,
        overall_rating: rating(overall_iw),
        deterioration_score,
        wall_summary,
    })
}

fn summarize(
    walls: &[WallSegment],
    building: &BuildingInfo,
    floor: u8,
    direction: WallDirection,
) -> CalcResult<WallDirectionSummary> {
    let total_length = length_sum(walls, floor, direction);
    let total_strength = strength_sum(walls, floor, direction);
    let required = required_capacity(floor, building)?;
    let ratio = if required > 0.0 { total_strength / required } else { 0.0 };

    Ok(WallDirectionSummary {
        total_length,
        total_strength,
        required,
        ratio,
    })
}

fn build_wall_summary(walls: &[WallSegment], building: &BuildingInfo) -> CalcResult<WallSummary> {
    let multi_storey = building.number_of_floors >= 2;
    Ok(WallSummary {
        floor1_x: summarize(walls, building, 1, WallDirection::X)?,
        floor1_y: summarize(walls, building, 1, WallDirection::Y)?,
        floor2_x: if multi_storey {
            Some(summarize(walls, building, 2, WallDirection::X)?)
        } else {
            None
        },
        floor2_y: if multi_storey {
            Some(summarize(walls, building, 2, WallDirection::Y)?)
        } else {
            None
        },
    })
}
