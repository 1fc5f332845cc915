//! # Reinforcement Planner
//!
//! Derives a prioritized, costed reinforcement plan from a detailed
//! diagnosis. Each rule adds at most one suggestion (the wall-deficiency rule
//! adds two); the list is then stably sorted by priority.
//!
//! | Trigger                                   | Suggestion           |
//! |-------------------------------------------|----------------------|
//! | dK < 0.9                                  | deterioration repair |
//! | overall Iw < 1.0                          | shear walls + braces |
//! | any Re > 0.15                             | wall panels          |
//! | built before 2000 and Iw < 1.5            | joint hardware       |
//! | heavy roof and Iw < 1.0                   | roof lightening      |
//! | stone or unreinforced concrete foundation | foundation repair    |

use log::debug;
use serde::{Deserialize, Serialize};

use crate::building::RoofWeight;
use crate::calculations::upper_structure::DetailedDiagnosisResult;
use crate::tables::wall_specs::WallSpecType;
use crate::tables::ReinforcementType;

/// Iw the plan aims for
pub const TARGET_IW: f64 = 1.0;

/// Ceiling for the estimated post-reinforcement Iw
pub const MAX_ESTIMATED_IW: f64 = 2.0;

/// dK below which deterioration repair is suggested
const DETERIORATION_THRESHOLD: f64 = 0.9;

/// Re above which wall panels are suggested
const ECCENTRICITY_THRESHOLD: f64 = 0.15;

/// Year of the joint-hardware revision
const JOINT_HARDWARE_YEAR: i32 = 2000;

/// Suggestion priority; sorts high first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One reinforcement suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementSuggestion {
    #[serde(rename = "type")]
    pub kind: ReinforcementType,
    pub label: String,
    pub description: String,
    pub priority: Priority,
    /// Yen
    pub estimated_cost_min: u64,
    /// Yen
    pub estimated_cost_max: u64,
    pub estimated_iw_improvement: f64,
    pub unit: String,
    pub quantity: u32,
    pub reason: String,
}

impl ReinforcementSuggestion {
    fn new(kind: ReinforcementType, priority: Priority, quantity: u32, reason: impl Into<String>) -> Self {
        let r = kind.cost_reference();
        ReinforcementSuggestion {
            kind,
            label: r.label.to_string(),
            description: r.description.to_string(),
            priority,
            estimated_cost_min: r.cost_min * u64::from(quantity),
            estimated_cost_max: r.cost_max * u64::from(quantity),
            estimated_iw_improvement: r.iw_improvement_per_unit * f64::from(quantity),
            unit: r.unit.to_string(),
            quantity,
            reason: reason.into(),
        }
    }
}

/// Complete reinforcement plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementPlan {
    pub suggestions: Vec<ReinforcementSuggestion>,
    pub total_cost_min: u64,
    pub total_cost_max: u64,
    pub current_iw: f64,
    pub estimated_iw_after: f64,
}

/// Generate the reinforcement plan for a detailed diagnosis.
pub fn generate_plan(result: &DetailedDiagnosisResult) -> ReinforcementPlan {
    let mut suggestions = Vec::new();
    let current_iw = result.overall_iw;
    let building = &result.building_info;
    let deficiency = (TARGET_IW - current_iw).max(0.0);

    if result.deterioration_score.dk < DETERIORATION_THRESHOLD {
        let count = result.deterioration_score.deteriorated_count() as u32;
        suggestions.push(ReinforcementSuggestion::new(
            ReinforcementType::DeteriorationRepair,
            Priority::High,
            count,
            format!(
                "Deterioration reduces capacity (dK = {:.2})",
                result.deterioration_score.dk
            ),
        ));
    }

    if let Some(weakest) = result.weakest().filter(|_| deficiency > 0.0) {
        let needed_strength = weakest.qr * deficiency;
        let reference = WallSpecType::Brace45x90Single.base_strength().unwrap_or(5.88);
        let walls_needed = (needed_strength / reference).ceil() as u32;

        suggestions.push(ReinforcementSuggestion::new(
            ReinforcementType::AddShearWall,
            if deficiency > 0.3 { Priority::High } else { Priority::Medium },
            walls_needed.div_ceil(2).max(1),
            format!(
                "Insufficient walls on floor {} in direction {} (Iw = {:.2})",
                weakest.floor, weakest.direction, weakest.iw
            ),
        ));
        suggestions.push(ReinforcementSuggestion::new(
            ReinforcementType::AddBrace,
            Priority::Medium,
            walls_needed.max(1),
            format!("Additional wall strength required (about {:.1} kN short)", needed_strength),
        ));
    }

    if let Some(eccentric) = result
        .directional_results
        .iter()
        .find(|r| r.eccentricity_ratio > ECCENTRICITY_THRESHOLD)
    {
        suggestions.push(ReinforcementSuggestion::new(
            ReinforcementType::WallPanel,
            Priority::Medium,
            2,
            format!(
                "High eccentricity on floor {} in direction {} (Re = {:.2})",
                eccentric.floor, eccentric.direction, eccentric.eccentricity_ratio
            ),
        ));
    }

    if building.build_year < JOINT_HARDWARE_YEAR && current_iw < 1.5 {
        suggestions.push(ReinforcementSuggestion::new(
            ReinforcementType::JointHardware,
            if current_iw < 1.0 { Priority::High } else { Priority::Low },
            8,
            format!(
                "Built in {}, before the {} joint hardware requirements",
                building.build_year, JOINT_HARDWARE_YEAR
            ),
        ));
    }

    if building.roof_weight == RoofWeight::Heavy && current_iw < 1.0 {
        suggestions.push(ReinforcementSuggestion::new(
            ReinforcementType::RoofLighten,
            Priority::Medium,
            1,
            "Lightening the heavy roof reduces the required capacity",
        ));
    }

    if building.foundation_type.is_weak() {
        suggestions.push(ReinforcementSuggestion::new(
            ReinforcementType::FoundationRepair,
            Priority::High,
            1,
            "The foundation has insufficient seismic resistance",
        ));
    }

    // stable: rule order is kept within a priority
    suggestions.sort_by_key(|s| s.priority);

    for s in &suggestions {
        debug!("suggest {:?} x{} ({:?}): {}", s.kind, s.quantity, s.priority, s.reason);
    }

    let total_cost_min = suggestions.iter().map(|s| s.estimated_cost_min).sum();
    let total_cost_max = suggestions.iter().map(|s| s.estimated_cost_max).sum();
    let total_improvement: f64 = suggestions.iter().map(|s| s.estimated_iw_improvement).sum();

    ReinforcementPlan {
        suggestions,
        total_cost_min,
        total_cost_max,
        current_iw,
        estimated_iw_after: (current_iw + total_improvement).min(MAX_ESTIMATED_IW),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::tests::base_building_info;
    use crate::building::FoundationType;
    use crate::calculations::deterioration::deterioration_factor;
    use crate::calculations::upper_structure::{rating, DirectionalResult, WallDirectionSummary, WallSummary};
    use crate::walls::WallDirection;

    fn directional(floor: u8, direction: WallDirection, qr: f64, iw: f64, re: f64) -> DirectionalResult {
        DirectionalResult {
            floor,
            direction,
            qu: iw * qr,
            qr,
            ed_qu: iw * qr,
            iw,
            rating: rating(iw),
            eccentricity_ratio: re,
            eccentricity_factor: 1.0,
            deterioration_factor: 1.0,
        }
    }

    fn summary() -> WallDirectionSummary {
        WallDirectionSummary {
            total_length: 0.0,
            total_strength: 0.0,
            required: 0.0,
            ratio: 0.0,
        }
    }

    /// Diagnosis result with the given directional results, a sound modern building
    fn result_with(results: Vec<DirectionalResult>) -> DetailedDiagnosisResult {
        let mut info = base_building_info();
        info.build_year = 2005;
        info.roof_weight = RoofWeight::Light;
        let overall_iw = results.iter().map(|r| r.iw).fold(f64::INFINITY, f64::min);
        DetailedDiagnosisResult {
            building_info: info,
            directional_results: results,
            overall_iw,
            overall_rating: rating(overall_iw),
            deterioration_score: deterioration_factor(&[]),
            wall_summary: WallSummary {
                floor1_x: summary(),
                floor1_y: summary(),
                floor2_x: None,
                floor2_y: None,
            },
        }
    }

    #[test]
    fn test_sound_building_needs_nothing() {
        let result = result_with(vec![
            directional(1, WallDirection::X, 50.0, 1.6, 0.0),
            directional(1, WallDirection::Y, 50.0, 1.7, 0.1),
        ]);
        let plan = generate_plan(&result);
        assert!(plan.suggestions.is_empty());
        assert_eq!(plan.total_cost_min, 0);
        assert_eq!(plan.estimated_iw_after, 1.6);
    }

    #[test]
    fn test_wall_deficiency() {
        let result = result_with(vec![
            directional(1, WallDirection::X, 49.8, 0.5, 0.0),
            directional(1, WallDirection::Y, 49.8, 0.8, 0.0),
        ]);
        let plan = generate_plan(&result);

        // needed = 49.8 × 0.5 = 24.9 kN → ceil(24.9 / 5.88) = 5 walls
        let shear = &plan.suggestions[0];
        assert_eq!(shear.kind, ReinforcementType::AddShearWall);
        assert_eq!(shear.priority, Priority::High);
        assert_eq!(shear.quantity, 3);
        assert!(shear.reason.contains("floor 1"));
        assert!(shear.reason.contains("direction X"));

        let brace = &plan.suggestions[1];
        assert_eq!(brace.kind, ReinforcementType::AddBrace);
        assert_eq!(brace.priority, Priority::Medium);
        assert_eq!(brace.quantity, 5);
        assert!(brace.reason.contains("24.9"));
        assert_eq!(brace.estimated_cost_min, 250_000);
    }

    #[test]
    fn test_small_deficiency_is_medium() {
        let result = result_with(vec![directional(1, WallDirection::X, 10.0, 0.95, 0.0)]);
        let plan = generate_plan(&result);
        // needed 0.5 kN → 1 wall; shear walls max(1, ceil(1/2)) = 1
        let shear = plan
            .suggestions
            .iter()
            .find(|s| s.kind == ReinforcementType::AddShearWall)
            .unwrap();
        assert_eq!(shear.priority, Priority::Medium);
        assert_eq!(shear.quantity, 1);
    }

    #[test]
    fn test_eccentricity_uses_first_match() {
        let result = result_with(vec![
            directional(1, WallDirection::X, 50.0, 1.6, 0.10),
            directional(1, WallDirection::Y, 50.0, 1.6, 0.20),
            directional(2, WallDirection::X, 30.0, 1.6, 0.40),
        ]);
        let plan = generate_plan(&result);
        assert_eq!(plan.suggestions.len(), 1);
        let panel = &plan.suggestions[0];
        assert_eq!(panel.kind, ReinforcementType::WallPanel);
        assert_eq!(panel.quantity, 2);
        assert!(panel.reason.contains("direction Y"));
        assert!(panel.reason.contains("0.20"));
    }

    #[test]
    fn test_joint_hardware_priority() {
        let mut result = result_with(vec![directional(1, WallDirection::X, 50.0, 1.2, 0.0)]);
        result.building_info.build_year = 1990;
        let plan = generate_plan(&result);
        assert_eq!(plan.suggestions.len(), 1);
        assert_eq!(plan.suggestions[0].kind, ReinforcementType::JointHardware);
        assert_eq!(plan.suggestions[0].priority, Priority::Low);
        assert_eq!(plan.suggestions[0].quantity, 8);

        let mut weak = result_with(vec![directional(1, WallDirection::X, 50.0, 0.9, 0.0)]);
        weak.building_info.build_year = 1990;
        let plan = generate_plan(&weak);
        let joint = plan
            .suggestions
            .iter()
            .find(|s| s.kind == ReinforcementType::JointHardware)
            .unwrap();
        assert_eq!(joint.priority, Priority::High);
    }

    #[test]
    fn test_heavy_roof_and_weak_foundation() {
        let mut result = result_with(vec![directional(1, WallDirection::X, 50.0, 0.9, 0.0)]);
        result.building_info.roof_weight = RoofWeight::Heavy;
        result.building_info.foundation_type = FoundationType::Stone;
        let plan = generate_plan(&result);
        let kinds: Vec<_> = plan.suggestions.iter().map(|s| s.kind).collect();
        assert!(kinds.contains(&ReinforcementType::RoofLighten));
        assert!(kinds.contains(&ReinforcementType::FoundationRepair));
    }

    #[test]
    fn test_deterioration_repair_counts_checked_items() {
        let mut result = result_with(vec![directional(1, WallDirection::X, 50.0, 1.6, 0.0)]);
        let mut items = crate::tables::default_deterioration_items();
        items[0].checked = true;
        items[1].checked = true;
        items[2].checked = true;
        items[2].exists = false;
        items[3].checked = true;
        result.deterioration_score = deterioration_factor(&items);
        assert!(result.deterioration_score.dk < 0.9);

        let plan = generate_plan(&result);
        assert_eq!(plan.suggestions[0].kind, ReinforcementType::DeteriorationRepair);
        assert_eq!(plan.suggestions[0].quantity, 3);
    }

    #[test]
    fn test_sorted_by_priority_and_totals() {
        let mut result = result_with(vec![directional(1, WallDirection::X, 49.8, 0.8, 0.3)]);
        result.building_info.build_year = 1975;
        result.building_info.roof_weight = RoofWeight::Heavy;
        result.building_info.foundation_type = FoundationType::UnreinforcedConcrete;
        let plan = generate_plan(&result);

        let priorities: Vec<Priority> = plan.suggestions.iter().map(|s| s.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);

        // joint hardware (high) was added before foundation repair (high)
        let highs: Vec<_> = plan
            .suggestions
            .iter()
            .filter(|s| s.priority == Priority::High)
            .map(|s| s.kind)
            .collect();
        assert_eq!(highs, vec![ReinforcementType::JointHardware, ReinforcementType::FoundationRepair]);

        let min: u64 = plan.suggestions.iter().map(|s| s.estimated_cost_min).sum();
        let max: u64 = plan.suggestions.iter().map(|s| s.estimated_cost_max).sum();
        assert_eq!(plan.total_cost_min, min);
        assert_eq!(plan.total_cost_max, max);
        assert!(plan.estimated_iw_after > plan.current_iw);
    }

    #[test]
    fn test_estimated_iw_capped() {
        let mut result = result_with(vec![directional(1, WallDirection::X, 500.0, 0.1, 0.0)]);
        result.building_info.build_year = 1970;
        let plan = generate_plan(&result);
        assert_eq!(plan.estimated_iw_after, MAX_ESTIMATED_IW);
    }
}
