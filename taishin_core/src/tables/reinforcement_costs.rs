//! Reinforcement cost reference.
//!
//! Per-unit cost range (yen) and expected Iw improvement for each
//! reinforcement method. Indicative market figures, not quotations.

use serde::{Deserialize, Serialize};

/// Reinforcement method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReinforcementType {
    AddShearWall,
    AddBrace,
    FoundationRepair,
    RoofLighten,
    JointHardware,
    WallPanel,
    DeteriorationRepair,
}

/// Per-unit reference values for one reinforcement method
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostReference {
    pub label: &'static str,
    pub description: &'static str,
    /// Unit the quantity counts
    pub unit: &'static str,
    /// Yen per unit
    pub cost_min: u64,
    /// Yen per unit
    pub cost_max: u64,
    /// Expected Iw gain per unit
    pub iw_improvement_per_unit: f64,
}

impl ReinforcementType {
    pub const ALL: [ReinforcementType; 7] = [
        ReinforcementType::AddShearWall,
        ReinforcementType::AddBrace,
        ReinforcementType::FoundationRepair,
        ReinforcementType::RoofLighten,
        ReinforcementType::JointHardware,
        ReinforcementType::WallPanel,
        ReinforcementType::DeteriorationRepair,
    ];

    /// Reference cost and benefit per unit
    pub fn cost_reference(&self) -> CostReference {
        match self {
            ReinforcementType::AddShearWall => CostReference {
                label: "Add shear wall",
                description: "Install new load-bearing walls to increase wall quantity",
                unit: "location",
                cost_min: 150_000,
                cost_max: 350_000,
                iw_improvement_per_unit: 0.1,
            },
            ReinforcementType::AddBrace => CostReference {
                label: "Brace reinforcement",
                description: "Add braces to existing walls to raise their strength",
                unit: "location",
                cost_min: 50_000,
                cost_max: 200_000,
                iw_improvement_per_unit: 0.08,
            },
            ReinforcementType::FoundationRepair => CostReference {
                label: "Foundation reinforcement",
                description: "Repair foundation cracks or add a reinforced concrete layer",
                unit: "location",
                cost_min: 200_000,
                cost_max: 500_000,
                iw_improvement_per_unit: 0.05,
            },
            ReinforcementType::RoofLighten => CostReference {
                label: "Roof lightening",
                description: "Replace a heavy roof covering with a lightweight one",
                unit: "building",
                cost_min: 800_000,
                cost_max: 1_500_000,
                iw_improvement_per_unit: 0.15,
            },
            ReinforcementType::JointHardware => CostReference {
                label: "Joint hardware",
                description: "Fit connection hardware at post bases and heads",
                unit: "location",
                cost_min: 20_000,
                cost_max: 50_000,
                iw_improvement_per_unit: 0.03,
            },
            ReinforcementType::WallPanel => CostReference {
                label: "Seismic wall panel",
                description: "Reinforce with sheathing panels",
                unit: "location",
                cost_min: 250_000,
                cost_max: 650_000,
                iw_improvement_per_unit: 0.12,
            },
            ReinforcementType::DeteriorationRepair => CostReference {
                label: "Deterioration repair",
                description: "Repair rot and termite damage",
                unit: "location",
                cost_min: 100_000,
                cost_max: 300_000,
                iw_improvement_per_unit: 0.05,
            },
        }
    }
}
