//! Deterioration survey checklist (2012 revision).

use crate::calculations::deterioration::{DeteriorationCategory, DeteriorationItem};

struct Template {
    id: &'static str,
    category: DeteriorationCategory,
    label: &'static str,
    description: &'static str,
    points: u32,
}

const TEMPLATES: [Template; 17] = [
    Template {
        id: "f1",
        category: DeteriorationCategory::Foundation,
        label: "Cracks in the foundation",
        description: "Cracks 0.5mm wide or more, exposed reinforcement",
        points: 3,
    },
    Template {
        id: "f2",
        category: DeteriorationCategory::Foundation,
        label: "Foundation visibly tilted",
        description: "Tilt from differential settlement",
        points: 4,
    },
    Template {
        id: "ew1",
        category: DeteriorationCategory::ExteriorWall,
        label: "Cracks in the exterior finish",
        description: "Cracked mortar or siding",
        points: 2,
    },
    Template {
        id: "ew2",
        category: DeteriorationCategory::ExteriorWall,
        label: "Severe exterior wall deterioration",
        description: "Spalling, delamination or corrosion of the finish",
        points: 3,
    },
    Template {
        id: "r1",
        category: DeteriorationCategory::Roof,
        label: "Roofing displaced, broken or lifted",
        description: "Slipped tiles, cracked slate",
        points: 2,
    },
    Template {
        id: "r2",
        category: DeteriorationCategory::Roof,
        label: "Roof leaks",
        description: "Traces of leaks inside rooms",
        points: 3,
    },
    Template {
        id: "lr1",
        category: DeteriorationCategory::LivingRoom,
        label: "Floor noticeably sloped",
        description: "Slope of 3/1000 or more",
        points: 3,
    },
    Template {
        id: "lr2",
        category: DeteriorationCategory::LivingRoom,
        label: "Floor feels soft",
        description: "Rotten or sagging floorboards",
        points: 2,
    },
    Template {
        id: "lr3",
        category: DeteriorationCategory::LivingRoom,
        label: "Doors and sliding panels fit badly",
        description: "Hard to open, large gaps",
        points: 2,
    },
    Template {
        id: "b1",
        category: DeteriorationCategory::Bathroom,
        label: "Rot in the sill around the bathroom",
        description: "Wood decay near wet areas",
        points: 3,
    },
    Template {
        id: "b2",
        category: DeteriorationCategory::Bathroom,
        label: "Termite damage around the bathroom",
        description: "Mud tubes, feeding damage",
        points: 4,
    },
    Template {
        id: "bl1",
        category: DeteriorationCategory::Balcony,
        label: "Balcony handrail wobbles",
        description: "Corroded handrail or posts",
        points: 2,
    },
    Template {
        id: "at1",
        category: DeteriorationCategory::Attic,
        label: "Leak traces in the attic",
        description: "Water stains, mould",
        points: 2,
    },
    Template {
        id: "at2",
        category: DeteriorationCategory::Attic,
        label: "Severe decay of attic timbers",
        description: "Rot, insect damage",
        points: 3,
    },
    Template {
        id: "uf1",
        category: DeteriorationCategory::UnderFloor,
        label: "Termite damage under the floor",
        description: "Mud tubes, feeding damage, frass",
        points: 4,
    },
    Template {
        id: "uf2",
        category: DeteriorationCategory::UnderFloor,
        label: "Rot in sills and sleepers under the floor",
        description: "High moisture content, decay",
        points: 3,
    },
    Template {
        id: "uf3",
        category: DeteriorationCategory::UnderFloor,
        label: "Insufficient under-floor ventilation",
        description: "Too few or blocked vents",
        points: 1,
    },
];

/// Fresh checklist: every item present and unchecked.
pub fn default_deterioration_items() -> Vec<DeteriorationItem> {
    TEMPLATES
        .iter()
        .map(|t| DeteriorationItem {
            id: t.id.to_string(),
            category: t.category,
            label: t.label.to_string(),
            description: t.description.to_string(),
            points: t.points,
            checked: false,
            exists: true,
        })
        .collect()
}
