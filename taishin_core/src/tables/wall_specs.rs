//! Wall Specifications (2012 revision, conventional framing)
//!
//! Base shear strength per metre of wall for each wall construction, and the
//! joint reduction factor Kj for each joint detail. Both lookups are total
//! `match`es over closed enums.

use serde::{Deserialize, Serialize};

/// Base strength of one metre of wall with wall multiplier 1.0 (kN/m)
pub const UNIT_MULTIPLIER_STRENGTH: f64 = 1.96;

/// Wall construction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallSpecType {
    // Braces
    #[serde(rename = "brace_15x90_single")]
    Brace15x90Single,
    #[serde(rename = "brace_30x90_single")]
    Brace30x90Single,
    #[serde(rename = "brace_45x90_single")]
    Brace45x90Single,
    #[serde(rename = "brace_30x90_cross")]
    Brace30x90Cross,
    #[serde(rename = "brace_45x90_cross")]
    Brace45x90Cross,
    #[serde(rename = "brace_90x90_single")]
    Brace90x90Single,
    #[serde(rename = "brace_90x90_cross")]
    Brace90x90Cross,

    // Structural plywood
    #[serde(rename = "plywood_75_owari")]
    Plywood75Owari,
    #[serde(rename = "plywood_9_owari")]
    Plywood9Owari,
    #[serde(rename = "plywood_9_shinkabe")]
    Plywood9Shinkabe,
    #[serde(rename = "plywood_12_owari")]
    Plywood12Owari,

    // Gypsum board
    #[serde(rename = "gypsum_9")]
    Gypsum9,
    #[serde(rename = "gypsum_12")]
    Gypsum12,

    // Mud walls
    #[serde(rename = "mud_wall_40")]
    MudWall40,
    #[serde(rename = "mud_wall_50")]
    MudWall50,
    #[serde(rename = "mud_wall_70")]
    MudWall70,

    /// Opening or no wall; contributes nothing
    None,
    /// Base strength supplied on the wall record
    Custom,
}

impl WallSpecType {
    /// All tabulated wall types (excludes `None` and `Custom`)
    pub const TABULATED: [WallSpecType; 16] = [
        WallSpecType::Brace15x90Single,
        WallSpecType::Brace30x90Single,
        WallSpecType::Brace45x90Single,
        WallSpecType::Brace30x90Cross,
        WallSpecType::Brace45x90Cross,
        WallSpecType::Brace90x90Single,
        WallSpecType::Brace90x90Cross,
        WallSpecType::Plywood75Owari,
        WallSpecType::Plywood9Owari,
        WallSpecType::Plywood9Shinkabe,
        WallSpecType::Plywood12Owari,
        WallSpecType::Gypsum9,
        WallSpecType::Gypsum12,
        WallSpecType::MudWall40,
        WallSpecType::MudWall50,
        WallSpecType::MudWall70,
    ];

    /// Tabulated base strength Fw (kN/m).
    ///
    /// `None` for `WallSpecType::None` and `WallSpecType::Custom`, which have
    /// no table entry.
    pub fn base_strength(&self) -> Option<f64> {
        let fw = match self {
            WallSpecType::Brace15x90Single => 1.96,
            WallSpecType::Brace30x90Single => 3.92,
            WallSpecType::Brace45x90Single => 5.88,
            WallSpecType::Brace30x90Cross => 7.84,
            WallSpecType::Brace45x90Cross => 9.80,
            WallSpecType::Brace90x90Single => 5.88,
            WallSpecType::Brace90x90Cross => 9.80,
            WallSpecType::Plywood75Owari => 4.90,
            WallSpecType::Plywood9Owari => 5.88,
            WallSpecType::Plywood9Shinkabe => 3.43,
            WallSpecType::Plywood12Owari => 6.86,
            WallSpecType::Gypsum9 => 1.37,
            WallSpecType::Gypsum12 => 1.96,
            WallSpecType::MudWall40 => 2.94,
            WallSpecType::MudWall50 => 3.92,
            WallSpecType::MudWall70 => 4.90,
            WallSpecType::None | WallSpecType::Custom => return None,
        };
        Some(fw)
    }

    /// Equivalent wall multiplier, for display
    pub fn multiplier(&self) -> Option<f64> {
        self.base_strength()
            .map(|fw| (fw / UNIT_MULTIPLIER_STRENGTH * 100.0).round() / 100.0)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WallSpecType::Brace15x90Single => "Brace 15x90 single",
            WallSpecType::Brace30x90Single => "Brace 30x90 single",
            WallSpecType::Brace45x90Single => "Brace 45x90 single",
            WallSpecType::Brace30x90Cross => "Brace 30x90 cross",
            WallSpecType::Brace45x90Cross => "Brace 45x90 cross",
            WallSpecType::Brace90x90Single => "Brace 90x90 single",
            WallSpecType::Brace90x90Cross => "Brace 90x90 cross",
            WallSpecType::Plywood75Owari => "Structural plywood 7.5mm (ohkabe)",
            WallSpecType::Plywood9Owari => "Structural plywood 9mm (ohkabe)",
            WallSpecType::Plywood9Shinkabe => "Structural plywood 9mm (shinkabe)",
            WallSpecType::Plywood12Owari => "Structural plywood 12mm (ohkabe)",
            WallSpecType::Gypsum9 => "Gypsum board 9mm",
            WallSpecType::Gypsum12 => "Gypsum board 12mm",
            WallSpecType::MudWall40 => "Mud wall 40mm+",
            WallSpecType::MudWall50 => "Mud wall 50mm+",
            WallSpecType::MudWall70 => "Mud wall 70mm+",
            WallSpecType::None => "No wall (opening)",
            WallSpecType::Custom => "Custom",
        }
    }
}

impl std::fmt::Display for WallSpecType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Joint detail at the wall's posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JointSpec {
    /// Hardware per the 2000 notification
    #[default]
    HardwareComplete,
    HardwarePartial,
    NailingOnly,
    None,
}

impl JointSpec {
    pub const ALL: [JointSpec; 4] = [
        JointSpec::HardwareComplete,
        JointSpec::HardwarePartial,
        JointSpec::NailingOnly,
        JointSpec::None,
    ];

    /// Joint reduction factor Kj
    pub fn reduction_factor(&self) -> f64 {
        match self {
            JointSpec::HardwareComplete => 1.0,
            JointSpec::HardwarePartial => 0.85,
            JointSpec::NailingOnly => 0.7,
            JointSpec::None => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tabulated_type_has_strength() {
        for spec in WallSpecType::TABULATED {
            let fw = spec.base_strength().unwrap();
            assert!(fw > 0.0, "{:?} should have positive strength", spec);
        }
        assert_eq!(WallSpecType::None.base_strength(), None);
        assert_eq!(WallSpecType::Custom.base_strength(), None);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(WallSpecType::Brace45x90Single.multiplier(), Some(3.0));
        assert_eq!(WallSpecType::Plywood9Shinkabe.multiplier(), Some(1.75));
        assert_eq!(WallSpecType::Gypsum9.multiplier(), Some(0.7));
    }

    #[test]
    fn test_joint_factors_are_ordered() {
        let factors: Vec<f64> = JointSpec::ALL.iter().map(|j| j.reduction_factor()).collect();
        assert!(factors.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(factors[0], 1.0);
        assert_eq!(factors[3], 0.5);
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&WallSpecType::Brace45x90Single).unwrap();
        assert_eq!(json, "\"brace_45x90_single\"");
        let spec: WallSpecType = serde_json::from_str("\"plywood_75_owari\"").unwrap();
        assert_eq!(spec, WallSpecType::Plywood75Owari);
        let joint: JointSpec = serde_json::from_str("\"nailing_only\"").unwrap();
        assert_eq!(joint, JointSpec::NailingOnly);
    }
}
