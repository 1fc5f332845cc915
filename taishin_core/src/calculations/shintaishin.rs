//! # Post-1981 Wood House Verification
//!
//! Owner-level verification for wood houses built under the June 1981
//! seismic provisions but before the 2000 joint-hardware revision
//! ("shin-taishin" verification method).
//!
//! A house passes ("will probably not collapse") when checks 1-3 are all
//! answered yes and the five-part deterioration check scores 4 or more.
//! Everything else is referred to an expert.

use serde::{Deserialize, Serialize};

use crate::building::{ConstructionMethod, FoundationType};

/// First year covered by the method
pub const PERIOD_START_YEAR: i32 = 1981;

/// Last year covered by the method
pub const PERIOD_END_YEAR: i32 = 2000;

/// Minimum deterioration score to pass
pub const PASSING_DETERIORATION_TOTAL: u8 = 4;

/// Whether a house falls within the scope of the method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    /// Built between June 1981 and May 2000
    pub is_in_period: bool,
    /// Conventional framing on a concrete foundation
    pub is_conventional_with_concrete: bool,
    /// One or two storeys, all wood
    pub is_valid_structure: bool,
    pub is_eligible: bool,
}

/// Check 4: five parts, each 1 when sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeteriorationCheck {
    pub exterior_wall: u8,
    pub roof: u8,
    pub foundation: u8,
    pub floor: u8,
    pub bathroom: u8,
}

/// Owner's answers; `None` means not answered yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerificationChecks {
    /// Check 1: regular plan and elevation
    pub check1_shape: Option<bool>,
    /// Check 2: connection hardware at post/beam joints
    pub check2_joint_hardware: Option<bool>,
    /// Check 3: solid wall ratio of first-floor exterior walls ≥ 0.3
    pub check3_wall_ratio: Option<bool>,
    pub check4_deterioration: DeteriorationCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Will probably not collapse
    Safe,
    ExpertNeeded,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Safe => "Will probably not collapse",
            Verdict::ExpertNeeded => "Verification by an expert is needed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub checks: VerificationChecks,
    pub deterioration_total: u8,
    pub verdict: Verdict,
}

/// Determine whether a house is within the scope of the method.
pub fn check_eligibility(
    build_year: i32,
    construction_method: ConstructionMethod,
    foundation_type: FoundationType,
    number_of_floors: u8,
) -> Eligibility {
    let is_in_period = (PERIOD_START_YEAR..=PERIOD_END_YEAR).contains(&build_year);
    let is_conventional_with_concrete =
        construction_method == ConstructionMethod::Conventional && foundation_type.is_concrete();
    let is_valid_structure = number_of_floors <= 2;

    Eligibility {
        is_in_period,
        is_conventional_with_concrete,
        is_valid_structure,
        is_eligible: is_in_period && is_conventional_with_concrete && is_valid_structure,
    }
}

/// Sum of the five deterioration sub-checks. Each one counts at most once.
pub fn deterioration_total(check: &DeteriorationCheck) -> u8 {
    [check.exterior_wall, check.roof, check.foundation, check.floor, check.bathroom]
        .iter()
        .map(|&v| v.min(1))
        .sum()
}

/// Evaluate the owner's answers.
pub fn evaluate(checks: &VerificationChecks) -> VerificationResult {
    let deterioration_total = deterioration_total(&checks.check4_deterioration);

    let checks_pass = checks.check1_shape == Some(true)
        && checks.check2_joint_hardware == Some(true)
        && checks.check3_wall_ratio == Some(true);

    let verdict = if checks_pass && deterioration_total >= PASSING_DETERIORATION_TOTAL {
        Verdict::Safe
    } else {
        Verdict::ExpertNeeded
    };

    VerificationResult {
        checks: *checks,
        deterioration_total,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sound() -> DeteriorationCheck {
        DeteriorationCheck {
            exterior_wall: 1,
            roof: 1,
            foundation: 1,
            floor: 1,
            bathroom: 1,
        }
    }

    fn all_yes() -> VerificationChecks {
        VerificationChecks {
            check1_shape: Some(true),
            check2_joint_hardware: Some(true),
            check3_wall_ratio: Some(true),
            check4_deterioration: sound(),
        }
    }

    #[test]
    fn test_eligible_house() {
        let e = check_eligibility(1990, ConstructionMethod::Conventional, FoundationType::RebarConcreteMat, 2);
        assert!(e.is_eligible);
    }

    #[test]
    fn test_period_bounds() {
        let check = |year| {
            check_eligibility(year, ConstructionMethod::Conventional, FoundationType::RebarConcreteSpread, 1)
                .is_in_period
        };
        assert!(!check(1980));
        assert!(check(1981));
        assert!(check(2000));
        assert!(!check(2001));
    }

    #[test]
    fn test_ineligible_structures() {
        let stone = check_eligibility(1990, ConstructionMethod::Conventional, FoundationType::Stone, 2);
        assert!(!stone.is_conventional_with_concrete);
        assert!(!stone.is_eligible);

        let frame = check_eligibility(1990, ConstructionMethod::PlatformFrame, FoundationType::RebarConcreteMat, 2);
        assert!(!frame.is_eligible);

        let tall = check_eligibility(1990, ConstructionMethod::Conventional, FoundationType::UnreinforcedConcrete, 3);
        assert!(tall.is_conventional_with_concrete);
        assert!(!tall.is_valid_structure);
    }

    #[test]
    fn test_all_yes_passes() {
        let result = evaluate(&all_yes());
        assert_eq!(result.deterioration_total, 5);
        assert_eq!(result.verdict, Verdict::Safe);
    }

    #[test]
    fn test_deterioration_threshold() {
        let mut checks = all_yes();
        checks.check4_deterioration.roof = 0;
        assert_eq!(evaluate(&checks).verdict, Verdict::Safe);

        checks.check4_deterioration.floor = 0;
        assert_eq!(evaluate(&checks).deterioration_total, 3);
        assert_eq!(evaluate(&checks).verdict, Verdict::ExpertNeeded);
    }

    #[test]
    fn test_deterioration_values_count_once() {
        let all_max = DeteriorationCheck {
            exterior_wall: u8::MAX,
            roof: u8::MAX,
            foundation: u8::MAX,
            floor: u8::MAX,
            bathroom: u8::MAX,
        };
        assert_eq!(deterioration_total(&all_max), 5);

        // one inflated part cannot stand in for the others
        let mut checks = all_yes();
        checks.check4_deterioration = DeteriorationCheck {
            roof: 200,
            ..DeteriorationCheck::default()
        };
        let result = evaluate(&checks);
        assert_eq!(result.deterioration_total, 1);
        assert_eq!(result.verdict, Verdict::ExpertNeeded);
    }

    #[test]
    fn test_unanswered_check_fails() {
        let mut checks = all_yes();
        checks.check2_joint_hardware = None;
        assert_eq!(evaluate(&checks).verdict, Verdict::ExpertNeeded);

        let mut checks = all_yes();
        checks.check3_wall_ratio = Some(false);
        assert_eq!(evaluate(&checks).verdict, Verdict::ExpertNeeded);
    }
}
