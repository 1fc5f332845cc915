//! Required-capacity coefficients (kN/m²), simplified method, 2012 revision.
//!
//! Keyed by (total storeys, target floor, roof weight). Unlike the enum
//! tables this one is sparse (floor 2 of a one-storey house has no entry),
//! so a lookup can miss and the miss is reported as a configuration error.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::building::RoofWeight;
use crate::errors::{CalcError, CalcResult};

type CoefficientKey = (u8, u8, RoofWeight);

static COEFFICIENTS: Lazy<HashMap<CoefficientKey, f64>> = Lazy::new(|| {
    use RoofWeight::{Heavy, Light, Moderate};

    let rows: [(u8, u8, [f64; 3]); 6] = [
        // single storey
        (1, 1, [0.53, 0.46, 0.40]),
        // two storeys
        (2, 2, [0.54, 0.46, 0.40]),
        (2, 1, [0.83, 0.72, 0.64]),
        // three storeys
        (3, 3, [0.54, 0.46, 0.40]),
        (3, 2, [0.83, 0.72, 0.64]),
        (3, 1, [1.06, 0.92, 0.82]),
    ];

    let mut table = HashMap::new();
    for (total, target, values) in rows {
        for (roof, value) in [Heavy, Moderate, Light].into_iter().zip(values) {
            table.insert((total, target, roof), value);
        }
    }
    table
});

/// Look up the required-capacity coefficient.
///
/// # Errors
///
/// `CalcError::CoefficientNotFound` when the combination is not tabulated.
pub fn required_capacity_coefficient(total_floors: u8, target_floor: u8, roof_weight: RoofWeight) -> CalcResult<f64> {
    COEFFICIENTS
        .get(&(total_floors, target_floor, roof_weight))
        .copied()
        .ok_or_else(|| CalcError::coefficient_not_found(total_floors, target_floor, roof_weight.code()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabulated_values() {
        assert_eq!(required_capacity_coefficient(2, 1, RoofWeight::Heavy).unwrap(), 0.83);
        assert_eq!(required_capacity_coefficient(2, 2, RoofWeight::Heavy).unwrap(), 0.54);
        assert_eq!(required_capacity_coefficient(1, 1, RoofWeight::Heavy).unwrap(), 0.53);
        assert_eq!(required_capacity_coefficient(3, 1, RoofWeight::Light).unwrap(), 0.82);
    }

    #[test]
    fn test_every_valid_combination_present() {
        for total in 1..=3u8 {
            for target in 1..=total {
                for roof in RoofWeight::ALL {
                    assert!(
                        required_capacity_coefficient(total, target, roof).is_ok(),
                        "missing {}-{}-{}",
                        total,
                        target,
                        roof
                    );
                }
            }
        }
    }

    #[test]
    fn test_lower_floors_carry_more() {
        for roof in RoofWeight::ALL {
            let upper = required_capacity_coefficient(2, 2, roof).unwrap();
            let lower = required_capacity_coefficient(2, 1, roof).unwrap();
            assert!(lower > upper);
        }
    }

    #[test]
    fn test_miss_is_error() {
        let err = required_capacity_coefficient(1, 2, RoofWeight::Moderate).unwrap_err();
        assert_eq!(err, CalcError::coefficient_not_found(1, 2, "moderate"));
    }
}
