//! # Required Capacity
//!
//! Code-required lateral capacity Qr of one floor, simplified method:
//!
//! ```text
//! Qr = C × A × Z × Sg
//!   C  = required-capacity coefficient (kN/m²)
//!   A  = floor area of the target floor (m²)
//!   Z  = region coefficient
//!   Sg = ground amplification factor
//! ```

use crate::building::BuildingInfo;
use crate::errors::CalcResult;
use crate::tables::required_capacity_coefficient;

/// Required capacity Qr of `target_floor` (kN).
///
/// A floor without a recorded area yields 0.
///
/// # Errors
///
/// `CalcError::CoefficientNotFound` if the coefficient table has no entry for
/// (storeys, target floor, roof weight). The caller must abort the run.
pub fn required_capacity(target_floor: u8, building: &BuildingInfo) -> CalcResult<f64> {
    let coefficient = required_capacity_coefficient(building.number_of_floors, target_floor, building.roof_weight)?;
    let area = building.floor_areas.get(target_floor);

    Ok(coefficient * area * building.region_coefficient_z * building.ground_type.factor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::tests::base_building_info;
    use crate::building::{GroundType, RoofWeight};
    use crate::errors::CalcError;

    #[test]
    fn test_two_storey_heavy_floor1() {
        let info = base_building_info();
        // 0.83 × 60 × 1.0 × 1.0
        let qr = required_capacity(1, &info).unwrap();
        assert!((qr - 49.8).abs() < 0.1);
    }

    #[test]
    fn test_two_storey_heavy_floor2() {
        let info = base_building_info();
        // 0.54 × 50
        let qr = required_capacity(2, &info).unwrap();
        assert!((qr - 27.0).abs() < 0.1);
    }

    #[test]
    fn test_soft_ground() {
        let mut info = base_building_info();
        info.ground_type = GroundType::Soft;
        let qr = required_capacity(1, &info).unwrap();
        assert!((qr - 74.7).abs() < 0.1);
    }

    #[test]
    fn test_region_coefficient_scales() {
        let mut info = base_building_info();
        info.region_coefficient_z = 0.8;
        let qr = required_capacity(1, &info).unwrap();
        assert!((qr - 49.8 * 0.8).abs() < 0.1);
    }

    #[test]
    fn test_single_storey_light() {
        let mut info = base_building_info();
        info.number_of_floors = 1;
        info.roof_weight = RoofWeight::Light;
        let qr = required_capacity(1, &info).unwrap();
        assert!((qr - 0.40 * 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_area_is_zero() {
        let mut info = base_building_info();
        info.floor_areas.floor2 = None;
        assert_eq!(required_capacity(2, &info).unwrap(), 0.0);
    }

    #[test]
    fn test_table_miss_is_fatal() {
        let mut info = base_building_info();
        info.number_of_floors = 1;
        let err = required_capacity(2, &info).unwrap_err();
        assert!(matches!(err, CalcError::CoefficientNotFound { total_floors: 1, target_floor: 2, .. }));
    }
}
