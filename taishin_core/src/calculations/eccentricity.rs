//! # Eccentricity
//!
//! Torsional balance of a floor. The eccentricity ratio Re compares the
//! distance between the centre of gravity and the centre of rigidity with the
//! elastic radius of the resisting walls:
//!
//! ```text
//! G   = floor dimension / 2           (rectangular plan)
//! R   = Σ(Qᵢ·pᵢ) / ΣQᵢ
//! Kt  = Σ Qᵢ·(pᵢ − R)²
//! re  = √(Kt / ΣQᵢ)
//! Re  = |G − R| / re
//! ```
//!
//! Evaluating direction X looks at the walls resisting Y, spread along the X
//! extent of the plan, and vice versa.
//!
//! The reduction factor eKfl falls linearly from 1.0 at Re = 0.15 to 0.5 at
//! Re = 0.45 and stays at 0.5 beyond.

use serde::{Deserialize, Serialize};

use crate::building::FloorShape;
use crate::calculations::wall_strength::single_wall_strength;
use crate::walls::{WallDirection, WallSegment};

/// Re at or below which no reduction applies
pub const RATIO_NO_REDUCTION: f64 = 0.15;

/// Re at or above which the reduction bottoms out
pub const RATIO_FULL_REDUCTION: f64 = 0.45;

/// Lowest eccentricity reduction factor
pub const MIN_CORRECTION_FACTOR: f64 = 0.5;

/// Lengths below this fraction of the plan dimension count as zero when
/// checking for walls that all stand on one line
const COLLINEAR_TOLERANCE: f64 = 1e-9;

/// Eccentricity of one floor in one evaluation direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EccentricityResult {
    /// Eccentricity ratio Re
    pub ratio: f64,
    /// Reduction factor eKfl
    pub correction_factor: f64,
    /// Centre of gravity coordinate (mm)
    pub center_of_gravity: f64,
    /// Centre of rigidity coordinate (mm)
    pub center_of_rigidity: f64,
}

impl EccentricityResult {
    /// Worst-case result for a floor with no resisting walls
    fn unresisted(center_of_gravity: f64) -> Self {
        EccentricityResult {
            ratio: 1.0,
            correction_factor: MIN_CORRECTION_FACTOR,
            center_of_gravity,
            center_of_rigidity: 0.0,
        }
    }
}

/// Plan dimension along the evaluation direction (mm)
fn floor_dimension(shape: &FloorShape, direction: WallDirection) -> f64 {
    match direction {
        WallDirection::X => shape.width,
        WallDirection::Y => shape.depth,
    }
}

/// Walls that resist torsion for the given evaluation direction
fn resisting_walls<'a>(
    walls: &'a [WallSegment],
    floor: u8,
    evaluation_direction: WallDirection,
) -> impl Iterator<Item = &'a WallSegment> {
    let wall_direction = evaluation_direction.perpendicular();
    walls
        .iter()
        .filter(move |w| w.is_on(floor, wall_direction) && w.is_wall())
}

/// Compute the eccentricity ratio and reduction factor of `floor` in
/// `evaluation_direction`.
///
/// With no resisting walls (or zero total strength) the floor gets Re = 1.0
/// and eKfl = 0.5. When every resisting wall stands on one line the elastic
/// radius vanishes: Re is 0.0 if that line passes through the centre of
/// gravity and 1.0 otherwise. Both checks allow for rounding in R.
pub fn eccentricity(
    walls: &[WallSegment],
    shape: &FloorShape,
    floor: u8,
    evaluation_direction: WallDirection,
) -> EccentricityResult {
    let dimension = floor_dimension(shape, evaluation_direction);
    let center_of_gravity = dimension / 2.0;

    // (strength, position) pairs
    let data: Vec<(f64, f64)> = resisting_walls(walls, floor, evaluation_direction)
        .map(|w| (single_wall_strength(w), w.position_along(evaluation_direction)))
        .collect();

    let total_strength: f64 = data.iter().map(|(q, _)| q).sum();
    if data.is_empty() || total_strength == 0.0 {
        return EccentricityResult::unresisted(center_of_gravity);
    }

    let center_of_rigidity = data.iter().map(|(q, p)| q * p).sum::<f64>() / total_strength;
    let distance = (center_of_gravity - center_of_rigidity).abs();

    let torsional_rigidity: f64 = data
        .iter()
        .map(|(q, p)| q * (p - center_of_rigidity).powi(2))
        .sum();
    let elastic_radius = (torsional_rigidity / total_strength).sqrt();

    let tolerance = COLLINEAR_TOLERANCE * dimension.abs().max(1.0);
    let ratio = if elastic_radius > tolerance {
        distance / elastic_radius
    } else if distance <= tolerance {
        0.0
    } else {
        // All walls on one line, off-centre: no torsional resistance at all
        1.0
    };

    EccentricityResult {
        ratio,
        correction_factor: correction_factor(ratio),
        center_of_gravity,
        center_of_rigidity,
    }
}

/// Eccentricity reduction factor eKfl for a given Re.
pub fn correction_factor(ratio: f64) -> f64 {
    if ratio <= RATIO_NO_REDUCTION {
        1.0
    } else if ratio <= RATIO_FULL_REDUCTION {
        let span = RATIO_FULL_REDUCTION - RATIO_NO_REDUCTION;
        1.0 - ((ratio - RATIO_NO_REDUCTION) / span) * (1.0 - MIN_CORRECTION_FACTOR)
    } else {
        MIN_CORRECTION_FACTOR
    }
}

/// Quarter-division balance check.
///
/// Compares the wall strength within the outer quarter bands at each end of
/// the plan; returns weaker side / stronger side, or 0.0 when there is no
/// strength to compare. The two bands are not forced apart.
pub fn quarter_division_ratio(
    walls: &[WallSegment],
    shape: &FloorShape,
    floor: u8,
    direction: WallDirection,
) -> f64 {
    let dimension = floor_dimension(shape, direction);
    let quarter_line = dimension / 4.0;

    let mut side1 = 0.0;
    let mut side2 = 0.0;
    for wall in resisting_walls(walls, floor, direction) {
        let position = wall.position_along(direction);
        let strength = single_wall_strength(wall);
        if position <= quarter_line {
            side1 += strength;
        }
        if position >= dimension - quarter_line {
            side2 += strength;
        }
    }

    let max_side = f64::max(side1, side2);
    if max_side == 0.0 {
        return 0.0;
    }
    f64::min(side1, side2) / max_side
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{JointSpec, WallSpecType};

    fn shape() -> FloorShape {
        FloorShape::new(8000.0, 6000.0)
    }

    fn y_wall(id: &str, x: f64, length: f64) -> WallSegment {
        WallSegment::new(id, 1, WallDirection::Y, WallSpecType::Brace45x90Single, length).at(x, 3000.0)
    }

    fn x_wall(id: &str, y: f64, length: f64) -> WallSegment {
        WallSegment::new(id, 1, WallDirection::X, WallSpecType::Brace45x90Single, length).at(4000.0, y)
    }

    #[test]
    fn test_symmetric_walls_have_no_eccentricity() {
        let walls = vec![y_wall("a", 0.0, 1.82), y_wall("b", 8000.0, 1.82)];
        let result = eccentricity(&walls, &shape(), 1, WallDirection::X);
        assert!(result.ratio.abs() < 1e-9);
        assert_eq!(result.correction_factor, 1.0);
        assert_eq!(result.center_of_gravity, 4000.0);
        assert!((result.center_of_rigidity - 4000.0).abs() < 1e-9);
    }

    #[test]
    fn test_unbalanced_walls() {
        // 3 m of wall at x=0, 1 m at x=8000
        let walls = vec![y_wall("a", 0.0, 3.0), y_wall("b", 8000.0, 1.0)];
        let result = eccentricity(&walls, &shape(), 1, WallDirection::X);
        // R = 8000/4 = 2000, e = 2000
        assert!((result.center_of_rigidity - 2000.0).abs() < 1e-6);
        // Kt/ΣQ = (3·2000² + 1·6000²)/4 = 12e6, re = 3464.1
        let expected = 2000.0 / 12.0e6_f64.sqrt();
        assert!((result.ratio - expected).abs() < 1e-9);
        assert!((result.correction_factor - correction_factor(expected)).abs() < 1e-12);
        assert!(result.correction_factor < 1.0);
    }

    #[test]
    fn test_uses_perpendicular_walls() {
        // Only X walls: evaluating X has nothing to resist torsion
        let walls = vec![x_wall("a", 0.0, 1.0), x_wall("b", 6000.0, 1.0)];
        let in_x = eccentricity(&walls, &shape(), 1, WallDirection::X);
        assert_eq!(in_x.ratio, 1.0);
        assert_eq!(in_x.correction_factor, 0.5);
        assert_eq!(in_x.center_of_gravity, 4000.0);
        assert_eq!(in_x.center_of_rigidity, 0.0);

        let in_y = eccentricity(&walls, &shape(), 1, WallDirection::Y);
        assert!(in_y.ratio.abs() < 1e-9);
        assert_eq!(in_y.center_of_gravity, 3000.0);
    }

    #[test]
    fn test_no_walls_fallback() {
        let result = eccentricity(&[], &shape(), 1, WallDirection::Y);
        assert_eq!(result.ratio, 1.0);
        assert_eq!(result.correction_factor, 0.5);
        assert_eq!(result.center_of_gravity, 3000.0);
    }

    #[test]
    fn test_zero_strength_fallback() {
        let walls = vec![
            WallSegment::new("c", 1, WallDirection::Y, WallSpecType::Custom, 2.0).at(1000.0, 0.0),
        ];
        let result = eccentricity(&walls, &shape(), 1, WallDirection::X);
        assert_eq!(result.ratio, 1.0);
        assert_eq!(result.correction_factor, 0.5);
    }

    #[test]
    fn test_openings_ignored() {
        let mut walls = vec![y_wall("a", 0.0, 1.0), y_wall("b", 8000.0, 1.0)];
        walls.push(WallSegment::new("o", 1, WallDirection::Y, WallSpecType::None, 5.0).at(100.0, 0.0));
        let result = eccentricity(&walls, &shape(), 1, WallDirection::X);
        assert!(result.ratio.abs() < 1e-9);
    }

    #[test]
    fn test_single_line_centered_is_zero() {
        let walls = vec![y_wall("a", 4000.0, 2.0)];
        let result = eccentricity(&walls, &shape(), 1, WallDirection::X);
        assert_eq!(result.ratio, 0.0);
        assert_eq!(result.correction_factor, 1.0);
    }

    #[test]
    fn test_single_line_off_center_is_maximal() {
        let walls = vec![y_wall("a", 0.0, 2.0), y_wall("b", 0.0, 1.0)];
        let result = eccentricity(&walls, &shape(), 1, WallDirection::X);
        assert_eq!(result.ratio, 1.0);
        assert_eq!(result.correction_factor, 0.5);
        assert_eq!(result.center_of_rigidity, 0.0);
    }

    /// Y walls of unequal strength sharing the line x = `x` on a 9100 mm plan
    fn mixed_strength_line(x: f64) -> Vec<WallSegment> {
        vec![
            WallSegment::new("a", 1, WallDirection::Y, WallSpecType::Brace15x90Single, 0.45).at(x, 910.0),
            WallSegment::new("b", 1, WallDirection::Y, WallSpecType::Brace15x90Single, 0.45)
                .at(x, 2730.0)
                .with_joint(JointSpec::HardwarePartial),
            WallSegment::new("c", 1, WallDirection::Y, WallSpecType::Brace15x90Single, 1.82)
                .at(x, 5460.0)
                .with_joint(JointSpec::HardwarePartial),
        ]
    }

    #[test]
    fn test_mixed_strength_line_through_center_is_zero() {
        let shape = FloorShape::new(9100.0, 7280.0);
        let result = eccentricity(&mixed_strength_line(4550.0), &shape, 1, WallDirection::X);
        assert!((result.center_of_rigidity - 4550.0).abs() < 1e-6);
        assert_eq!(result.ratio, 0.0);
        assert_eq!(result.correction_factor, 1.0);
    }

    #[test]
    fn test_mixed_strength_line_off_center_is_maximal() {
        let shape = FloorShape::new(9100.0, 7280.0);
        let result = eccentricity(&mixed_strength_line(2000.0), &shape, 1, WallDirection::X);
        assert!((result.center_of_rigidity - 2000.0).abs() < 1e-6);
        assert_eq!(result.ratio, 1.0);
        assert_eq!(result.correction_factor, 0.5);
    }

    #[test]
    fn test_collinear_walls_never_exceed_fallback() {
        let shape = FloorShape::new(9100.0, 7280.0);
        let types = [
            WallSpecType::Brace15x90Single,
            WallSpecType::Brace30x90Cross,
            WallSpecType::Plywood9Owari,
            WallSpecType::Gypsum12,
            WallSpecType::MudWall70,
        ];
        let lengths = [0.45, 0.91, 1.37, 1.82, 2.73];
        for (i, &first) in types.iter().enumerate() {
            for &second in &types[i..] {
                for &length in &lengths {
                    for joint in JointSpec::ALL {
                        let walls = vec![
                            WallSegment::new("a", 1, WallDirection::Y, first, 0.45).at(4550.0, 910.0),
                            WallSegment::new("b", 1, WallDirection::Y, second, length)
                                .at(4550.0, 3640.0)
                                .with_joint(joint),
                            WallSegment::new("c", 1, WallDirection::Y, first, 1.82)
                                .at(4550.0, 6370.0)
                                .with_joint(joint),
                        ];
                        let centered = eccentricity(&walls, &shape, 1, WallDirection::X);
                        assert_eq!(centered.ratio, 0.0);
                        assert_eq!(centered.correction_factor, 1.0);

                        let shifted: Vec<WallSegment> = walls
                            .into_iter()
                            .map(|w| {
                                let y = w.position_y;
                                w.at(1365.0, y)
                            })
                            .collect();
                        let off = eccentricity(&shifted, &shape, 1, WallDirection::X);
                        assert_eq!(off.ratio, 1.0);
                        assert_eq!(off.correction_factor, 0.5);
                    }
                }
            }
        }
    }

    #[test]
    fn test_correction_factor_breakpoints() {
        assert_eq!(correction_factor(0.0), 1.0);
        assert_eq!(correction_factor(0.15), 1.0);
        assert!((correction_factor(0.30) - 0.75).abs() < 1e-12);
        assert!((correction_factor(0.45) - 0.5).abs() < 1e-12);
        assert_eq!(correction_factor(0.46), 0.5);
        assert_eq!(correction_factor(10.0), 0.5);
    }

    #[test]
    fn test_correction_factor_monotonic_and_continuous() {
        let mut previous = correction_factor(0.0);
        for i in 1..=1000 {
            let ratio = i as f64 * 0.001;
            let factor = correction_factor(ratio);
            assert!(factor <= previous + 1e-12);
            // step 0.001 can move the factor by at most 0.001 × (0.5 / 0.30)
            assert!(previous - factor < 0.0017);
            assert!((0.5..=1.0).contains(&factor));
            previous = factor;
        }
    }

    #[test]
    fn test_quarter_division_balanced() {
        let walls = vec![y_wall("a", 500.0, 2.0), y_wall("b", 7500.0, 2.0)];
        assert!((quarter_division_ratio(&walls, &shape(), 1, WallDirection::X) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_division_unbalanced() {
        let walls = vec![
            y_wall("a", 500.0, 3.0),
            y_wall("b", 7500.0, 1.0),
            // middle band is ignored
            y_wall("c", 4000.0, 10.0),
        ];
        let ratio = quarter_division_ratio(&walls, &shape(), 1, WallDirection::X);
        assert!((ratio - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_division_empty_side() {
        let walls = vec![y_wall("a", 500.0, 3.0)];
        assert_eq!(quarter_division_ratio(&walls, &shape(), 1, WallDirection::X), 0.0);
        assert_eq!(quarter_division_ratio(&[], &shape(), 1, WallDirection::X), 0.0);
    }
}
