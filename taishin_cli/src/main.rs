//! # Taishin CLI Application
//!
//! Runs a seismic diagnosis from a project file and prints a report
//! followed by the JSON results.
//!
//! ```text
//! taishin <project.json>   diagnose a saved project
//! taishin --demo           diagnose a built-in two-storey sample
//! ```
//!
//! A two-storey project without a floor-2 plan shape runs with a neutral
//! eccentricity check on that floor unless its settings set
//! `missing_shape_policy` to `reject`.
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::path::Path;
use std::process::ExitCode;

use chrono::NaiveDate;
use log::info;

use taishin_core::building::{
    BuildingInfo, ConstructionMethod, FloorAreas, FloorShape, FloorShapes, FoundationType, GroundType, RoofWeight,
};
use taishin_core::calculations::shintaishin::check_eligibility;
use taishin_core::calculations::{DetailedDiagnosisResult, ReinforcementPlan, SimpleDiagnosisResult};
use taishin_core::tables::{JointSpec, WallSpecType};
use taishin_core::walls::{WallDirection, WallSegment};
use taishin_core::{load_project, CalcError, CalcResult, DiagnosisProject};

const USAGE: &str = "Usage: taishin <project.json> | taishin --demo";

fn main() -> ExitCode {
    env_logger::init();

    let Some(arg) = std::env::args().nth(1) else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let project = match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        "--demo" => demo_project(),
        path => match load_project(Path::new(path)) {
            Ok(project) => project,
            Err(e) => return report_error(&e),
        },
    };

    match run(&project) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn run(project: &DiagnosisProject) -> CalcResult<()> {
    project.validate()?;
    info!(
        "diagnosing project {} ({} walls, standard {})",
        project.meta.id,
        project.walls.len(),
        project.settings.standard
    );

    let (result, plan) = project.run_plan()?;
    let simple = project.run_simple();

    print_detailed(&result);
    print_plan(&plan);
    if let Some(simple) = &simple {
        print_simple(simple);
    }
    print_eligibility(&project.building);

    println!();
    println!("JSON Output:");
    let json = serde_json::json!({
        "detailed": result,
        "plan": plan,
        "simple": simple,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn report_error(e: &CalcError) -> ExitCode {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    ExitCode::FAILURE
}

fn print_detailed(result: &DetailedDiagnosisResult) {
    println!("═══════════════════════════════════════");
    println!("  DETAILED DIAGNOSIS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Floor/Dir      Qu      Qr   eKfl    dK     Iw");
    for r in &result.directional_results {
        println!(
            "  {}F {}    {:6.2}  {:6.2}  {:5.2}  {:4.2}  {:5.2} {}",
            r.floor,
            r.direction,
            r.qu,
            r.qr,
            r.eccentricity_factor,
            r.deterioration_factor,
            r.iw,
            status_icon(r.iw >= 1.0)
        );
    }
    println!();
    println!(
        "Deterioration: {}/{} points",
        result.deterioration_score.total_deterioration_points, result.deterioration_score.total_existence_points
    );
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: Iw = {:.2} ({})", result.overall_iw, result.overall_rating.label());
    if let Some(weakest) = result.weakest() {
        println!("  Governs: {}F {}-direction", weakest.floor, weakest.direction);
    }
    println!("═══════════════════════════════════════");
}

fn print_plan(plan: &ReinforcementPlan) {
    println!();
    println!("Reinforcement Plan:");
    if plan.suggestions.is_empty() {
        println!("  No reinforcement suggested");
        return;
    }
    for s in &plan.suggestions {
        println!(
            "  [{:?}] {} x{} {} ({}-{} yen)",
            s.priority, s.label, s.quantity, s.unit, s.estimated_cost_min, s.estimated_cost_max
        );
        println!("      {}", s.reason);
    }
    println!(
        "  Total: {}-{} yen, Iw {:.2} -> {:.2}",
        plan.total_cost_min, plan.total_cost_max, plan.current_iw, plan.estimated_iw_after
    );
}

fn print_simple(simple: &SimpleDiagnosisResult) {
    println!();
    println!("Simple Diagnosis: {}/10 ({:?})", simple.total_score, simple.rating);
    println!("  {}", simple.message);
}

fn print_eligibility(building: &BuildingInfo) {
    let eligibility = check_eligibility(
        building.build_year,
        building.construction_method,
        building.foundation_type,
        building.number_of_floors,
    );
    if eligibility.is_eligible {
        println!();
        println!("Note: this house qualifies for the post-1981 owner verification method");
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[NG]" }
}

/// Two-storey 1978 house with a heavy roof and a weak south wall line.
fn demo_project() -> DiagnosisProject {
    let building = BuildingInfo {
        construction_method: ConstructionMethod::Conventional,
        build_year: 1978,
        number_of_floors: 2,
        roof_weight: RoofWeight::Heavy,
        foundation_type: FoundationType::UnreinforcedConcrete,
        ground_type: GroundType::Normal,
        region_coefficient_z: 1.0,
        snow_depth_m: 0.0,
        floor_areas: FloorAreas {
            floor1: 66.2,
            floor2: Some(46.4),
            floor3: None,
        },
        floor_shapes: FloorShapes {
            floor1: FloorShape::new(9100.0, 7280.0),
            floor2: Some(FloorShape::new(7280.0, 6370.0)),
        },
        diagnosis_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap_or_default(),
        address: None,
        owner_name: Some("Demo".to_string()),
    };

    let mut project = DiagnosisProject::new("Demo Inspector", building);

    let walls = [
        // floor 1, X direction: solid north line, mostly open south line
        WallSegment::new("1x-n1", 1, WallDirection::X, WallSpecType::MudWall50, 3.64).at(1820.0, 7280.0),
        WallSegment::new("1x-n2", 1, WallDirection::X, WallSpecType::Brace30x90Single, 2.73).at(6825.0, 7280.0),
        WallSegment::new("1x-s1", 1, WallDirection::X, WallSpecType::Brace30x90Single, 0.91).at(455.0, 0.0),
        WallSegment::new("1x-s2", 1, WallDirection::X, WallSpecType::None, 5.46).at(4550.0, 0.0),
        WallSegment::new("1x-c1", 1, WallDirection::X, WallSpecType::Gypsum12, 1.82)
            .at(4550.0, 3640.0)
            .with_back_surface(WallSpecType::Gypsum12),
        // floor 1, Y direction
        WallSegment::new("1y-w1", 1, WallDirection::Y, WallSpecType::MudWall50, 3.64)
            .at(0.0, 3640.0)
            .with_joint(JointSpec::NailingOnly),
        WallSegment::new("1y-e1", 1, WallDirection::Y, WallSpecType::Brace30x90Single, 2.73).at(9100.0, 2730.0),
        WallSegment::new("1y-c1", 1, WallDirection::Y, WallSpecType::Gypsum12, 1.82).at(4550.0, 5460.0),
        // floor 2
        WallSegment::new("2x-n1", 2, WallDirection::X, WallSpecType::Brace30x90Single, 3.64).at(3640.0, 6370.0),
        WallSegment::new("2x-s1", 2, WallDirection::X, WallSpecType::Gypsum12, 2.73).at(1365.0, 0.0),
        WallSegment::new("2y-w1", 2, WallDirection::Y, WallSpecType::Brace30x90Single, 2.73).at(0.0, 3185.0),
        WallSegment::new("2y-e1", 2, WallDirection::Y, WallSpecType::Brace30x90Single, 2.73).at(7280.0, 3185.0),
    ];
    for wall in walls {
        project.add_wall(wall);
    }

    for item in project.deterioration_items.iter_mut() {
        item.exists = true;
    }
    for id in ["f1", "ew1", "lr1"] {
        if let Some(item) = project.deterioration_items.iter_mut().find(|item| item.id == id) {
            item.checked = true;
        }
    }

    project.simple_answers = (1..=10u8).map(|id| (id, format!("{}a", id))).collect();
    project.simple_answers.insert(1, "1b".to_string());
    project.simple_answers.insert(9, "9b".to_string());
    project.simple_answers.insert(10, "10b".to_string());

    project
}
