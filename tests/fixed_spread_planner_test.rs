// ==========================================
// FixedSpreadPlanner 集成测试
// ==========================================
// 测试目标: 测线长度、炮点数、覆盖次数、排列外炮点位置
// ==========================================

mod test_helpers;

use seismic_layout::engine::{FixedSpreadPlanner, PlanError, SurveyPlanner};
use seismic_layout::AcquisitionMode;
use test_helpers::{approx_eq, fixed_params, inventory_of, standard_spread, survey};

#[test]
fn test_refraction_spread_scenario() {
    let planner = FixedSpreadPlanner::new(fixed_params(survey(4.0, 6.0, 10.0), 8, 0.0));
    let plan = planner.compute(&standard_spread()).unwrap();

    assert_eq!(plan.string_aperture, 672.0);
    assert_eq!(plan.first_phone_position, 32.0);
    assert_eq!(plan.line_length, 736.0);
    assert_eq!(plan.num_shots, 168 + 16);
    assert!((plan.fold - 84.0).abs() < 1e-6);
    assert!(approx_eq(plan.move_up(), 4.0 / 6.0));
}

#[test]
fn test_shot_runs_are_contiguous_and_disjoint() {
    let planner = FixedSpreadPlanner::new(fixed_params(survey(4.0, 6.0, 10.0), 8, 0.0));
    let plan = planner.compute(&standard_spread()).unwrap();
    let shots = planner.shot_positions(&plan);

    let (near, far) = shots.split_at(8);
    assert!(near.windows(2).all(|w| approx_eq(w[1] - w[0], 4.0)));
    assert!(far.windows(2).all(|w| approx_eq(w[1] - w[0], 4.0)));
    assert!(near.iter().all(|&p| p < plan.first_phone_position));
    assert!(far
        .iter()
        .all(|&p| p >= plan.string_aperture + plan.first_phone_position));
}

#[test]
fn test_zero_lead_shots_has_no_out_of_spread_shots() {
    let planner = FixedSpreadPlanner::new(fixed_params(survey(4.0, 6.0, 10.0), 0, 0.0));
    let layout = planner.build_layout(&standard_spread()).unwrap();

    assert!(layout.shots.is_empty());
    assert_eq!(layout.summary.num_shots(), 168);
    assert_eq!(layout.summary.line_length(), 672.0);
    assert_eq!(layout.receiver_groups[0].initial_position, 0.0);
}

#[test]
fn test_receivers_are_single_pass_and_offset() {
    let planner = FixedSpreadPlanner::new(fixed_params(survey(2.0, 5.0, 50.0), 3, -100.0));
    let inventory = inventory_of(&[4, 2]);
    let layout = planner.build_layout(&inventory).unwrap();

    assert_eq!(layout.mode(), AcquisitionMode::FixedSpread);
    assert_eq!(
        layout.receiver_groups[0].positions,
        vec![-94.0, -89.0, -84.0, -79.0]
    );
    assert_eq!(layout.receiver_groups[1].positions, vec![-74.0, -69.0]);
    assert!(layout.receiver_groups.iter().all(|g| g.repetitions == 1));

    // 标注: [0, 42) 每 50 一个 → 仅 0，平移后 -100
    assert_eq!(layout.annotations, vec![-100.0]);
    assert_eq!(layout.shots.first().map(|s| s.position), Some(-100.0));
    assert_eq!(layout.shots.last().map(|s| s.station), Some(21));
}

#[test]
fn test_invalid_spacing_rejected() {
    let planner = FixedSpreadPlanner::new(fixed_params(survey(4.0, -6.0, 10.0), 8, 0.0));
    assert!(matches!(
        planner.compute(&standard_spread()),
        Err(PlanError::NonPositiveValue {
            field: "phone_spacing",
            ..
        })
    ));
}
