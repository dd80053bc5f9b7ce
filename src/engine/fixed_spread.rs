// ==========================================
// 地震测线布设计算 - 固定排列双边放炮规划器
// ==========================================
// 职责: 对称排列两端各放 lead_shots 炮,计算测线长度、炮点数、覆盖次数
// 输入: 检波器组清单 + 炮点/检波器间距 + 每端排列外炮数 + 坐标平移
// 输出: FixedSpreadPlan
// ==========================================

use crate::domain::layout::{PlanSummary, ReceiverGroupLayout, SurveyLayout};
use crate::domain::params::FixedSpreadParams;
use crate::domain::plan::FixedSpreadPlan;
use crate::domain::receiver::ReceiverGroupInventory;
use crate::domain::types::AcquisitionMode;
use crate::engine::error::PlanResult;
use crate::engine::geometry::{
    annotation_distances, initial_positions, require_finite, shot_points,
    validate_survey,
};
use crate::engine::planner::SurveyPlanner;
use crate::engine::receiver_instance::ReceiverGroupInstance;
use tracing::{info, instrument};

// ==========================================
// FixedSpreadPlanner - 固定排列规划器
// ==========================================
pub struct FixedSpreadPlanner {
    params: FixedSpreadParams,
}

impl FixedSpreadPlanner {
    pub fn new(params: FixedSpreadParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &FixedSpreadParams {
        &self.params
    }

    /// 计算固定排列方案
    ///
    /// # 规则
    /// - first_phone_position = lead_shots * shot_spacing
    /// - line_length = string_aperture + 2 * first_phone_position
    /// - num_shots = floor(string_aperture / shot_spacing) + 2 * lead_shots
    /// - fold = 检波器总数 / (2 * move_up)，move_up = shot_spacing / phone_spacing
    #[instrument(skip(self, inventory), fields(
        groups = inventory.len(),
        lead_shots = self.params.lead_shots
    ))]
    pub fn compute(&self, inventory: &ReceiverGroupInventory) -> PlanResult<FixedSpreadPlan> {
        let survey = &self.params.survey;
        validate_survey(survey)?;
        let line_offset = require_finite("line_offset", self.params.line_offset)?;
        let lead_shots = self.params.lead_shots;

        let total_phone_inventory = inventory.total_phone_inventory();
        let string_aperture = inventory.string_aperture(survey.phone_spacing);
        let first_phone_position = f64::from(lead_shots) * survey.shot_spacing;
        let line_length = string_aperture + 2.0 * first_phone_position;

        let in_spread_shots = (string_aperture / survey.shot_spacing).floor() as u64;
        let num_shots = in_spread_shots + 2 * u64::from(lead_shots);

        let move_up = survey.shot_spacing / survey.phone_spacing;
        let fold = total_phone_inventory as f64 / (2.0 * move_up);

        info!(
            string_aperture,
            line_length, num_shots, fold, "固定排列方案计算完成"
        );

        Ok(FixedSpreadPlan {
            total_phone_inventory,
            string_aperture,
            first_phone_position,
            phone_spacing: survey.phone_spacing,
            shot_spacing: survey.shot_spacing,
            lead_shots,
            line_offset,
            line_length,
            num_shots,
            fold,
        })
    }

    // ==========================================
    // 位置展开
    // ==========================================

    /// 排列外炮点 (未平移): 近端 [0, lead) 与远端 [aperture + first, aperture + first + lead)
    pub fn shot_positions(&self, plan: &FixedSpreadPlan) -> Vec<f64> {
        let far_start = plan.far_shot_start();

        let mut positions: Vec<f64> = (0..plan.lead_shots)
            .map(|k| f64::from(k) * plan.shot_spacing)
            .collect();
        positions.extend((0..plan.lead_shots).map(|k| far_start + f64::from(k) * plan.shot_spacing));
        positions
    }

    /// 各组检波器单次排列 (不滚动)，整体平移 line_offset
    pub fn receiver_layouts(
        &self,
        inventory: &ReceiverGroupInventory,
        plan: &FixedSpreadPlan,
    ) -> Vec<ReceiverGroupLayout> {
        let starts = initial_positions(
            &inventory.group_sizes(),
            plan.first_phone_position,
            plan.phone_spacing,
        );

        inventory
            .records()
            .iter()
            .zip(starts)
            .enumerate()
            .map(|(group_index, (record, start))| {
                let initial_position = start + plan.line_offset;
                let instance = ReceiverGroupInstance::single_pass(
                    record.group_size,
                    initial_position,
                    plan.phone_spacing,
                );
                ReceiverGroupLayout {
                    group_index,
                    display_tag: record.display_tag.clone(),
                    group_size: record.group_size,
                    repetitions: 1,
                    initial_position,
                    positions: instance.positions(),
                }
            })
            .collect()
    }

    /// 距离标注: [0, line_length) 平移 line_offset
    pub fn annotations(&self, plan: &FixedSpreadPlan) -> Vec<f64> {
        annotation_distances(
            plan.line_length,
            self.params.survey.annotation_spacing,
            plan.line_offset,
        )
    }
}

impl SurveyPlanner for FixedSpreadPlanner {
    type Plan = FixedSpreadPlan;

    fn mode(&self) -> AcquisitionMode {
        AcquisitionMode::FixedSpread
    }

    fn plan(&self, inventory: &ReceiverGroupInventory) -> PlanResult<FixedSpreadPlan> {
        self.compute(inventory)
    }

    fn build_layout(&self, inventory: &ReceiverGroupInventory) -> PlanResult<SurveyLayout> {
        let plan = self.compute(inventory)?;
        let shots = shot_points(&self.shot_positions(&plan), plan.shot_spacing, plan.line_offset);
        let receiver_groups = self.receiver_layouts(inventory, &plan);
        let annotations = self.annotations(&plan);

        Ok(SurveyLayout::new(
            PlanSummary::FixedSpread(plan),
            shots,
            receiver_groups,
            annotations,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::SurveyParameters;
    use crate::domain::receiver::ReceiverGroupRecord;
    use crate::engine::error::PlanError;

    fn standard_inventory() -> ReceiverGroupInventory {
        let mut records: Vec<ReceiverGroupRecord> =
            (0..4).map(|_| ReceiverGroupRecord::new(24, "blue")).collect();
        records.push(ReceiverGroupRecord::new(16, "lime"));
        ReceiverGroupInventory::new(records).unwrap()
    }

    fn params(lead_shots: u32, line_offset: f64) -> FixedSpreadParams {
        FixedSpreadParams {
            survey: SurveyParameters {
                shot_spacing: 4.0,
                phone_spacing: 6.0,
                annotation_spacing: 10.0,
            },
            lead_shots,
            line_offset,
        }
    }

    #[test]
    fn test_standard_split_spread_metrics() {
        let planner = FixedSpreadPlanner::new(params(8, 0.0));
        let plan = planner.compute(&standard_inventory()).unwrap();

        assert_eq!(plan.total_phone_inventory, 112);
        assert_eq!(plan.string_aperture, 672.0);
        assert_eq!(plan.first_phone_position, 32.0);
        assert_eq!(plan.line_length, 736.0);
        assert_eq!(plan.num_shots, 184);
        assert!((plan.fold - 84.0).abs() < 1e-9);
    }

    #[test]
    fn test_shot_runs_are_disjoint() {
        let planner = FixedSpreadPlanner::new(params(8, 0.0));
        let plan = planner.compute(&standard_inventory()).unwrap();
        let shots = planner.shot_positions(&plan);

        assert_eq!(shots.len(), 16);
        assert_eq!(shots[0], 0.0);
        assert_eq!(shots[7], 28.0);
        assert_eq!(shots[8], 704.0);
        assert_eq!(shots[15], 732.0);
    }

    #[test]
    fn test_line_offset_shifts_every_output() {
        let planner = FixedSpreadPlanner::new(params(2, 100.0));
        let inventory = standard_inventory();
        let layout = planner.build_layout(&inventory).unwrap();

        assert_eq!(layout.shots[0].position, 100.0);
        assert_eq!(layout.shots[0].station, 1);
        assert_eq!(layout.receiver_groups[0].positions[0], 108.0);
        assert_eq!(layout.annotations[0], 100.0);
    }

    #[test]
    fn test_non_finite_offset_is_rejected() {
        let planner = FixedSpreadPlanner::new(params(2, f64::INFINITY));
        assert_eq!(
            planner.compute(&standard_inventory()),
            Err(PlanError::NonFiniteValue {
                field: "line_offset"
            })
        );
    }
}
