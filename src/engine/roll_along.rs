// ==========================================
// 地震测线布设计算 - 滚动排列规划器
// ==========================================
// 职责: 按目标测线长度计算每组重复次数、实际长度、炮点数、滚动次数
// 输入: 检波器组清单 + 炮点/检波器间距 + 首检波器位置 + 目标长度
// 输出: RollPlan
// ==========================================
// 末次部分滚动规则: 取相对累计位置最接近滚动余数的组 k (相等取先出现者)，
// 0..=k 组各多重复一次。该规则是近似判定,不做空间覆盖检验。
// ==========================================

use crate::domain::layout::{PlanSummary, ReceiverGroupLayout, SurveyLayout};
use crate::domain::params::RollAlongParams;
use crate::domain::plan::RollPlan;
use crate::domain::receiver::ReceiverGroupInventory;
use crate::domain::types::AcquisitionMode;
use crate::engine::error::{PlanError, PlanResult};
use crate::engine::geometry::{
    annotation_distances, initial_positions, nearest_index, relative_positions,
    require_non_negative, require_positive, shot_points, validate_survey,
};
use crate::engine::planner::SurveyPlanner;
use crate::engine::receiver_instance::ReceiverGroupInstance;
use tracing::{debug, info, instrument, warn};

// ==========================================
// RollAlongPlanner - 滚动排列规划器
// ==========================================
pub struct RollAlongPlanner {
    params: RollAlongParams,
}

impl RollAlongPlanner {
    pub fn new(params: RollAlongParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RollAlongParams {
        &self.params
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算滚动排列方案
    ///
    /// # 规则
    /// 1. string_aperture = 检波器总数 * phone_spacing
    /// 2. rolled_length = line_length - string_aperture - first_phone_position
    /// 3. total_rolls = rolled_length / string_aperture，基础重复次数 = floor + 1
    /// 4. 余数决定哪些组多重复一次 (见模块头说明)
    /// 5. true_length 由整数重复次数反算
    /// 6. num_shots = ceil((true_length - first_phone_position) / shot_spacing)
    ///
    /// # 错误
    /// - 间距非正、首检波器位置为负
    /// - 目标长度不超过单次完整排列长度 (`LineTooShort`)
    #[instrument(skip(self, inventory), fields(
        groups = inventory.len(),
        line_length = self.params.line_length
    ))]
    pub fn compute(&self, inventory: &ReceiverGroupInventory) -> PlanResult<RollPlan> {
        let survey = &self.params.survey;
        validate_survey(survey)?;
        let first_phone_position =
            require_non_negative("first_phone_position", self.params.first_phone_position)?;
        let line_length = require_positive("line_length", self.params.line_length)?;
        let phone_spacing = survey.phone_spacing;

        // 1. 排列几何
        let group_sizes = inventory.group_sizes();
        let total_phone_inventory = inventory.total_phone_inventory();
        let string_aperture = inventory.string_aperture(phone_spacing);

        let initial_roll_length = string_aperture + first_phone_position;
        if line_length <= initial_roll_length {
            return Err(PlanError::LineTooShort {
                line_length,
                minimum: initial_roll_length,
            });
        }

        // 2. 实数滚动次数
        let rolled_length = line_length - initial_roll_length;
        let total_rolls = rolled_length / string_aperture;
        if !total_rolls.is_finite() || total_rolls < 0.0 || total_rolls >= f64::from(u32::MAX - 1)
        {
            return Err(PlanError::DegenerateRoll { total_rolls });
        }

        let whole_rolls = total_rolls.floor();
        let roll_remainder = total_rolls - whole_rolls;
        let baseline_repetitions = whole_rolls as u32 + 1;

        // 3. 末次部分滚动覆盖到的组
        let relative = relative_positions(&group_sizes);
        let last_roll_index =
            nearest_index(&relative, roll_remainder).ok_or(PlanError::EmptyInventory)?;

        debug!(
            total_rolls,
            roll_remainder, baseline_repetitions, last_roll_index, "滚动次数计算完成"
        );

        let repetitions_per_group: Vec<u32> = (0..group_sizes.len())
            .map(|i| {
                if i <= last_roll_index {
                    baseline_repetitions + 1
                } else {
                    baseline_repetitions
                }
            })
            .collect();

        // 4. 由整数重复次数反算实际长度
        let covered_length: f64 = repetitions_per_group
            .iter()
            .zip(&group_sizes)
            .map(|(&reps, &size)| f64::from(reps) * f64::from(size) * phone_spacing)
            .sum();
        let actual_rolled_length = covered_length - string_aperture;
        let true_length = first_phone_position + string_aperture + actual_rolled_length;

        if true_length < line_length {
            warn!(
                true_length,
                line_length, "末次部分滚动未完全覆盖目标测线长度"
            );
        }

        // 5. 炮点数与滚动次数
        let num_shots =
            ((true_length - first_phone_position) / survey.shot_spacing).ceil() as u64;
        let total_repetitions: u64 = repetitions_per_group.iter().map(|&r| u64::from(r)).sum();
        let num_rolls = total_repetitions - group_sizes.len() as u64;
        let lead_shots = (first_phone_position / survey.shot_spacing).floor() as u64;

        info!(
            string_aperture,
            true_length, num_shots, num_rolls, "滚动排列方案计算完成"
        );

        Ok(RollPlan {
            total_phone_inventory,
            string_aperture,
            first_phone_position,
            phone_spacing,
            shot_spacing: survey.shot_spacing,
            total_rolls,
            roll_remainder,
            baseline_repetitions,
            last_roll_index,
            repetitions_per_group,
            requested_length: line_length,
            rolled_length: actual_rolled_length,
            true_length,
            num_shots,
            num_rolls,
            lead_shots,
        })
    }

    // ==========================================
    // 位置展开
    // ==========================================

    /// 炮点: 从 0 开始，每隔 shot_spacing 一个，共 num_shots 个
    pub fn shot_positions(&self, plan: &RollPlan) -> Vec<f64> {
        (0..plan.num_shots)
            .map(|k| k as f64 * plan.shot_spacing)
            .collect()
    }

    /// 各组检波器展开
    pub fn receiver_layouts(
        &self,
        inventory: &ReceiverGroupInventory,
        plan: &RollPlan,
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
            .zip(&plan.repetitions_per_group)
            .enumerate()
            .map(|(group_index, ((record, initial_position), &repetitions))| {
                let instance = ReceiverGroupInstance::new(
                    record.group_size,
                    initial_position,
                    repetitions,
                    plan.phone_spacing,
                    plan.string_aperture,
                );
                ReceiverGroupLayout {
                    group_index,
                    display_tag: record.display_tag.clone(),
                    group_size: record.group_size,
                    repetitions,
                    initial_position,
                    positions: instance.positions(),
                }
            })
            .collect()
    }

    /// 距离标注: [0, true_length)
    pub fn annotations(&self, plan: &RollPlan) -> Vec<f64> {
        annotation_distances(plan.true_length, self.params.survey.annotation_spacing, 0.0)
    }
}

impl SurveyPlanner for RollAlongPlanner {
    type Plan = RollPlan;

    fn mode(&self) -> AcquisitionMode {
        AcquisitionMode::RollAlong
    }

    fn plan(&self, inventory: &ReceiverGroupInventory) -> PlanResult<RollPlan> {
        self.compute(inventory)
    }

    fn build_layout(&self, inventory: &ReceiverGroupInventory) -> PlanResult<SurveyLayout> {
        let plan = self.compute(inventory)?;
        let shots = shot_points(&self.shot_positions(&plan), plan.shot_spacing, 0.0);
        let receiver_groups = self.receiver_layouts(inventory, &plan);
        let annotations = self.annotations(&plan);

        Ok(SurveyLayout::new(
            PlanSummary::RollAlong(plan),
            shots,
            receiver_groups,
            annotations,
        ))
    }
}
