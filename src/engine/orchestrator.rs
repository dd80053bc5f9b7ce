// ==========================================
// 地震测线布设计算 - 引擎编排器
// ==========================================
// 用途: 按观测系统选择规划器,执行计算与位置展开
// 说明: 每次调用独立创建规划器,不跨调用共享状态
// ==========================================

use crate::domain::layout::SurveyLayout;
use crate::domain::params::{AcquisitionParams, PlanRequest};
use crate::engine::error::PlanResult;
use crate::engine::fixed_spread::FixedSpreadPlanner;
use crate::engine::planner::SurveyPlanner;
use crate::engine::roll_along::RollAlongPlanner;
use rayon::prelude::*;
use tracing::{debug, info, warn};

// ==========================================
// SurveyOrchestrator - 引擎编排器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct SurveyOrchestrator;

impl SurveyOrchestrator {
    pub fn new() -> Self {
        Self
    }

    /// 执行单次布设计算
    ///
    /// # 流程
    /// 1. 按参数选择规划器
    /// 2. 计算方案 (全部校验在展开之前)
    /// 3. 展开炮点、检波器、距离标注
    pub fn execute(&self, request: &PlanRequest) -> PlanResult<SurveyLayout> {
        info!(
            name = request.name.as_deref().unwrap_or("-"),
            mode = %request.params.mode(),
            groups = request.inventory.len(),
            total_phones = request.inventory.total_phone_inventory(),
            "开始执行布设计算"
        );

        let layout = match request.params {
            AcquisitionParams::RollAlong(params) => {
                debug!("使用滚动排列规划器");
                RollAlongPlanner::new(params).build_layout(&request.inventory)?
            }
            AcquisitionParams::FixedSpread(params) => {
                debug!("使用固定排列规划器");
                FixedSpreadPlanner::new(params).build_layout(&request.inventory)?
            }
        };

        info!(
            run_id = %layout.run_id,
            num_shots = layout.summary.num_shots(),
            line_length = layout.summary.line_length(),
            receivers = layout.receiver_count(),
            "布设计算完成"
        );

        Ok(layout.with_name(request.name.clone()))
    }

    /// 批量布设计算
    ///
    /// 各请求互相独立,并行执行;结果顺序与输入一致,单个失败不影响其余请求
    pub fn execute_batch(&self, requests: &[PlanRequest]) -> Vec<PlanResult<SurveyLayout>> {
        info!(batch_size = requests.len(), "开始批量布设计算");

        let results: Vec<PlanResult<SurveyLayout>> =
            requests.par_iter().map(|r| self.execute(r)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(failed, batch_size = requests.len(), "批量布设计算存在失败项");
        }

        results
    }
}
