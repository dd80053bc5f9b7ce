// ==========================================
// 地震测线布设计算 - 布设规划器接口
// ==========================================
// 用途: 两种观测系统共用的规划器形态
// ==========================================

use crate::domain::layout::SurveyLayout;
use crate::domain::receiver::ReceiverGroupInventory;
use crate::domain::types::AcquisitionMode;
use crate::engine::error::PlanResult;

/// 布设规划器
///
/// 实现方必须是纯计算: 相同输入产出相同方案,无 I/O、无共享可变状态
pub trait SurveyPlanner {
    /// 方案类型 (标量指标 + 每组重复次数)
    type Plan;

    fn mode(&self) -> AcquisitionMode;

    /// 计算方案 (校验全部前置条件)
    fn plan(&self, inventory: &ReceiverGroupInventory) -> PlanResult<Self::Plan>;

    /// 计算方案并展开炮点、检波器与距离标注
    fn build_layout(&self, inventory: &ReceiverGroupInventory) -> PlanResult<SurveyLayout>;
}
