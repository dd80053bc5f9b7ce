// ==========================================
// 地震测线布设计算 - 引擎层
// ==========================================
// 职责: 布设几何计算 (纯函数,不读文件,不绘图)
// 红线: 配置校验先于位置展开,失败即返回,不产出部分结果
// ==========================================

pub mod error;
pub mod fixed_spread;
pub mod geometry;
pub mod orchestrator;
pub mod planner;
pub mod receiver_instance;
pub mod roll_along;

// 重导出核心引擎
pub use error::{PlanError, PlanResult};
pub use fixed_spread::FixedSpreadPlanner;
pub use orchestrator::SurveyOrchestrator;
pub use planner::SurveyPlanner;
pub use receiver_instance::ReceiverGroupInstance;
pub use roll_along::RollAlongPlanner;
