// ==========================================
// 地震测线布设计算 - 领域模型层
// ==========================================
// 职责: 定义检波器组、布设参数、方案与布设结果
// 红线: 不含计算逻辑,不含文件读取
// ==========================================

pub mod layout;
pub mod params;
pub mod plan;
pub mod receiver;
pub mod types;

// 重导出核心类型
pub use layout::{PlanSummary, ReceiverGroupLayout, ShotPoint, SurveyLayout};
pub use params::{
    AcquisitionParams, FixedSpreadParams, PlanRequest, RollAlongParams, SurveyParameters,
};
pub use plan::{FixedSpreadPlan, RollPlan};
pub use receiver::{InventoryError, ReceiverGroupInventory, ReceiverGroupRecord};
pub use types::AcquisitionMode;
