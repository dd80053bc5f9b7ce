// ==========================================
// 地震测线布设计算 - 核心库
// ==========================================
// 职责: 检波器组/炮点位置、重复次数与采集指标计算
// 观测系统: 滚动排列 (roll-along) / 固定排列双边放炮 (split-spread)
// 范围: 只产出布设数据,不做绘图与导出
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 检波器组、参数、方案
pub mod domain;

// 引擎层 - 布设几何计算
pub mod engine;

// 导入层 - 检波器组清单
pub mod importer;

// 配置层 - 测线配置文件
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AcquisitionMode, AcquisitionParams, FixedSpreadParams, FixedSpreadPlan, InventoryError,
    PlanRequest, PlanSummary, ReceiverGroupInventory, ReceiverGroupLayout, ReceiverGroupRecord,
    RollAlongParams, RollPlan, ShotPoint, SurveyLayout, SurveyParameters,
};

// 引擎
pub use engine::{
    FixedSpreadPlanner, PlanError, PlanResult, ReceiverGroupInstance, RollAlongPlanner,
    SurveyOrchestrator, SurveyPlanner,
};

// 导入与配置
pub use config::{ConfigError, DisplayPalette, SurveyConfigFile};
pub use importer::{ImportError, InventoryImporter};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "地震测线布设计算";
