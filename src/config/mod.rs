// ==========================================
// 地震测线布设计算 - 配置层
// ==========================================
// 职责: 测线配置文件加载、显示标记色板
// 存储: JSON 文件
// ==========================================

pub mod error;
pub mod palette;
pub mod survey_config;

// 重导出核心配置类型
pub use error::{ConfigError, ConfigResult};
pub use palette::{DisplayPalette, DEFAULT_PALETTE};
pub use survey_config::{
    InventoryEntryConfig, StringCountConfig, SurveyConfigFile, SurveyEntryConfig,
};
