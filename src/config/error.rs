// ==========================================
// 地震测线布设计算 - 配置层错误类型
// ==========================================

use crate::domain::receiver::InventoryError;
use crate::engine::error::PlanError;
use crate::importer::error::ImportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件解析失败: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("配置文件中没有测线条目 (input_data 为空)")]
    NoEntries,

    #[error("测线条目 {entry} 缺少字段: {field}")]
    MissingField { entry: usize, field: &'static str },

    #[error("测线条目 {entry} 的检波器组来源无效: {message}")]
    InventorySource { entry: usize, message: String },

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Inventory(#[from] PlanError),
}

impl From<InventoryError> for ConfigError {
    fn from(err: InventoryError) -> Self {
        ConfigError::Inventory(PlanError::from(err))
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
