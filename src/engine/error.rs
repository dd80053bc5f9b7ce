// ==========================================
// 地震测线布设计算 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 所有配置校验在位置展开之前完成,不产出部分结果
// ==========================================

use crate::domain::receiver::InventoryError;
use thiserror::Error;

/// 布设引擎错误类型
///
/// 每个变体都指明被违反的前置条件
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    // ===== 检波器组清单错误 =====
    #[error("检波器组清单为空")]
    EmptyInventory,

    #[error("检波器组规模无效 (序号 {index}): group_size={size}，必须 >= 1")]
    InvalidGroupSize { index: usize, size: u32 },

    // ===== 参数范围错误 =====
    #[error("参数必须为正数 ({field}): {value}")]
    NonPositiveValue { field: &'static str, value: f64 },

    #[error("参数不能为负数 ({field}): {value}")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("参数不是有限数值 ({field})")]
    NonFiniteValue { field: &'static str },

    // ===== 滚动计算错误 =====
    #[error("目标测线长度不足: line_length={line_length}，必须大于单次完整排列长度 {minimum}")]
    LineTooShort { line_length: f64, minimum: f64 },

    #[error("滚动次数计算退化: total_rolls={total_rolls}")]
    DegenerateRoll { total_rolls: f64 },
}

impl From<InventoryError> for PlanError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::Empty => PlanError::EmptyInventory,
            InventoryError::InvalidGroupSize { index, size } => {
                PlanError::InvalidGroupSize { index, size }
            }
        }
    }
}

/// Result 类型别名
pub type PlanResult<T> = Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_error_maps_to_plan_error() {
        assert_eq!(PlanError::from(InventoryError::Empty), PlanError::EmptyInventory);
        assert_eq!(
            PlanError::from(InventoryError::InvalidGroupSize { index: 2, size: 0 }),
            PlanError::InvalidGroupSize { index: 2, size: 0 }
        );
    }
}
