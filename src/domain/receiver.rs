// ==========================================
// 地震测线布设计算 - 检波器组领域模型
// ==========================================
// 职责: 检波器组记录与有序清单
// 红线: 清单顺序即物理从左到右的摆放顺序,不得重排
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 清单构造错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("检波器组清单为空")]
    Empty,

    #[error("检波器组规模无效 (序号 {index}): group_size={size}，必须 >= 1")]
    InvalidGroupSize { index: usize, size: u32 },
}

// ==========================================
// ReceiverGroupRecord - 检波器组记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverGroupRecord {
    pub group_size: u32,     // 组内检波器数量 (>= 1)
    pub display_tag: String, // 显示标记 (如颜色)，不参与布设计算
}

impl ReceiverGroupRecord {
    pub fn new(group_size: u32, display_tag: impl Into<String>) -> Self {
        Self {
            group_size,
            display_tag: display_tag.into(),
        }
    }
}

// ==========================================
// ReceiverGroupInventory - 检波器组清单
// ==========================================
/// 经过边界校验的有序检波器组清单
///
/// 构造即校验: 非空且每组 `group_size >= 1`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiverGroupInventory {
    records: Vec<ReceiverGroupRecord>,
}

impl ReceiverGroupInventory {
    /// 创建清单
    ///
    /// # 错误
    /// - `Empty`: 清单为空
    /// - `InvalidGroupSize`: 某组规模为 0
    pub fn new(records: Vec<ReceiverGroupRecord>) -> Result<Self, InventoryError> {
        if records.is_empty() {
            return Err(InventoryError::Empty);
        }

        if let Some((index, record)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| r.group_size == 0)
        {
            return Err(InventoryError::InvalidGroupSize {
                index,
                size: record.group_size,
            });
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ReceiverGroupRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 各组规模 (按清单顺序)
    pub fn group_sizes(&self) -> Vec<u32> {
        self.records.iter().map(|r| r.group_size).collect()
    }

    /// 检波器总数
    pub fn total_phone_inventory(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.group_size)).sum()
    }

    /// 单次完整排列的物理长度
    pub fn string_aperture(&self, phone_spacing: f64) -> f64 {
        self.total_phone_inventory() as f64 * phone_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_inventory() {
        let result = ReceiverGroupInventory::new(Vec::new());
        assert_eq!(result, Err(InventoryError::Empty));
    }

    #[test]
    fn test_new_rejects_zero_sized_group() {
        let result = ReceiverGroupInventory::new(vec![
            ReceiverGroupRecord::new(24, "blue"),
            ReceiverGroupRecord::new(0, "lime"),
        ]);
        assert_eq!(
            result,
            Err(InventoryError::InvalidGroupSize { index: 1, size: 0 })
        );
    }

    #[test]
    fn test_totals_preserve_order() {
        let inventory = ReceiverGroupInventory::new(vec![
            ReceiverGroupRecord::new(24, "deeppink"),
            ReceiverGroupRecord::new(16, "lime"),
        ])
        .unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.group_sizes(), vec![24, 16]);
        assert_eq!(inventory.total_phone_inventory(), 40);
        assert_eq!(inventory.string_aperture(6.0), 240.0);
        assert_eq!(inventory.records()[1].display_tag, "lime");
    }
}
