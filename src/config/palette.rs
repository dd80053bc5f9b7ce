// ==========================================
// 地震测线布设计算 - 显示标记色板
// ==========================================
// 职责: 为未指定显示标记的检波器组按序号分配标记
// 说明: 作为配置注入,不使用全局可变状态
// ==========================================

use serde::{Deserialize, Serialize};

/// 默认色板
pub const DEFAULT_PALETTE: &[&str] = &["deeppink", "lime", "blue", "orange", "white", "yellow"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct DisplayPalette {
    tags: Vec<String>,
}

impl DisplayPalette {
    /// 创建色板，空表回退为默认色板
    pub fn new(tags: Vec<String>) -> Self {
        if tags.is_empty() {
            return Self::default();
        }
        Self { tags }
    }

    /// 按组序号取标记 (超出长度时循环)
    pub fn tag_for(&self, group_index: usize) -> &str {
        &self.tags[group_index % self.tags.len()]
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl From<Vec<String>> for DisplayPalette {
    fn from(tags: Vec<String>) -> Self {
        Self::new(tags)
    }
}

impl From<DisplayPalette> for Vec<String> {
    fn from(palette: DisplayPalette) -> Self {
        palette.tags
    }
}

impl Default for DisplayPalette {
    fn default() -> Self {
        Self {
            tags: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
        }
    }
}
