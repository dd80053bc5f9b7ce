// ==========================================
// 地震测线布设计算 - 布设方案
// ==========================================
// 职责: 两种观测系统的计算输出 (构造后不可变)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RollPlan - 滚动排列方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollPlan {
    // ===== 排列几何 =====
    pub total_phone_inventory: u64, // 检波器总数
    pub string_aperture: f64,       // 单次完整排列长度
    pub first_phone_position: f64,  // 首个检波器位置
    pub phone_spacing: f64,
    pub shot_spacing: f64,

    // ===== 滚动计算中间量 =====
    pub total_rolls: f64,          // 实数滚动次数
    pub roll_remainder: f64,       // 小数部分
    pub baseline_repetitions: u32, // 所有组的最少重复次数
    pub last_roll_index: usize,    // 末次部分滚动覆盖到的组序号 (含)

    // ===== 输出 =====
    pub repetitions_per_group: Vec<u32>, // 每组重复次数 (与清单顺序一致)
    pub requested_length: f64,           // 目标测线长度
    pub rolled_length: f64,              // 首次排列之外的实际滚动长度
    pub true_length: f64,                // 实际测线长度
    pub num_shots: u64,                  // 炮点数
    pub num_rolls: u64,                  // 额外重复次数合计
    pub lead_shots: u64,                 // 首检波器之前的炮点数
}

// ==========================================
// FixedSpreadPlan - 固定排列方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedSpreadPlan {
    pub total_phone_inventory: u64,
    pub string_aperture: f64,
    pub first_phone_position: f64, // = lead_shots * shot_spacing
    pub phone_spacing: f64,
    pub shot_spacing: f64,
    pub lead_shots: u32,
    pub line_offset: f64,
    pub line_length: f64, // = string_aperture + 2 * first_phone_position
    pub num_shots: u64,   // = floor(string_aperture / shot_spacing) + 2 * lead_shots
    pub fold: f64,        // 覆盖次数
}

impl FixedSpreadPlan {
    /// 炮点移动量 (以检波器间距为单位)
    pub fn move_up(&self) -> f64 {
        self.shot_spacing / self.phone_spacing
    }

    /// 远端炮点起始位置 (未含坐标平移)
    pub fn far_shot_start(&self) -> f64 {
        self.string_aperture + self.first_phone_position
    }
}
