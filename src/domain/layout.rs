// ==========================================
// 地震测线布设计算 - 布设结果 (供绘图层消费)
// ==========================================
// 职责: 以不可变数据形式输出炮点、检波器、标注与汇总指标
// 红线: 不做绘图、换行、导出
// ==========================================

use crate::domain::plan::{FixedSpreadPlan, RollPlan};
use crate::domain::types::AcquisitionMode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// 炮点 (桩号从 1 开始)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShotPoint {
    pub station: u64,
    pub position: f64,
}

/// 单个检波器组的展开结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiverGroupLayout {
    pub group_index: usize,
    pub display_tag: String,
    pub group_size: u32,
    pub repetitions: u32,
    pub initial_position: f64,
    pub positions: Vec<f64>,
}

/// 方案汇总 (按观测系统区分)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PlanSummary {
    RollAlong(RollPlan),
    FixedSpread(FixedSpreadPlan),
}

impl PlanSummary {
    pub fn mode(&self) -> AcquisitionMode {
        match self {
            PlanSummary::RollAlong(_) => AcquisitionMode::RollAlong,
            PlanSummary::FixedSpread(_) => AcquisitionMode::FixedSpread,
        }
    }

    pub fn num_shots(&self) -> u64 {
        match self {
            PlanSummary::RollAlong(p) => p.num_shots,
            PlanSummary::FixedSpread(p) => p.num_shots,
        }
    }

    /// 实际测线长度 (滚动排列为 true_length)
    pub fn line_length(&self) -> f64 {
        match self {
            PlanSummary::RollAlong(p) => p.true_length,
            PlanSummary::FixedSpread(p) => p.line_length,
        }
    }

    pub fn string_aperture(&self) -> f64 {
        match self {
            PlanSummary::RollAlong(p) => p.string_aperture,
            PlanSummary::FixedSpread(p) => p.string_aperture,
        }
    }
}

// ==========================================
// SurveyLayout - 一次布设计算的完整输出
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct SurveyLayout {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub name: Option<String>,
    pub summary: PlanSummary,
    pub shots: Vec<ShotPoint>,
    pub receiver_groups: Vec<ReceiverGroupLayout>,
    pub annotations: Vec<f64>,
}

impl SurveyLayout {
    pub fn new(
        summary: PlanSummary,
        shots: Vec<ShotPoint>,
        receiver_groups: Vec<ReceiverGroupLayout>,
        annotations: Vec<f64>,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            name: None,
            summary,
            shots,
            receiver_groups,
            annotations,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn mode(&self) -> AcquisitionMode {
        self.summary.mode()
    }

    /// 全部检波器数量 (含重复)
    pub fn receiver_count(&self) -> usize {
        self.receiver_groups.iter().map(|g| g.positions.len()).sum()
    }
}
