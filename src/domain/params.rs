// ==========================================
// 地震测线布设计算 - 布设参数
// ==========================================
// 职责: 单次布设计算的独立输入 (一次计算内不可变)
// 说明: 范围校验由引擎层在计算前统一执行
// ==========================================

use crate::domain::receiver::ReceiverGroupInventory;
use crate::domain::types::AcquisitionMode;
use serde::{Deserialize, Serialize};

// ==========================================
// SurveyParameters - 公共间距参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyParameters {
    pub shot_spacing: f64,       // 炮点间距 (> 0)
    pub phone_spacing: f64,      // 组内检波器间距 (> 0)
    pub annotation_spacing: f64, // 距离标注间隔 (> 0)
}

// ==========================================
// RollAlongParams - 滚动排列参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollAlongParams {
    pub survey: SurveyParameters,
    pub first_phone_position: f64, // 首个检波器位置 (>= 0)
    pub line_length: f64,          // 目标测线长度 (> 0)
}

// ==========================================
// FixedSpreadParams - 固定双边放炮参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedSpreadParams {
    pub survey: SurveyParameters,
    pub lead_shots: u32,  // 每端排列外炮点数
    pub line_offset: f64, // 坐标系平移量
}

// ==========================================
// AcquisitionParams - 按观测系统区分的参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AcquisitionParams {
    RollAlong(RollAlongParams),
    FixedSpread(FixedSpreadParams),
}

impl AcquisitionParams {
    pub fn mode(&self) -> AcquisitionMode {
        match self {
            AcquisitionParams::RollAlong(_) => AcquisitionMode::RollAlong,
            AcquisitionParams::FixedSpread(_) => AcquisitionMode::FixedSpread,
        }
    }

    pub fn survey(&self) -> &SurveyParameters {
        match self {
            AcquisitionParams::RollAlong(p) => &p.survey,
            AcquisitionParams::FixedSpread(p) => &p.survey,
        }
    }
}

// ==========================================
// PlanRequest - 单次布设请求
// ==========================================
/// 一次布设计算的完整输入: 清单 + 参数
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub name: Option<String>,
    pub inventory: ReceiverGroupInventory,
    pub params: AcquisitionParams,
}
