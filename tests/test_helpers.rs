// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供检波器组清单、布设参数构建与临时文件生成
// ==========================================

#![allow(dead_code)]

use seismic_layout::domain::{
    FixedSpreadParams, ReceiverGroupInventory, ReceiverGroupRecord, RollAlongParams,
    SurveyParameters,
};
use std::error::Error;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

pub const EPS: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

/// 按规模列表构建清单 (标记按序号命名)
pub fn inventory_of(sizes: &[u32]) -> ReceiverGroupInventory {
    ReceiverGroupInventory::new(
        sizes
            .iter()
            .enumerate()
            .map(|(i, &s)| ReceiverGroupRecord::new(s, format!("tag-{}", i)))
            .collect(),
    )
    .expect("valid inventory")
}

/// 标准排列: 4 组 24 道 + 1 组 16 道，共 112 道
pub fn standard_spread() -> ReceiverGroupInventory {
    inventory_of(&[24, 24, 24, 24, 16])
}

pub fn survey(shot_spacing: f64, phone_spacing: f64, annotation_spacing: f64) -> SurveyParameters {
    SurveyParameters {
        shot_spacing,
        phone_spacing,
        annotation_spacing,
    }
}

pub fn roll_params(
    survey: SurveyParameters,
    first_phone_position: f64,
    line_length: f64,
) -> RollAlongParams {
    RollAlongParams {
        survey,
        first_phone_position,
        line_length,
    }
}

pub fn fixed_params(survey: SurveyParameters, lead_shots: u32, line_offset: f64) -> FixedSpreadParams {
    FixedSpreadParams {
        survey,
        lead_shots,
        line_offset,
    }
}

/// 在目录下写入文本文件
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<(), Box<dyn Error>> {
    let mut file = std::fs::File::create(dir.join(name))?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// 创建临时 CSV 文件（需要保持存活）
pub fn temp_csv(content: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = Builder::new().suffix(".csv").tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}
