// ==========================================
// 地震测线布设计算 - 公共几何工具
// ==========================================
// 职责: 前缀和、相对位置、等差序列、标注距离、参数范围校验
// 说明: 纯函数,供两种观测系统共用
// ==========================================

use crate::domain::layout::ShotPoint;
use crate::domain::params::SurveyParameters;
use crate::engine::error::{PlanError, PlanResult};

// ==========================================
// 参数校验
// ==========================================

/// 校验有限正数
pub fn require_positive(field: &'static str, value: f64) -> PlanResult<f64> {
    let value = require_finite(field, value)?;
    if value <= 0.0 {
        return Err(PlanError::NonPositiveValue { field, value });
    }
    Ok(value)
}

/// 校验有限非负数
pub fn require_non_negative(field: &'static str, value: f64) -> PlanResult<f64> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(PlanError::NegativeValue { field, value });
    }
    Ok(value)
}

pub fn require_finite(field: &'static str, value: f64) -> PlanResult<f64> {
    if !value.is_finite() {
        return Err(PlanError::NonFiniteValue { field });
    }
    Ok(value)
}

/// 校验公共间距参数 (全部 > 0)
pub fn validate_survey(survey: &SurveyParameters) -> PlanResult<()> {
    require_positive("shot_spacing", survey.shot_spacing)?;
    require_positive("phone_spacing", survey.phone_spacing)?;
    require_positive("annotation_spacing", survey.annotation_spacing)?;
    Ok(())
}

// ==========================================
// 清单累计量
// ==========================================

/// 累计检波器数 (含当前组)
pub fn cumulative_counts(group_sizes: &[u32]) -> Vec<u64> {
    group_sizes
        .iter()
        .scan(0u64, |acc, &size| {
            *acc += u64::from(size);
            Some(*acc)
        })
        .collect()
}

/// 当前组之前的检波器数 (不含当前组)
pub fn preceding_counts(group_sizes: &[u32]) -> Vec<u64> {
    group_sizes
        .iter()
        .scan(0u64, |acc, &size| {
            let before = *acc;
            *acc += u64::from(size);
            Some(before)
        })
        .collect()
}

/// 相对累计位置 (0, 1]，随清单顺序单调递增
pub fn relative_positions(group_sizes: &[u32]) -> Vec<f64> {
    let cumulative = cumulative_counts(group_sizes);
    let total = cumulative.last().copied().unwrap_or(0);
    if total == 0 {
        return Vec::new();
    }
    cumulative
        .iter()
        .map(|&c| c as f64 / total as f64)
        .collect()
}

/// 各组首个检波器的绝对位置
pub fn initial_positions(group_sizes: &[u32], first_phone_position: f64, phone_spacing: f64) -> Vec<f64> {
    preceding_counts(group_sizes)
        .into_iter()
        .map(|before| first_phone_position + before as f64 * phone_spacing)
        .collect()
}

/// 与目标值最接近的下标 (绝对差最小，相等时取最先出现者)
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| {
            let diff = (v - target).abs();
            match best {
                Some((_, best_diff)) if diff >= best_diff => best,
                _ => Some((i, diff)),
            }
        })
        .map(|(i, _)| i)
}

// ==========================================
// 序列生成
// ==========================================

/// 半开区间 [start, stop) 上步长为 step 的等差序列
///
/// 长度为 ceil((stop - start) / step)，区间为空时返回空序列
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    let count = ((stop - start) / step).ceil();
    if !(count > 0.0) {
        return Vec::new();
    }
    (0..count as u64)
        .map(|i| start + i as f64 * step)
        .collect()
}

/// 距离标注: [0, line_length) 上每隔 annotation_spacing 一个，再整体平移 offset
pub fn annotation_distances(line_length: f64, annotation_spacing: f64, offset: f64) -> Vec<f64> {
    arange(0.0, line_length, annotation_spacing)
        .into_iter()
        .map(|d| d + offset)
        .collect()
}

/// 由绝对位置生成炮点 (桩号 = 未平移位置 / 炮点间距 + 1)
pub fn shot_points(raw_positions: &[f64], shot_spacing: f64, offset: f64) -> Vec<ShotPoint> {
    raw_positions
        .iter()
        .map(|&p| ShotPoint {
            station: (p / shot_spacing).round() as u64 + 1,
            position: p + offset,
        })
        .collect()
}
