// ==========================================
// 地震测线布设计算 - 清单数据质量校验器
// ==========================================
// 职责: 逐行校验组规模 (存在、可解析为整数、>= 1)
// 规则: 任一违规即导入失败,报告全部违规行
// ==========================================

use crate::importer::field_mapper::RawGroupRecord;
use serde::Serialize;
use std::fmt;

/// 单行违规
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowViolation {
    pub row_number: usize,
    pub field: String,
    pub message: String,
}

impl fmt::Display for RowViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "行 {} ({}): {}", self.row_number, self.field, self.message)
    }
}

pub struct InventoryValidator;

impl InventoryValidator {
    /// 解析并校验组规模
    ///
    /// 接受整数或整值小数 (Excel 数值单元格常以 "24.0" 形式出现)
    pub fn validate_record(&self, record: &RawGroupRecord) -> Result<u32, RowViolation> {
        let violation = |message: String| RowViolation {
            row_number: record.row_number,
            field: "group_size".to_string(),
            message,
        };

        let raw = record
            .group_size_raw
            .as_deref()
            .ok_or_else(|| violation("组规模缺失".to_string()))?;

        let value: f64 = raw
            .parse()
            .map_err(|_| violation(format!("组规模不是数值: {}", raw)))?;

        if value.fract() != 0.0 || !value.is_finite() {
            return Err(violation(format!("组规模不是整数: {}", raw)));
        }
        if value < 1.0 {
            return Err(violation(format!("组规模必须 >= 1: {}", raw)));
        }
        if value > f64::from(u32::MAX) {
            return Err(violation(format!("组规模超出范围: {}", raw)));
        }

        Ok(value as u32)
    }

    /// 校验全部记录
    ///
    /// 全部通过时按记录顺序返回组规模，否则返回所有违规
    pub fn validate_all(&self, records: &[RawGroupRecord]) -> Result<Vec<u32>, Vec<RowViolation>> {
        let mut sizes = Vec::with_capacity(records.len());
        let mut violations = Vec::new();
        for record in records {
            match self.validate_record(record) {
                Ok(size) => sizes.push(size),
                Err(violation) => violations.push(violation),
            }
        }

        if violations.is_empty() {
            Ok(sizes)
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(row_number: usize, size: Option<&str>) -> RawGroupRecord {
        RawGroupRecord {
            row_number,
            group_size_raw: size.map(str::to_string),
            display_tag: None,
        }
    }

    #[test]
    fn test_validate_record_accepts_integer_like_values() {
        assert_eq!(InventoryValidator.validate_record(&record(1, Some("24"))), Ok(24));
        assert_eq!(InventoryValidator.validate_record(&record(1, Some("16.0"))), Ok(16));
    }

    #[test]
    fn test_validate_all_returns_sizes_in_order() {
        let records = vec![record(1, Some("24")), record(2, Some("16.0"))];
        assert_eq!(InventoryValidator.validate_all(&records), Ok(vec![24, 16]));
    }

    #[test]
    fn test_validate_all_reports_every_bad_row() {
        let records = vec![
            record(1, Some("24")),
            record(2, None),
            record(3, Some("abc")),
            record(4, Some("0")),
            record(5, Some("2.5")),
        ];

        let violations = InventoryValidator.validate_all(&records).unwrap_err();
        let rows: Vec<usize> = violations.iter().map(|v| v.row_number).collect();
        assert_eq!(rows, vec![2, 3, 4, 5]);
        assert!(violations[0].to_string().contains("行 2"));
    }
}
