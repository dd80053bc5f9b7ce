// ==========================================
// 地震测线布设计算 - 清单字段映射
// ==========================================
// 职责: 将原始表格映射为检波器组原始记录
// 规则: 表头按别名匹配 (不区分大小写);未匹配时按列位置回退
//       (第 3 列为组规模，第 2 列为显示标记)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawTable;

const SIZE_ALIASES: &[&str] = &["num_phones", "phones", "group_size", "size", "phone_count"];
const TAG_ALIASES: &[&str] = &["color", "colour", "display_tag", "tag"];

const SIZE_FALLBACK_COLUMN: usize = 2;
const TAG_FALLBACK_COLUMN: usize = 1;

/// 映射后的原始记录 (尚未校验)
#[derive(Debug, Clone, PartialEq)]
pub struct RawGroupRecord {
    pub row_number: usize,
    pub group_size_raw: Option<String>,
    pub display_tag: Option<String>,
}

/// 列定位结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub size_column: usize,
    pub tag_column: Option<usize>,
}

pub struct InventoryFieldMapper;

impl InventoryFieldMapper {
    /// 定位组规模列与显示标记列
    pub fn resolve_columns(&self, headers: &[String]) -> ImportResult<ColumnMapping> {
        let find = |aliases: &[&str]| {
            headers
                .iter()
                .position(|h| aliases.iter().any(|a| h.eq_ignore_ascii_case(a)))
        };

        let size_column = match find(SIZE_ALIASES) {
            Some(idx) => idx,
            None if headers.len() > SIZE_FALLBACK_COLUMN => SIZE_FALLBACK_COLUMN,
            None => {
                return Err(ImportError::FieldMappingError(format!(
                    "未找到组规模列 (可用别名: {})，且列数不足 {}",
                    SIZE_ALIASES.join("/"),
                    SIZE_FALLBACK_COLUMN + 1
                )))
            }
        };

        let tag_column = find(TAG_ALIASES).or_else(|| {
            (headers.len() > TAG_FALLBACK_COLUMN && TAG_FALLBACK_COLUMN != size_column)
                .then_some(TAG_FALLBACK_COLUMN)
        });

        Ok(ColumnMapping {
            size_column,
            tag_column,
        })
    }

    /// 映射全部行
    pub fn map_table(&self, table: &RawTable) -> ImportResult<Vec<RawGroupRecord>> {
        let mapping = self.resolve_columns(&table.headers)?;

        let cell = |values: &[String], idx: usize| {
            values
                .get(idx)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Ok(table
            .rows
            .iter()
            .map(|row| RawGroupRecord {
                row_number: row.row_number,
                group_size_raw: cell(&row.values, mapping.size_column),
                display_tag: mapping
                    .tag_column
                    .and_then(|idx| cell(&row.values, idx)),
            })
            .collect())
    }
}
