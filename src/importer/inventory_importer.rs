// ==========================================
// 地震测线布设计算 - 检波器组清单导入器
// ==========================================
// 流程: 文件解析 → 字段映射 → 数据质量校验 → 补全显示标记 → 构造清单
// 红线: 清单行顺序即物理摆放顺序,导入过程不得重排
// ==========================================

use crate::config::palette::DisplayPalette;
use crate::domain::receiver::{ReceiverGroupInventory, ReceiverGroupRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::InventoryFieldMapper;
use crate::importer::file_parser::{RawTable, UniversalFileParser};
use crate::importer::validator::InventoryValidator;
use std::path::Path;
use tracing::{info, instrument, warn};

pub struct InventoryImporter {
    palette: DisplayPalette,
}

impl InventoryImporter {
    pub fn new(palette: DisplayPalette) -> Self {
        Self { palette }
    }

    /// 从 CSV / Excel 文件导入
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ReceiverGroupInventory> {
        let table = UniversalFileParser.parse(file_path.as_ref())?;
        self.import_table(&table)
    }

    /// 从已解析表格导入
    pub fn import_table(&self, table: &RawTable) -> ImportResult<ReceiverGroupInventory> {
        let raw_records = InventoryFieldMapper.map_table(table)?;

        let group_sizes = match InventoryValidator.validate_all(&raw_records) {
            Ok(sizes) => sizes,
            Err(violations) => {
                for violation in &violations {
                    warn!(row = violation.row_number, field = %violation.field, "{}", violation.message);
                }
                let first = violations
                    .first()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                return Err(ImportError::ValidationFailed {
                    count: violations.len(),
                    first,
                });
            }
        };

        let records: Vec<ReceiverGroupRecord> = raw_records
            .iter()
            .zip(group_sizes)
            .enumerate()
            .map(|(index, (raw, group_size))| {
                let display_tag = raw
                    .display_tag
                    .clone()
                    .unwrap_or_else(|| self.palette.tag_for(index).to_string());
                ReceiverGroupRecord::new(group_size, display_tag)
            })
            .collect();

        let inventory = ReceiverGroupInventory::new(records)?;
        info!(
            groups = inventory.len(),
            total_phones = inventory.total_phone_inventory(),
            "检波器组清单导入完成"
        );
        Ok(inventory)
    }
}

impl Default for InventoryImporter {
    fn default() -> Self {
        Self::new(DisplayPalette::default())
    }
}
