// ==========================================
// 地震测线布设计算 - 导入层
// ==========================================
// 职责: 外部检波器组清单导入,在边界处完成强类型校验
// 支持: Excel, CSV
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod inventory_importer;
pub mod validator;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::{ColumnMapping, InventoryFieldMapper, RawGroupRecord};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRow, RawTable, UniversalFileParser};
pub use inventory_importer::InventoryImporter;
pub use validator::{InventoryValidator, RowViolation};
