// ==========================================
// 绿色标章评定工具 - 导入层
// ==========================================
// 职责: 外部文件 → 材料参考表 / 消耗量录入
// 支持: Excel, CSV
// ==========================================

pub mod catalog_importer;
pub mod entry_importer;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

// 重导出核心类型
pub use catalog_importer::CatalogImporter;
pub use entry_importer::EntryImporter;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRecord, UniversalFileParser};
