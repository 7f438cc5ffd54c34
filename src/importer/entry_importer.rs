// ==========================================
// 绿色标章评定工具 - 消耗量录入导入
// ==========================================
// 列: material, consumption?
// consumption 留空 → 使用参考表平均消耗量
// ==========================================

use crate::config::catalog::MaterialCatalog;
use crate::domain::material::MaterialEntry;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{self as fields, FieldMapper};
use crate::importer::file_parser::{RawRecord, UniversalFileParser};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

pub struct EntryImporter<'a> {
    catalog: &'a MaterialCatalog,
}

impl<'a> EntryImporter<'a> {
    pub fn new(catalog: &'a MaterialCatalog) -> Self {
        Self { catalog }
    }

    /// 读取文件并转换为 MaterialEntry 列表（保持文件顺序）
    pub fn import(&self, path: &Path) -> ImportResult<Vec<MaterialEntry>> {
        let records = UniversalFileParser.parse(path)?;
        let entries = self.map_records(&records)?;
        info!(path = %path.display(), entries = entries.len(), "消耗量录入已导入");
        Ok(entries)
    }

    pub fn map_records(&self, records: &[RawRecord]) -> ImportResult<Vec<MaterialEntry>> {
        if records.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(records.len());

        for record in records {
            let row = record.row_number;
            let name = FieldMapper::required_str(record, fields::NAME)?;

            let spec = self
                .catalog
                .find(name)
                .ok_or_else(|| ImportError::UnknownMaterial {
                    row,
                    name: name.to_string(),
                })?;

            if !seen.insert(spec.name.clone()) {
                return Err(ImportError::DuplicateMaterial(spec.name.clone()));
            }

            let entry = match FieldMapper::optional_f64(record, fields::CONSUMPTION)? {
                Some(value) => {
                    FieldMapper::check_range(value, f64::MIN_POSITIVE, f64::MAX, row, "consumption")?;
                    MaterialEntry::new(spec.clone(), value)
                }
                None => {
                    debug!(row, material = %spec.name, "消耗量留空，使用平均消耗量");
                    MaterialEntry::with_average(spec.clone())
                }
            };

            entries.push(entry);
        }

        Ok(entries)
    }
}
