// ==========================================
// 绿色标章评定工具 - 材料参考表导入
// ==========================================
// 列: name, average_consumption, unit, density?, waste_factor, co2_factor,
//     recyclable?, reuse_note?, disposal_note?
// recyclable 缺失时按 reuse_note 推断
// ==========================================

use crate::domain::material::{MaterialSpec, DEFAULT_DENSITY};
use crate::domain::types::MaterialUnit;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{self as fields, FieldMapper};
use crate::importer::file_parser::{RawRecord, UniversalFileParser};
use std::path::Path;
use tracing::info;

#[derive(Debug, Default)]
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn new() -> Self {
        Self
    }

    /// 读取文件并转换为 MaterialSpec 列表
    pub fn import(&self, path: &Path) -> ImportResult<Vec<MaterialSpec>> {
        let records = UniversalFileParser.parse(path)?;
        if records.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        let specs = records
            .iter()
            .map(|r| self.map_record(r))
            .collect::<ImportResult<Vec<_>>>()?;

        info!(path = %path.display(), materials = specs.len(), "材料参考表已导入");
        Ok(specs)
    }

    /// 单行映射
    pub fn map_record(&self, record: &RawRecord) -> ImportResult<MaterialSpec> {
        let row = record.row_number;

        let name = FieldMapper::required_str(record, fields::NAME)?.to_string();

        let average_consumption = FieldMapper::required_f64(record, fields::AVERAGE_CONSUMPTION)?;
        FieldMapper::check_range(average_consumption, f64::MIN_POSITIVE, f64::MAX, row, "average_consumption")?;

        let unit_raw = FieldMapper::required_str(record, fields::UNIT)?;
        let unit = unit_raw
            .parse::<MaterialUnit>()
            .map_err(|message| ImportError::TypeConversionError {
                row,
                field: "unit".to_string(),
                message,
            })?;

        let density = FieldMapper::optional_f64(record, fields::DENSITY)?.unwrap_or(DEFAULT_DENSITY);
        FieldMapper::check_range(density, f64::MIN_POSITIVE, f64::MAX, row, "density")?;

        let waste_factor = FieldMapper::required_f64(record, fields::WASTE_FACTOR)?;
        FieldMapper::check_range(waste_factor, 0.0, 1.0, row, "waste_factor")?;

        let co2_factor = FieldMapper::required_f64(record, fields::CO2_FACTOR)?;
        FieldMapper::check_range(co2_factor, 0.0, f64::MAX, row, "co2_factor")?;

        let reuse_note = FieldMapper::optional_string(record, fields::REUSE_NOTE).unwrap_or_default();
        let disposal_note =
            FieldMapper::optional_string(record, fields::DISPOSAL_NOTE).unwrap_or_default();

        let recyclable = FieldMapper::optional_bool(record, fields::RECYCLABLE)?
            .unwrap_or_else(|| MaterialSpec::infer_recyclable(&reuse_note));

        Ok(MaterialSpec {
            name,
            average_consumption,
            unit,
            density,
            waste_factor,
            co2_factor,
            recyclable,
            reuse_note,
            disposal_note,
        })
    }
}
