// ==========================================
// 绿色标章评定工具 - 字段映射器
// ==========================================
// 职责: 源列名（含别名） → 标准字段 + 类型转换
// 列名别名覆盖英文 / 葡萄牙语 / 中文表头
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRecord;

// ===== 标准字段 → 列名别名（均为小写） =====
pub const NAME: &[&str] = &["name", "material", "nome", "材料", "材料名称"];
pub const AVERAGE_CONSUMPTION: &[&str] =
    &["average_consumption", "consumo", "consumo_padrao", "平均消耗"];
pub const UNIT: &[&str] = &["unit", "un", "unidade", "单位"];
pub const DENSITY: &[&str] = &["density", "densidade", "密度"];
pub const WASTE_FACTOR: &[&str] = &["waste_factor", "desperdicio", "废料系数"];
pub const CO2_FACTOR: &[&str] = &["co2_factor", "co2", "co2系数"];
pub const RECYCLABLE: &[&str] = &["recyclable", "reciclavel", "可回收"];
pub const REUSE_NOTE: &[&str] = &["reuse_note", "reuse", "reuso", "再利用"];
pub const DISPOSAL_NOTE: &[&str] = &["disposal_note", "disposal", "descarte", "处置"];
pub const CONSUMPTION: &[&str] = &["consumption", "user_consumption", "consumo", "消耗量"];

pub struct FieldMapper;

impl FieldMapper {
    /// 必填字符串
    pub fn required_str<'a>(
        record: &'a RawRecord,
        aliases: &[&str],
    ) -> ImportResult<&'a str> {
        record.get(aliases).ok_or_else(|| ImportError::MissingColumn {
            row: record.row_number,
            column: aliases[0].to_string(),
        })
    }

    /// 可选字符串
    pub fn optional_string(record: &RawRecord, aliases: &[&str]) -> Option<String> {
        record.get(aliases).map(|v| v.to_string())
    }

    /// 必填浮点数
    pub fn required_f64(record: &RawRecord, aliases: &[&str]) -> ImportResult<f64> {
        let raw = Self::required_str(record, aliases)?;
        Self::parse_f64(raw, record.row_number, aliases[0])
    }

    /// 可选浮点数
    pub fn optional_f64(record: &RawRecord, aliases: &[&str]) -> ImportResult<Option<f64>> {
        match record.get(aliases) {
            None => Ok(None),
            Some(raw) => Self::parse_f64(raw, record.row_number, aliases[0]).map(Some),
        }
    }

    /// 可选布尔（1/0, true/false, yes/no, sim/não, 是/否）
    pub fn optional_bool(record: &RawRecord, aliases: &[&str]) -> ImportResult<Option<bool>> {
        let raw = match record.get(aliases) {
            None => return Ok(None),
            Some(v) => v,
        };

        match raw.to_lowercase().as_str() {
            "1" | "true" | "yes" | "y" | "sim" | "s" | "是" => Ok(Some(true)),
            "0" | "false" | "no" | "n" | "não" | "nao" | "否" => Ok(Some(false)),
            _ => Err(ImportError::TypeConversionError {
                row: record.row_number,
                field: aliases[0].to_string(),
                message: format!("无法解析为布尔值: {}", raw),
            }),
        }
    }

    /// 数值范围校验（闭区间）
    pub fn check_range(
        value: f64,
        min: f64,
        max: f64,
        row: usize,
        field: &str,
    ) -> ImportResult<f64> {
        if value < min || value > max {
            return Err(ImportError::ValueRangeError {
                row,
                field: field.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    /// 解析浮点数，接受小数逗号（"0,05"）
    fn parse_f64(raw: &str, row: usize, field: &str) -> ImportResult<f64> {
        let normalized = if raw.contains(',') && !raw.contains('.') {
            raw.replace(',', ".")
        } else {
            raw.to_string()
        };

        let value = normalized
            .trim()
            .parse::<f64>()
            .map_err(|e| ImportError::TypeConversionError {
                row,
                field: field.to_string(),
                message: format!("{} ({})", e, raw),
            })?;

        if !value.is_finite() {
            return Err(ImportError::TypeConversionError {
                row,
                field: field.to_string(),
                message: format!("非有限数值: {}", raw),
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        RawRecord {
            row_number: 2,
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn test_required_f64_decimal_comma() {
        let r = record(&[("consumo", "0,05")]);
        assert_eq!(FieldMapper::required_f64(&r, CONSUMPTION).unwrap(), 0.05);
    }

    #[test]
    fn test_required_missing_column() {
        let r = record(&[("other", "1")]);
        assert!(matches!(
            FieldMapper::required_f64(&r, CONSUMPTION),
            Err(ImportError::MissingColumn { row: 2, .. })
        ));
    }

    #[test]
    fn test_type_conversion_error() {
        let r = record(&[("consumption", "abc")]);
        assert!(matches!(
            FieldMapper::required_f64(&r, CONSUMPTION),
            Err(ImportError::TypeConversionError { .. })
        ));
    }

    #[test]
    fn test_optional_bool() {
        assert_eq!(
            FieldMapper::optional_bool(&record(&[("recyclable", "Sim")]), RECYCLABLE).unwrap(),
            Some(true)
        );
        assert_eq!(
            FieldMapper::optional_bool(&record(&[]), RECYCLABLE).unwrap(),
            None
        );
        assert!(FieldMapper::optional_bool(&record(&[("recyclable", "maybe")]), RECYCLABLE).is_err());
    }

    #[test]
    fn test_check_range() {
        assert!(FieldMapper::check_range(0.5, 0.0, 1.0, 2, "waste_factor").is_ok());
        assert!(FieldMapper::check_range(1.5, 0.0, 1.0, 2, "waste_factor").is_err());
    }
}
