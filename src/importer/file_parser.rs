// ==========================================
// 绿色标章评定工具 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 输出: 行记录（表头 → 值），表头统一为小写去空白
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawRecord - 原始行记录
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 源文件中的行号（表头为第 1 行）
    pub row_number: usize,
    pub fields: HashMap<String, String>,
}

impl RawRecord {
    /// 读取字段（支持多个别名），空值视为缺失
    pub fn get(&self, aliases: &[&str]) -> Option<&str> {
        aliases
            .iter()
            .filter_map(|alias| self.fields.get(*alias))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
    }
}

/// 文件解析器接口
pub trait FileParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>>;
}

fn normalize_header(h: &str) -> String {
    h.trim().trim_start_matches('\u{feff}').trim().to_lowercase()
}

fn check_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>> {
        let path = file_path;
        check_exists(path)?;

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let mut fields = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    fields.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if fields.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(RawRecord {
                row_number: row_idx + 2,
                fields,
            });
        }

        Ok(records)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>> {
        let path = file_path;
        check_exists(path)?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| normalize_header(&cell.to_string()))
            .collect();

        let mut records = Vec::new();
        for (row_idx, data_row) in rows.enumerate() {
            let mut fields = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    fields.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }

            if fields.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(RawRecord {
                row_number: row_idx + 2,
                fields,
            });
        }

        Ok(records)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawRecord>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_to_raw_records(path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_records(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
