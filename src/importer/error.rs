// ==========================================
// 绿色标章评定工具 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("必填列缺失 (行 {row}): {column}")]
    MissingColumn { row: usize, column: String },

    #[error("类型转换失败 (行 {row}, 字段 {field}): {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    #[error("数值范围错误 (行 {row}, 字段 {field}): 值 {value} 超出范围 [{min}, {max}]")]
    ValueRangeError {
        row: usize,
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    // ===== 业务规则错误 =====
    #[error("参考表中不存在该材料 (行 {row}): {name}")]
    UnknownMaterial { row: usize, name: String },

    #[error("材料名称重复: {0}")]
    DuplicateMaterial(String),

    #[error("文件中没有任何数据行")]
    EmptyFile,
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
