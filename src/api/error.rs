// ==========================================
// 绿色标章评定工具 - API层错误类型
// ==========================================
// 职责: 汇总各层错误，转换为用户可读的错误消息
// ==========================================

use crate::api::validator::ValidationError;
use crate::config::config_manager::ConfigError;
use crate::engine::error::EngineError;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("输入无效: {0}")]
    Validation(#[from] ValidationError),

    #[error("文件导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("报告写出失败: {0}")]
    ReportWriteError(String),

    #[error("内部错误: {0}")]
    InternalError(String),
}

// ==========================================
// 从 EngineError 转换
// 引擎层错误均为输入问题，统一归入校验错误
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Validation(err.into())
    }
}

impl ApiError {
    /// 是否为可重新输入修正的错误（表单据此重新提示）
    pub fn is_user_input(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
