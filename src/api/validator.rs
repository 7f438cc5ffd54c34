// ==========================================
// 绿色标章评定工具 - 输入校验器
// ==========================================
// 职责: 表单原始输入（字符串）→ 合法数值 / 材料选择
// 规则: 非数字、零、负数、非有限值一律拒绝（由表单重新提示）
// ==========================================

use crate::config::catalog::MaterialCatalog;
use crate::domain::material::MaterialSpec;
use crate::engine::error::EngineError;
use std::collections::HashSet;
use thiserror::Error;

// ==========================================
// ValidationError - 输入校验错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field}: '{value}' 不是有效数字")]
    NotANumber { field: String, value: String },

    #[error("{field} 必须大于 0（当前: {value}）")]
    NonPositive { field: String, value: f64 },

    #[error("{field} 必须为有限数值")]
    NotFinite { field: String },

    #[error("参考表中不存在该材料: {0}")]
    UnknownMaterial(String),

    #[error("材料重复选择: {0}")]
    DuplicateMaterial(String),

    #[error("至少选择一种材料")]
    NoMaterialsSelected,

    #[error("未选择该材料: {0}")]
    MaterialNotSelected(String),
}

impl From<EngineError> for ValidationError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidArea(value) => ValidationError::NonPositive {
                field: "area".to_string(),
                value,
            },
            EngineError::InvalidConsumption { material, value } => ValidationError::NonPositive {
                field: material,
                value,
            },
            EngineError::NoMaterials => ValidationError::NoMaterialsSelected,
            EngineError::DuplicateMaterial(name) => ValidationError::DuplicateMaterial(name),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

// ==========================================
// InputValidator
// ==========================================
pub struct InputValidator;

impl InputValidator {
    /// 校验数值为有限正数
    pub fn check_positive(field: &str, value: f64) -> ValidationResult<f64> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite {
                field: field.to_string(),
            });
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositive {
                field: field.to_string(),
                value,
            });
        }
        Ok(value)
    }

    /// 解析必填正数（接受小数逗号 "12,5"）
    pub fn parse_positive(field: &str, raw: &str) -> ValidationResult<f64> {
        let trimmed = raw.trim();
        let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
            trimmed.replace(',', ".")
        } else {
            trimmed.to_string()
        };

        let value = normalized
            .parse::<f64>()
            .map_err(|_| ValidationError::NotANumber {
                field: field.to_string(),
                value: trimmed.to_string(),
            })?;

        Self::check_positive(field, value)
    }

    /// 解析可选正数：空白 → None
    pub fn parse_optional_positive(field: &str, raw: &str) -> ValidationResult<Option<f64>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Self::parse_positive(field, raw).map(Some)
    }

    /// 解析材料选择（逗号/分号分隔的名称列表）
    ///
    /// # 规则
    /// - 名称忽略大小写
    /// - 至少一种、不可重复、必须存在于参考表
    pub fn parse_selection(
        catalog: &MaterialCatalog,
        raw: &str,
    ) -> ValidationResult<Vec<MaterialSpec>> {
        let names: Vec<&str> = raw
            .split([',', ';'])
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();

        if names.is_empty() {
            return Err(ValidationError::NoMaterialsSelected);
        }

        let mut seen = HashSet::new();
        let mut specs = Vec::with_capacity(names.len());
        for name in names {
            let spec = catalog
                .find(name)
                .ok_or_else(|| ValidationError::UnknownMaterial(name.to_string()))?;
            if !seen.insert(spec.name.clone()) {
                return Err(ValidationError::DuplicateMaterial(spec.name.clone()));
            }
            specs.push(spec.clone());
        }

        Ok(specs)
    }
}
