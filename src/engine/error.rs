// ==========================================
// 绿色标章评定工具 - 引擎层错误类型
// ==========================================

use thiserror::Error;

/// 计算引擎的输入错误（面积/消耗量/材料集合）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("面积必须为正数: {0}")]
    InvalidArea(f64),

    #[error("消耗量必须为正数 (材料 {material}): {value}")]
    InvalidConsumption { material: String, value: f64 },

    #[error("至少选择一种材料")]
    NoMaterials,

    #[error("材料重复选择: {0}")]
    DuplicateMaterial(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
