// ==========================================
// 绿色标章评定工具 - 领域层
// ==========================================

pub mod evaluation;
pub mod material;
pub mod types;

pub use evaluation::{
    CriteriaResult, EvaluationResult, MaterialImpact, SealThresholds,
    DEFAULT_CO2_PER_AREA_LIMIT, DEFAULT_MIN_RECYCLABLE_RATIO,
};
pub use material::{MaterialEntry, MaterialSpec, DEFAULT_DENSITY};
pub use types::{ImpactModel, MaterialUnit, SealCriterion};
