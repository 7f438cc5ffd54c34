// ==========================================
// 绿色标章评定工具 - 评定结果模型
// ==========================================
// 派生对象: 每次输入变更后重新计算，不持久化
// ==========================================

use crate::domain::types::{ImpactModel, MaterialUnit, SealCriterion};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 单位面积 CO₂ 上限默认值（kg/m²）
pub const DEFAULT_CO2_PER_AREA_LIMIT: f64 = 8.0;

/// 可回收材料占比下限默认值
pub const DEFAULT_MIN_RECYCLABLE_RATIO: f64 = 0.70;

// ==========================================
// SealThresholds - 标章阈值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SealThresholds {
    /// 单位面积 CO₂ 上限（含边界）
    pub co2_per_area_limit: f64,
    /// 可回收材料占比下限（含边界）
    pub min_recyclable_ratio: f64,
}

impl Default for SealThresholds {
    fn default() -> Self {
        Self {
            co2_per_area_limit: DEFAULT_CO2_PER_AREA_LIMIT,
            min_recyclable_ratio: DEFAULT_MIN_RECYCLABLE_RATIO,
        }
    }
}

// ==========================================
// MaterialImpact - 单材料计算结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialImpact {
    pub material: String,
    pub unit: MaterialUnit,
    pub user_consumption: f64,
    pub average_consumption: f64,
    pub total_consumption: f64, // 总消耗量（单位: unit.total_unit()）
    pub consumption_kg: f64,
    pub waste_kg: f64,
    pub co2_kg: f64,
    pub recyclable: bool,
    pub exceeded_average: bool,
    pub reuse_note: String,
    pub disposal_note: String,
}

// ==========================================
// CriteriaResult - 三项评定条件
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaResult {
    pub no_excess_consumption: bool,
    pub co2_within_limit: bool,
    pub recyclability_ratio_ok: bool,
}

impl CriteriaResult {
    /// 三项全部满足
    pub fn all_met(&self) -> bool {
        self.no_excess_consumption && self.co2_within_limit && self.recyclability_ratio_ok
    }

    pub fn get(&self, criterion: SealCriterion) -> bool {
        match criterion {
            SealCriterion::NoExcessConsumption => self.no_excess_consumption,
            SealCriterion::Co2WithinLimit => self.co2_within_limit,
            SealCriterion::RecyclabilityRatioOk => self.recyclability_ratio_ok,
        }
    }

    /// 未满足的条件（按展示顺序）
    pub fn failed(&self) -> Vec<SealCriterion> {
        [
            SealCriterion::NoExcessConsumption,
            SealCriterion::Co2WithinLimit,
            SealCriterion::RecyclabilityRatioOk,
        ]
        .into_iter()
        .filter(|c| !self.get(*c))
        .collect()
    }
}

// ==========================================
// EvaluationResult - 评定结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub evaluation_id: Uuid,
    pub evaluated_at: NaiveDateTime,
    pub model: ImpactModel,
    pub thresholds: SealThresholds,
    pub area_m2: f64,
    pub impacts: Vec<MaterialImpact>,
    pub total_waste_kg: f64,
    pub total_co2_kg: f64,
    pub total_co2_per_area: f64,
    pub recyclable_ratio: f64,
    pub criteria: CriteriaResult,
    pub seal_awarded: bool,
}

impl EvaluationResult {
    /// 可回收占比（百分数）
    pub fn recyclable_percent(&self) -> f64 {
        self.recyclable_ratio * 100.0
    }

    pub fn impact_of(&self, material: &str) -> Option<&MaterialImpact> {
        let key = material.trim().to_lowercase();
        self.impacts
            .iter()
            .find(|i| i.material.trim().to_lowercase() == key)
    }
}
