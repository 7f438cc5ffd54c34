// ==========================================
// 绿色标章评定工具 - Impact Core 纯函数库
// ==========================================
// 职责: 废料 / CO₂ 计算与三项评定条件的纯逻辑
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::domain::evaluation::{CriteriaResult, MaterialImpact, SealThresholds};
use crate::domain::material::MaterialEntry;
use crate::domain::types::{ImpactModel, MaterialUnit};

// ==========================================
// ImpactCore - 纯函数工具类
// ==========================================
pub struct ImpactCore;

impl ImpactCore {
    /// 废料量 = 消耗量 × 废料系数
    pub fn waste(consumption: f64, waste_factor: f64) -> f64 {
        consumption * waste_factor
    }

    /// CO₂ 排放 = 基数 × CO₂ 系数
    ///
    /// DIRECT 模型基数为消耗量，AREA_SCALED 模型基数为废料量
    pub fn co2(base: f64, co2_factor: f64) -> f64 {
        base * co2_factor
    }

    /// 总消耗量 = 单位面积消耗 × 面积
    pub fn total_consumption(rate_per_m2: f64, area_m2: f64) -> f64 {
        rate_per_m2 * area_m2
    }

    /// 总消耗量换算为 kg
    ///
    /// # 规则
    /// - m³/m² 与 un/m² → 总量 × 密度
    /// - kg/m² → 原值
    pub fn to_kg(total: f64, unit: MaterialUnit, density: f64) -> f64 {
        if unit.needs_density() {
            total * density
        } else {
            total
        }
    }

    /// 单位面积 CO₂（kg/m²）
    pub fn co2_per_area(total_co2: f64, area_m2: f64) -> f64 {
        total_co2 / area_m2
    }

    /// 可回收材料占比；无材料时为 0
    pub fn recyclable_ratio(recyclable_count: usize, total_count: usize) -> f64 {
        if total_count == 0 {
            return 0.0;
        }
        recyclable_count as f64 / total_count as f64
    }

    /// 条件 (b): 单位面积 CO₂ ≤ 上限（含边界）
    pub fn co2_within_limit(co2_per_area: f64, limit: f64) -> bool {
        co2_per_area <= limit
    }

    /// 条件 (c): 可回收占比 ≥ 下限（含边界）
    pub fn recyclable_ratio_ok(ratio: f64, min_ratio: f64) -> bool {
        ratio >= min_ratio
    }

    /// 计算单个材料的影响
    pub fn compute_impact(entry: &MaterialEntry, area_m2: f64, model: ImpactModel) -> MaterialImpact {
        let spec = &entry.material;

        let (total_consumption, consumption_kg, waste_kg, co2_kg) = match model {
            ImpactModel::Direct => {
                let waste = Self::waste(entry.user_consumption, spec.waste_factor);
                let co2 = Self::co2(entry.user_consumption, spec.co2_factor);
                (entry.user_consumption, entry.user_consumption, waste, co2)
            }
            ImpactModel::AreaScaled => {
                let total = Self::total_consumption(entry.user_consumption, area_m2);
                let kg = Self::to_kg(total, spec.unit, spec.density);
                let waste = Self::waste(kg, spec.waste_factor);
                let co2 = Self::co2(waste, spec.co2_factor);
                (total, kg, waste, co2)
            }
        };

        MaterialImpact {
            material: spec.name.clone(),
            unit: spec.unit,
            user_consumption: entry.user_consumption,
            average_consumption: spec.average_consumption,
            total_consumption,
            consumption_kg,
            waste_kg,
            co2_kg,
            recyclable: spec.recyclable,
            exceeded_average: entry.exceeds_average(),
            reuse_note: spec.reuse_note.clone(),
            disposal_note: spec.disposal_note.clone(),
        }
    }

    /// 评定三项条件
    pub fn evaluate_criteria(
        impacts: &[MaterialImpact],
        co2_per_area: f64,
        recyclable_ratio: f64,
        thresholds: &SealThresholds,
    ) -> CriteriaResult {
        CriteriaResult {
            no_excess_consumption: !impacts.iter().any(|i| i.exceeded_average),
            co2_within_limit: Self::co2_within_limit(co2_per_area, thresholds.co2_per_area_limit),
            recyclability_ratio_ok: Self::recyclable_ratio_ok(
                recyclable_ratio,
                thresholds.min_recyclable_ratio,
            ),
        }
    }
}
