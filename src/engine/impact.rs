// ==========================================
// 绿色标章评定工具 - 材料影响计算器
// ==========================================
// 输入: MaterialEntry 列表 + 建筑面积
// 输出: EvaluationResult（单材料废料/CO₂、单位面积 CO₂、三项条件、标章结论）
// ==========================================

use crate::domain::evaluation::{EvaluationResult, MaterialImpact, SealThresholds};
use crate::domain::material::MaterialEntry;
use crate::domain::types::ImpactModel;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::impact_core::ImpactCore;
use chrono::Local;
use std::collections::HashSet;
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// MaterialImpactCalculator
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct MaterialImpactCalculator {
    thresholds: SealThresholds,
    model: ImpactModel,
}

impl MaterialImpactCalculator {
    pub fn new(thresholds: SealThresholds, model: ImpactModel) -> Self {
        Self { thresholds, model }
    }

    pub fn thresholds(&self) -> &SealThresholds {
        &self.thresholds
    }

    pub fn model(&self) -> ImpactModel {
        self.model
    }

    /// 校验输入
    ///
    /// # 规则
    /// - 面积必须为有限正数
    /// - 至少一种材料，且不可重复
    /// - 每种材料消耗量必须为有限正数
    pub fn validate(&self, entries: &[MaterialEntry], area_m2: f64) -> EngineResult<()> {
        if !area_m2.is_finite() || area_m2 <= 0.0 {
            return Err(EngineError::InvalidArea(area_m2));
        }

        if entries.is_empty() {
            return Err(EngineError::NoMaterials);
        }

        let mut seen = HashSet::new();
        for entry in entries {
            let key = entry.material.name.trim().to_lowercase();
            if !seen.insert(key) {
                return Err(EngineError::DuplicateMaterial(entry.material.name.clone()));
            }

            let value = entry.user_consumption;
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::InvalidConsumption {
                    material: entry.material.name.clone(),
                    value,
                });
            }
        }

        Ok(())
    }

    /// 计算并评定
    #[instrument(skip(self, entries), fields(materials = entries.len()))]
    pub fn evaluate(&self, entries: &[MaterialEntry], area_m2: f64) -> EngineResult<EvaluationResult> {
        self.validate(entries, area_m2)?;

        let impacts: Vec<MaterialImpact> = entries
            .iter()
            .map(|entry| ImpactCore::compute_impact(entry, area_m2, self.model))
            .collect();

        for impact in &impacts {
            debug!(
                material = %impact.material,
                waste_kg = impact.waste_kg,
                co2_kg = impact.co2_kg,
                exceeded_average = impact.exceeded_average,
                "材料影响计算完成"
            );
        }

        let total_waste_kg: f64 = impacts.iter().map(|i| i.waste_kg).sum();
        let total_co2_kg: f64 = impacts.iter().map(|i| i.co2_kg).sum();
        let total_co2_per_area = ImpactCore::co2_per_area(total_co2_kg, area_m2);

        let recyclable_count = impacts.iter().filter(|i| i.recyclable).count();
        let recyclable_ratio = ImpactCore::recyclable_ratio(recyclable_count, impacts.len());

        let criteria = ImpactCore::evaluate_criteria(
            &impacts,
            total_co2_per_area,
            recyclable_ratio,
            &self.thresholds,
        );
        let seal_awarded = criteria.all_met();

        info!(
            model = %self.model,
            area_m2,
            total_co2_per_area,
            recyclable_ratio,
            seal_awarded,
            failed = ?criteria.failed(),
            "绿色标章评定完成"
        );

        Ok(EvaluationResult {
            evaluation_id: Uuid::new_v4(),
            evaluated_at: Local::now().naive_local(),
            model: self.model,
            thresholds: self.thresholds,
            area_m2,
            impacts,
            total_waste_kg,
            total_co2_kg,
            total_co2_per_area,
            recyclable_ratio,
            criteria,
            seal_awarded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::MaterialSpec;
    use crate::domain::types::MaterialUnit;

    fn spec(name: &str, avg: f64, waste: f64, co2: f64, recyclable: bool) -> MaterialSpec {
        MaterialSpec {
            name: name.to_string(),
            average_consumption: avg,
            unit: MaterialUnit::KgPerM2,
            density: 1000.0,
            waste_factor: waste,
            co2_factor: co2,
            recyclable,
            reuse_note: String::new(),
            disposal_note: String::new(),
        }
    }

    #[test]
    fn test_seal_awarded_when_all_criteria_hold() {
        let calc = MaterialImpactCalculator::default();
        let entries = vec![
            MaterialEntry::new(spec("A", 20.0, 0.1, 1.0, true), 10.0),
            MaterialEntry::new(spec("B", 20.0, 0.1, 1.0, true), 10.0),
        ];

        let result = calc.evaluate(&entries, 10.0).unwrap();
        // CO₂ = 20 kg / 10 m² = 2 kg/m²
        assert_eq!(result.total_co2_kg, 20.0);
        assert_eq!(result.total_co2_per_area, 2.0);
        assert_eq!(result.total_waste_kg, 2.0);
        assert!(result.criteria.all_met());
        assert!(result.seal_awarded);
    }

    #[test]
    fn test_co2_over_limit_denies_seal() {
        // area=10, total_co2=90 → 9 kg/m² > 8
        let calc = MaterialImpactCalculator::default();
        let entries = vec![MaterialEntry::new(spec("Aço", 100.0, 0.07, 1.0, true), 90.0)];

        let result = calc.evaluate(&entries, 10.0).unwrap();
        assert_eq!(result.total_co2_kg, 90.0);
        assert_eq!(result.total_co2_per_area, 9.0);
        assert!(result.criteria.no_excess_consumption);
        assert!(result.criteria.recyclability_ratio_ok);
        assert!(!result.criteria.co2_within_limit);
        assert!(!result.seal_awarded);
    }

    #[test]
    fn test_excess_consumption_denies_seal() {
        let calc = MaterialImpactCalculator::default();
        let entries = vec![
            MaterialEntry::new(spec("A", 5.0, 0.1, 0.1, true), 6.0),
            MaterialEntry::new(spec("B", 5.0, 0.1, 0.1, true), 5.0),
        ];

        let result = calc.evaluate(&entries, 100.0).unwrap();
        assert!(!result.criteria.no_excess_consumption);
        assert!(result.criteria.co2_within_limit);
        assert!(!result.seal_awarded);
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let calc = MaterialImpactCalculator::default();
        let entry = MaterialEntry::new(spec("A", 1.0, 0.1, 0.1, true), 1.0);

        assert_eq!(
            calc.validate(&[entry.clone()], 0.0),
            Err(EngineError::InvalidArea(0.0))
        );
        assert_eq!(calc.validate(&[], 10.0), Err(EngineError::NoMaterials));
        assert!(matches!(
            calc.validate(&[entry.clone(), entry.clone()], 10.0),
            Err(EngineError::DuplicateMaterial(_))
        ));

        let negative = MaterialEntry::new(spec("A", 1.0, 0.1, 0.1, true), -2.0);
        assert!(matches!(
            calc.validate(&[negative], 10.0),
            Err(EngineError::InvalidConsumption { .. })
        ));
    }
}
