// ==========================================
// 绿色标章评定工具 - 材料领域模型
// ==========================================
// MaterialSpec: 参考表中的材料（启动时加载，只读）
// MaterialEntry: 用户选中的材料 + 用户填写的消耗量（会话内有效）
// ==========================================

use crate::domain::types::MaterialUnit;
use serde::{Deserialize, Serialize};

/// 未显式给出密度时的默认值（kg / 单位）
pub const DEFAULT_DENSITY: f64 = 1000.0;

/// 判定“可再利用/可回收”的关键字（小写匹配）
const RECYCLABLE_KEYWORDS: [&str; 3] = ["reutil", "recicl", "usar"];

// ==========================================
// MaterialSpec - 材料参考数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub name: String,              // 材料名称
    pub average_consumption: f64,  // 平均消耗量（每 m²，单位见 unit）
    pub unit: MaterialUnit,        // 计量单位
    pub density: f64,              // 密度 / 单件质量（kg 每单位）
    pub waste_factor: f64,         // 废料系数（0~1）
    pub co2_factor: f64,           // CO₂ 系数
    pub recyclable: bool,          // 是否可再利用/回收
    #[serde(default)]
    pub reuse_note: String,        // 再利用说明
    #[serde(default)]
    pub disposal_note: String,     // 处置说明
}

impl MaterialSpec {
    /// 按再利用说明推断可回收标记
    ///
    /// 规则: 说明中包含 reutil / recicl / usar（忽略大小写）即视为可回收
    pub fn infer_recyclable(reuse_note: &str) -> bool {
        let lower = reuse_note.to_lowercase();
        RECYCLABLE_KEYWORDS.iter().any(|kw| lower.contains(kw))
    }

    /// 名称匹配（忽略大小写与首尾空白）
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

// ==========================================
// MaterialEntry - 用户录入
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub material: MaterialSpec,
    pub user_consumption: f64, // 用户消耗量（与 average_consumption 同口径）
}

impl MaterialEntry {
    pub fn new(material: MaterialSpec, user_consumption: f64) -> Self {
        Self {
            material,
            user_consumption,
        }
    }

    /// 以平均消耗量创建（用户未填写时的默认值）
    pub fn with_average(material: MaterialSpec) -> Self {
        let avg = material.average_consumption;
        Self::new(material, avg)
    }

    /// 用户消耗量是否超过平均消耗量（严格大于）
    pub fn exceeds_average(&self) -> bool {
        self.user_consumption > self.material.average_consumption
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(reuse: &str) -> MaterialSpec {
        MaterialSpec {
            name: "Cimento".to_string(),
            average_consumption: 15.0,
            unit: MaterialUnit::KgPerM2,
            density: DEFAULT_DENSITY,
            waste_factor: 0.10,
            co2_factor: 0.85,
            recyclable: MaterialSpec::infer_recyclable(reuse),
            reuse_note: reuse.to_string(),
            disposal_note: String::new(),
        }
    }

    #[test]
    fn test_infer_recyclable() {
        assert!(MaterialSpec::infer_recyclable("Usar em argamassa"));
        assert!(MaterialSpec::infer_recyclable("100% reciclável"));
        assert!(MaterialSpec::infer_recyclable("Reutilizável em calçadas"));
        assert!(!MaterialSpec::infer_recyclable("Pode ser triturado"));
        assert!(!MaterialSpec::infer_recyclable(""));
    }

    #[test]
    fn test_exceeds_average_is_strict() {
        let at_avg = MaterialEntry::with_average(spec("Usar em argamassa"));
        assert!(!at_avg.exceeds_average());

        let above = MaterialEntry::new(spec("Usar em argamassa"), 15.01);
        assert!(above.exceeds_average());
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let s = spec("");
        assert!(s.matches_name("  cimento "));
        assert!(!s.matches_name("Cimento Portland"));
    }
}
