// ==========================================
// 绿色标章评定工具 - 领域类型定义
// ==========================================
// 材料计量单位 / 影响计算模型 / 标章评定条件
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 材料计量单位 (Material Unit)
// ==========================================
// 所有单位均为“每平方米建筑面积”的消耗口径
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialUnit {
    #[serde(rename = "m³/m²")]
    CubicMeterPerM2, // 体积口径，需密度换算
    #[serde(rename = "kg/m²")]
    KgPerM2, // 质量口径
    #[serde(rename = "un/m²")]
    UnitPerM2, // 块数口径，需单块质量换算
}

impl MaterialUnit {
    /// 换算为 kg 时是否需要密度（或单件质量）
    pub fn needs_density(&self) -> bool {
        !matches!(self, MaterialUnit::KgPerM2)
    }

    /// 乘以面积后的总量单位（去掉 “/m²”）
    pub fn total_unit(&self) -> &'static str {
        match self {
            MaterialUnit::CubicMeterPerM2 => "m³",
            MaterialUnit::KgPerM2 => "kg",
            MaterialUnit::UnitPerM2 => "un",
        }
    }
}

impl fmt::Display for MaterialUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialUnit::CubicMeterPerM2 => write!(f, "m³/m²"),
            MaterialUnit::KgPerM2 => write!(f, "kg/m²"),
            MaterialUnit::UnitPerM2 => write!(f, "un/m²"),
        }
    }
}

impl FromStr for MaterialUnit {
    type Err = String;

    /// 同时接受 Unicode 上标写法与 ASCII 写法（m3/m2）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace('³', "3")
            .replace('²', "2")
            .replace(' ', "");

        match normalized.as_str() {
            "m3/m2" => Ok(MaterialUnit::CubicMeterPerM2),
            "kg/m2" => Ok(MaterialUnit::KgPerM2),
            "un/m2" | "unit/m2" | "pcs/m2" => Ok(MaterialUnit::UnitPerM2),
            _ => Err(format!("未知的计量单位: {}", s)),
        }
    }
}

// ==========================================
// 影响计算模型 (Impact Model)
// ==========================================
// DIRECT: waste = 消耗量 × 废料系数; co2 = 消耗量 × CO₂ 系数
// AREA_SCALED: 消耗量 × 面积 → 换算 kg → 废料 → 废料 × CO₂ 系数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactModel {
    #[default]
    Direct,
    AreaScaled,
}

impl fmt::Display for ImpactModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactModel::Direct => write!(f, "DIRECT"),
            ImpactModel::AreaScaled => write!(f, "AREA_SCALED"),
        }
    }
}

impl FromStr for ImpactModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DIRECT" => Ok(ImpactModel::Direct),
            "AREA_SCALED" => Ok(ImpactModel::AreaScaled),
            other => Err(format!("未知的计算模型: {}", other)),
        }
    }
}

// ==========================================
// 标章评定条件 (Seal Criterion)
// ==========================================
// 顺序即报告中的展示顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SealCriterion {
    NoExcessConsumption,  // 无超平均消耗
    Co2WithinLimit,       // 单位面积 CO₂ 不超限
    RecyclabilityRatioOk, // 可回收比例达标
}

impl fmt::Display for SealCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SealCriterion::NoExcessConsumption => write!(f, "NO_EXCESS_CONSUMPTION"),
            SealCriterion::Co2WithinLimit => write!(f, "CO2_WITHIN_LIMIT"),
            SealCriterion::RecyclabilityRatioOk => write!(f, "RECYCLABILITY_RATIO_OK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_unit_parse() {
        assert_eq!("m³/m²".parse::<MaterialUnit>(), Ok(MaterialUnit::CubicMeterPerM2));
        assert_eq!("M3/M2".parse::<MaterialUnit>(), Ok(MaterialUnit::CubicMeterPerM2));
        assert_eq!(" kg/m2 ".parse::<MaterialUnit>(), Ok(MaterialUnit::KgPerM2));
        assert_eq!("un/m²".parse::<MaterialUnit>(), Ok(MaterialUnit::UnitPerM2));
        assert!("t/m2".parse::<MaterialUnit>().is_err());
    }

    #[test]
    fn test_material_unit_serde() {
        let json = serde_json::to_string(&MaterialUnit::CubicMeterPerM2).unwrap();
        assert_eq!(json, "\"m³/m²\"");
        let unit: MaterialUnit = serde_json::from_str("\"kg/m²\"").unwrap();
        assert_eq!(unit, MaterialUnit::KgPerM2);
    }

    #[test]
    fn test_total_unit() {
        assert_eq!(MaterialUnit::CubicMeterPerM2.total_unit(), "m³");
        assert_eq!(MaterialUnit::UnitPerM2.total_unit(), "un");
        assert!(!MaterialUnit::KgPerM2.needs_density());
    }

    #[test]
    fn test_impact_model_roundtrip() {
        assert_eq!("area_scaled".parse::<ImpactModel>(), Ok(ImpactModel::AreaScaled));
        assert_eq!(ImpactModel::default(), ImpactModel::Direct);
        assert_eq!(ImpactModel::Direct.to_string(), "DIRECT");
    }
}
