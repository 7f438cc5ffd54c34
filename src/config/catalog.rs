// ==========================================
// 绿色标章评定工具 - 材料参考表
// ==========================================
// 启动时加载，之后只读
// 来源: 内置参考表，或 catalog.path 指定的 CSV
// ==========================================

use crate::domain::material::{MaterialSpec, DEFAULT_DENSITY};
use crate::domain::types::MaterialUnit;
use crate::importer::catalog_importer::CatalogImporter;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashSet;
use std::path::Path;

// (名称, 平均消耗, 单位, 密度, 废料系数, CO₂ 系数, 再利用说明, 处置说明)
type BuiltinRow = (
    &'static str,
    f64,
    MaterialUnit,
    Option<f64>,
    f64,
    f64,
    &'static str,
    &'static str,
);

const BUILTIN_MATERIALS: [BuiltinRow; 8] = [
    ("Concreto", 0.05, MaterialUnit::CubicMeterPerM2, Some(2400.0), 0.12, 0.15, "Pode ser triturado", "Descarte em caçambas"),
    ("Cimento", 15.0, MaterialUnit::KgPerM2, None, 0.10, 0.85, "Usar em argamassa", "Evitar solo e água"),
    ("Areia", 0.006, MaterialUnit::CubicMeterPerM2, Some(1600.0), 0.05, 0.01, "Pode ser misturada com nova areia", "Descarte controlado"),
    ("Tijolo", 60.0, MaterialUnit::UnitPerM2, Some(3.5), 0.20, 0.12, "Reutilizável em calçadas", "Descarte autorizado"),
    ("Madeira", 0.01, MaterialUnit::CubicMeterPerM2, Some(600.0), 0.08, 0.10, "Reutilização em pequenas obras", "Reciclagem ou compostagem"),
    ("Aço", 20.0, MaterialUnit::KgPerM2, None, 0.07, 1.80, "100% reciclável", "Enviar para reciclagem"),
    ("Ferro", 1.0, MaterialUnit::KgPerM2, None, 0.08, 1.80, "Pode ser fundido", "Lavar para ferro-velho"),
    ("Gesso", 7.0, MaterialUnit::KgPerM2, None, 0.30, 0.18, "Usar em argamassa", "Evitar solo e água"),
];

// ==========================================
// MaterialCatalog
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialCatalog {
    materials: Vec<MaterialSpec>,
}

impl MaterialCatalog {
    /// 由材料列表构建（名称不可重复，忽略大小写）
    pub fn new(materials: Vec<MaterialSpec>) -> ImportResult<Self> {
        let mut seen = HashSet::new();
        for m in &materials {
            if !seen.insert(m.name.trim().to_lowercase()) {
                return Err(ImportError::DuplicateMaterial(m.name.clone()));
            }
        }
        Ok(Self { materials })
    }

    /// 内置参考表（八种常用建材）
    pub fn builtin() -> Self {
        let materials = BUILTIN_MATERIALS
            .iter()
            .map(
                |&(name, avg, unit, density, waste, co2, reuse, disposal)| MaterialSpec {
                    name: name.to_string(),
                    average_consumption: avg,
                    unit,
                    density: density.unwrap_or(DEFAULT_DENSITY),
                    waste_factor: waste,
                    co2_factor: co2,
                    recyclable: MaterialSpec::infer_recyclable(reuse),
                    reuse_note: reuse.to_string(),
                    disposal_note: disposal.to_string(),
                },
            )
            .collect();

        Self { materials }
    }

    /// 从 CSV 加载
    pub fn from_csv(path: impl AsRef<Path>) -> ImportResult<Self> {
        let materials = CatalogImporter::new().import(path.as_ref())?;
        Self::new(materials)
    }

    /// 按配置加载：有路径则读 CSV，否则内置
    pub fn load(path: Option<&Path>) -> ImportResult<Self> {
        match path {
            Some(p) => Self::from_csv(p),
            None => Ok(Self::builtin()),
        }
    }

    /// 按名称查找（忽略大小写与首尾空白）
    pub fn find(&self, name: &str) -> Option<&MaterialSpec> {
        self.materials.iter().find(|m| m.matches_name(name))
    }

    pub fn names(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn materials(&self) -> &[MaterialSpec] {
        &self.materials
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = MaterialCatalog::builtin();
        assert_eq!(catalog.len(), 8);

        let concrete = catalog.find("concreto").unwrap();
        assert_eq!(concrete.density, 2400.0);
        assert!(!concrete.recyclable);

        let cement = catalog.find("Cimento").unwrap();
        assert_eq!(cement.density, DEFAULT_DENSITY);
        assert!(cement.recyclable);
    }

    #[test]
    fn test_builtin_recyclable_flags() {
        let catalog = MaterialCatalog::builtin();
        let recyclable: Vec<&str> = catalog
            .materials()
            .iter()
            .filter(|m| m.recyclable)
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(recyclable, vec!["Cimento", "Tijolo", "Madeira", "Aço", "Gesso"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let catalog = MaterialCatalog::builtin();
        let mut materials = catalog.materials().to_vec();
        let mut dup = materials[0].clone();
        dup.name = "CONCRETO".to_string();
        materials.push(dup);

        assert!(matches!(
            MaterialCatalog::new(materials),
            Err(ImportError::DuplicateMaterial(_))
        ));
    }
}
