// ==========================================
// 绿色标章评定工具 - 表单会话
// ==========================================
// 会话内状态: 面积 + 已选材料（MaterialEntry）
// 每次变更后可重新评定；会话结束即丢弃
// ==========================================

use crate::api::error::ApiResult;
use crate::api::evaluation_api::EvaluationApi;
use crate::api::validator::{InputValidator, ValidationError, ValidationResult};
use crate::domain::evaluation::EvaluationResult;
use crate::domain::material::MaterialEntry;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct FormSession {
    area_m2: Option<f64>,
    entries: Vec<MaterialEntry>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Option<f64> {
        self.area_m2
    }

    pub fn entries(&self) -> &[MaterialEntry] {
        &self.entries
    }

    /// 设置面积（必须为正数）
    pub fn set_area(&mut self, area_m2: f64) -> ValidationResult<()> {
        let area = InputValidator::check_positive("area", area_m2)?;
        self.area_m2 = Some(area);
        Ok(())
    }

    /// 选择材料；初始消耗量为平均消耗量
    pub fn select_material(&mut self, api: &EvaluationApi, name: &str) -> ValidationResult<()> {
        let spec = api
            .catalog()
            .find(name)
            .ok_or_else(|| ValidationError::UnknownMaterial(name.trim().to_string()))?;

        if self.position(&spec.name).is_some() {
            return Err(ValidationError::DuplicateMaterial(spec.name.clone()));
        }

        debug!(material = %spec.name, "选择材料");
        self.entries.push(MaterialEntry::with_average(spec.clone()));
        Ok(())
    }

    /// 取消选择
    pub fn deselect_material(&mut self, name: &str) -> ValidationResult<MaterialEntry> {
        let idx = self
            .position(name)
            .ok_or_else(|| ValidationError::MaterialNotSelected(name.trim().to_string()))?;
        Ok(self.entries.remove(idx))
    }

    /// 修改已选材料的消耗量（必须为正数）
    pub fn set_consumption(&mut self, name: &str, value: f64) -> ValidationResult<()> {
        let idx = self
            .position(name)
            .ok_or_else(|| ValidationError::MaterialNotSelected(name.trim().to_string()))?;
        let field = self.entries[idx].material.name.clone();
        let value = InputValidator::check_positive(&field, value)?;
        self.entries[idx].user_consumption = value;
        Ok(())
    }

    /// 按当前表单值评定
    pub fn evaluate(&self, api: &EvaluationApi) -> ApiResult<EvaluationResult> {
        let area = self.area_m2.ok_or(ValidationError::NonPositive {
            field: "area".to_string(),
            value: 0.0,
        })?;
        api.evaluate(&self.entries, area)
    }

    /// 清空（会话结束）
    pub fn clear(&mut self) {
        self.area_m2 = None;
        self.entries.clear();
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.material.matches_name(name))
    }
}
