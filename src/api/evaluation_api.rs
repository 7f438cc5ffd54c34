// ==========================================
// 绿色标章评定工具 - 评定 API
// ==========================================
// 职责: 参考表 + 计算器 + 报告渲染的统一入口
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::catalog::MaterialCatalog;
use crate::config::config_manager::ConfigManager;
use crate::domain::evaluation::EvaluationResult;
use crate::domain::material::MaterialEntry;
use crate::engine::impact::MaterialImpactCalculator;
use crate::engine::report::{self, ReportRenderer};
use crate::importer::entry_importer::EntryImporter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct EvaluationApi {
    catalog: MaterialCatalog,
    calculator: MaterialImpactCalculator,
    renderer: ReportRenderer,
}

impl EvaluationApi {
    pub fn new(
        catalog: MaterialCatalog,
        calculator: MaterialImpactCalculator,
        renderer: ReportRenderer,
    ) -> Self {
        Self {
            catalog,
            calculator,
            renderer,
        }
    }

    /// 按配置组装（参考表、阈值、模型、语言）
    pub fn from_config(config: &ConfigManager) -> ApiResult<Self> {
        let catalog = MaterialCatalog::load(config.get_catalog_path().as_deref())?;
        let calculator =
            MaterialImpactCalculator::new(config.get_seal_thresholds()?, config.get_impact_model()?);
        let renderer = ReportRenderer::new(config.get_locale()?);

        info!(
            materials = catalog.len(),
            model = %calculator.model(),
            locale = renderer.locale(),
            "评定 API 已初始化"
        );
        Ok(Self::new(catalog, calculator, renderer))
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn calculator(&self) -> &MaterialImpactCalculator {
        &self.calculator
    }

    pub fn renderer(&self) -> &ReportRenderer {
        &self.renderer
    }

    /// 评定一组录入
    pub fn evaluate(&self, entries: &[MaterialEntry], area_m2: f64) -> ApiResult<EvaluationResult> {
        self.calculator.evaluate(entries, area_m2).map_err(|e| {
            warn!(error = %e, "评定输入被拒绝");
            ApiError::from(e)
        })
    }

    /// 从 CSV / Excel 录入文件评定
    pub fn evaluate_file(&self, path: &Path, area_m2: f64) -> ApiResult<EvaluationResult> {
        let entries = EntryImporter::new(&self.catalog).import(path)?;
        self.evaluate(&entries, area_m2)
    }

    pub fn render_report(&self, result: &EvaluationResult) -> String {
        self.renderer.render(result)
    }

    /// 写出文本报告
    ///
    /// # 参数
    /// - target: 目录（自动命名）或文件路径
    pub fn save_report(&self, result: &EvaluationResult, target: &Path) -> ApiResult<PathBuf> {
        let text = self.render_report(result);
        report::write_report(target, &text, result.evaluated_at)
            .map_err(|e| ApiError::ReportWriteError(format!("{}: {}", target.display(), e)))
    }

    /// 写入报告目录（目录不存在时创建）
    pub fn save_report_in_dir(&self, result: &EvaluationResult, dir: &Path) -> ApiResult<PathBuf> {
        let text = self.render_report(result);
        report::write_report_in_dir(dir, &text, result.evaluated_at)
            .map_err(|e| ApiError::ReportWriteError(format!("{}: {}", dir.display(), e)))
    }

    /// 导出 JSON
    pub fn to_json(&self, result: &EvaluationResult) -> ApiResult<String> {
        serde_json::to_string_pretty(result)
            .map_err(|e| ApiError::InternalError(format!("JSON 序列化失败: {}", e)))
    }
}
