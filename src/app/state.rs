// ==========================================
// 绿色标章评定工具 - 应用状态
// ==========================================
// 职责: 启动时加载配置与参考表，组装 API
// ==========================================

use crate::api::error::ApiResult;
use crate::api::evaluation_api::EvaluationApi;
use crate::config::config_manager::ConfigManager;
use crate::i18n;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct AppState {
    /// 配置
    pub config: ConfigManager,

    /// 评定 API
    pub evaluation_api: EvaluationApi,
}

impl AppState {
    /// 创建 AppState
    ///
    /// # 参数
    /// - config_path: 配置文件路径；None 时使用默认路径
    /// - locale_override: 命令行指定的语言（覆盖配置）
    pub fn new(config_path: Option<&Path>, locale_override: Option<&str>) -> ApiResult<Self> {
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(ConfigManager::default_config_path);
        info!(path = %path.display(), "加载配置");

        let mut config = ConfigManager::load(&path)?;
        if let Some(locale) = locale_override {
            config.set(crate::config::config_keys::UI_LOCALE, locale);
        }

        Self::from_config(config)
    }

    /// 由已加载的配置创建
    pub fn from_config(config: ConfigManager) -> ApiResult<Self> {
        let locale = config.get_locale()?;
        i18n::set_locale(&locale);

        let evaluation_api = EvaluationApi::from_config(&config)?;
        Ok(Self {
            config,
            evaluation_api,
        })
    }

    /// 报告输出目录
    pub fn report_dir(&self) -> PathBuf {
        self.config.get_report_dir()
    }
}
