// ==========================================
// 绿色标章评定工具 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写、保存
// 存储: JSON 文件 (key → value)，缺失文件时使用默认值
// ==========================================

use crate::domain::evaluation::{
    SealThresholds, DEFAULT_CO2_PER_AREA_LIMIT, DEFAULT_MIN_RECYCLABLE_RATIO,
};
use crate::domain::types::ImpactModel;
use crate::i18n::{self, DEFAULT_LOCALE};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "GREEN_SEAL_CONFIG";

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    /// 单位面积 CO₂ 上限（kg/m²）
    pub const CO2_PER_AREA_LIMIT: &str = "seal.co2_per_area_limit";
    /// 可回收材料占比下限（0~1）
    pub const MIN_RECYCLABLE_RATIO: &str = "seal.min_recyclable_ratio";
    /// 计算模型（DIRECT / AREA_SCALED）
    pub const IMPACT_MODEL: &str = "impact.model";
    /// 材料参考表 CSV 路径（可选）
    pub const CATALOG_PATH: &str = "catalog.path";
    /// 报告输出目录
    pub const REPORT_DIR: &str = "report.dir";
    /// 界面语言
    pub const UI_LOCALE: &str = "ui.locale";
}

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件解析失败 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置文件写入失败 ({path}): {message}")]
    WriteError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl ConfigManager {
    /// 创建仅含默认值的 ConfigManager（不关联文件）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载
    ///
    /// # 说明
    /// - 文件不存在 → 空配置（全部使用默认值），保留路径以便后续 save
    /// - 值可以是字符串、数字或布尔，统一按字符串保存
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            debug!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Ok(Self {
                path: Some(path),
                values: BTreeMap::new(),
            });
        }

        let raw = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let parsed: BTreeMap<String, Value> =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let values = parsed
            .into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| {
                let s = match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, s)
            })
            .collect::<BTreeMap<_, _>>();

        info!(path = %path.display(), keys = values.len(), "配置已加载");

        Ok(Self {
            path: Some(path),
            values,
        })
    }

    /// 默认配置文件路径
    ///
    /// 优先级: 环境变量 GREEN_SEAL_CONFIG → 用户配置目录 → ./green_seal.json
    pub fn default_config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        match dirs::config_dir() {
            Some(dir) => dir.join("green-seal").join("config.json"),
            None => PathBuf::from("./green_seal.json"),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 读取配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_global_config_value(key)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    fn get_f64(&self, key: &str, default: f64) -> ConfigResult<f64> {
        match self.get_global_config_value(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<f64>().map_err(|e| ConfigError::ConfigValueError {
                key: key.to_string(),
                value: raw.clone(),
                message: e.to_string(),
            }),
        }
    }

    /// 覆写配置值
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// 获取所有配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        serde_json::to_string(&self.values).map_err(|e| ConfigError::ParseError {
            path: "<snapshot>".to_string(),
            message: e.to_string(),
        })
    }

    /// 保存到关联文件
    pub fn save(&self) -> ConfigResult<()> {
        let path = match &self.path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        let write_err = |message: String| ConfigError::WriteError {
            path: path.display().to_string(),
            message,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(&self.values).map_err(|e| write_err(e.to_string()))?;
        fs::write(&path, json).map_err(|e| write_err(e.to_string()))?;

        info!(path = %path.display(), "配置已保存");
        Ok(())
    }

    // ===== 标章阈值 =====

    /// 获取标章阈值
    ///
    /// # 校验
    /// - CO₂ 上限 > 0
    /// - 可回收占比下限 ∈ (0, 1]
    pub fn get_seal_thresholds(&self) -> ConfigResult<SealThresholds> {
        let co2_per_area_limit =
            self.get_f64(config_keys::CO2_PER_AREA_LIMIT, DEFAULT_CO2_PER_AREA_LIMIT)?;
        if !co2_per_area_limit.is_finite() || co2_per_area_limit <= 0.0 {
            return Err(ConfigError::ConfigValueError {
                key: config_keys::CO2_PER_AREA_LIMIT.to_string(),
                value: co2_per_area_limit.to_string(),
                message: "必须为正数".to_string(),
            });
        }

        let min_recyclable_ratio =
            self.get_f64(config_keys::MIN_RECYCLABLE_RATIO, DEFAULT_MIN_RECYCLABLE_RATIO)?;
        if !(min_recyclable_ratio > 0.0 && min_recyclable_ratio <= 1.0) {
            return Err(ConfigError::ConfigValueError {
                key: config_keys::MIN_RECYCLABLE_RATIO.to_string(),
                value: min_recyclable_ratio.to_string(),
                message: "必须在 (0, 1] 区间内".to_string(),
            });
        }

        Ok(SealThresholds {
            co2_per_area_limit,
            min_recyclable_ratio,
        })
    }

    // ===== 计算模型 =====

    pub fn get_impact_model(&self) -> ConfigResult<ImpactModel> {
        let raw = self.get_config_or_default(config_keys::IMPACT_MODEL, "DIRECT");
        raw.parse::<ImpactModel>()
            .map_err(|message| ConfigError::ConfigValueError {
                key: config_keys::IMPACT_MODEL.to_string(),
                value: raw.clone(),
                message,
            })
    }

    // ===== 路径 =====

    /// 材料参考表 CSV 路径；未配置时使用内置参考表
    pub fn get_catalog_path(&self) -> Option<PathBuf> {
        self.get_global_config_value(config_keys::CATALOG_PATH)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// 报告输出目录（默认当前目录）
    pub fn get_report_dir(&self) -> PathBuf {
        PathBuf::from(self.get_config_or_default(config_keys::REPORT_DIR, "."))
    }

    // ===== 语言 =====

    pub fn get_locale(&self) -> ConfigResult<String> {
        let locale = self.get_config_or_default(config_keys::UI_LOCALE, DEFAULT_LOCALE);
        if i18n::is_supported(&locale) {
            Ok(locale)
        } else {
            Err(ConfigError::ConfigValueError {
                key: config_keys::UI_LOCALE.to_string(),
                value: locale,
                message: format!("支持的语言: {}", i18n::SUPPORTED_LOCALES.join(", ")),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = ConfigManager::new();
        assert_eq!(cfg.get_seal_thresholds().unwrap(), SealThresholds::default());
        assert_eq!(cfg.get_impact_model().unwrap(), ImpactModel::Direct);
        assert_eq!(cfg.get_catalog_path(), None);
        assert_eq!(cfg.get_report_dir(), PathBuf::from("."));
        assert_eq!(cfg.get_locale().unwrap(), "zh-CN");
    }

    #[test]
    fn test_set_overrides() {
        let mut cfg = ConfigManager::new();
        cfg.set(config_keys::CO2_PER_AREA_LIMIT, "6.5");
        cfg.set(config_keys::IMPACT_MODEL, "area_scaled");
        cfg.set(config_keys::UI_LOCALE, "pt-BR");

        assert_eq!(cfg.get_seal_thresholds().unwrap().co2_per_area_limit, 6.5);
        assert_eq!(cfg.get_impact_model().unwrap(), ImpactModel::AreaScaled);
        assert_eq!(cfg.get_locale().unwrap(), "pt-BR");
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let mut cfg = ConfigManager::new();
        cfg.set(config_keys::MIN_RECYCLABLE_RATIO, "1.5");
        assert!(matches!(
            cfg.get_seal_thresholds(),
            Err(ConfigError::ConfigValueError { .. })
        ));

        let mut cfg = ConfigManager::new();
        cfg.set(config_keys::CO2_PER_AREA_LIMIT, "abc");
        assert!(cfg.get_seal_thresholds().is_err());
    }

    #[test]
    fn test_unsupported_locale_rejected() {
        let mut cfg = ConfigManager::new();
        cfg.set(config_keys::UI_LOCALE, "fr");
        assert!(cfg.get_locale().is_err());
    }

    #[test]
    fn test_snapshot_is_json() {
        let mut cfg = ConfigManager::new();
        cfg.set(config_keys::REPORT_DIR, "/tmp/reports");
        let snapshot = cfg.get_config_snapshot().unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(parsed.get(config_keys::REPORT_DIR).unwrap(), "/tmp/reports");
    }
}
