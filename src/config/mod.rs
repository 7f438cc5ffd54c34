// ==========================================
// 绿色标章评定工具 - 配置层
// ==========================================
// 职责: 系统配置（阈值/模型/路径/语言）与材料参考表
// 存储: JSON 配置文件 + 可选 CSV 参考表
// ==========================================

pub mod catalog;
pub mod config_manager;

// 重导出核心配置管理器
pub use catalog::MaterialCatalog;
pub use config_manager::{config_keys, ConfigError, ConfigManager, ConfigResult, CONFIG_PATH_ENV};
