// ==========================================
// 绿色标章评定工具 - 核心库
// ==========================================
// 建筑材料消耗 → 废料 / CO₂ 估算 → 三项条件 → 绿色标章
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算与报告
pub mod engine;

// 导入层 - 外部文件
pub mod importer;

// 配置层 - 系统配置与材料参考表
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 校验与评定入口
pub mod api;

// 应用层 - 会话与交互式表单
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    CriteriaResult, EvaluationResult, ImpactModel, MaterialEntry, MaterialImpact, MaterialSpec,
    MaterialUnit, SealCriterion, SealThresholds,
};

pub use engine::{ImpactCore, MaterialImpactCalculator, ReportRenderer};

pub use config::{ConfigManager, MaterialCatalog};

pub use api::{ApiError, ApiResult, EvaluationApi, InputValidator, ValidationError};

pub use app::{AppState, FormSession};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "绿色标章评定工具";
