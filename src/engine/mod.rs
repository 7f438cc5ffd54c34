// ==========================================
// 绿色标章评定工具 - 引擎层
// ==========================================
// impact_core: 纯函数（计算与条件判定）
// impact: 计算器（校验 + 汇总 + 结论）
// report: 文本报告渲染与写出
// ==========================================

pub mod error;
pub mod impact;
pub mod impact_core;
pub mod report;

pub use error::{EngineError, EngineResult};
pub use impact::MaterialImpactCalculator;
pub use impact_core::ImpactCore;
pub use report::{
    default_report_file_name, format_number, write_report, write_report_in_dir, ReportRenderer,
};
