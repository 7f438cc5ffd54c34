// ==========================================
// 绿色标章评定工具 - API 层
// ==========================================
// 职责: 输入校验、错误汇总、评定入口
// ==========================================

pub mod error;
pub mod evaluation_api;
pub mod validator;

pub use error::{ApiError, ApiResult};
pub use evaluation_api::EvaluationApi;
pub use validator::{InputValidator, ValidationError, ValidationResult};
