// ==========================================
// 绿色标章评定工具 - 应用层
// ==========================================
// 职责: 应用状态、表单会话、交互式表单
// ==========================================

pub mod form;
pub mod session;
pub mod state;

// 重导出
pub use form::run_form;
pub use session::FormSession;
pub use state::AppState;
