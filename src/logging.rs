// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别与输出格式
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 日志格式环境变量（text | json）
pub const LOG_FORMAT_ENV: &str = "GREEN_SEAL_LOG_FORMAT";

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// 解析格式名；未知值按 Text 处理
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()) {
            Some(s) if s == "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: warn，交互输出不被日志打断）
///   例如: RUST_LOG=debug 或 RUST_LOG=green_seal_calc=trace
/// - GREEN_SEAL_LOG_FORMAT: text（默认）或 json
///
/// # 示例
/// ```no_run
/// use green_seal_calc::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let format = LogFormat::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref());

    // 日志写到 stderr，stdout 留给报告与表单
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some(" JSON ")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("text")), LogFormat::Text);
        assert_eq!(LogFormat::parse(None), LogFormat::Text);
    }
}
