//! 日志初始化模块

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 默认级别为 info，`verbose` 为 true 时降为 debug，
/// RUST_LOG 环境变量可以覆盖默认级别。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
