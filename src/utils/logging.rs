use crate::config::Config;
/// 日志工具模块
///
/// 提供启动、进度和统计信息的输出辅助函数
use crate::error::{AppError, AppResult};
use crate::models::{FileReport, RunStatistics};
use std::fs;
use std::path::Path;
use tracing::info;

/// 初始化日志文件
pub fn init_log_file(log_file_path: &str) -> AppResult<()> {
    let log_header = format!(
        "{}\nVK 评论删除日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .map_err(|e| AppError::file_write_failed(log_file_path, e))?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - VK 评论批量删除");
    info!("📁 归档目录: {}", config.archive_dir);
    info!(
        "📦 每批最多 {} 条，调用间隔 {}ms",
        config.batch_size, config.request_delay_ms
    );
    info!("{}", "=".repeat(60));
}

/// 记录找到的 HTML 文件数量
pub fn log_files_found(total: usize) {
    info!("✓ 找到 {} 个 HTML 文件", total);
    info!("💡 文件逐个处理，批次顺序执行\n");
}

/// 记录开始处理一个文件
pub fn log_file_start(file_index: usize, total: usize, path: &Path) {
    info!(
        "\n📄 [文件 {}/{}] 正在处理: {}",
        file_index,
        total,
        path.file_name().unwrap_or_default().to_string_lossy()
    );
}

/// 记录一个文件处理完成
pub fn log_file_complete(file_index: usize, report: &FileReport) {
    info!(
        "[文件 {}] ✓ 处理完成: 找到 {} 条评论，删除 {} 条，失败 {} 条",
        file_index, report.examined, report.deleted, report.failed
    );
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &RunStatistics, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📄 处理文件: {}", stats.files_processed);
    info!("🔍 找到评论: {}", stats.comments_found);
    info!("✅ 成功删除: {}", stats.comments_deleted);
    info!("❌ 删除失败: {}", stats.comments_failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}
