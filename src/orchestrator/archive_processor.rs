//! 归档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整删除运行的编排。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、初始化日志文件、创建 VK 客户端
//! 2. **文件枚举**：递归扫描归档 comments 目录下的所有 HTML 文件
//! 3. **顺序处理**：文件逐个处理，文件内批次顺序执行
//! 4. **失败隔离**：单个文件处理失败只记日志，不影响后续文件
//! 5. **全局统计**：唯一持有并累加 RunStatistics
//!
//! ## 设计特点
//!
//! - **单控制流**：没有并发，统计累加无需加锁
//! - **向下委托**：委托 file_processor 处理单个文件

use crate::clients::VkClient;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{FileReport, RunStatistics};
use crate::orchestrator::file_processor;
use crate::services::ExtractService;
use crate::utils::logging::{
    init_log_file, log_file_complete, log_file_start, log_files_found, log_startup,
    print_final_stats,
};
use crate::utils::RateLimiter;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, warn};
use walkdir::WalkDir;

/// 应用主结构
pub struct App {
    config: Config,
    client: VkClient,
    extract_service: ExtractService,
    limiter: RateLimiter,
}

impl App {
    /// 初始化应用
    ///
    /// 配置校验失败（归档目录缺失、token 为空）是整次运行
    /// 中唯一允许的致命错误，必须发生在流水线启动之前。
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        let client = VkClient::new(&config);
        let extract_service = ExtractService::new()?;
        let limiter = RateLimiter::new(config.request_delay_ms);

        Ok(Self {
            config,
            client,
            extract_service,
            limiter,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunStatistics> {
        let html_files = self.collect_html_files()?;

        if html_files.is_empty() {
            warn!("⚠️ 没有找到 HTML 文件，程序结束");
            return Ok(RunStatistics::default());
        }

        let total = html_files.len();
        log_files_found(total);

        let mut stats = RunStatistics::default();

        // 文件逐个处理；单个文件出错不影响其余文件，
        // 出错的文件不计入任何计数
        for (idx, path) in html_files.iter().enumerate() {
            let file_index = idx + 1;
            log_file_start(file_index, total, path);

            match self.process_one(path, file_index).await {
                Ok(report) => {
                    stats.absorb(&report);
                    log_file_complete(file_index, &report);
                }
                Err(e) => {
                    error!("[文件 {}] ❌ 处理过程中发生错误: {}", file_index, e);
                }
            }
        }

        print_final_stats(&stats, &self.config);

        Ok(stats)
    }

    /// 处理单个文件
    async fn process_one(&self, path: &Path, file_index: usize) -> Result<FileReport> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.to_string_lossy(), e))
            .with_context(|| format!("无法读取 HTML 文件: {}", path.display()))?;

        Ok(file_processor::process_file(
            &self.extract_service,
            &self.client,
            &self.limiter,
            &content,
            file_index,
            self.config.batch_size,
        )
        .await)
    }

    /// 递归收集 comments 目录下的所有 HTML 文件
    fn collect_html_files(&self) -> Result<Vec<PathBuf>> {
        let comments_dir = self.config.comments_dir();
        let mut html_files = Vec::new();

        for entry in WalkDir::new(&comments_dir).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("无法读取目录: {}", comments_dir.display()))?;
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("html") {
                html_files.push(path.to_path_buf());
            }
        }

        Ok(html_files)
    }
}
