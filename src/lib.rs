//! # VK Comment Deleter
//!
//! 从解压后的 VK 个人数据归档中找到用户的评论，
//! 通过 VK API 的 execute 方法批量删除。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 封装外部 API 调用
//! - `VkClient` - execute 批量删除调用的构建、发送和响应解码
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，纯粹的单一能力
//! - `ExtractService` - 从归档 HTML 中提取评论引用
//! - `batching` - 按 execute 上限划分批次
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/archive_processor` - 整次运行：枚举文件、隔离失败、汇总统计
//! - `orchestrator/file_processor` - 单个文件：提取 → 分批 → 节流执行
//!
//! ## 核心约束
//!
//! - 文件逐个处理，文件内批次严格顺序执行，每次调用后固定暂停
//! - 删除失败（单条或整批）记入统计，绝不中断运行
//! - 唯一的致命错误是启动前的配置校验失败

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::VkClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{BatchOutcome, BatchReport, CommentReference, FileReport, RunStatistics};
pub use orchestrator::App;
pub use services::{ExtractReport, ExtractService};
pub use utils::RateLimiter;
