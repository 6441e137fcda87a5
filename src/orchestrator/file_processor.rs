//! 单文件处理器 - 编排层
//!
//! 把一个 HTML 文件的内容走完整条流水线：
//! 提取引用 → 按上限分批 → 逐批节流执行删除。
//! 批次必须顺序执行：无论文件多大，出站请求频率都由
//! 节流器的固定间隔约束，绝不并发。

use crate::clients::VkClient;
use crate::models::FileReport;
use crate::services::{chunk_references, ExtractService};
use crate::utils::RateLimiter;
use tracing::{info, warn};

/// 处理单个 HTML 文件的内容
///
/// # 参数
/// - `content`: 文件的原始 HTML 文本
/// - `file_index`: 文件序号（用于日志）
///
/// # 返回
/// 返回该文件的处理结果。删除失败已经在批次结果中逐条
/// 记账，本函数不会因删除失败而报错。
pub async fn process_file(
    extract_service: &ExtractService,
    client: &VkClient,
    limiter: &RateLimiter,
    content: &str,
    file_index: usize,
    batch_size: usize,
) -> FileReport {
    let extracted = extract_service.extract(content);

    let mut report = FileReport {
        examined: extracted.examined,
        extracted: extracted.references.len(),
        ..Default::default()
    };

    if extracted.references.is_empty() {
        return report;
    }

    for batch in chunk_references(&extracted.references, batch_size) {
        let batch_report = client.delete_comments(batch).await;

        for outcome in &batch_report.outcomes {
            if outcome.succeeded {
                report.deleted += 1;
                info!("[文件 {}] ✓ 已删除评论 {}", file_index, outcome.comment_id);
            } else {
                report.failed += 1;
                warn!(
                    "[文件 {}] ✗ 评论 {} 删除失败",
                    file_index, outcome.comment_id
                );
            }
        }

        // 每次调用后固定暂停，与调用结果无关
        limiter.pause().await;
    }

    report
}
