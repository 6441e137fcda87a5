//! 批次划分
//!
//! 把提取出的评论引用按 execute 调用上限切成连续批次。

use crate::models::CommentReference;

/// 按顺序切分为最多 `batch_size` 条的连续批次
///
/// 不丢弃、不重排，最后一个批次可能不满。
/// `batch_size` 必须大于 0，由配置校验保证。
pub fn chunk_references(
    references: &[CommentReference],
    batch_size: usize,
) -> impl Iterator<Item = &[CommentReference]> {
    references.chunks(batch_size)
}
