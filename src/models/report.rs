use crate::models::CommentReference;

/// 批次中单条评论的删除结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub comment_id: String,
    pub succeeded: bool,
}

/// 一个批次的执行结果
///
/// `call_failed` 区分两种失败：整个调用无法执行（网络错误、
/// 调用级错误响应）与调用成功但个别评论删除失败。
/// 调用级失败时批次内每条评论都记一条失败结果。
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
    pub call_failed: bool,
}

impl BatchReport {
    /// 构造调用级失败的结果：批次内全部评论记为失败
    pub fn call_failure(batch: &[CommentReference]) -> Self {
        Self {
            outcomes: batch
                .iter()
                .map(|reference| BatchOutcome {
                    comment_id: reference.comment_id.clone(),
                    succeeded: false,
                })
                .collect(),
            call_failed: true,
        }
    }

    /// 本批次成功删除的数量
    pub fn deleted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    /// 本批次删除失败的数量
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded).count()
    }
}

/// 单个 HTML 文件的处理结果
#[derive(Debug, Default)]
pub struct FileReport {
    /// 检查过的带评论链接的条目数（含格式不正确的链接）
    pub examined: usize,
    /// 成功提取出引用的条目数
    pub extracted: usize,
    /// 成功删除的评论数
    pub deleted: usize,
    /// 删除失败的评论数
    pub failed: usize,
}

/// 整次运行的统计
///
/// 只由编排器累加，处理失败的文件不计入任何计数。
#[derive(Debug, Default)]
pub struct RunStatistics {
    pub files_processed: usize,
    pub comments_found: usize,
    pub comments_deleted: usize,
    pub comments_failed: usize,
}

impl RunStatistics {
    /// 将一个文件的处理结果并入运行统计
    pub fn absorb(&mut self, report: &FileReport) {
        self.files_processed += 1;
        self.comments_found += report.examined;
        self.comments_deleted += report.deleted;
        self.comments_failed += report.failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_batch(n: usize) -> Vec<CommentReference> {
        (0..n)
            .map(|i| CommentReference::new("1", i.to_string()))
            .collect()
    }

    #[test]
    fn test_call_failure_marks_every_item_failed() {
        let batch = make_batch(10);
        let report = BatchReport::call_failure(&batch);

        assert!(report.call_failed);
        assert_eq!(report.outcomes.len(), 10);
        assert_eq!(report.deleted(), 0);
        assert_eq!(report.failed(), 10);
    }

    #[test]
    fn test_absorb_accumulates_counters() {
        let mut stats = RunStatistics::default();
        stats.absorb(&FileReport {
            examined: 4,
            extracted: 3,
            deleted: 2,
            failed: 1,
        });
        stats.absorb(&FileReport {
            examined: 2,
            extracted: 2,
            deleted: 2,
            failed: 0,
        });

        assert_eq!(stats.files_processed, 2);
        assert_eq!(stats.comments_found, 6);
        assert_eq!(stats.comments_deleted, 4);
        assert_eq!(stats.comments_failed, 1);
    }
}
