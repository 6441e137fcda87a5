//! 数据模型模块

pub mod comment;
pub mod report;

pub use comment::CommentReference;
pub use report::{BatchOutcome, BatchReport, FileReport, RunStatistics};
