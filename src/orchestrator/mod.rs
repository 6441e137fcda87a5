//! 编排层
//!
//! - `archive_processor` - 整次运行：枚举文件、隔离单文件失败、汇总统计
//! - `file_processor` - 单个文件：提取 → 分批 → 节流执行

pub mod archive_processor;
pub mod file_processor;

pub use archive_processor::App;
pub use file_processor::process_file;
