//! 业务能力层
//!
//! 提供单一能力的服务：链接提取、批次划分

pub mod batching;
pub mod extract_service;

pub use batching::chunk_references;
pub use extract_service::{ExtractReport, ExtractService};
