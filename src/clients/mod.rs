//! 客户端层
//!
//! 封装所有对外部 API 的调用

pub mod vk_client;

pub use vk_client::VkClient;
