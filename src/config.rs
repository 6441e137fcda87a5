use crate::error::{AppError, AppResult, ConfigError};
use std::path::{Path, PathBuf};

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 解压后的 VK 数据归档目录
    pub archive_dir: String,
    /// VK API access token
    pub access_token: String,
    /// VK API 基础URL
    pub api_base_url: String,
    /// VK API 版本
    pub api_version: String,
    /// 每次 execute 调用的最大删除数量（API 上限 25）
    pub batch_size: usize,
    /// 每次 execute 调用后的固定间隔（毫秒）
    pub request_delay_ms: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive_dir: "vk_archive".to_string(),
            access_token: String::new(),
            api_base_url: "https://api.vk.com/method".to_string(),
            api_version: "5.131".to_string(),
            batch_size: 25,
            request_delay_ms: 350,
            verbose_logging: false,
            output_log_file: "delete_log.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            archive_dir: std::env::var("VK_ARCHIVE_DIR").unwrap_or(default.archive_dir),
            access_token: std::env::var("VK_ACCESS_TOKEN").unwrap_or(default.access_token),
            api_base_url: std::env::var("VK_API_BASE_URL").unwrap_or(default.api_base_url),
            api_version: std::env::var("VK_API_VERSION").unwrap_or(default.api_version),
            batch_size: std::env::var("VK_BATCH_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.batch_size),
            request_delay_ms: std::env::var("VK_REQUEST_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_delay_ms),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 校验配置
    ///
    /// 归档目录及其中的 comments 子目录必须存在，token 不能为空，
    /// 批次大小必须大于 0。校验失败是整个运行中唯一的致命错误。
    pub fn validate(&self) -> AppResult<()> {
        if self.access_token.is_empty() {
            return Err(AppError::Config(ConfigError::EmptyAccessToken));
        }
        if self.batch_size == 0 {
            return Err(AppError::Config(ConfigError::InvalidBatchSize { value: 0 }));
        }
        if !Path::new(&self.archive_dir).is_dir() {
            return Err(AppError::directory_not_found(&self.archive_dir));
        }
        let comments_dir = self.comments_dir();
        if !comments_dir.is_dir() {
            return Err(AppError::directory_not_found(
                comments_dir.to_string_lossy(),
            ));
        }
        Ok(())
    }

    /// 归档中存放评论 HTML 的目录
    pub fn comments_dir(&self) -> PathBuf {
        Path::new(&self.archive_dir).join("comments")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config(dir: &str) -> Config {
        Config {
            archive_dir: dir.to_string(),
            access_token: "token".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        let config = Config::default();
        assert!(config.validate().is_err(), "空 token 应该校验失败");
    }

    #[test]
    fn test_validate_rejects_zero_batch_size() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("comments")).unwrap();
        let mut config = valid_config(dir.path().to_str().unwrap());
        config.batch_size = 0;
        assert!(config.validate().is_err(), "批次大小为 0 应该校验失败");
    }

    #[test]
    fn test_validate_rejects_missing_comments_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = valid_config(dir.path().to_str().unwrap());
        assert!(config.validate().is_err(), "缺少 comments 目录应该校验失败");
    }

    #[test]
    fn test_validate_accepts_complete_archive() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("comments")).unwrap();
        let config = valid_config(dir.path().to_str().unwrap());
        assert!(config.validate().is_ok());
    }
}
