/// VK API 客户端
///
/// 封装 execute 方法的批量删除调用：一次调用最多提交
/// `batch_size` 条删除操作，避免逐条请求的往返开销。
/// execute 按顺序执行脚本，但效果不是原子的：个别条目
/// 删除失败会在结果列表中单独上报，不会回滚。
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{BatchOutcome, BatchReport, CommentReference};
use serde_json::Value;
use tracing::{debug, error, warn};

/// VK API 客户端
pub struct VkClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
    api_version: String,
}

impl VkClient {
    /// 创建新的 VK 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            access_token: config.access_token.clone(),
            api_version: config.api_version.clone(),
        }
    }

    /// 删除一个批次的评论
    ///
    /// # 参数
    /// - `batch`: 最多 batch_size 条评论引用
    ///
    /// # 返回
    /// 返回每条评论的删除结果。传输错误和响应解析错误在本层
    /// 全部吸收为调用级失败，绝不向上传播中断运行。
    pub async fn delete_comments(&self, batch: &[CommentReference]) -> BatchReport {
        if batch.is_empty() {
            return BatchReport::default();
        }

        match self.call_execute(batch).await {
            Ok(root) => decode_execute_response(batch, &root),
            Err(e) => {
                warn!("⚠️ 批次请求失败，整批记为失败: {}", e);
                BatchReport::call_failure(batch)
            }
        }
    }

    /// 发送一次 execute 调用
    async fn call_execute(&self, batch: &[CommentReference]) -> AppResult<Value> {
        let code = build_execute_code(batch)?;
        let url = format!("{}/execute", self.base_url);

        debug!("execute 脚本 ({} 条操作): {}", batch.len(), code);

        // query 参数由 reqwest 做 URL 编码
        let response = self
            .http
            .get(&url)
            .query(&[
                ("code", code.as_str()),
                ("access_token", self.access_token.as_str()),
                ("v", self.api_version.as_str()),
            ])
            .send()
            .await?;

        let root: Value = response.json().await?;
        Ok(root)
    }
}

/// 构建 execute 方法的 VKScript 脚本
///
/// 批次序列化为 `{owner_id, comment_id}` 的 JSON 数组直接嵌入脚本，
/// 脚本逐条调用 wall.deleteComment 并收集 `{comment_id, success}` 结果。
fn build_execute_code(batch: &[CommentReference]) -> AppResult<String> {
    let comments_json = serde_json::to_string(batch)?;

    Ok(format!(
        r#"var comments = {comments_json};
var results = [];
var i = 0;
while (i < comments.length) {{
    var result = API.wall.deleteComment({{
        owner_id: parseInt(comments[i].owner_id),
        comment_id: parseInt(comments[i].comment_id)
    }});
    results.push({{
        comment_id: comments[i].comment_id,
        success: parseInt(result) == 1
    }});
    i = i + 1;
}}
return results;"#
    ))
}

/// 解码 execute 响应
///
/// 按优先级检查三种形态：
/// 1. 顶层 error 对象 → 调用级失败，整批记失败（没有逐条信息）
/// 2. 顶层 response 数组 → 脚本按批次顺序返回结果，按位置逐条取
///    success；数组比批次短或条目缺 success 的位置记为失败，
///    保证结果数量恒等于批次大小
/// 3. 两者都没有 → 按调用级失败保守处理
fn decode_execute_response(batch: &[CommentReference], root: &Value) -> BatchReport {
    if let Some(err) = root.get("error") {
        let code = err.get("error_code").and_then(Value::as_u64);
        let msg = err
            .get("error_msg")
            .and_then(Value::as_str)
            .unwrap_or("未知错误");
        error!("❌ VK API 错误 (code={:?}): {}", code, msg);
        return BatchReport::call_failure(batch);
    }

    if let Some(results) = root.get("response").and_then(Value::as_array) {
        let outcomes = batch
            .iter()
            .enumerate()
            .map(|(idx, reference)| BatchOutcome {
                comment_id: reference.comment_id.clone(),
                succeeded: results
                    .get(idx)
                    .and_then(|entry| entry.get("success"))
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            })
            .collect();
        return BatchReport {
            outcomes,
            call_failed: false,
        };
    }

    warn!("⚠️ execute 响应格式不正确，整批记为失败: {}", root);
    BatchReport::call_failure(batch)
}
