use serde::Serialize;

/// 一条待删除评论的引用
///
/// 两个字段都是十进制数字字符串（owner_id 可以为负数，表示社区墙）。
/// 由提取服务的链接匹配规则保证字段内容一定是合法整数。
/// 序列化后直接嵌入 execute 脚本的 JSON 数组。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentReference {
    pub owner_id: String,
    pub comment_id: String,
}

impl CommentReference {
    pub fn new(owner_id: impl Into<String>, comment_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            comment_id: comment_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_to_script_json() {
        let reference = CommentReference::new("-12345", "678");
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, r#"{"owner_id":"-12345","comment_id":"678"}"#);
    }
}
