/// 评论链接提取服务
///
/// 从 VK 数据归档的 HTML 文件中提取评论引用。
/// 归档页面由重复的 item 块组成，每个评论条目内有一条
/// 指向 `vk.com/wall` 的链接，链接的 `reply` 参数就是评论 id。
use crate::models::CommentReference;
use anyhow::Result;
use regex::Regex;
use tracing::warn;

/// item 块的分隔标记（归档页面中条目互为兄弟节点，不会嵌套）
const ITEM_MARKER: &str = r#"class="item""#;

/// 一个文件的提取结果
///
/// `examined` 统计检查过的带 wall 链接的条目数，包括链接格式
/// 不正确而被排除的条目，与 `references.len()` 可能不同。
#[derive(Debug, Default)]
pub struct ExtractReport {
    pub references: Vec<CommentReference>,
    pub examined: usize,
}

/// 评论链接提取服务
pub struct ExtractService {
    anchor_re: Regex,
    comment_url_re: Regex,
}

impl ExtractService {
    /// 创建提取服务（正则只编译一次，整次运行共用）
    pub fn new() -> Result<Self> {
        let anchor_re = Regex::new(r#"<a\s+[^>]*href="([^"]*)""#)?;
        // 归档 HTML 会把 & 转义为 &amp;，thread 参数两种写法都要接受
        let comment_url_re = Regex::new(
            r#"https://vk\.com/wall(-?\d+)_(\d+)\?reply=(\d+)(?:&(?:amp;)?thread=(\d+))?"#,
        )?;
        Ok(Self {
            anchor_re,
            comment_url_re,
        })
    }

    /// 从一个 HTML 文件的内容中提取评论引用
    ///
    /// 对任何输入都不会失败：没有链接的条目静默跳过，
    /// 链接格式不正确的条目记入 examined 并告警，不中断文件处理。
    pub fn extract(&self, html: &str) -> ExtractReport {
        let mut report = ExtractReport::default();

        for block in item_blocks(html) {
            let Some(href) = self.first_wall_link(block) else {
                continue;
            };
            report.examined += 1;

            match self.parse_comment_link(href) {
                Some(reference) => report.references.push(reference),
                None => warn!("⚠️ 链接格式不正确: {}", href),
            }
        }

        report
    }

    /// 条目中第一条指向 vk.com/wall 的链接
    ///
    /// href 缺失或为空的锚点视为不匹配（跳过，不是错误）
    fn first_wall_link<'a>(&self, block: &'a str) -> Option<&'a str> {
        self.anchor_re
            .captures_iter(block)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .find(|href| !href.is_empty() && href.contains("vk.com/wall"))
    }

    /// 链接匹配规则（单独隔离，方便替换提取策略）
    ///
    /// 形如 `https://vk.com/wall{owner}_{post}?reply={comment}[&thread={n}]`，
    /// post id 和 thread 参数不参与删除，忽略。
    pub fn parse_comment_link(&self, href: &str) -> Option<CommentReference> {
        let caps = self.comment_url_re.captures(href)?;
        Some(CommentReference::new(
            caps[1].to_string(),
            caps[3].to_string(),
        ))
    }
}

/// 按 item 标记把文档切成条目块，保持文档顺序
fn item_blocks(html: &str) -> impl Iterator<Item = &str> {
    html.split(ITEM_MARKER).skip(1)
}
