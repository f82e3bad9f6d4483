use crate::models::AnalysisInput;
use crate::seo::normalizer::{strip_html, word_count};

/// 摘要的最大字符数
pub const EXCERPT_LENGTH: usize = 200;
/// 自动生成的元描述的最大字符数
pub const META_DESCRIPTION_LENGTH: usize = 160;
/// 每分钟阅读词数
pub const WORDS_PER_MINUTE: usize = 200;

/// 从标题生成 URL 友好的别名
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

/// 规范化用户自定义的永久链接
///
/// 转为小写，`[a-z0-9-]` 以外的字符替换为 `-`，合并连续的 `-`，去掉首尾的 `-`。
pub fn normalize_permalink(custom: &str) -> String {
    let mut slug = String::with_capacity(custom.len());
    for c in custom.to_lowercase().chars() {
        let c = if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '-' };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug.trim_matches('-').to_string()
}

/// 截断文本，超出部分用 `...` 表示
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let head: String = text.chars().take(max_length).collect();
    format!("{}...", head.trim())
}

fn leading_chars(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

/// 未填写摘要时，取正文纯文本的前 200 个字符
pub fn derive_excerpt(html: &str) -> String {
    leading_chars(&strip_html(html), EXCERPT_LENGTH)
}

/// 未填写元描述时，取正文纯文本的前 160 个字符
pub fn derive_meta_description(html: &str) -> String {
    leading_chars(&strip_html(html), META_DESCRIPTION_LENGTH)
}

/// 估计阅读时间（分钟），至少 1 分钟
pub fn reading_time(html: &str) -> usize {
    let words = word_count(&strip_html(html));
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

pub fn reading_time_label(minutes: usize) -> String {
    format!("{} min read", minutes)
}

/// 按保存文章时的规则补全空字段
///
/// 元标题回退到标题，元描述取正文前 160 个字符，永久链接由标题生成。
pub fn apply_stored_defaults(mut input: AnalysisInput) -> AnalysisInput {
    if input.meta_title.is_empty() {
        input.meta_title = input.title.clone();
    }
    if input.meta_description.is_empty() {
        input.meta_description = derive_meta_description(&input.content);
    }
    if input.slug.is_empty() {
        input.slug = slugify(&input.title);
    }
    input
}
