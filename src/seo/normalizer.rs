use once_cell::sync::Lazy;
use regex::Regex;

/// 匹配任意标签：`<` 到下一个 `>`，不关心属性和自闭合形式
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("标签正则无效"));

/// 去掉所有标签，得到纯文本
///
/// 这里只做简单的尖括号剥离，不解析 HTML，也不解码实体。
/// 没有闭合的 `<` 会原样保留。
pub fn strip_html(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// 统计以空白分隔的非空词数
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 规范化后的文章内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedContent {
    pub plain_text: String,
    pub word_count: usize,
}

impl NormalizedContent {
    pub fn from_html(html: &str) -> Self {
        let plain_text = strip_html(html);
        let word_count = word_count(&plain_text);
        Self {
            plain_text,
            word_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_with_attributes() {
        let html = r#"<p class="lead">Hello <a href="/x">world</a><br/></p>"#;
        assert_eq!(strip_html(html), "Hello world");
    }

    #[test]
    fn keeps_entities_and_unclosed_brackets() {
        assert_eq!(strip_html("a &amp; b"), "a &amp; b");
        assert_eq!(strip_html("1 < 2 and <b>bold</b>"), "1 < 2 and bold");
    }

    #[test]
    fn tags_are_removed_without_inserting_spaces() {
        let normalized = NormalizedContent::from_html("<p>one</p><p>two</p>");
        assert_eq!(normalized.plain_text, "onetwo");
        assert_eq!(normalized.word_count, 1);
    }

    #[test]
    fn empty_and_whitespace_content_has_no_words() {
        assert_eq!(NormalizedContent::from_html("").word_count, 0);
        assert_eq!(NormalizedContent::from_html("  \n\t ").word_count, 0);
        assert_eq!(NormalizedContent::from_html("<p> </p>").word_count, 0);
    }

    #[test]
    fn counts_whitespace_delimited_tokens() {
        let normalized = NormalizedContent::from_html("<p>The  quick\nbrown\tfox.</p>");
        assert_eq!(normalized.word_count, 4);
    }
}
