use crate::models::{AnalysisInput, Check, CheckStatus};

use super::keyword::{self, KeywordAnalyzer};
use super::normalizer::NormalizedContent;

/// 按顺序收集检查结果
#[derive(Debug, Default)]
pub struct ChecksBuilder {
    checks: Vec<Check>,
}

impl ChecksBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pass(&mut self, label: &str, message: impl Into<String>) {
        self.push(label, CheckStatus::Pass, message);
    }

    pub fn fail(&mut self, label: &str, message: impl Into<String>) {
        self.push(label, CheckStatus::Fail, message);
    }

    pub fn warn(&mut self, label: &str, message: impl Into<String>) {
        self.push(label, CheckStatus::Warning, message);
    }

    fn push(&mut self, label: &str, status: CheckStatus, message: impl Into<String>) {
        self.checks.push(Check::new(label, status, message));
    }

    pub fn build(self) -> Vec<Check> {
        self.checks
    }
}

/// 规则共享的输入
pub struct RuleContext<'a> {
    pub input: &'a AnalysisInput,
    pub content: &'a NormalizedContent,
    pub keyword: Option<&'a KeywordAnalyzer>,
}

/// 一条规则可以追加零到多个检查项
pub type Rule = fn(&RuleContext<'_>, &mut ChecksBuilder);

/// 规则执行顺序即输出顺序
pub const RULES: &[Rule] = &[
    post_title,
    meta_title,
    meta_description,
    focus_keyword,
    keyword_in_title,
    keyword_in_meta_description,
    keyword_in_url,
    keyword_in_content,
    content_length,
    subheadings,
    images,
    links,
    permalink,
];

/// 依次执行所有规则
pub fn evaluate(ctx: &RuleContext<'_>) -> Vec<Check> {
    let mut builder = ChecksBuilder::new();
    for rule in RULES {
        rule(ctx, &mut builder);
    }
    builder.build()
}

/// 长度按 UTF-16 码元计算，与编辑器里显示的字符数一致
fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// 不分 ASCII 大小写查找子串，不复制原文
fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

fn post_title(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Post Title";
    let title = &ctx.input.title;
    let len = text_len(title);

    if title.is_empty() {
        out.fail(LABEL, "Add a title to your post");
    } else if len < 30 {
        out.warn(LABEL, "Title is too short. Aim for 50-60 characters");
    } else if len > 70 {
        out.warn(LABEL, "Title is too long. Keep under 60 characters for best SEO");
    } else {
        out.pass(LABEL, "Title length is optimal");
    }
}

fn meta_title(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Meta Title";
    let effective = if ctx.input.meta_title.is_empty() {
        &ctx.input.title
    } else {
        &ctx.input.meta_title
    };
    let len = text_len(effective);

    if effective.is_empty() {
        out.fail(LABEL, "Add a meta title");
    } else if (50..=60).contains(&len) {
        out.pass(LABEL, format!("Meta title length ({}) is perfect", len));
    } else {
        out.warn(LABEL, format!("Meta title length is {}. Aim for 50-60 characters", len));
    }
}

fn meta_description(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Meta Description";
    let description = &ctx.input.meta_description;
    let len = text_len(description);

    if description.is_empty() {
        out.fail(LABEL, "Add a meta description");
    } else if (120..=160).contains(&len) {
        out.pass(LABEL, format!("Meta description length ({}) is optimal", len));
    } else if len < 120 {
        out.warn(LABEL, format!("Too short ({}). Aim for 120-160 characters", len));
    } else {
        out.warn(LABEL, format!("Too long ({}). Keep under 160 characters", len));
    }
}

fn focus_keyword(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Focus Keyword";
    match ctx.keyword {
        Some(kw) => out.pass(LABEL, format!("Focus keyword: \"{}\"", kw.keyword())),
        None => out.fail(LABEL, "Add at least one keyword"),
    }
}

fn keyword_in_title(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Keyword in Title";
    let Some(kw) = ctx.keyword else { return };

    if kw.found_in(&ctx.input.title) {
        out.pass(LABEL, "Focus keyword found in title");
    } else {
        out.fail(LABEL, "Add focus keyword to your title");
    }
}

fn keyword_in_meta_description(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Keyword in Meta Desc";
    let Some(kw) = ctx.keyword else { return };

    if kw.found_in(&ctx.input.meta_description) {
        out.pass(LABEL, "Focus keyword found in meta description");
    } else {
        out.warn(LABEL, "Add focus keyword to meta description");
    }
}

fn keyword_in_url(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Keyword in URL";
    let Some(kw) = ctx.keyword else { return };

    if kw.found_in_slug(&ctx.input.slug) {
        out.pass(LABEL, "Focus keyword found in permalink");
    } else {
        out.warn(LABEL, "Consider adding focus keyword to permalink");
    }
}

fn keyword_in_content(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    let Some(kw) = ctx.keyword else { return };

    let occurrences = kw.count_occurrences(&ctx.content.plain_text);
    // 阈值用原始值比较，显示时保留一位小数
    let density = keyword::density(occurrences, ctx.content.word_count);

    if occurrences == 0 {
        out.fail("Keyword in Content", "Focus keyword not found in content");
    } else if density > 3.0 {
        out.warn(
            "Keyword Density",
            format!("Keyword density ({:.1}%) is too high. Aim for 1-2%", density),
        );
    } else {
        out.pass(
            "Keyword Density",
            format!("Keyword density is {:.1}% ({} times)", density, occurrences),
        );
    }
}

fn content_length(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Content Length";
    let words = ctx.content.word_count;

    if words < 100 {
        out.fail(LABEL, format!("Only {} words. Write at least 300 words", words));
    } else if words < 300 {
        out.warn(LABEL, format!("{} words. Aim for 600+ words for better SEO", words));
    } else if words >= 600 {
        out.pass(LABEL, format!("Great! {} words", words));
    } else {
        out.warn(LABEL, format!("{} words. 600+ words is recommended", words));
    }
}

fn subheadings(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Subheadings";

    if contains_ignore_ascii_case(&ctx.input.content, "<h2") {
        out.pass(LABEL, "Content uses subheadings");
    } else if ctx.content.word_count > 300 {
        out.warn(LABEL, "Add H2/H3 subheadings to structure your content");
    }
}

fn images(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Images";
    let count = ctx.input.content.matches("<img").count();

    if count > 0 {
        out.pass(LABEL, format!("{} image(s) found in content", count));
    } else if ctx.content.word_count > 200 {
        out.warn(LABEL, "Add images to make content more engaging");
    }
}

fn links(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Links";
    // `<a ` 后面的空格用来排除 <abbr>、<article> 等标签
    let count = ctx.input.content.matches("<a ").count();

    if count > 0 {
        out.pass(LABEL, format!("{} link(s) found", count));
    } else if ctx.content.word_count > 300 {
        out.warn(LABEL, "Add internal or external links");
    }
}

fn permalink(ctx: &RuleContext<'_>, out: &mut ChecksBuilder) {
    const LABEL: &str = "Permalink";
    let slug = &ctx.input.slug;

    if slug.is_empty() {
        out.fail(LABEL, "Set a permalink for your post");
    } else if text_len(slug) > 75 {
        out.warn(LABEL, "Permalink is too long. Keep it concise");
    } else {
        out.pass(LABEL, "Permalink is set");
    }
}
