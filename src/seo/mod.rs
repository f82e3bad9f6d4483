//! 文章 SEO 分析
//!
//! 对标题、元信息、永久链接和正文逐项检查，再按通过比例打分。
//! 分析是纯函数：没有 I/O，没有共享状态，任何输入都会返回结果。

pub mod keyword;
pub mod normalizer;
pub mod rules;
pub mod score;

pub use keyword::KeywordAnalyzer;
pub use normalizer::{strip_html, word_count, NormalizedContent};
pub use rules::{ChecksBuilder, RuleContext};

use tracing::debug;

use crate::models::{AnalysisInput, AnalysisResult};

/// 分析一篇文章
pub fn analyze(input: &AnalysisInput) -> AnalysisResult {
    let content = NormalizedContent::from_html(&input.content);
    let keyword = input
        .focus_keyword()
        .and_then(|focus| KeywordAnalyzer::new(&focus));

    let checks = rules::evaluate(&RuleContext {
        input,
        content: &content,
        keyword: keyword.as_ref(),
    });
    let score = score::score(&checks);

    debug!(
        "SEO 分析完成: {} 项检查, 得分 {}, 词数 {}",
        checks.len(),
        score,
        content.word_count
    );

    AnalysisResult { checks, score }
}
