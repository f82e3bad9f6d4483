use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// SEO 分析的输入字段，与编辑器表单一一对应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisInput {
    /// 文章标题
    pub title: String,
    /// 文章内容（HTML）
    pub content: String,
    /// 元标题，为空时回退到文章标题
    pub meta_title: String,
    /// 元描述
    pub meta_description: String,
    /// 逗号分隔的关键词
    pub meta_keywords: String,
    /// 永久链接
    pub slug: String,
}

impl AnalysisInput {
    /// 焦点关键词：第一个非空的关键词，去掉首尾空白并转为小写
    pub fn focus_keyword(&self) -> Option<String> {
        self.meta_keywords
            .split(',')
            .map(str::trim)
            .find(|keyword| !keyword.is_empty())
            .map(str::to_lowercase)
    }
}

/// 单项检查的结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "fail",
            CheckStatus::Warning => "warning",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一项 SEO 检查
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    /// 检查名称
    pub label: String,
    /// 检查状态
    pub status: CheckStatus,
    /// 提示信息
    pub message: String,
}

impl Check {
    pub fn new(label: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            status,
            message: message.into(),
        }
    }
}

/// 分数等级，对应编辑器中分数的颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGrade {
    /// 80 分及以上
    Good,
    /// 50 到 79 分
    NeedsWork,
    /// 50 分以下
    Poor,
}

impl ScoreGrade {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreGrade::Good
        } else if score >= 50 {
            ScoreGrade::NeedsWork
        } else {
            ScoreGrade::Poor
        }
    }
}

/// 分析结果：按固定顺序排列的检查项和总分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 检查项
    pub checks: Vec<Check>,
    /// 总分（0-100）
    pub score: u8,
}

impl AnalysisResult {
    /// 通过的检查数量
    pub fn pass_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|check| check.status == CheckStatus::Pass)
            .count()
    }

    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.score)
    }

    /// 按名称查找检查项
    pub fn check(&self, label: &str) -> Option<&Check> {
        self.checks.iter().find(|check| check.label == label)
    }
}

/// 从磁盘加载的博客文章
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// 文章标题
    pub title: String,
    /// 永久链接
    pub slug: String,
    /// 文章内容（原始Markdown）
    pub content: String,
    /// 渲染后的HTML内容
    pub rendered_content: String,
    /// 元标题
    pub meta_title: String,
    /// 元描述
    pub meta_description: String,
    /// 逗号分隔的关键词
    pub meta_keywords: String,
    /// 文章摘要
    pub excerpt: String,
    /// 源文件路径
    pub source: PathBuf,
    /// 其余前置元数据
    pub front_matter: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// 转换为分析输入，内容使用渲染后的HTML
    pub fn to_input(&self) -> AnalysisInput {
        AnalysisInput {
            title: self.title.clone(),
            content: self.rendered_content.clone(),
            meta_title: self.meta_title.clone(),
            meta_description: self.meta_description.clone(),
            meta_keywords: self.meta_keywords.clone(),
            slug: self.slug.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(value: &str) -> AnalysisInput {
        AnalysisInput {
            meta_keywords: value.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn focus_keyword_is_first_entry_lowercased() {
        assert_eq!(
            keywords("SEO, content, writing").focus_keyword().as_deref(),
            Some("seo")
        );
        assert_eq!(
            keywords("  Urban Gardening ").focus_keyword().as_deref(),
            Some("urban gardening")
        );
    }

    #[test]
    fn focus_keyword_skips_empty_entries() {
        assert_eq!(keywords(" , ,rust").focus_keyword().as_deref(), Some("rust"));
        assert_eq!(keywords("").focus_keyword(), None);
        assert_eq!(keywords("   ").focus_keyword(), None);
        assert_eq!(keywords(",,").focus_keyword(), None);
    }

    #[test]
    fn input_uses_camel_case_and_defaults() {
        let input: AnalysisInput =
            serde_json::from_str(r#"{"title":"Hi","metaTitle":"Meta"}"#).unwrap();
        assert_eq!(input.title, "Hi");
        assert_eq!(input.meta_title, "Meta");
        assert_eq!(input.content, "");
        assert_eq!(input.slug, "");
    }

    #[test]
    fn status_serializes_lowercase() {
        let check = Check::new("Permalink", CheckStatus::Warning, "too long");
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["status"], "warning");
    }

    #[test]
    fn grade_bands() {
        assert_eq!(ScoreGrade::from_score(100), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(80), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(79), ScoreGrade::NeedsWork);
        assert_eq!(ScoreGrade::from_score(50), ScoreGrade::NeedsWork);
        assert_eq!(ScoreGrade::from_score(49), ScoreGrade::Poor);
        assert_eq!(ScoreGrade::from_score(0), ScoreGrade::Poor);
    }
}
