use colored::{ColoredString, Colorize};

use rust_seo::core::ScanReport;
use rust_seo::utils::{reading_time_label, truncate_text};
use rust_seo::{AnalysisResult, CheckStatus, ScoreGrade};

fn status_marker(status: CheckStatus) -> ColoredString {
    match status {
        CheckStatus::Pass => "✓".green(),
        CheckStatus::Fail => "✗".red(),
        CheckStatus::Warning => "!".yellow(),
    }
}

fn colored_score(score: u8) -> ColoredString {
    let text = format!("{}/100", score);
    match ScoreGrade::from_score(score) {
        ScoreGrade::Good => text.green().bold(),
        ScoreGrade::NeedsWork => text.yellow().bold(),
        ScoreGrade::Poor => text.red().bold(),
    }
}

/// 扫描摘要中标题的最大显示长度
const TITLE_WIDTH: usize = 60;

/// 单篇文章的文本报告
pub fn format_result(heading: &str, result: &AnalysisResult) -> String {
    let mut out = format!("{}\n", heading.bold());
    for check in &result.checks {
        out.push_str(&format!(
            "  {} {}: {}\n",
            status_marker(check.status),
            check.label.bold(),
            check.message
        ));
    }
    out.push_str(&format!(
        "  SEO Score: {} ({} of {} checks passed)\n",
        colored_score(result.score),
        result.pass_count(),
        result.checks.len()
    ));
    out
}

/// 整站扫描的文本摘要
pub fn format_scan(report: &ScanReport, min_score: u8) -> String {
    let mut out = String::new();
    for entry in &report.entries {
        let marker = if entry.result.score < min_score {
            "✗".red()
        } else {
            "✓".green()
        };
        out.push_str(&format!(
            "{} {:>8}  {}  ({}, {})\n",
            marker,
            colored_score(entry.result.score),
            truncate_text(&entry.title, TITLE_WIDTH),
            entry.path.display(),
            reading_time_label(entry.reading_time)
        ));
    }
    for failure in &report.failures {
        out.push_str(&format!("{} {}\n", "✗ 加载失败".red(), failure.error));
    }

    out.push('\n');
    match report.average_score() {
        Some(average) => out.push_str(&format!(
            "{} 篇文章, 平均分 {:.1}, 低于 {} 分: {}\n",
            report.entries.len(),
            average,
            min_score,
            report.below(min_score).len()
        )),
        None => out.push_str("没有找到文章\n"),
    }
    out
}
