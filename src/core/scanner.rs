use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::error::LoadError;
use crate::core::loader::{is_markdown_file, load_post};
use crate::models::AnalysisResult;
use crate::seo;
use crate::utils::reading_time;

/// 单篇文章的扫描结果
#[derive(Debug, Clone, Serialize)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub title: String,
    pub slug: String,
    /// 阅读时间（分钟）
    pub reading_time: usize,
    pub result: AnalysisResult,
}

/// 加载失败的文章
#[derive(Debug, Clone, Serialize)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub error: String,
}

/// 整站扫描报告
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub entries: Vec<ScanEntry>,
    pub failures: Vec<ScanFailure>,
}

impl ScanReport {
    /// 平均分，没有文章时为 None
    pub fn average_score(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: u32 = self.entries.iter().map(|e| u32::from(e.result.score)).sum();
        Some(f64::from(total) / self.entries.len() as f64)
    }

    /// 低于最低分的文章
    pub fn below(&self, min_score: u8) -> Vec<&ScanEntry> {
        self.entries
            .iter()
            .filter(|e| e.result.score < min_score)
            .collect()
    }
}

/// 扫描 `<source_dir>/_posts` 下的所有文章
pub struct Scanner {
    posts_dir: PathBuf,
}

impl Scanner {
    pub fn new(source_dir: &Path) -> Self {
        Self {
            posts_dir: source_dir.join("_posts"),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    fn collect_files(&self) -> Vec<PathBuf> {
        if !self.posts_dir.exists() {
            warn!("文章目录不存在: {}", self.posts_dir.display());
            return Vec::new();
        }

        WalkDir::new(&self.posts_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("读取目录条目失败: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && is_markdown_file(entry.path()))
            .map(|entry| entry.into_path())
            .collect()
    }

    /// 并行加载并分析所有文章，单篇失败不会中断扫描
    pub fn scan(&self) -> ScanReport {
        let files = self.collect_files();
        info!("从 {} 扫描 {} 篇文章", self.posts_dir.display(), files.len());

        let outcomes: Vec<Result<ScanEntry, LoadError>> = files
            .par_iter()
            .map(|path| -> Result<ScanEntry, LoadError> {
                let post = load_post(path)?;
                let result = seo::analyze(&post.to_input());
                Ok(ScanEntry {
                    path: path.clone(),
                    reading_time: reading_time(&post.rendered_content),
                    title: post.title,
                    slug: post.slug,
                    result,
                })
            })
            .collect();

        let mut report = ScanReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(entry) => report.entries.push(entry),
                Err(LoadError::MissingFrontMatter { path }) => {
                    // 没有前置元数据的文件不是文章
                    debug!("跳过没有前置元数据的文件: {}", path.display());
                }
                Err(e) => {
                    warn!("加载文章失败: {}", e);
                    report.failures.push(ScanFailure {
                        path: e.path().clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            "扫描完成 - 成功: {}, 失败: {}",
            report.entries.len(),
            report.failures.len()
        );
        report
    }
}
