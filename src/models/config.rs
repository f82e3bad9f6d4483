use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

/// 报告输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub source_dir: String,
    pub seo: SeoConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// 扫描时允许的最低分数
    pub min_score: u8,
    /// 默认输出格式
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            source_dir: "source".to_string(),
            seo: SeoConfig::default(),
        }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        Ok(config)
    }

    /// 加载配置，文件不存在时使用默认值
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("_config.yml")).unwrap();
        assert_eq!(config.source_dir, "source");
        assert_eq!(config.seo.min_score, 0);
        assert_eq!(config.seo.format, OutputFormat::Text);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: Garden Notes\nseo:\n  min_score: 70\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.title, "Garden Notes");
        assert_eq!(config.source_dir, "source");
        assert_eq!(config.seo.min_score, 70);
        assert_eq!(config.seo.format, OutputFormat::Text);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "seo: [unclosed").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
