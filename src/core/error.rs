use std::path::PathBuf;
use thiserror::Error;

/// 加载文章时的错误
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("读取文件失败: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("缺少前置元数据: {path}")]
    MissingFrontMatter {
        path: PathBuf,
    },

    #[error("前置元数据格式错误: {path} - {message}")]
    InvalidFrontMatter {
        path: PathBuf,
        message: String,
    },
}

impl LoadError {
    /// 出错的文件
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io { path, .. }
            | LoadError::MissingFrontMatter { path }
            | LoadError::InvalidFrontMatter { path, .. } => path,
        }
    }
}
