pub mod config;
pub mod types;

pub use config::{Config, OutputFormat, SeoConfig};
pub use types::{AnalysisInput, AnalysisResult, Check, CheckStatus, Post, ScoreGrade};
