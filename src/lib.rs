pub mod core;
pub mod models;
pub mod seo;
pub mod utils;

// Re-export commonly used types and functions
pub use crate::models::{AnalysisInput, AnalysisResult, Check, CheckStatus, Post, ScoreGrade};
pub use crate::seo::analyze;
