use crate::models::{Check, CheckStatus};

/// 通过项占比换算成 0-100 的分数，没有检查项时为 0
pub fn score(checks: &[Check]) -> u8 {
    if checks.is_empty() {
        return 0;
    }
    let passed = checks
        .iter()
        .filter(|check| check.status == CheckStatus::Pass)
        .count();
    (passed as f64 * 100.0 / checks.len() as f64).round() as u8
}
