//! max_new_tokens 估算
//!
//! 按文本长度线性估算生成 token 上限：每 500 字符约 1024 token，
//! 结果限制在 `[1, MAX_NEW_TOKENS_LIMIT]`

use super::request::DEFAULT_MAX_NEW_TOKENS;

/// 服务端允许的最大 token 数
pub const MAX_NEW_TOKENS_LIMIT: u32 = 8192;

/// 每 500 字符对应的 token 数
pub const TOKENS_PER_500_CHARS: u32 = DEFAULT_MAX_NEW_TOKENS;

/// 根据文本长度估算 max_new_tokens
pub fn estimate_max_tokens(text: &str) -> u32 {
    let length = text.chars().count();
    if length == 0 {
        return TOKENS_PER_500_CHARS;
    }

    let estimated = ((length as f64 / 500.0) * TOKENS_PER_500_CHARS as f64).round();
    if !estimated.is_finite() || estimated <= 0.0 {
        return TOKENS_PER_500_CHARS;
    }

    (estimated.min(MAX_NEW_TOKENS_LIMIT as f64) as u32).max(1)
}

/// 校正调用方指定的 max_new_tokens
///
/// 未指定或非正数时返回 `fallback`
pub fn clamp_max_tokens(value: Option<i64>, fallback: u32) -> u32 {
    match value {
        Some(v) if v > 0 => v.min(MAX_NEW_TOKENS_LIMIT as i64) as u32,
        _ => fallback,
    }
}
