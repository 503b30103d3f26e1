//! Synthesis Context - 语音合成上下文
//!
//! 职责:
//! - 合成请求的构造与默认参数
//! - max_new_tokens 估算
//! - 自动命名模式的输出格式

mod format;
mod request;
mod token_budget;

pub use format::{normalize_format, LIBRARY_FALLBACK_FORMAT, LIBRARY_FORMATS};
pub use request::{
    SynthesisRequest, DEFAULT_CHUNK_LENGTH, DEFAULT_FORMAT, DEFAULT_MAX_NEW_TOKENS,
};
pub use token_budget::{
    clamp_max_tokens, estimate_max_tokens, MAX_NEW_TOKENS_LIMIT, TOKENS_PER_500_CHARS,
};
