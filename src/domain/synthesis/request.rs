//! Synthesis Context - 请求值对象
//!
//! 对应远端 `POST /v1/tts` 的 JSON 请求体

use serde::Serialize;

/// 默认输出格式
pub const DEFAULT_FORMAT: &str = "wav";

/// 固定分块长度
pub const DEFAULT_CHUNK_LENGTH: u32 = 200;

/// 默认最大生成 token 数
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 1024;

/// TTS 合成请求
///
/// `normalize` / `streaming` / `chunk_length` 为固定值，不对外暴露修改入口。
/// `reference_id` 仅在调用方提供时才出现在序列化结果中。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesisRequest {
    text: String,
    format: String,
    normalize: bool,
    streaming: bool,
    chunk_length: u32,
    max_new_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_id: Option<String>,
}

impl SynthesisRequest {
    /// 使用默认参数创建请求
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: DEFAULT_FORMAT.to_string(),
            normalize: true,
            streaming: false,
            chunk_length: DEFAULT_CHUNK_LENGTH,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            reference_id: None,
        }
    }

    /// 指定输出格式（不做白名单校验，由服务端判断）
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// 指定参考音色，`None` 时使用服务端默认音色
    pub fn with_reference_id(mut self, reference_id: Option<String>) -> Self {
        self.reference_id = reference_id;
        self
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn normalize(&self) -> bool {
        self.normalize
    }

    pub fn streaming(&self) -> bool {
        self.streaming
    }

    pub fn chunk_length(&self) -> u32 {
        self.chunk_length
    }

    pub fn max_new_tokens(&self) -> u32 {
        self.max_new_tokens
    }

    pub fn reference_id(&self) -> Option<&str> {
        self.reference_id.as_deref()
    }
}
