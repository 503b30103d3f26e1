//! TTS Engine Port - TTS 合成引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::synthesis::SynthesisRequest;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    /// 连接失败、超时、响应体读取失败
    #[error("Transport error: {0}")]
    Transport(String),

    /// 服务端返回非 2xx
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

/// TTS Engine Port
///
/// 外部 TTS 服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行一次非流式合成
    ///
    /// 返回完整缓冲后的原始音频字节
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, TtsError>;
}
