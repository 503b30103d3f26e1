//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 不实际调用 TTS 服务，始终返回固定的音频字节（或固定的错误），
//! 并记录收到的每个请求

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{TtsEnginePort, TtsError};
use crate::domain::synthesis::SynthesisRequest;

#[derive(Debug, Clone)]
enum FakeReply {
    Audio(Vec<u8>),
    Status { status: u16, body: String },
}

/// Fake TTS Client
pub struct FakeTtsClient {
    reply: FakeReply,
    requests: Mutex<Vec<SynthesisRequest>>,
}

impl FakeTtsClient {
    /// 始终返回 `audio_data`
    pub fn new(audio_data: Vec<u8>) -> Self {
        Self {
            reply: FakeReply::Audio(audio_data),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 始终返回指定 HTTP 状态码
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self {
            reply: FakeReply::Status {
                status,
                body: body.into(),
            },
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的请求
    pub fn requests(&self) -> Vec<SynthesisRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, TtsError> {
        tracing::debug!(
            text_len = request.text().len(),
            reference_id = ?request.reference_id(),
            "FakeTtsClient: returning fixed reply"
        );

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match &self.reply {
            FakeReply::Audio(data) => Ok(data.clone()),
            FakeReply::Status { status, body } => Err(TtsError::HttpStatus {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
