//! HTTP TTS Client - 调用外部 TTS HTTP 服务
//!
//! 实现 TtsEnginePort trait
//!
//! 外部 TTS API:
//! POST {base_url}/v1/tts
//! Request: {"text": "...", "format": "wav", "normalize": true, "streaming": false,
//!           "chunk_length": 200, "max_new_tokens": 1024, "reference_id": "..."}  (JSON)
//! Response: 原始音频字节

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{TtsEnginePort, TtsError};
use crate::domain::synthesis::SynthesisRequest;

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒），`None` 使用 HTTP 客户端默认行为
    pub timeout_secs: Option<u64>,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: None,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// HTTP TTS 客户端
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| TtsError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn tts_url(&self) -> String {
        format!("{}/v1/tts", self.config.base_url.trim_end_matches('/'))
    }
}

fn transport_error(e: reqwest::Error) -> TtsError {
    if e.is_timeout() {
        TtsError::Transport(format!("Request to TTS service timed out: {}", e))
    } else if e.is_connect() {
        TtsError::Transport(format!("Cannot connect to TTS service: {}", e))
    } else {
        TtsError::Transport(e.to_string())
    }
}

#[async_trait]
impl TtsEnginePort for HttpTtsClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, TtsError> {
        let url = self.tts_url();

        tracing::debug!(
            url = %url,
            text_len = request.text().len(),
            reference_id = ?request.reference_id(),
            format = %request.format(),
            "Sending TTS request"
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let err = transport_error(e);
                tracing::warn!(url = %url, error = %err, "TTS request not delivered");
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                body = %body,
                "TTS service rejected request"
            );
            return Err(TtsError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        // 完整缓冲响应体后再交给调用方
        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::Transport(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            status = status.as_u16(),
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
