//! Synthesize Command Handlers

use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{Synthesize, SynthesizeToLibrary};
use crate::application::error::SynthesisError;
use crate::application::ports::{AudioStoragePort, TtsEnginePort};
use crate::domain::synthesis::{
    clamp_max_tokens, estimate_max_tokens, normalize_format, SynthesisRequest, DEFAULT_FORMAT,
};

/// 日志中文本预览的最大字符数
const TEXT_PREVIEW_CHARS: usize = 120;

/// 合成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOutcome {
    /// 音频文件路径
    pub path: PathBuf,
    /// 写入的字节数
    pub size: usize,
    pub format: String,
    pub max_new_tokens: u32,
}

impl SynthesisOutcome {
    /// 文件名部分
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }
}

/// 折叠空白并截断，仅用于日志
fn text_preview(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(TEXT_PREVIEW_CHARS)
        .collect()
}

// ============================================================================
// Synthesize
// ============================================================================

/// Synthesize Handler
///
/// 请求 → 状态检查 → 整体写入。失败时不会产生输出文件
pub struct SynthesizeHandler {
    tts_engine: Arc<dyn TtsEnginePort>,
    storage: Arc<dyn AudioStoragePort>,
}

impl SynthesizeHandler {
    pub fn new(tts_engine: Arc<dyn TtsEnginePort>, storage: Arc<dyn AudioStoragePort>) -> Self {
        Self {
            tts_engine,
            storage,
        }
    }

    pub async fn handle(&self, command: Synthesize) -> Result<SynthesisOutcome, SynthesisError> {
        let request = SynthesisRequest::new(command.text)
            .with_format(command.format.unwrap_or_else(|| DEFAULT_FORMAT.to_string()))
            .with_reference_id(command.reference_id);

        let audio = request_audio(self.tts_engine.as_ref(), &request).await?;
        persist_audio(self.storage.as_ref(), &request, command.output_path, audio).await
    }
}

// ============================================================================
// SynthesizeToLibrary
// ============================================================================

/// SynthesizeToLibrary Handler
///
/// 输出到固定目录，文件名形如 `tts_{毫秒时间戳}_{6位随机串}.{format}`
///
/// 格式限定为 wav/pcm/mp3/opus，其他值回退为 mp3
pub struct SynthesizeToLibraryHandler {
    tts_engine: Arc<dyn TtsEnginePort>,
    storage: Arc<dyn AudioStoragePort>,
    output_dir: PathBuf,
}

impl SynthesizeToLibraryHandler {
    pub fn new(
        tts_engine: Arc<dyn TtsEnginePort>,
        storage: Arc<dyn AudioStoragePort>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tts_engine,
            storage,
            output_dir: output_dir.into(),
        }
    }

    pub async fn handle(
        &self,
        command: SynthesizeToLibrary,
    ) -> Result<SynthesisOutcome, SynthesisError> {
        if command.text.trim().is_empty() {
            return Err(SynthesisError::validation(
                "Text is required to synthesize TTS audio",
            ));
        }

        let format = normalize_format(command.format.as_deref());
        let max_new_tokens =
            clamp_max_tokens(command.max_new_tokens, estimate_max_tokens(&command.text));
        let reference_id = command.reference_id.filter(|id| !id.is_empty());

        let request = SynthesisRequest::new(command.text)
            .with_format(format)
            .with_reference_id(reference_id)
            .with_max_new_tokens(max_new_tokens);

        let audio = request_audio(self.tts_engine.as_ref(), &request).await?;

        // 仅在合成成功后创建输出目录
        self.storage.ensure_dir(&self.output_dir).await?;
        let path = self.output_dir.join(generate_file_name(format));

        persist_audio(self.storage.as_ref(), &request, path, audio).await
    }
}

fn generate_file_name(format: &str) -> String {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(6).collect();
    format!("tts_{}_{}.{}", Utc::now().timestamp_millis(), suffix, format)
}

async fn request_audio(
    tts_engine: &dyn TtsEnginePort,
    request: &SynthesisRequest,
) -> Result<Vec<u8>, SynthesisError> {
    tracing::info!(
        reference_id = ?request.reference_id(),
        text_len = request.text().len(),
        text_preview = %text_preview(request.text()),
        max_new_tokens = request.max_new_tokens(),
        format = %request.format(),
        "Submitting TTS request"
    );

    tts_engine.synthesize(request).await.map_err(|e| {
        tracing::error!(
            reference_id = ?request.reference_id(),
            format = %request.format(),
            error = %e,
            "TTS request failed"
        );
        SynthesisError::from(e)
    })
}

async fn persist_audio(
    storage: &dyn AudioStoragePort,
    request: &SynthesisRequest,
    path: PathBuf,
    audio: Vec<u8>,
) -> Result<SynthesisOutcome, SynthesisError> {
    storage.write_audio(&path, &audio).await?;

    tracing::info!(
        path = %path.display(),
        size = audio.len(),
        format = %request.format(),
        "TTS audio written"
    );

    Ok(SynthesisOutcome {
        path,
        size: audio.len(),
        format: request.format().to_string(),
        max_new_tokens: request.max_new_tokens(),
    })
}
