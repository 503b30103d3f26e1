//! TtsClient - 对外入口
//!
//! 将 HTTP 引擎、文件存储与命令处理器组装在一起

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::{
    SynthesisError, SynthesisOutcome, Synthesize, SynthesizeHandler, SynthesizeToLibrary,
    SynthesizeToLibraryHandler, TtsError,
};
use crate::config::AppConfig;
use crate::infrastructure::adapters::{FileAudioStorage, HttpTtsClient, HttpTtsClientConfig};

/// TTS 客户端
///
/// ```no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use tts_client::{HttpTtsClientConfig, TtsClient};
///
/// let client = TtsClient::new(HttpTtsClientConfig::new("http://192.168.0.20:8080"), "data/audio")?;
/// client
///     .synthesize("(excited) Hello again from the default S1-mini voice.", "random_voice.wav", None, None)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TtsClient {
    synthesize: SynthesizeHandler,
    library: SynthesizeToLibraryHandler,
}

impl TtsClient {
    pub fn new(
        config: HttpTtsClientConfig,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, TtsError> {
        let tts_engine = Arc::new(HttpTtsClient::new(config)?);
        let storage = Arc::new(FileAudioStorage::new());

        Ok(Self {
            synthesize: SynthesizeHandler::new(tts_engine.clone(), storage.clone()),
            library: SynthesizeToLibraryHandler::new(tts_engine, storage, output_dir),
        })
    }

    /// 从应用配置创建
    pub fn from_config(config: &AppConfig) -> Result<Self, TtsError> {
        let mut http_config = HttpTtsClientConfig::new(config.server.base_url.clone());
        if let Some(secs) = config.server.timeout_secs {
            http_config = http_config.with_timeout(secs);
        }
        Self::new(http_config, config.output.dir.clone())
    }

    /// 合成 `text` 并把返回的音频原样写入 `output_path`
    ///
    /// - `reference_id` 为 `None` 时使用服务端默认音色
    /// - `format` 为 `None` 时为 `"wav"`
    ///
    /// 非 2xx 或网络错误时不会写文件
    pub async fn synthesize(
        &self,
        text: &str,
        output_path: impl AsRef<Path>,
        reference_id: Option<&str>,
        format: Option<&str>,
    ) -> Result<SynthesisOutcome, SynthesisError> {
        self.synthesize
            .handle(Synthesize {
                text: text.to_string(),
                output_path: output_path.as_ref().to_path_buf(),
                reference_id: reference_id.map(str::to_string),
                format: format.map(str::to_string),
            })
            .await
    }

    /// 合成到输出目录，文件名自动生成
    pub async fn synthesize_to_library(
        &self,
        command: SynthesizeToLibrary,
    ) -> Result<SynthesisOutcome, SynthesisError> {
        self.library.handle(command).await
    }
}
