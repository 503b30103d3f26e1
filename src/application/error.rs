//! 应用层错误定义
//!
//! 合成用例对外暴露的统一错误类型

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::{AudioStorageError, TtsError};

/// 合成错误
///
/// 所有错误都直接返回给调用方，不做重试或降级
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// 网络不可达、连接被拒绝、超时
    #[error("Transport error: {0}")]
    Transport(String),

    /// 服务端拒绝或处理失败
    #[error("TTS service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// 本地写文件失败（此时网络请求已完成）
    #[error("Failed to write audio to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 输入校验失败
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SynthesisError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// 非 2xx 时返回状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TtsError> for SynthesisError {
    fn from(err: TtsError) -> Self {
        match err {
            TtsError::Transport(message) => Self::Transport(message),
            TtsError::HttpStatus { status, body } => Self::HttpStatus { status, body },
        }
    }
}

impl From<AudioStorageError> for SynthesisError {
    fn from(err: AudioStorageError) -> Self {
        match err {
            AudioStorageError::Io { path, source } => Self::Io { path, source },
        }
    }
}
