//! Audio Storage Port - 出站端口
//!
//! 定义音频文件落盘的抽象接口

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AudioStorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Audio Storage Port - 出站端口
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 将音频数据完整写入 `path`，已存在的文件会被覆盖
    ///
    /// 不创建父目录
    async fn write_audio(&self, path: &Path, data: &[u8]) -> Result<(), AudioStorageError>;

    /// 确保目录存在
    async fn ensure_dir(&self, dir: &Path) -> Result<(), AudioStorageError>;
}
