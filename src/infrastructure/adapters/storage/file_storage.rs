//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use crate::application::ports::{AudioStorageError, AudioStoragePort};

/// 文件系统音频存储
///
/// 直接写目标路径（截断覆盖），不走临时文件
#[derive(Debug, Clone, Default)]
pub struct FileAudioStorage;

impl FileAudioStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    async fn write_audio(&self, path: &Path, data: &[u8]) -> Result<(), AudioStorageError> {
        fs::write(path, data)
            .await
            .map_err(|e| AudioStorageError::io(path, e))?;

        tracing::debug!(
            path = %path.display(),
            size = data.len(),
            "Saved audio"
        );

        Ok(())
    }

    async fn ensure_dir(&self, dir: &Path) -> Result<(), AudioStorageError> {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| AudioStorageError::io(dir, e))
    }
}
