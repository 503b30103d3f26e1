//! Synthesize Commands

use std::path::PathBuf;

/// 合成并写入指定路径
#[derive(Debug, Clone)]
pub struct Synthesize {
    pub text: String,
    pub output_path: PathBuf,
    /// 参考音色 ID，`None` 时使用服务端默认音色
    pub reference_id: Option<String>,
    /// 输出格式，`None` 时为 wav
    pub format: Option<String>,
}

impl Synthesize {
    pub fn new(text: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            output_path: output_path.into(),
            reference_id: None,
            format: None,
        }
    }

    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// 合成并写入输出目录，文件名自动生成
#[derive(Debug, Clone)]
pub struct SynthesizeToLibrary {
    pub text: String,
    pub reference_id: Option<String>,
    /// 未指定或非正数时按文本长度估算
    pub max_new_tokens: Option<i64>,
    pub format: Option<String>,
}

impl SynthesizeToLibrary {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference_id: None,
            max_new_tokens: None,
            format: None,
        }
    }
}
