//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、AudioStorage）
//! - commands: 合成命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

pub use commands::{
    handlers::{SynthesisOutcome, SynthesizeHandler, SynthesizeToLibraryHandler},
    Synthesize, SynthesizeToLibrary,
};

pub use error::SynthesisError;

pub use ports::{AudioStorageError, AudioStoragePort, TtsEnginePort, TtsError};
