//! tts-client - 远端 TTS 服务客户端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Synthesis Context: 合成请求、token 估算
//!
//! 应用层 (application/):
//! - Ports: TtsEngine, AudioStorage
//! - Commands: Synthesize, SynthesizeToLibrary
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP TTS Client, Fake TTS Client, File Storage

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{SynthesisError, SynthesisOutcome, SynthesizeToLibrary};
pub use client::TtsClient;
pub use config::{load_config, AppConfig};
pub use domain::synthesis::SynthesisRequest;
pub use infrastructure::adapters::HttpTtsClientConfig;
