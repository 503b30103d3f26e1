//! Domain Layer - 领域层
//!
//! - Synthesis Context: 语音合成请求

pub mod synthesis;
