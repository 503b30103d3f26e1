//! 应用层 - 命令
//!
//! 合成用例的命令定义及处理器

mod synthesize_commands;

pub mod handlers;

pub use synthesize_commands::*;
