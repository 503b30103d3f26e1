//! 自动命名模式下的输出格式
//!
//! 格式同时作为生成文件的扩展名，只允许固定几种

/// 允许的输出格式
pub const LIBRARY_FORMATS: &[&str] = &["wav", "pcm", "mp3", "opus"];

/// 未指定或不在允许列表中时使用的格式
pub const LIBRARY_FALLBACK_FORMAT: &str = "mp3";

/// 归一化输出格式，未知格式回退为 mp3
pub fn normalize_format(raw: Option<&str>) -> &'static str {
    raw.and_then(|raw| LIBRARY_FORMATS.iter().copied().find(|f| *f == raw))
        .unwrap_or(LIBRARY_FALLBACK_FORMAT)
}
