//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（tts-client.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["tts-client", "tts-client.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "TTS_CLIENT";

/// 加载应用配置
///
/// # 环境变量示例
/// - `TTS_CLIENT_SERVER__BASE_URL=http://192.168.0.20:8080`
/// - `TTS_CLIENT_SERVER__TIMEOUT_SECS=300`
/// - `TTS_CLIENT_OUTPUT__DIR=public/mp3`
/// - `TTS_CLIENT_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.base_url", "http://localhost:8080")?
        .set_default("output.dir", "data/audio")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: TTS_CLIENT_SERVER__BASE_URL=http://tts-server:8080
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let base_url = config.server.base_url.trim();
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "TTS base URL must start with http:// or https://, got {}",
            base_url
        )));
    }

    if config.server.timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "Timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Configuration ===");
    tracing::debug!("TTS Endpoint: {}", config.server.tts_endpoint());
    match config.server.timeout_secs {
        Some(secs) => tracing::debug!("TTS Timeout: {}s", secs),
        None => tracing::debug!("TTS Timeout: transport default"),
    }
    tracing::debug!("Output Directory: {:?}", config.output.dir);
    tracing::debug!("Log Level: {}", config.log.level);
    tracing::debug!("=====================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = AppConfig::default();
        config.server.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_missing_scheme() {
        let mut config = AppConfig::default();
        config.server.base_url = "192.168.0.20:8080".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.server.timeout_secs = Some(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("tts-client.toml");
        std::fs::write(
            &path,
            r#"
[server]
base_url = "http://192.168.0.20:8080"
timeout_secs = 300

[output]
dir = "public/mp3"
"#,
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.server.base_url, "http://192.168.0.20:8080");
        assert_eq!(config.server.timeout_secs, Some(300));
        assert_eq!(config.output.dir, PathBuf::from("public/mp3"));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("absent.toml");
        assert!(load_config_from_path(Some(&path)).is_err());
    }

    #[test]
    fn test_load_invalid_file_fails_validation() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "[server]\nbase_url = \"ftp://host\"\n").unwrap();

        assert!(matches!(
            load_config_from_path(Some(&path)),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
