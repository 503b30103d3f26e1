//! tts-client - 远端 TTS 服务命令行客户端
//!
//! - `say`: 合成并写入指定文件
//! - `render`: 合成并写入输出目录（自动命名）

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tts_client::config::{load_config, load_config_from_path, print_config, validate_config};
use tts_client::{SynthesizeToLibrary, TtsClient};

#[derive(Parser, Debug)]
#[command(name = "tts-client")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Send text to a remote TTS service and save the audio")]
struct Args {
    /// Configuration file (defaults to ./tts-client.toml if present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// TTS service base URL, overrides the configuration
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize text into the given file
    Say {
        /// Text to speak
        text: String,

        /// Output audio file, overwritten if it exists
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,

        /// Voice reference ID, server default voice when omitted
        #[arg(long, value_name = "ID")]
        reference_id: Option<String>,

        /// Output audio format
        #[arg(long, default_value = "wav")]
        format: String,
    },

    /// Synthesize text into the output directory with a generated file name
    Render {
        /// Text to speak
        text: String,

        /// Voice reference ID, server default voice when omitted
        #[arg(long, value_name = "ID")]
        reference_id: Option<String>,

        /// Token budget, estimated from text length when omitted
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        max_new_tokens: Option<i64>,

        /// Output audio format: wav, pcm, mp3 or opus (others fall back to mp3)
        #[arg(long, default_value = "mp3")]
        format: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let mut config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Some(path)),
        None => load_config(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    if let Some(base_url) = args.base_url {
        config.server.base_url = base_url;
        validate_config(&config)?;
    }

    // 初始化日志
    let log_filter = format!("warn,tts_client={}", config.log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    print_config(&config);

    let client = TtsClient::from_config(&config)?;

    let outcome = match args.command {
        Command::Say {
            text,
            output,
            reference_id,
            format,
        } => {
            client
                .synthesize(&text, &output, reference_id.as_deref(), Some(format.as_str()))
                .await?
        }
        Command::Render {
            text,
            reference_id,
            max_new_tokens,
            format,
        } => {
            client
                .synthesize_to_library(SynthesizeToLibrary {
                    text,
                    reference_id,
                    max_new_tokens,
                    format: Some(format),
                })
                .await?
        }
    };

    println!("{} ({} bytes)", outcome.path.display(), outcome.size);

    Ok(())
}
