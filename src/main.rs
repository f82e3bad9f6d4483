use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // 解析命令行参数
    let cli = cli::Cli::parse();

    eprintln!(
        "{} {}",
        "Rust-SEO".bright_cyan(),
        env!("CARGO_PKG_VERSION").bright_green()
    );

    // 执行命令
    match cli::execute(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Error: {}", e);

            // 打印错误链
            for cause in e.chain().skip(1) {
                error!("Caused by: {}", cause);
            }

            std::process::exit(1);
        }
    }
}
