use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use webservice::{ConfigOverrides, ServiceConfig, start_server};

/// Minimal HTTP service exposing a `/health` liveness endpoint.
#[derive(Parser, Debug)]
#[command(name = "webservice")]
#[command(version, about)]
struct Args {
    /// Address to bind the HTTP server (default 127.0.0.1:8000).
    /// Overrides the config file.
    #[arg(long)]
    bind_addr: Option<SocketAddr>,

    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (default "info").
    /// Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to a daily rolling file in the user cache directory instead of stderr.
    #[arg(long)]
    log_to_file: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bind_addr: self.bind_addr,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ServiceConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(args.overrides());

    let target = example_common::init_logging("webservice", &config.log_level, args.log_to_file);
    tracing::debug!(?target, ?config, "Configuration resolved");

    start_server(&config).await?;
    Ok(())
}
