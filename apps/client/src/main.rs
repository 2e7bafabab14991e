use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use client::cli::{run, Args};
use client::config::Config;
use client::state::AppState;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = Config::from_env()?.with_base_url(args.base_url)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Using backend {}", config.api_base_url);
    let state = AppState::from_config(config)?;

    match run(&state, args.command).await {
        Ok(alert) => {
            print!("{}", alert.message);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.alert().message);
            Ok(ExitCode::FAILURE)
        }
    }
}
