use std::path::PathBuf;
use std::process;

use clap::Parser;

mod cli;
mod config;
mod error;
mod feed;
mod models;
mod pipeline;

use cli::Cli;
use config::Config;
use error::Result;
use pipeline::Pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so `--stdout` output stays pure XML
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,fingerpori_rss=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    match run(config).await {
        Ok(path) => {
            tracing::info!("RSS feed generated successfully and saved to {}", path.display());
        }
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(1);
        }
    }
}

async fn run(config: Config) -> Result<PathBuf> {
    Pipeline::new(config)?.run().await
}
