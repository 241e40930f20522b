//! authprobe - detect authentication UI components on web pages

use clap::Parser;

mod cache;
mod cli;
mod config;
mod detect;
mod error;
mod output;

use cli::{CacheCommands, Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze { url, static_only } => {
            cli::analyze::run(
                &url,
                static_only,
                cli.format,
                cli.config.as_deref(),
                cli.no_cache,
            )
            .await
        }
        Commands::Init => cli::init::run(cli.config.as_deref()).await,
        Commands::Status => cli::status::run(cli.config.as_deref()),
        Commands::Version => {
            println!("authprobe version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Status => cli::cache::status(cli.format),
            CacheCommands::Clear => cli::cache::clear(cli.format),
            CacheCommands::Path => cli::cache::path(),
        },
    }
}
