//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod analyze;
pub mod cache;
pub mod init;
pub mod status;

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (default)
    #[default]
    Pretty,
    /// Table format - one row per detected component
    Table,
    /// JSON format - the full analysis payload, stable for scripts
    Json,
}

/// Detect authentication UI components on web pages
#[derive(Parser, Debug)]
#[command(name = "authprobe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "AUTHPROBE_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "AUTHPROBE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "AUTHPROBE_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, analyze the page fresh
    #[arg(long, global = true, env = "AUTHPROBE_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a URL for authentication components
    #[command(after_help = "EXAMPLES:\n  \
        authprobe analyze https://example.com/login\n  \
        authprobe analyze https://example.com --static-only\n  \
        authprobe analyze https://example.com --format json | jq .components")]
    Analyze {
        /// URL to analyze
        url: String,

        /// Skip AI enhancement, return static scan results only
        #[arg(long)]
        static_only: bool,
    },

    /// Initialize authprobe configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Manage the local analysis cache
    #[command(subcommand)]
    Cache(CacheCommands),
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status,
    /// Clear all cached analyses
    Clear,
    /// Print cache directory path
    Path,
}
