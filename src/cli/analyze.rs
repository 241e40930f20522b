//! Analyze command implementation

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cache::AnalysisCache;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::detect::{Analyzer, GeminiEnhancer, HttpScanner};
use crate::error::Result;
use crate::output;

/// Run the analyze command
pub async fn run(
    url: &str,
    static_only: bool,
    format: OutputFormat,
    config_path: Option<&str>,
    no_cache: bool,
) -> Result<()> {
    // A missing config file is fine as long as the environment fills the gaps
    let config = Config::load_at(config_path).unwrap_or_default();

    let scanner_url = config.resolve_scanner_url()?;
    let scan_timeout = Duration::from_secs(config.preferences.scan_timeout_secs);

    let scanner = HttpScanner::new(&scanner_url, scan_timeout)
        .map_err(|e| crate::error::Error::Other(e.to_string()))?;

    let gemini_host = std::env::var("AUTHPROBE_GEMINI_HOST").ok();
    let enhancer = GeminiEnhancer::with_host(config.resolve_gemini_api_key(), gemini_host)
        .map_err(|e| crate::error::Error::Other(e.to_string()))?;

    let cache = AnalysisCache::open(!no_cache);
    let analyzer = Analyzer::new(scanner, enhancer, cache);

    let spinner = scan_spinner(url);
    let response = analyzer.analyze(url, !static_only).await;
    spinner.finish_and_clear();

    output::print(&response, format)
}

fn scan_spinner(url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Analyzing {}...", url));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
