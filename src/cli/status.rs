//! Status command implementation

use colored::Colorize;

use crate::cache::CacheStorage;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(config_path: Option<&str>) -> Result<()> {
    println!("{}\n", "authprobe Configuration Status".bold());

    match Config::load_at(config_path) {
        Ok(config) => {
            let path = Config::resolve_path(config_path)?;
            println!("Config file: {}", path.display().to_string().cyan());
            println!();

            if let Some(ref url) = config.scanner_url {
                println!("{} Scan service: {}", "✓".green(), url);
            } else if std::env::var("AUTHPROBE_SCANNER_URL").is_ok() {
                println!("{} Scan service configured via environment", "✓".green());
            } else {
                println!("{} Scan service not configured", "✗".red());
                println!("  → Run 'authprobe init' to configure");
            }

            if config.resolve_gemini_api_key().is_some() {
                println!("{} Gemini API key configured", "✓".green());
            } else {
                println!(
                    "{} Gemini API key not configured (analyses fall back to static)",
                    "○".dimmed()
                );
            }
        }
        Err(_) => {
            if std::env::var("AUTHPROBE_SCANNER_URL").is_ok() {
                println!("{} Configuration via environment only", "○".dimmed());
            } else {
                println!("{} Configuration not found", "✗".red());
                println!();
                println!(
                    "Run {} to create a configuration file.",
                    "authprobe init".cyan()
                );
            }
        }
    }

    println!();
    if let Ok(cache_dir) = CacheStorage::cache_dir() {
        println!("Cache directory: {}", cache_dir.display().to_string().cyan());
    }

    Ok(())
}
