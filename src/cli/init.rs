//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for the scan service endpoint and the Gemini API key and writes
/// them to the config file. Both can also be supplied via environment
/// variables (AUTHPROBE_SCANNER_URL, GEMINI_API_KEY) without running init.
pub async fn run(config_path: Option<&str>) -> Result<()> {
    println!("{}", "Welcome to authprobe!".bold().green());
    println!("Let's set up your configuration.\n");

    let scanner_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Scan service endpoint")
        .default("http://localhost:8700".to_string())
        .interact_text()?;

    let gemini_api_key: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Gemini API key (leave empty to skip AI enhancement)")
        .allow_empty_password(true)
        .interact()?;

    let mut config = Config::load_at(config_path).unwrap_or_default();
    config.scanner_url = Some(scanner_url);
    config.gemini_api_key = if gemini_api_key.is_empty() {
        None
    } else {
        Some(gemini_api_key)
    };

    config.save_at(config_path)?;

    let path = Config::resolve_path(config_path)?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );

    if config.gemini_api_key.is_none() {
        println!(
            "{} No API key configured; analyses will fall back to static results.",
            "⚠".yellow()
        );
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!(
        "  {} - Analyze a page",
        "authprobe analyze https://example.com/login".cyan()
    );
    println!("  {} - Show configuration status", "authprobe status".cyan());

    Ok(())
}
