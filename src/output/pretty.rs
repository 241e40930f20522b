//! Human-oriented pretty output

use colored::Colorize;

use crate::detect::{AnalysisResponse, DetectionMethod};
use crate::output::table;

/// Render an analysis for interactive terminals
pub fn format_analysis(response: &AnalysisResponse) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", response.url.bold()));

    let verdict = match response.method {
        DetectionMethod::Static => format!(
            "{} {} component(s) detected (static scan)",
            "✓".green(),
            response.components.len()
        ),
        DetectionMethod::StaticEnhanced => format!(
            "{} {} component(s) detected, AI-validated",
            "✓".green(),
            response.components.len()
        ),
        DetectionMethod::StaticOnly => format!(
            "{} {} component(s) detected (AI validation unavailable)",
            "⚠".yellow(),
            response.components.len()
        ),
        DetectionMethod::NotFound => format!("{} No authentication components found", "○".dimmed()),
        DetectionMethod::CaptchaBlocked => {
            format!("{} Page is behind CAPTCHA / bot protection", "⚠".yellow())
        }
        DetectionMethod::Error => format!("{} Scan failed", "✗".red()),
    };
    out.push_str(&verdict);
    out.push('\n');

    if !response.components.is_empty() {
        out.push('\n');
        out.push_str(&table::format_components(&response.components));
        out.push('\n');
    }

    if !response.ai_analysis.is_empty() {
        out.push('\n');
        out.push_str(&format!("{}\n", "Analysis".bold()));
        out.push_str(&response.ai_analysis);
        out.push('\n');
    }

    if let Some(ref error) = response.error {
        out.push('\n');
        out.push_str(&format!("{} {}\n", "Error:".red().bold(), error));
    }

    out
}
