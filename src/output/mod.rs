//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod pretty;
pub mod table;

use crate::detect::AnalysisResponse;

/// Render an analysis response in the requested format
pub fn render(response: &AnalysisResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(response),
        OutputFormat::Table => Ok(table::format_components(&response.components)),
        OutputFormat::Pretty => Ok(pretty::format_analysis(response)),
    }
}

/// Format and print an analysis response to stdout
pub fn print(response: &AnalysisResponse, format: OutputFormat) -> Result<()> {
    println!("{}", render(response, format)?);
    Ok(())
}
