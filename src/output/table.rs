//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::detect::AuthComponent;

/// One table row per detected component
#[derive(Tabled)]
struct ComponentRow {
    #[tabled(rename = "TYPE")]
    kind: String,
    #[tabled(rename = "SELECTOR")]
    selector: String,
    #[tabled(rename = "HTML")]
    html: String,
}

/// Truncation width for HTML snippets in table output
const HTML_PREVIEW_LEN: usize = 60;

/// Format detected components as a table
pub fn format_components(components: &[AuthComponent]) -> String {
    if components.is_empty() {
        return "No components found.".to_string();
    }

    let rows: Vec<ComponentRow> = components
        .iter()
        .map(|c| ComponentRow {
            kind: c.kind.clone(),
            selector: c.selector.clone().unwrap_or_else(|| "-".to_string()),
            html: preview(&c.html),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

fn preview(html: &str) -> String {
    let flat: String = html.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= HTML_PREVIEW_LEN {
        flat
    } else {
        let truncated: String = flat.chars().take(HTML_PREVIEW_LEN).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(kind: &str, html: &str) -> AuthComponent {
        AuthComponent {
            kind: kind.to_string(),
            html: html.to_string(),
            selector: Some("form#login".to_string()),
        }
    }

    #[test]
    fn test_empty_components() {
        assert_eq!(format_components(&[]), "No components found.");
    }

    #[test]
    fn test_single_component_row() {
        let result = format_components(&[component("login-form", "<form></form>")]);

        assert!(result.contains("TYPE"));
        assert!(result.contains("login-form"));
        assert!(result.contains("form#login"));
    }

    #[test]
    fn test_uses_rounded_style() {
        let result = format_components(&[component("sso-button", "<button/>")]);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_long_html_truncated() {
        let long_html = "<form>".repeat(50);
        let result = format_components(&[component("login-form", &long_html)]);

        assert!(result.contains("…"));
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("<form>\n  <input>\n</form>"), "<form> <input> </form>");
    }
}
