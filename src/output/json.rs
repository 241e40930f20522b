//! JSON output formatting

use serde::Serialize;

use crate::error::Result;

/// Serialize data as pretty-printed JSON
pub fn format_json<T: Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{AnalysisResponse, DetectionMethod};

    #[test]
    fn test_json_carries_wire_shape() {
        let response = AnalysisResponse::assemble(
            "http://example.com",
            vec![],
            "No authentication components found on this page.".to_string(),
            DetectionMethod::NotFound,
            false,
            None,
        );

        let out = format_json(&response).unwrap();

        assert!(out.contains("\"url\": \"http://example.com\""));
        assert!(out.contains("\"found\": false"));
        assert!(out.contains("\"method\": \"not_found\""));
        assert!(out.contains("\"error\": null"));
    }
}
