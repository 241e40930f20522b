//! Authentication-component detection
//!
//! The pipeline in [`pipeline`] orchestrates two collaborators behind trait
//! seams: a page scanner ([`scanner::PageScanner`]) that extracts candidate
//! auth components from a live page, and an enhancer ([`enhancer::Enhancer`])
//! that scores them with an AI model. Results are memoized through
//! [`crate::cache::AnalysisCache`].

use serde::{Deserialize, Serialize};

pub mod captcha;
pub mod enhancer;
pub mod pipeline;
pub mod scanner;

#[cfg(test)]
pub mod mock;

pub use enhancer::{Enhancement, Enhancer, GeminiEnhancer};
pub use pipeline::Analyzer;
pub use scanner::{HttpScanner, PageScanner};

/// One discovered authentication UI element.
///
/// Immutable once produced by the scanner; the pipeline only reads and
/// forwards it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthComponent {
    /// Component type tag, e.g. "login-form" or "sso-button"
    #[serde(rename = "type")]
    pub kind: String,

    /// Raw markup snippet of the element
    pub html: String,

    /// Selector path assigned by the scanner (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// Raw result of a page scan, before the pipeline classifies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageScan {
    /// Scanned URL
    pub url: String,

    /// Detected components, in document order (empty allowed)
    #[serde(default)]
    pub components: Vec<AuthComponent>,

    /// Natural-language analysis produced during the scan
    #[serde(default)]
    pub ai_analysis: String,

    /// Whether the scanner itself flagged bot protection
    #[serde(default)]
    pub captcha_detected: bool,

    /// Scanner-reported error text, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// How an analysis outcome was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Scan results returned as-is, no AI enhancement requested
    Static,
    /// Scan results validated and narrated by the model
    StaticEnhanced,
    /// Enhancement was requested but the model call failed; scan results kept
    StaticOnly,
    /// Scan found no components; the model was never consulted
    NotFound,
    /// The page is behind a CAPTCHA or bot-protection wall
    CaptchaBlocked,
    /// The scan itself failed
    Error,
}

impl DetectionMethod {
    /// Wire-format name, as serialized in JSON output and the cache.
    #[allow(dead_code)]
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::Static => "static",
            DetectionMethod::StaticEnhanced => "static_enhanced",
            DetectionMethod::StaticOnly => "static_only",
            DetectionMethod::NotFound => "not_found",
            DetectionMethod::CaptchaBlocked => "captcha_blocked",
            DetectionMethod::Error => "error",
        }
    }
}

/// Final analysis payload, as returned to the caller and written to the cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Analyzed URL
    pub url: String,

    /// Whether any components were found. Derived: always equals
    /// `!components.is_empty()`.
    pub found: bool,

    /// Detected components
    pub components: Vec<AuthComponent>,

    /// Analysis narrative (from the scanner or the model)
    pub ai_analysis: String,

    /// Outcome classification
    pub method: DetectionMethod,

    /// Whether bot protection was detected
    pub captcha_detected: bool,

    /// Fault description for `method = "error"` outcomes
    pub error: Option<String>,
}

impl AnalysisResponse {
    /// Assemble a response. `found` is computed from the component list and
    /// cannot be set independently.
    pub fn assemble(
        url: &str,
        components: Vec<AuthComponent>,
        ai_analysis: String,
        method: DetectionMethod,
        captcha_detected: bool,
        error: Option<String>,
    ) -> Self {
        Self {
            url: url.to_string(),
            found: !components.is_empty(),
            components,
            ai_analysis,
            method,
            captcha_detected,
            error,
        }
    }
}
