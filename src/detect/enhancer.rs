//! Enhancer adapter: AI validation of detected components
//!
//! Faults never cross this boundary. A failed or timed-out model call
//! degrades to a `static_only` outcome carrying the failure text; the
//! pipeline treats that as a success and caches it normally.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;

use crate::detect::{AuthComponent, DetectionMethod};
use crate::error::EnhanceError;

/// Default Gemini API host
const GEMINI_HOST: &str = "https://generativelanguage.googleapis.com";

/// Model used for component validation
const GEMINI_MODEL: &str = "gemini-flash-latest";

/// Model API rate limit: 1 request per second
const RATE_LIMIT_PER_SECOND: u32 = 1;

/// Model call timeout
const MODEL_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of an enhancement attempt. Always well-formed: `method` is
/// `StaticEnhanced` on success, `StaticOnly` when the model call failed.
#[derive(Debug, Clone)]
pub struct Enhancement {
    pub analysis: String,
    pub method: DetectionMethod,
}

/// AI-enhancement collaborator.
#[async_trait]
pub trait Enhancer: Send + Sync {
    /// Validate already-detected components. Infallible by signature: any
    /// collaborator fault becomes data in the returned `Enhancement`.
    async fn enhance(&self, url: &str, components: &[AuthComponent]) -> Enhancement;
}

/// Gemini-backed enhancer.
pub struct GeminiEnhancer {
    http: HttpClient,
    host: String,
    api_key: Option<String>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl GeminiEnhancer {
    /// Create an enhancer against the production Gemini API.
    pub fn new(api_key: Option<String>) -> Result<Self, EnhanceError> {
        Self::with_host(api_key, None)
    }

    /// Create an enhancer with a custom API host (for testing).
    pub fn with_host(api_key: Option<String>, host: Option<String>) -> Result<Self, EnhanceError> {
        let http = HttpClient::builder()
            .timeout(MODEL_TIMEOUT)
            .build()
            .map_err(|e| EnhanceError::InvalidResponse(e.to_string()))?;

        let quota = Quota::per_second(NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            host: host
                .unwrap_or_else(|| GEMINI_HOST.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
            rate_limiter,
        })
    }

    fn validation_prompt(url: &str, components: &[AuthComponent]) -> String {
        let rendered = serde_json::to_string_pretty(components)
            .unwrap_or_else(|_| "[]".to_string());

        format!(
            "Analyze these detected auth components from {}:\n{}\n\n\
             Are these likely functional login forms? Rate confidence 1-10 and explain briefly.",
            url, rendered
        )
    }

    /// Raw model call. Faults are typed here and absorbed in `enhance`.
    async fn call_model(&self, prompt: &str) -> Result<String, EnhanceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(EnhanceError::MissingApiKey)?;

        self.rate_limiter.until_ready().await;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.host, GEMINI_MODEL
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(EnhanceError::from)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(EnhanceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        #[derive(Deserialize)]
        struct GenerateResponse {
            candidates: Vec<Candidate>,
        }

        #[derive(Deserialize)]
        struct Candidate {
            content: Content,
        }

        #[derive(Deserialize)]
        struct Content {
            parts: Vec<Part>,
        }

        #[derive(Deserialize)]
        struct Part {
            text: String,
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            EnhanceError::InvalidResponse(format!("Failed to parse model response: {}", e))
        })?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                EnhanceError::InvalidResponse("Model response contained no text".to_string())
            })?;

        Ok(text)
    }
}

#[async_trait]
impl Enhancer for GeminiEnhancer {
    async fn enhance(&self, url: &str, components: &[AuthComponent]) -> Enhancement {
        let prompt = Self::validation_prompt(url, components);

        match self.call_model(&prompt).await {
            Ok(analysis) => Enhancement {
                analysis,
                method: DetectionMethod::StaticEnhanced,
            },
            Err(e) => {
                log::warn!("Enhancement failed for {}, keeping static results: {}", url, e);
                Enhancement {
                    analysis: format!("Validation error: {}", e),
                    method: DetectionMethod::StaticOnly,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_form() -> AuthComponent {
        AuthComponent {
            kind: "login-form".to_string(),
            html: "<form>...</form>".to_string(),
            selector: None,
        }
    }

    #[test]
    fn test_prompt_includes_url_and_components() {
        let prompt =
            GeminiEnhancer::validation_prompt("http://example.com/login", &[login_form()]);

        assert!(prompt.contains("http://example.com/login"));
        assert!(prompt.contains("login-form"));
        assert!(prompt.contains("Rate confidence 1-10"));
    }

    #[tokio::test]
    async fn test_missing_api_key_degrades_to_static_only() {
        let enhancer = GeminiEnhancer::new(None).unwrap();

        let result = enhancer.enhance("http://example.com", &[login_form()]).await;

        assert_eq!(result.method, DetectionMethod::StaticOnly);
        assert!(result.analysis.starts_with("Validation error:"));
        assert!(!result.analysis.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_api_degrades_to_static_only() {
        let enhancer = GeminiEnhancer::with_host(
            Some("key".to_string()),
            Some("http://127.0.0.1:1".to_string()),
        )
        .unwrap();

        let result = enhancer.enhance("http://example.com", &[login_form()]).await;

        assert_eq!(result.method, DetectionMethod::StaticOnly);
        assert!(result.analysis.contains("Validation error:"));
    }
}
