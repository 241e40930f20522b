//! The detection orchestration pipeline
//!
//! Per request: derive key → cache lookup → (on miss) scan → CAPTCHA check →
//! static vs. enhanced branch → cache write with a policy-selected TTL.
//! `analyze` is infallible: every collaborator fault becomes a well-formed
//! response, never a raised error.

use crate::cache::{AnalysisCache, CacheTtl, analysis_key};
use crate::detect::{
    AnalysisResponse, DetectionMethod, Enhancer, PageScanner, captcha,
};

/// Fixed analysis string for the zero-component outcome
const NOT_FOUND_ANALYSIS: &str = "No authentication components found on this page.";

/// Detection orchestrator.
///
/// Holds the two collaborator adapters and the injected cache handle. No
/// cross-request state lives here; concurrent analyses only share the cache,
/// whose entries are always fully replaced, never updated in place.
pub struct Analyzer<S: PageScanner, E: Enhancer> {
    scanner: S,
    enhancer: E,
    cache: AnalysisCache,
}

impl<S: PageScanner, E: Enhancer> Analyzer<S, E> {
    pub fn new(scanner: S, enhancer: E, cache: AnalysisCache) -> Self {
        Self {
            scanner,
            enhancer,
            cache,
        }
    }

    /// Analyze a URL for authentication components.
    ///
    /// A cache hit returns the stored response without touching either
    /// collaborator. Scanner faults produce an uncached `method = "error"`
    /// response so the next identical request retries the page.
    pub async fn analyze(&self, url: &str, use_agents: bool) -> AnalysisResponse {
        let key = analysis_key(url, use_agents);

        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let scan = match self.scanner.scan(url).await {
            Ok(scan) => scan,
            Err(e) => {
                log::error!("Scan failed for {}: {}", url, e);
                return AnalysisResponse::assemble(
                    url,
                    vec![],
                    String::new(),
                    DetectionMethod::Error,
                    false,
                    Some(e.to_string()),
                );
            }
        };

        // CAPTCHA walls short-circuit before any enhancement and are cached
        // with the short TTL: bot-protection state changes faster than pages do.
        if captcha::is_blocked(&scan) {
            let response = AnalysisResponse::assemble(
                url,
                vec![],
                scan.ai_analysis,
                DetectionMethod::CaptchaBlocked,
                true,
                None,
            );
            self.cache.put(&key, &response, CacheTtl::CAPTCHA_BLOCKED);
            return response;
        }

        for (i, component) in scan.components.iter().enumerate() {
            log::debug!("Component {}: HTML length = {}", i + 1, component.html.len());
        }

        let response = if !use_agents {
            AnalysisResponse::assemble(
                url,
                scan.components,
                scan.ai_analysis,
                DetectionMethod::Static,
                false,
                scan.error,
            )
        } else if scan.components.is_empty() {
            // Nothing to validate, so the model is never consulted
            AnalysisResponse::assemble(
                url,
                vec![],
                NOT_FOUND_ANALYSIS.to_string(),
                DetectionMethod::NotFound,
                false,
                None,
            )
        } else {
            let enhancement = self.enhancer.enhance(url, &scan.components).await;
            AnalysisResponse::assemble(
                url,
                scan.components,
                enhancement.analysis,
                enhancement.method,
                false,
                None,
            )
        };

        self.cache.put(&key, &response, CacheTtl::ANALYSIS);
        response
    }
}
