//! Local cache for analysis results
//!
//! SQLite-backed storage with per-entry expiry. A cached analysis lets a
//! repeat request for the same (url, use_agents) pair skip the page load and
//! the model call entirely.

pub mod key;
pub mod storage;
pub mod store;

use std::time::Duration;

/// Cache TTL policy per outcome class.
///
/// Normal outcomes are stable for about a day. CAPTCHA-blocked outcomes use
/// a shorter TTL since bot-protection state is volatile and worth re-checking
/// sooner. Scanner-fault outcomes are never cached at all, so retries hit the
/// page again immediately.
pub struct CacheTtl;

impl CacheTtl {
    /// Normal analysis outcomes (static, static_enhanced, static_only, not_found)
    pub const ANALYSIS: Duration = Duration::from_secs(24 * 60 * 60); // 24 hr

    /// CAPTCHA-blocked outcomes
    pub const CAPTCHA_BLOCKED: Duration = Duration::from_secs(60 * 60); // 1 hr
}

// Re-export main types
pub use key::analysis_key;
pub use storage::CacheStorage;
pub use store::AnalysisCache;
