//! CAPTCHA / bot-protection detection policy
//!
//! The recognized vocabulary is an explicit const slice so the policy can be
//! audited and tested apart from the rest of the pipeline.

use crate::detect::PageScan;

/// Phrases in a scan's analysis text that indicate bot protection.
/// Matched case-insensitively as substrings.
pub const TRIGGERS: &[&str] = &["captcha", "bot protection"];

/// Whether a scan ran into a CAPTCHA or bot-protection wall.
///
/// True when the scanner flagged it directly, or when the analysis text
/// contains any trigger phrase.
pub fn is_blocked(scan: &PageScan) -> bool {
    if scan.captcha_detected {
        return true;
    }

    let analysis = scan.ai_analysis.to_lowercase();
    TRIGGERS.iter().any(|phrase| analysis.contains(phrase))
}
