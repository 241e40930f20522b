//! Cache key derivation using SHA-256 hashes

use sha2::{Digest, Sha256};

/// Derive a deterministic cache key from a target URL and the enhancement flag.
///
/// The key is a SHA-256 hash of `url || ":" || use_agents`. Static-only and
/// agent-enhanced analyses of the same URL hash to different keys, so the two
/// result classes are cached independently.
pub fn analysis_key(url: &str, use_agents: bool) -> String {
    let mut hasher = Sha256::new();

    hasher.update(url.as_bytes());
    hasher.update(b":");
    hasher.update(if use_agents { b"true" as &[u8] } else { b"false" });

    // Return hex-encoded hash
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_deterministic() {
        let key1 = analysis_key("http://example.com/login", true);
        let key2 = analysis_key("http://example.com/login", true);

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_key_differs_by_url() {
        let key1 = analysis_key("http://example.com/login", true);
        let key2 = analysis_key("http://example.com/signup", true);

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_key_differs_by_enhancement_flag() {
        let key1 = analysis_key("http://example.com/login", true);
        let key2 = analysis_key("http://example.com/login", false);

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_key_is_fixed_width_hex() {
        let key = analysis_key("http://example.com", false);

        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
