//! Dataset fingerprinting.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 fingerprint of raw dataset content.
///
/// Logged at startup and surfaced through `/health` so deployments can tell
/// which counters dataset a server is running with.
pub fn calculate_fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_consistency() {
        let content = r#"[{"_id": "x"}]"#;
        assert_eq!(calculate_fingerprint(content), calculate_fingerprint(content));
    }

    #[test]
    fn test_different_content_different_fingerprint() {
        assert_ne!(calculate_fingerprint("[]"), calculate_fingerprint("[1]"));
    }

    #[test]
    fn test_fingerprint_is_hex_sha256() {
        let fingerprint = calculate_fingerprint("");
        assert_eq!(fingerprint.len(), 64);
        assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
