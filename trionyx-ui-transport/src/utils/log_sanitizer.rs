//! Log sanitization utilities
//!
//! Response bodies are HTML fragments that can be large, and request headers
//! carry session material. Neither is logged in full.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters kept when redacting a secret.
const REDACT_KEEP: usize = 4;

/// Largest char boundary not above `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0)
}

/// Truncate a response body for logging.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    format!(
        "{}... [truncated, total {} bytes]",
        &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
        s.len()
    )
}

/// Mask a token or cookie value, keeping only a short prefix.
pub fn redact(secret: &str) -> String {
    if secret.chars().count() <= REDACT_KEEP * 2 {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(REDACT_KEEP).collect();
    format!("{prefix}***")
}
