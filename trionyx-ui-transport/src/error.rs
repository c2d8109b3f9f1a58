use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for every request issued against a dialog or panel endpoint.
///
/// Each variant carries the URL of the failed request. All variants are serializable
/// so a host can forward them to its own error reporting.
///
/// Nothing in this enum is retried automatically: a failed request leaves the overlay
/// in its last good state and the user decides whether to submit again.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum TransportError {
    /// A network-level error occurred (connection refused, DNS failure, reset, ...).
    #[error("Network error for {url}: {detail}")]
    NetworkError {
        /// Target of the failed request.
        url: String,
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    #[error("Request to {url} timed out: {detail}")]
    Timeout {
        /// Target of the failed request.
        url: String,
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Target of the failed request.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The response body is not a valid envelope.
    #[error("Invalid envelope from {url}: {detail}")]
    ParseError {
        /// Target of the failed request.
        url: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The URL could not be resolved against the configured base URL.
    #[error("Invalid URL '{url}': {detail}")]
    InvalidUrl {
        /// The URL as given by the caller.
        url: String,
        /// Details about the failure.
        detail: String,
    },

    /// The request could not be built (bad multipart part, client construction, ...).
    #[error("Invalid request for {url}: {detail}")]
    InvalidRequest {
        /// Target of the failed request.
        url: String,
        /// Details about the failure.
        detail: String,
    },
}

impl TransportError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            Self::InvalidUrl { .. } => true,
            _ => false,
        }
    }

    /// URL of the request that failed.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::NetworkError { url, .. }
            | Self::Timeout { url, .. }
            | Self::HttpStatus { url, .. }
            | Self::ParseError { url, .. }
            | Self::InvalidUrl { url, .. }
            | Self::InvalidRequest { url, .. } => url,
        }
    }
}

/// Result alias used across the transport crate.
pub type Result<T> = std::result::Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_expected() {
        let e = TransportError::HttpStatus {
            url: "/dialog/".into(),
            status: 403,
            body: String::new(),
        };
        assert!(e.is_expected());
    }

    #[test]
    fn server_errors_are_not_expected() {
        let e = TransportError::HttpStatus {
            url: "/dialog/".into(),
            status: 502,
            body: String::new(),
        };
        assert!(!e.is_expected());
    }

    #[test]
    fn network_errors_are_not_expected() {
        let e = TransportError::NetworkError {
            url: "/dialog/".into(),
            detail: "connection refused".into(),
        };
        assert!(!e.is_expected());
        assert_eq!(e.url(), "/dialog/");
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = TransportError::Timeout {
            url: "/panel/".into(),
            detail: "30s".into(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "Timeout");
        assert_eq!(json["url"], "/panel/");
    }
}
