//! Anti-forgery token transport
//!
//! The backend stores its token in a cookie and expects it back in a request
//! header. The header is attached only to state-changing requests that stay on
//! the backend's own origin; the token never leaves that origin.

use url::Url;

use crate::types::HttpMethod;

/// Cookie holding the anti-forgery token.
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

/// Header carrying the token back to the backend.
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

/// Where the token is read from and where it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfPolicy {
    pub cookie_name: String,
    pub header_name: String,
}

impl Default for CsrfPolicy {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_CSRF_COOKIE.to_string(),
            header_name: DEFAULT_CSRF_HEADER.to_string(),
        }
    }
}

impl CsrfPolicy {
    pub fn new(cookie_name: impl Into<String>, header_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            header_name: header_name.into(),
        }
    }

    /// Whether a request with `method` to `target` must carry the token.
    pub fn applies_to(&self, method: HttpMethod, origin: &Url, target: &Url) -> bool {
        !method.is_safe() && is_same_origin(origin, target)
    }

    /// Token value from a `Cookie` header string, if present.
    pub fn token_from(&self, cookie_header: &str) -> Option<String> {
        find_cookie(cookie_header, &self.cookie_name)
    }
}

/// Scheme, host and port all match.
pub fn is_same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.host_str() == b.host_str()
        && a.port_or_known_default() == b.port_or_known_default()
}

/// Look up `name` in a `Cookie` header (`a=1; b=2`), percent-decoding the value.
///
/// Returns `None` when the cookie is missing or empty.
pub fn find_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .filter(|raw| !raw.is_empty())
        .map(|raw| {
            urlencoding::decode(raw).map_or_else(|_| raw.to_string(), std::borrow::Cow::into_owned)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap_or_else(|e| panic!("bad test url {s}: {e}"))
    }

    #[test]
    fn finds_cookie_among_others() {
        let header = "sessionid=abc; csrftoken=tok123; theme=dark";
        assert_eq!(find_cookie(header, "csrftoken").as_deref(), Some("tok123"));
        assert_eq!(find_cookie(header, "sessionid").as_deref(), Some("abc"));
    }

    #[test]
    fn does_not_match_on_name_prefix() {
        let header = "csrftoken_old=stale; csrftoken=fresh";
        assert_eq!(find_cookie(header, "csrftoken").as_deref(), Some("fresh"));
        assert_eq!(find_cookie("csrftokenx=1", "csrftoken"), None);
    }

    #[test]
    fn decodes_percent_encoded_value() {
        assert_eq!(
            find_cookie("csrftoken=a%2Fb%3Dc", "csrftoken").as_deref(),
            Some("a/b=c")
        );
    }

    #[test]
    fn missing_or_empty_cookie() {
        assert_eq!(find_cookie("", "csrftoken"), None);
        assert_eq!(find_cookie("csrftoken=", "csrftoken"), None);
    }

    #[test]
    fn origin_comparison_uses_default_ports() {
        assert!(is_same_origin(
            &url("https://admin.example.com/"),
            &url("https://admin.example.com:443/dialog/")
        ));
        assert!(!is_same_origin(
            &url("https://admin.example.com/"),
            &url("http://admin.example.com/")
        ));
        assert!(!is_same_origin(
            &url("https://admin.example.com/"),
            &url("https://cdn.example.com/")
        ));
    }

    #[test]
    fn token_only_for_unsafe_same_origin_requests() {
        let policy = CsrfPolicy::default();
        let origin = url("http://localhost:8000/");
        let same = url("http://localhost:8000/dialog/create/");
        let foreign = url("https://other.example.com/hook");

        assert!(policy.applies_to(HttpMethod::Post, &origin, &same));
        assert!(policy.applies_to(HttpMethod::Delete, &origin, &same));
        assert!(!policy.applies_to(HttpMethod::Get, &origin, &same));
        assert!(!policy.applies_to(HttpMethod::Options, &origin, &same));
        assert!(!policy.applies_to(HttpMethod::Post, &origin, &foreign));
    }
}
