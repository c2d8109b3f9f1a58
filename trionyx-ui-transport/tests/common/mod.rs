//! 共享测试工具和辅助函数

#![allow(dead_code)]

use trionyx_ui_transport::{HttpTransport, HttpTransportConfig};
use wiremock::MockServer;

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Base URL of a mock server, with the trailing slash `Url::join` expects.
pub fn base_url(server: &MockServer) -> String {
    format!("{}/", server.uri())
}

/// Transport against `server` with the given cookies in the jar.
pub fn transport_for(server: &MockServer, cookies: &[&str]) -> Option<HttpTransport> {
    let config = cookies
        .iter()
        .fold(HttpTransportConfig::new(base_url(server)), |config, cookie| {
            config.with_cookie(*cookie)
        });
    HttpTransport::new(config).ok()
}
