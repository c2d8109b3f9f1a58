use async_trait::async_trait;

use crate::error::Result;
use crate::types::{FormData, ResponseEnvelope, TransportRequest};

/// 对话框/面板端点的请求通道
///
/// Implementations resolve relative URLs, attach session cookies and the
/// anti-forgery header, and decode the body into a [`ResponseEnvelope`].
/// Failures are reported once; nothing is retried.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a request and decode the envelope.
    async fn send(&self, request: TransportRequest) -> Result<ResponseEnvelope>;

    /// GET `url`.
    async fn get(&self, url: &str) -> Result<ResponseEnvelope> {
        self.send(TransportRequest::get(url)).await
    }

    /// POST `form` to `url` as multipart.
    async fn post(&self, url: &str, form: FormData) -> Result<ResponseEnvelope> {
        self.send(TransportRequest::post(url, form)).await
    }
}
