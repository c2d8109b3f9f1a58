//! Generic HTTP client tools
//!
//! Shared request flow for every endpoint: send, log, read the body, map
//! failures onto [`TransportError`], decode the envelope.

use reqwest::RequestBuilder;

use crate::error::TransportError;
use crate::types::{HttpMethod, ResponseEnvelope};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// Any non-2xx status is returned as [`TransportError::HttpStatus`] with a
    /// truncated copy of the body.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method: HttpMethod,
        url: &str,
    ) -> Result<(u16, String), TransportError> {
        log::debug!("[transport] {method} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e, url))?;

        let status_code = response.status().as_u16();
        log::debug!("[transport] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| TransportError::NetworkError {
                url: url.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        if !(200..300).contains(&status_code) {
            let error = TransportError::HttpStatus {
                url: url.to_string(),
                status: status_code,
                body: truncate_for_log(&response_text),
            };
            if error.is_expected() {
                log::warn!("[transport] {method} {url} failed: HTTP {status_code}");
            } else {
                log::error!("[transport] {method} {url} failed: HTTP {status_code}");
            }
            return Err(error);
        }

        log::debug!(
            "[transport] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Decode a response body into an envelope.
    pub fn parse_envelope(response_text: &str, url: &str) -> Result<ResponseEnvelope, TransportError> {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[transport] Envelope parse failed for {url}: {e}");
            log::error!("[transport] Raw response: {}", truncate_for_log(response_text));
            TransportError::ParseError {
                url: url.to_string(),
                detail: e.to_string(),
            }
        })
    }

    fn map_send_error(e: &reqwest::Error, url: &str) -> TransportError {
        let detail = e.to_string();
        let error = if e.is_timeout() {
            TransportError::Timeout {
                url: url.to_string(),
                detail,
            }
        } else if e.is_builder() {
            TransportError::InvalidRequest {
                url: url.to_string(),
                detail,
            }
        } else {
            TransportError::NetworkError {
                url: url.to_string(),
                detail,
            }
        };
        log::error!("[transport] {error}");
        error
    }
}
