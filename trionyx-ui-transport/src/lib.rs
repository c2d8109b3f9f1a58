//! # trionyx-ui-transport
//!
//! Wire types and HTTP plumbing for the dialog and panel endpoints of a
//! Trionyx backend.
//!
//! ## Contents
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`ResponseEnvelope`] | JSON payload returned by every dialog/panel endpoint |
//! | [`Transport`] | Request abstraction used by the controllers |
//! | [`HttpTransport`] | reqwest implementation with cookie jar and anti-forgery header |
//! | [`CsrfPolicy`] | Which cookie is read and which header carries it |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trionyx_ui_transport::{FormData, HttpTransport, HttpTransportConfig, Transport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::new(
//!         HttpTransportConfig::new("http://localhost:8000/").with_cookie("sessionid=abc"),
//!     )?;
//!
//!     let envelope = transport.get("/dialog/model/trionyx/user/1/edit/").await?;
//!     println!("{}", envelope.title);
//!
//!     if let Some(label) = envelope.submit_label() {
//!         let form = FormData::new().text("email", "info@trionyx.com");
//!         let next = transport.post(envelope.next_url().unwrap_or("/"), form).await?;
//!         println!("{label}: close={}", next.close);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, TransportError>`](TransportError). Use
//! [`TransportError::is_expected`] to choose a log level.

mod csrf;
mod error;
mod http_client;
mod http_transport;
mod traits;
mod types;
mod utils;

pub use csrf::{CsrfPolicy, DEFAULT_CSRF_COOKIE, DEFAULT_CSRF_HEADER, find_cookie, is_same_origin};
pub use error::{Result, TransportError};
pub use http_transport::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, HttpTransport, HttpTransportConfig,
};
pub use traits::Transport;
pub use types::{
    DialogOptions, DialogSize, EnvelopeAction, EnvelopeStatus, FormData, FormField, HttpMethod,
    PanelTheme, ResponseEnvelope, TransportRequest,
};
pub use utils::log_sanitizer::{redact, truncate_for_log};
