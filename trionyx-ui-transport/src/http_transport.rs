//! reqwest-backed [`Transport`]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};
use url::Url;

use crate::csrf::CsrfPolicy;
use crate::error::{Result, TransportError};
use crate::http_client::HttpUtils;
use crate::traits::Transport;
use crate::types::{FormData, FormField, HttpMethod, ResponseEnvelope, TransportRequest};
use crate::utils::log_sanitizer::redact;

/// Default request timeout (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout (seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Settings for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Backend root; relative request URLs are resolved against it and it
    /// defines the origin that receives the anti-forgery token.
    pub base_url: String,
    pub csrf: CsrfPolicy,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Cookies (`name=value`) seeded into the jar at construction.
    pub cookies: Vec<String>,
}

impl HttpTransportConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            csrf: CsrfPolicy::default(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            cookies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_csrf(mut self, csrf: CsrfPolicy) -> Self {
        self.csrf = csrf;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookies.push(cookie.into());
        self
    }
}

/// Transport over HTTP with a persistent cookie jar.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    jar: Arc<Jar>,
    base_url: Url,
    csrf: CsrfPolicy,
}

impl HttpTransport {
    pub fn new(config: HttpTransportConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| TransportError::InvalidUrl {
            url: config.base_url.clone(),
            detail: e.to_string(),
        })?;

        let jar = Arc::new(Jar::default());
        for cookie in &config.cookies {
            jar.add_cookie_str(cookie, &base_url);
        }

        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::InvalidRequest {
                url: config.base_url.clone(),
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        log::info!("[transport] Using backend {base_url}");

        Ok(Self {
            client,
            jar,
            base_url,
            csrf: config.csrf,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `url` against the base URL.
    pub fn resolve(&self, url: &str) -> Result<Url> {
        self.base_url.join(url).map_err(|e| TransportError::InvalidUrl {
            url: url.to_string(),
            detail: e.to_string(),
        })
    }

    /// Store a `Set-Cookie`-style string for the backend origin.
    pub fn add_cookie(&self, cookie: &str) {
        self.jar.add_cookie_str(cookie, &self.base_url);
    }

    /// Current value of cookie `name` for the backend origin.
    pub fn cookie(&self, name: &str) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        crate::csrf::find_cookie(header.to_str().ok()?, name)
    }

    fn csrf_token_for(&self, target: &Url) -> Option<String> {
        let header = self.jar.cookies(target)?;
        self.csrf.token_from(header.to_str().ok()?)
    }

    fn multipart(form: &FormData, url: &str) -> Result<Form> {
        form.fields().iter().try_fold(Form::new(), |multipart, field| {
            Ok(match field {
                FormField::Text { name, value } => multipart.text(name.clone(), value.clone()),
                FormField::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                } => {
                    let mut part = Part::bytes(bytes.clone()).file_name(file_name.clone());
                    if let Some(mime) = content_type {
                        part = part
                            .mime_str(mime)
                            .map_err(|e| TransportError::InvalidRequest {
                                url: url.to_string(),
                                detail: format!("Invalid content type '{mime}': {e}"),
                            })?;
                    }
                    multipart.part(name.clone(), part)
                }
            })
        })
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Options => Method::OPTIONS,
        HttpMethod::Trace => Method::TRACE,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<ResponseEnvelope> {
        let target = self.resolve(&request.url)?;
        let url = target.to_string();

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), target.clone())
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Accept", "application/json");

        if self.csrf.applies_to(request.method, &self.base_url, &target) {
            if let Some(token) = self.csrf_token_for(&target) {
                log::debug!(
                    "[transport] Attaching {} = {}",
                    self.csrf.header_name,
                    redact(&token)
                );
                builder = builder.header(self.csrf.header_name.as_str(), token);
            } else {
                log::debug!(
                    "[transport] No '{}' cookie, sending {} without token",
                    self.csrf.cookie_name,
                    request.method
                );
            }
        }

        if let Some(form) = &request.form {
            if request.method.is_safe() {
                let pairs: Vec<(&str, &str)> = form.text_pairs().collect();
                builder = builder.query(&pairs);
            } else {
                builder = builder.multipart(Self::multipart(form, &url)?);
            }
        }

        let (_, body) = HttpUtils::execute_request(builder, request.method, &url).await?;
        HttpUtils::parse_envelope(&body, &url)
    }
}
