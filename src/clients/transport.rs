//! The transport seam between request building and the network.
//!
//! [`Transport`] is the single capability the operation façade needs: issue a
//! `GET` for a fully signed URL and hand back the whole body. [`HttpTransport`]
//! is the default, backed by `reqwest`. Callers can supply their own
//! implementation to control timeouts, proxies, or to stub the service in tests.

use async_trait::async_trait;

use crate::clients::errors::{HttpError, HttpResponseError};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Issues signed `GET` requests.
///
/// Implementations must return the complete response body on success and an
/// [`HttpError`] on any network failure or non-2xx status. They must not
/// retry. Implementations shared across tasks must be `Send + Sync`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a `GET` request to `url` and returns the full response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be completed or the
    /// service answered with a non-success status.
    async fn get(&self, url: &str) -> Result<Vec<u8>, HttpError>;
}

/// Default [`Transport`] backed by a `reqwest` client.
///
/// `reqwest::Client` pools connections internally and is cheap to clone, so
/// one `HttpTransport` can serve concurrent requests.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use amazon_product_api::clients::HttpTransport;
///
/// let client = reqwest::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// let transport = HttpTransport::with_client(client);
/// ```
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a transport with a default client and the library User-Agent.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Creates a transport around a preconfigured client.
    ///
    /// The client's own timeout, redirect, proxy and TLS settings apply.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

// TODO: send `Accept-Encoding: gzip` once reqwest's `gzip` feature is enabled.
#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let res = self.client.get(url).send().await?;
        let status = res.status();

        // Drain the body on every path so the connection returns to the pool
        let body = res.bytes().await;

        if !status.is_success() {
            let message = body
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Product API request failed");
            return Err(HttpError::Response(HttpResponseError {
                code: status.as_u16(),
                message,
            }));
        }

        Ok(body?.to_vec())
    }
}

fn user_agent() -> String {
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    format!("Amazon Product API Library v{SDK_VERSION} | Rust {rust_version}")
}
