//! Transport error types.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: The service answered with a non-2xx status
//! - [`HttpError`]: Unified error type for everything that can go wrong
//!   between sending the request and holding the full response body
//!
//! # Example
//!
//! ```rust,ignore
//! use amazon_product_api::clients::{HttpError, HttpTransport, Transport};
//!
//! match HttpTransport::new().get(&url).await {
//!     Ok(body) => println!("{} bytes", body.len()),
//!     Err(HttpError::Response(e)) => println!("Service error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(HttpError::Transport(e)) => println!("Transport error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when the service responds with a non-successful status.
///
/// The response body has already been drained; its text is kept in
/// `message`, which for this service is usually an XML error document.
///
/// # Example
///
/// ```rust
/// use amazon_product_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 403,
///     message: "<ItemLookupErrorResponse/>".to_string(),
/// };
/// assert!(error.to_string().contains("403"));
/// ```
#[derive(Debug, Error)]
#[error("Request failed with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, decoded lossily as UTF-8.
    pub message: String,
}

/// Unified error type for transport failures.
///
/// No variant is ever retried by the library.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error (DNS, refused connection, timeout, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A failure reported by a caller-supplied [`Transport`](crate::clients::Transport).
    #[error("Transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

impl HttpError {
    /// Wraps an arbitrary error raised by a custom transport.
    pub fn transport(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(error.into())
    }

    /// Returns the HTTP status code if the service answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(_) | Self::Transport(_) => None,
        }
    }
}
