//! HTTP transport for Product Advertising API requests.
//!
//! # Overview
//!
//! - [`Transport`]: The capability the client needs, issuing one `GET` per call
//! - [`HttpTransport`]: The default `reqwest`-backed implementation
//! - [`HttpError`]: Transport failures (network errors and non-2xx responses)
//!
//! There is no retry logic: every failure is returned to the caller as-is.
//! Timeouts, proxies and TLS settings come from the `reqwest::Client` handed to
//! [`HttpTransport::with_client`].

mod errors;
mod transport;

pub use errors::{HttpError, HttpResponseError};
pub use transport::{HttpTransport, Transport, SDK_VERSION};
