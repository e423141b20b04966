//! Canonical query string construction.
//!
//! The service recomputes the request signature from the query string it
//! receives, so the string must be reproduced byte for byte: parameters
//! sorted by key, values percent-encoded with the RFC 3986 unreserved set
//! (space becomes `%20`, never `+`), pairs joined by `&`.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use amazon_product_api::auth::canonical::canonicalize;
//!
//! let mut params = BTreeMap::new();
//! params.insert("Keywords".to_string(), "rust book".to_string());
//! params.insert("Operation".to_string(), "ItemSearch".to_string());
//!
//! assert_eq!(canonicalize(&params), "Keywords=rust%20book&Operation=ItemSearch");
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::AmazonConfig;

/// Request parameters keyed by name.
///
/// A `BTreeMap` keeps keys unique and iterates them in ascending byte order,
/// which is the order the service signs in.
pub type Params = BTreeMap<String, String>;

/// Formats a timestamp the way the service expects it (`2012-01-02T15:04:05Z`).
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Adds the protocol parameters every request carries.
///
/// The operation parameters are extended with `AWSAccessKeyId`, `Version`,
/// `Timestamp`, `Service`, `AssociateTag` and `ResponseGroup`. Operation
/// parameters are not validated; the service reports bad values through the
/// response's validity flag.
#[must_use]
pub fn request_params(
    config: &AmazonConfig,
    mut params: Params,
    response_group: &str,
    timestamp: DateTime<Utc>,
) -> Params {
    params.insert(
        "AWSAccessKeyId".to_string(),
        config.access_key_id().as_ref().to_string(),
    );
    params.insert("Version".to_string(), config.api_version().to_string());
    params.insert("Timestamp".to_string(), format_timestamp(timestamp));
    params.insert("Service".to_string(), config.service().to_string());
    params.insert(
        "AssociateTag".to_string(),
        config.associate_tag().as_ref().to_string(),
    );
    params.insert("ResponseGroup".to_string(), response_group.to_string());
    params
}

/// Serializes parameters into the canonical query string.
///
/// Keys are emitted as-is; values are percent-encoded.
#[must_use]
pub fn canonicalize(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
