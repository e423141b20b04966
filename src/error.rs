//! Error types for client configuration.
//!
//! # Example
//!
//! ```rust
//! use amazon_product_api::{ConfigError, Region};
//!
//! let result = "XX".parse::<Region>();
//! assert!(matches!(result, Err(ConfigError::UnknownRegion { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building an [`AmazonConfig`](crate::AmazonConfig).
///
/// Credential values are never checked for format; an empty key is passed
/// through and rejected by the remote service instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The region code does not name a supported marketplace.
    #[error("Unknown region '{code}'. Expected one of: CA, CN, DE, ES, FR, IT, JP, UK, US.")]
    UnknownRegion {
        /// The region code that was provided.
        code: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
