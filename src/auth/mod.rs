//! Request authentication for the Product Advertising API.
//!
//! Every request is authenticated by signing its query string:
//!
//! 1. [`canonical::request_params`] adds the protocol parameters
//!    (access key, version, timestamp, service, associate tag, response group)
//! 2. [`canonical::canonicalize`] produces the sorted, percent-encoded query
//! 3. [`signature::sign_query`] appends the HMAC-SHA256 `Signature`
//!
//! The secret key never leaves the process; only the signature does.

pub mod canonical;
pub mod signature;

pub use canonical::{canonicalize, format_timestamp, request_params, Params};
pub use signature::{compute_signature, sign_query, string_to_sign, verify_signed_query};
