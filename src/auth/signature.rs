//! HMAC-SHA256 request signing.
//!
//! The signature covers the string
//!
//! ```text
//! GET\n{host}\n{path}\n{canonical query}
//! ```
//!
//! keyed with the secret access key. It is base64-encoded, percent-encoded,
//! and appended to the canonical query as the final `Signature` parameter.
//! Only `GET` is ever signed.
//!
//! # Example
//!
//! ```rust
//! use amazon_product_api::auth::signature::{sign_query, verify_signed_query};
//!
//! let signed = sign_query("ecs.amazonaws.com", "/onca/xml", "Operation=ItemLookup", "secret");
//! assert!(signed.starts_with("Operation=ItemLookup&Signature="));
//! assert!(verify_signed_query("ecs.amazonaws.com", "/onca/xml", &signed, "secret"));
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// The only HTTP method the service signs.
pub const SIGNED_METHOD: &str = "GET";

const SIGNATURE_SEPARATOR: &str = "&Signature=";

/// Builds the string the signature is computed over.
#[must_use]
pub fn string_to_sign(host: &str, path: &str, canonical_query: &str) -> String {
    format!("{SIGNED_METHOD}\n{host}\n{path}\n{canonical_query}")
}

/// Computes the base64-encoded HMAC-SHA256 of `message`.
///
/// The result is not yet percent-encoded.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Signs a canonical query string and returns it with `&Signature=...` appended.
#[must_use]
pub fn sign_query(host: &str, path: &str, canonical_query: &str, secret: &str) -> String {
    let signature = compute_signature(&string_to_sign(host, path, canonical_query), secret);
    format!(
        "{canonical_query}{SIGNATURE_SEPARATOR}{}",
        urlencoding::encode(&signature)
    )
}

/// Checks the `Signature` parameter of a signed query string.
///
/// The signature must be the last parameter, as produced by [`sign_query`].
/// Comparison is constant-time.
#[must_use]
pub fn verify_signed_query(host: &str, path: &str, signed_query: &str, secret: &str) -> bool {
    let Some((canonical_query, received)) = signed_query.rsplit_once(SIGNATURE_SEPARATOR) else {
        return false;
    };
    let Ok(received) = urlencoding::decode(received) else {
        return false;
    };

    let expected = compute_signature(&string_to_sign(host, path, canonical_query), secret);
    expected.as_bytes().ct_eq(received.as_bytes()).into()
}
