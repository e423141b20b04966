//! Newtype wrappers for credential values.
//!
//! These wrappers give the three credential strings distinct types so they
//! cannot be swapped by accident. Their contents are not validated: an empty
//! or malformed value is sent as-is and surfaces as a rejected request.

use std::fmt;

/// The access key id sent as `AWSAccessKeyId`.
///
/// # Example
///
/// ```rust
/// use amazon_product_api::AccessKeyId;
///
/// let key = AccessKeyId::new("AKIAEXAMPLE");
/// assert_eq!(key.as_ref(), "AKIAEXAMPLE");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessKeyId(String);

impl AccessKeyId {
    /// Wraps an access key id.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl AsRef<str> for AccessKeyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The secret key used to sign requests.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SecretAccessKey(*****)` instead of the actual key. The secret is never
/// transmitted; only the signature derived from it is.
///
/// # Example
///
/// ```rust
/// use amazon_product_api::SecretAccessKey;
///
/// let secret = SecretAccessKey::new("my-secret");
/// assert_eq!(format!("{:?}", secret), "SecretAccessKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretAccessKey(String);

impl SecretAccessKey {
    /// Wraps a secret access key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl AsRef<str> for SecretAccessKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretAccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretAccessKey(*****)")
    }
}

/// The affiliate tag sent as `AssociateTag`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssociateTag(String);

impl AssociateTag {
    /// Wraps an associate tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }
}

impl AsRef<str> for AssociateTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
