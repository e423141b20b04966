//! Configuration types for the Product Advertising API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AmazonConfig`]: The immutable configuration passed to every request
//! - [`AmazonConfigBuilder`]: A builder for constructing [`AmazonConfig`] instances
//! - [`AccessKeyId`], [`SecretAccessKey`], [`AssociateTag`]: Credential newtypes
//! - [`Region`]: The marketplace directory mapping region codes to hosts
//!
//! # Example
//!
//! ```rust
//! use amazon_product_api::{AmazonConfig, AccessKeyId, SecretAccessKey, AssociateTag, Region};
//!
//! let config = AmazonConfig::builder()
//!     .access_key_id(AccessKeyId::new("access-key"))
//!     .secret_access_key(SecretAccessKey::new("secret"))
//!     .associate_tag(AssociateTag::new("mytag-20"))
//!     .region(Region::Us)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.region().host(), "ecs.amazonaws.com");
//! ```

mod newtypes;
mod region;

pub use newtypes::{AccessKeyId, AssociateTag, SecretAccessKey};
pub use region::Region;

use crate::error::ConfigError;

/// Protocol version sent as `Version` when none is configured.
pub const DEFAULT_API_VERSION: &str = "2011-08-01";

/// Service name sent as `Service` when none is configured.
pub const DEFAULT_SERVICE: &str = "AWSECommerceService";

/// Environment variable holding the access key id.
pub const ACCESS_KEY_ENV: &str = "ACCESS_KEY";
/// Environment variable holding the secret access key.
pub const ACCESS_SECRET_ENV: &str = "ACCESS_SECRET";
/// Environment variable holding the associate tag.
pub const ASSOCIATE_TAG_ENV: &str = "ASSOCIATE_TAG";
/// Environment variable holding the region code (defaults to `US`).
pub const REGION_ENV: &str = "AMAZON_REGION";

/// Configuration for the Product Advertising API client.
///
/// Holds the credentials, marketplace region, protocol version and service
/// name. The library only ever reads it.
///
/// # Thread Safety
///
/// `AmazonConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct AmazonConfig {
    access_key_id: AccessKeyId,
    secret_access_key: SecretAccessKey,
    associate_tag: AssociateTag,
    region: Region,
    api_version: String,
    service: String,
}

impl AmazonConfig {
    /// Creates a configuration from the four identity strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownRegion`] if `region` is not a supported
    /// marketplace code.
    ///
    /// # Example
    ///
    /// ```rust
    /// use amazon_product_api::AmazonConfig;
    ///
    /// let config = AmazonConfig::new("key", "secret", "tag-20", "US").unwrap();
    /// assert_eq!(config.api_version(), "2011-08-01");
    /// ```
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        associate_tag: impl Into<String>,
        region: &str,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .access_key_id(AccessKeyId::new(access_key_id))
            .secret_access_key(SecretAccessKey::new(secret_access_key))
            .associate_tag(AssociateTag::new(associate_tag))
            .region(region.parse()?)
            .build()
    }

    /// Creates a configuration from the process environment.
    ///
    /// Reads [`ACCESS_KEY_ENV`], [`ACCESS_SECRET_ENV`], [`ASSOCIATE_TAG_ENV`]
    /// and [`REGION_ENV`]. Missing credentials become empty strings; a missing
    /// region defaults to `US`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownRegion`] if the region variable is set to
    /// an unsupported code.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let region = lookup(REGION_ENV).unwrap_or_else(|| Region::Us.code().to_string());
        Self::new(
            lookup(ACCESS_KEY_ENV).unwrap_or_default(),
            lookup(ACCESS_SECRET_ENV).unwrap_or_default(),
            lookup(ASSOCIATE_TAG_ENV).unwrap_or_default(),
            &region,
        )
    }

    /// Creates a new builder for constructing an `AmazonConfig`.
    #[must_use]
    pub fn builder() -> AmazonConfigBuilder {
        AmazonConfigBuilder::new()
    }

    /// Returns the access key id.
    #[must_use]
    pub const fn access_key_id(&self) -> &AccessKeyId {
        &self.access_key_id
    }

    /// Returns the secret access key.
    #[must_use]
    pub const fn secret_access_key(&self) -> &SecretAccessKey {
        &self.secret_access_key
    }

    /// Returns the associate tag.
    #[must_use]
    pub const fn associate_tag(&self) -> &AssociateTag {
        &self.associate_tag
    }

    /// Returns the marketplace region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the protocol version.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the service name.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }
}

// Verify AmazonConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AmazonConfig>();
};

/// Builder for constructing [`AmazonConfig`] instances.
///
/// Required fields are `access_key_id`, `secret_access_key`,
/// `associate_tag` and `region`.
///
/// # Defaults
///
/// - `api_version`: [`DEFAULT_API_VERSION`]
/// - `service`: [`DEFAULT_SERVICE`]
#[derive(Debug, Default)]
pub struct AmazonConfigBuilder {
    access_key_id: Option<AccessKeyId>,
    secret_access_key: Option<SecretAccessKey>,
    associate_tag: Option<AssociateTag>,
    region: Option<Region>,
    api_version: Option<String>,
    service: Option<String>,
}

impl AmazonConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access key id (required).
    #[must_use]
    pub fn access_key_id(mut self, key: AccessKeyId) -> Self {
        self.access_key_id = Some(key);
        self
    }

    /// Sets the secret access key (required).
    #[must_use]
    pub fn secret_access_key(mut self, key: SecretAccessKey) -> Self {
        self.secret_access_key = Some(key);
        self
    }

    /// Sets the associate tag (required).
    #[must_use]
    pub fn associate_tag(mut self, tag: AssociateTag) -> Self {
        self.associate_tag = Some(tag);
        self
    }

    /// Sets the marketplace region (required).
    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Overrides the protocol version.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Overrides the service name.
    #[must_use]
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Builds the [`AmazonConfig`], checking that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a required field was
    /// never set.
    pub fn build(self) -> Result<AmazonConfig, ConfigError> {
        let access_key_id = self
            .access_key_id
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_key_id",
            })?;
        let secret_access_key = self
            .secret_access_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "secret_access_key",
            })?;
        let associate_tag = self
            .associate_tag
            .ok_or(ConfigError::MissingRequiredField {
                field: "associate_tag",
            })?;
        let region = self
            .region
            .ok_or(ConfigError::MissingRequiredField { field: "region" })?;

        Ok(AmazonConfig {
            access_key_id,
            secret_access_key,
            associate_tag,
            region,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            service: self.service.unwrap_or_else(|| DEFAULT_SERVICE.to_string()),
        })
    }
}
