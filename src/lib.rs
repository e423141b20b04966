//! # Amazon Product Advertising API Client
//!
//! A Rust client for the Amazon Product Advertising API: look up catalog
//! items by identifier or search them by keyword, and get the XML responses
//! back as typed records.
//!
//! ## Overview
//!
//! This crate provides:
//! - Configuration via [`AmazonConfig`] and [`AmazonConfigBuilder`]
//! - The marketplace directory via [`Region`]
//! - Canonical query construction and HMAC-SHA256 request signing via [`auth`]
//! - A pluggable async transport via [`clients::Transport`]
//! - The `ItemLookup` and `ItemSearch` operations via [`ProductClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use amazon_product_api::{AmazonConfig, AccessKeyId, SecretAccessKey, AssociateTag, Region};
//!
//! let config = AmazonConfig::builder()
//!     .access_key_id(AccessKeyId::new("your-access-key"))
//!     .secret_access_key(SecretAccessKey::new("your-secret"))
//!     .associate_tag(AssociateTag::new("yourtag-20"))
//!     .region(Region::Us)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use amazon_product_api::{AmazonConfig, ProductClient};
//!
//! let config = AmazonConfig::from_env()?;
//! let client = ProductClient::new(config);
//!
//! let lookup = client
//!     .item_lookup("ItemAttributes,Images", "ASIN", &["0141033576"])
//!     .await?;
//!
//! let search = client
//!     .item_search("ItemAttributes", "Books", "golang", Some("salesrank"))
//!     .await?;
//!
//! if search.is_valid {
//!     println!("{} results", search.total_results);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **One round trip per call**: No retries, caching, or pagination
//! - **Lenient decoding**: Missing XML elements decode to zero values
//! - **Thread-safe**: The client is `Send + Sync` when its transport is

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod product;

// Re-export public types at crate root for convenience
pub use config::{
    AccessKeyId, AmazonConfig, AmazonConfigBuilder, AssociateTag, Region, SecretAccessKey,
};
pub use error::ConfigError;

pub use clients::{HttpError, HttpResponseError, HttpTransport, Transport};

pub use product::{
    DecodeError, Item, ItemLookupResponse, ItemSearchResponse, ProductClient, ProductError,
    RawResponse,
};
