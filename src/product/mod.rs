//! Catalog operations and their decoded responses.
//!
//! # Overview
//!
//! - [`ProductClient`]: The `ItemLookup` and `ItemSearch` operations
//! - [`ItemLookupResponse`], [`ItemSearchResponse`]: Decoded response records
//! - [`Item`] and its parts: [`ItemAttributes`], [`Image`], [`ItemLink`], ...
//! - [`ProductError`]: Transport or decode failure
//!
//! # Validity
//!
//! The service reports rejected requests inside a well-formed response, so
//! callers must branch on `is_valid`, not only on `Result`:
//!
//! ```rust,ignore
//! let response = client.item_search("Small", "All", "golang", None).await?;
//! if !response.is_valid {
//!     // credentials or parameters were rejected; response.items is empty
//! }
//! ```

mod client;
mod errors;
mod response;

pub use client::{ProductClient, RawResponse, SERVICE_PATH};
pub use errors::{DecodeError, ProductError};
pub use response::{
    decode, Dimensions, Image, Item, ItemAttributes, ItemLink, ItemLookupResponse, ItemResponse,
    ItemSearchResponse, Language, Price,
};
