//! Error types for product operations.
//!
//! A request the service refuses (bad credentials, unknown parameters,
//! expired timestamp) is not an error here: it decodes normally with
//! `is_valid == false`. Only transport failures and malformed XML are errors.

use thiserror::Error;

use crate::clients::HttpError;

/// The response body is not well-formed XML.
#[derive(Debug, Error)]
#[error("Failed to decode XML response: {0}")]
pub struct DecodeError(#[from] quick_xml::DeError);

/// Errors returned by [`ProductClient`](crate::product::ProductClient) operations.
///
/// # Example
///
/// ```rust,ignore
/// use amazon_product_api::product::ProductError;
///
/// match client.item_search("Small", "Books", "golang", None).await {
///     Ok(response) if response.is_valid => { /* use response.items */ }
///     Ok(_) => { /* the service rejected the request parameters */ }
///     Err(ProductError::Http(e)) => eprintln!("Request failed: {e}"),
///     Err(ProductError::Decode(e)) => eprintln!("Bad response: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ProductError {
    /// The request never produced a successful response.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
