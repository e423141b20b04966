//! The operation façade for catalog lookups and searches.
//!
//! Every operation follows the same sequence: build the operation
//! parameters, add the protocol parameters, canonicalize, sign, send one
//! `GET` through the [`Transport`], and decode the XML body. Nothing is
//! cached or retried, and no state is carried between calls.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::auth::canonical::{canonicalize, request_params, Params};
use crate::auth::signature::sign_query;
use crate::clients::{HttpTransport, Transport};
use crate::config::AmazonConfig;
use crate::product::errors::ProductError;
use crate::product::response::{decode, ItemLookupResponse, ItemResponse, ItemSearchResponse};

/// The service's single endpoint path.
pub const SERVICE_PATH: &str = "/onca/xml";

/// A decoded response together with the body it was decoded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse<T> {
    /// The response body exactly as received.
    pub body: Vec<u8>,
    /// The decoded record.
    pub response: T,
}

/// Client for the `ItemLookup` and `ItemSearch` operations.
///
/// The transport defaults to [`HttpTransport`]; supply another with
/// [`ProductClient::with_transport`] to control timeouts or proxies, or to
/// stub the service.
///
/// # Thread Safety
///
/// Calls share no mutable state. The client is `Send + Sync` whenever its
/// transport is.
///
/// # Example
///
/// ```rust,ignore
/// use amazon_product_api::{AmazonConfig, ProductClient};
///
/// let config = AmazonConfig::new("access-key", "secret", "mytag-20", "US")?;
/// let client = ProductClient::new(config);
///
/// let response = client
///     .item_lookup("ItemAttributes,Images", "ASIN", &["0141033576", "0615314465"])
///     .await?;
///
/// if response.is_valid {
///     for item in &response.items {
///         println!("{}: {}", item.asin, item.item_attributes.title);
///     }
/// }
/// ```
#[derive(Debug)]
pub struct ProductClient<T = HttpTransport> {
    config: AmazonConfig,
    transport: T,
}

// Verify ProductClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProductClient<HttpTransport>>();
};

impl ProductClient<HttpTransport> {
    /// Creates a client using the default HTTP transport.
    ///
    /// # Panics
    ///
    /// Panics if the default reqwest client cannot be created; see
    /// [`HttpTransport::new`].
    #[must_use]
    pub fn new(config: AmazonConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> ProductClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub const fn with_transport(config: AmazonConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &AmazonConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Looks up items by identifier.
    ///
    /// # Arguments
    ///
    /// * `response_group` - Comma-separated response groups, e.g. `"ItemAttributes,Images"`
    /// * `id_type` - Identifier scheme, e.g. `"ASIN"`, `"ISBN"`
    /// * `item_ids` - Identifiers to look up, sent comma-joined
    ///
    /// An empty identifier list is sent as-is and rejected by the service.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::Http`] if the request fails and
    /// [`ProductError::Decode`] if the body is not well-formed XML. A request
    /// the service refuses is returned as `Ok` with `is_valid == false`.
    pub async fn item_lookup<S: AsRef<str>>(
        &self,
        response_group: &str,
        id_type: &str,
        item_ids: &[S],
    ) -> Result<ItemLookupResponse, ProductError> {
        Ok(self
            .item_lookup_raw(response_group, id_type, item_ids)
            .await?
            .response)
    }

    /// Like [`item_lookup`](Self::item_lookup), also returning the raw body.
    ///
    /// # Errors
    ///
    /// See [`item_lookup`](Self::item_lookup).
    pub async fn item_lookup_raw<S: AsRef<str>>(
        &self,
        response_group: &str,
        id_type: &str,
        item_ids: &[S],
    ) -> Result<RawResponse<ItemLookupResponse>, ProductError> {
        let item_ids = item_ids
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");

        let mut params = Params::new();
        params.insert("Operation".to_string(), "ItemLookup".to_string());
        params.insert("IdType".to_string(), id_type.to_string());
        params.insert("ItemId".to_string(), item_ids);

        self.execute("ItemLookup", params, response_group).await
    }

    /// Searches items by keyword.
    ///
    /// # Arguments
    ///
    /// * `response_group` - Comma-separated response groups
    /// * `search_index` - Catalog to search, e.g. `"All"`, `"Books"`
    /// * `keywords` - Free-text search terms
    /// * `sort` - Optional sort order, e.g. `"salesrank"`; omitted when `None`
    ///
    /// Only the first page of results is fetched.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::Http`] if the request fails and
    /// [`ProductError::Decode`] if the body is not well-formed XML. A request
    /// the service refuses is returned as `Ok` with `is_valid == false`.
    pub async fn item_search(
        &self,
        response_group: &str,
        search_index: &str,
        keywords: &str,
        sort: Option<&str>,
    ) -> Result<ItemSearchResponse, ProductError> {
        Ok(self
            .item_search_raw(response_group, search_index, keywords, sort)
            .await?
            .response)
    }

    /// Like [`item_search`](Self::item_search), also returning the raw body.
    ///
    /// # Errors
    ///
    /// See [`item_search`](Self::item_search).
    pub async fn item_search_raw(
        &self,
        response_group: &str,
        search_index: &str,
        keywords: &str,
        sort: Option<&str>,
    ) -> Result<RawResponse<ItemSearchResponse>, ProductError> {
        let mut params = Params::new();
        params.insert("Operation".to_string(), "ItemSearch".to_string());
        params.insert("SearchIndex".to_string(), search_index.to_string());
        params.insert("Keywords".to_string(), keywords.to_string());
        if let Some(sort) = sort {
            params.insert("Sort".to_string(), sort.to_string());
        }

        self.execute("ItemSearch", params, response_group).await
    }

    /// Builds the signed request URL for a set of operation parameters.
    ///
    /// `timestamp` is embedded as the `Timestamp` parameter; operations pass
    /// the current time so every request gets a fresh signature.
    #[must_use]
    pub fn signed_url(
        &self,
        operation_params: Params,
        response_group: &str,
        timestamp: DateTime<Utc>,
    ) -> String {
        let host = self.config.region().host();
        let params = request_params(&self.config, operation_params, response_group, timestamp);
        let signed = sign_query(
            host,
            SERVICE_PATH,
            &canonicalize(&params),
            self.config.secret_access_key().as_ref(),
        );
        format!("http://{host}{SERVICE_PATH}?{signed}")
    }

    async fn execute<R>(
        &self,
        operation: &str,
        params: Params,
        response_group: &str,
    ) -> Result<RawResponse<R>, ProductError>
    where
        R: DeserializeOwned + ItemResponse,
    {
        let url = self.signed_url(params, response_group, Utc::now());

        tracing::debug!(
            operation,
            host = self.config.region().host(),
            "Sending Product API request"
        );
        let body = self.transport.get(&url).await?;
        let response: R = decode(&body)?;

        if response.is_valid() {
            tracing::debug!(
                operation,
                items = response.items().len(),
                "Decoded Product API response"
            );
        } else {
            tracing::warn!(operation, "Product API marked the request as invalid");
        }

        Ok(RawResponse { body, response })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::signature::verify_signed_query;
    use crate::clients::HttpError;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::sync::Mutex;

    /// Records requested URLs and answers with a canned body.
    struct CannedTransport {
        body: &'static str,
        urls: Mutex<Vec<String>>,
    }

    impl CannedTransport {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                urls: Mutex::new(Vec::new()),
            }
        }

        fn last_url(&self) -> String {
            self.urls.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(self.body.as_bytes().to_vec())
        }
    }

    const VALID_LOOKUP: &str = "<ItemLookupResponse><Items>\
        <Request><IsValid>True</IsValid></Request>\
        <Item><ASIN>0141033576</ASIN></Item>\
        </Items></ItemLookupResponse>";

    fn client(body: &'static str) -> ProductClient<CannedTransport> {
        let config = AmazonConfig::new("AKID", "secret", "tag-20", "US").unwrap();
        ProductClient::with_transport(config, CannedTransport::new(body))
    }

    fn query_of(url: &str) -> &str {
        url.split_once('?').unwrap().1
    }

    #[test]
    fn test_signed_url_is_deterministic_for_fixed_timestamp() {
        let client = client(VALID_LOOKUP);
        let timestamp = Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap();
        let mut params = Params::new();
        params.insert("Operation".to_string(), "ItemLookup".to_string());

        let first = client.signed_url(params.clone(), "Small", timestamp);
        let second = client.signed_url(params, "Small", timestamp);

        assert_eq!(first, second);
        assert!(first.starts_with("http://ecs.amazonaws.com/onca/xml?AWSAccessKeyId=AKID&"));
        assert!(first.contains("&Timestamp=2012-01-01T00%3A00%3A00Z&"));
    }

    #[test]
    fn test_signed_url_uses_region_host_and_verifies() {
        let config = AmazonConfig::new("AKID", "secret", "tag-20", "UK").unwrap();
        let client = ProductClient::with_transport(config, CannedTransport::new(""));
        let url = client.signed_url(Params::new(), "Small", Utc::now());

        assert!(url.starts_with("http://ecs.amazonaws.co.uk/onca/xml?"));
        assert!(verify_signed_query(
            "ecs.amazonaws.co.uk",
            SERVICE_PATH,
            query_of(&url),
            "secret"
        ));
    }

    #[test]
    fn test_client_is_send_sync_with_custom_transport() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        assert_send_sync(&client(VALID_LOOKUP));
    }

    #[tokio::test]
    async fn test_item_lookup_joins_ids_and_decodes() {
        let client = client(VALID_LOOKUP);

        let response = client
            .item_lookup("ItemAttributes", "ASIN", &["0141033576", "0615314465"])
            .await
            .unwrap();

        assert!(response.is_valid);
        assert_eq!(response.items[0].asin, "0141033576");
        assert!(client
            .transport()
            .last_url()
            .contains("IdType=ASIN&ItemId=0141033576%2C0615314465&Operation=ItemLookup"));
    }

    #[tokio::test]
    async fn test_item_search_omits_sort_when_none() {
        let client = client("<ItemSearchResponse/>");

        client.item_search("Small", "All", "golang", None).await.unwrap();

        let url = client.transport().last_url();
        assert!(url.contains(
            "Keywords=golang&Operation=ItemSearch&ResponseGroup=Small&SearchIndex=All"
        ));
        assert!(!url.contains("Sort="));
    }

    #[tokio::test]
    async fn test_item_search_includes_sort_when_given() {
        let client = client("<ItemSearchResponse/>");

        client
            .item_search("Small", "Books", "golang", Some("salesrank"))
            .await
            .unwrap();

        assert!(client
            .transport()
            .last_url()
            .contains("SearchIndex=Books&Service=AWSECommerceService&Sort=salesrank&"));
    }

    #[tokio::test]
    async fn test_raw_variant_returns_body() {
        let client = client(VALID_LOOKUP);

        let raw = client
            .item_lookup_raw("Small", "ASIN", &["0141033576"])
            .await
            .unwrap();

        assert_eq!(raw.body, VALID_LOOKUP.as_bytes());
        assert_eq!(raw.response.items.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let client = client("<ItemLookupResponse><Items></ItemLookupResponse>");

        let result = client.item_lookup("Small", "ASIN", &["1"]).await;

        assert!(matches!(result, Err(ProductError::Decode(_))));
    }
}
