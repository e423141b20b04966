//! Integration tests for the product operations.
//!
//! These tests drive the public client end to end: request building and
//! signing through a recording transport, and the default HTTP transport
//! against a mock server.

use std::sync::Mutex;

use amazon_product_api::auth::signature::verify_signed_query;
use amazon_product_api::clients::{HttpError, HttpTransport, Transport};
use amazon_product_api::product::{ProductClient, ProductError, SERVICE_PATH};
use amazon_product_api::AmazonConfig;
use async_trait::async_trait;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records every requested URL and answers with a fixed body.
struct RecordingTransport {
    body: String,
    urls: Mutex<Vec<String>>,
}

impl RecordingTransport {
    fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            urls: Mutex::new(Vec::new()),
        }
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(self.body.clone().into_bytes())
    }
}

/// Sends every request to a mock server instead of the region host.
struct RedirectingTransport {
    base: String,
    inner: HttpTransport,
}

#[async_trait]
impl Transport for RedirectingTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let path_and_query = &url[url.find(SERVICE_PATH).unwrap()..];
        self.inner
            .get(&format!("{}{}", self.base, path_and_query))
            .await
    }
}

fn test_config(region: &str) -> AmazonConfig {
    AmazonConfig::new("AKIDEXAMPLE", "test-secret", "mytag-20", region).unwrap()
}

const INVALID_SEARCH: &str = r#"<?xml version="1.0" ?>
<ItemSearchResponse xmlns="http://webservices.amazon.com/AWSECommerceService/2011-08-01">
  <Items>
    <Request>
      <IsValid>False</IsValid>
      <Errors>
        <Error>
          <Code>AWS.InvalidParameterValue</Code>
          <Message>Bad SearchIndex.</Message>
        </Error>
      </Errors>
    </Request>
  </Items>
</ItemSearchResponse>"#;

const SEARCH_PAGE: &str = r#"<?xml version="1.0" ?>
<ItemSearchResponse>
  <Items>
    <Request><IsValid>True</IsValid></Request>
    <TotalResults>2</TotalResults>
    <TotalPages>1</TotalPages>
    <MoreSearchResultsUrl>http://www.amazon.com/gp/redirect.html?keywords=golang</MoreSearchResultsUrl>
    <Item>
      <ASIN>0321774639</ASIN>
      <DetailPageURL>http://www.amazon.com/dp/0321774639</DetailPageURL>
      <ItemAttributes>
        <Author>Mark Summerfield</Author>
        <Title>Programming in Go</Title>
      </ItemAttributes>
    </Item>
    <Item>
      <ASIN>0134190440</ASIN>
      <ItemAttributes>
        <Author>Alan A. A. Donovan</Author>
        <Author>Brian W. Kernighan</Author>
        <Title>The Go Programming Language</Title>
      </ItemAttributes>
    </Item>
  </Items>
</ItemSearchResponse>"#;

// ============================================================================
// Request assembly
// ============================================================================

#[tokio::test]
async fn test_item_lookup_assembles_signed_query() {
    let client = ProductClient::with_transport(
        test_config("US"),
        RecordingTransport::new("<ItemLookupResponse/>"),
    );

    client
        .item_lookup(
            "ItemAttributes,Images",
            "ASIN",
            &["0141033576", "0615314465"],
        )
        .await
        .unwrap();

    let urls = client.transport().urls();
    assert_eq!(urls.len(), 1);

    let url = &urls[0];
    assert!(url.starts_with("http://ecs.amazonaws.com/onca/xml?"));
    assert!(url.contains("IdType=ASIN&ItemId=0141033576%2C0615314465&"));
    assert!(url.contains("&ResponseGroup=ItemAttributes%2CImages&"));

    let query = url.split_once('?').unwrap().1;
    let (_, signature) = query.rsplit_once("&Signature=").unwrap();
    assert!(!signature.is_empty());
    assert!(verify_signed_query(
        "ecs.amazonaws.com",
        SERVICE_PATH,
        query,
        "test-secret"
    ));
}

#[tokio::test]
async fn test_item_search_assembles_keyword_query() {
    let client =
        ProductClient::with_transport(test_config("US"), RecordingTransport::new(SEARCH_PAGE));

    client
        .item_search("ItemAttributes", "All", "golang", None)
        .await
        .unwrap();

    let url = &client.transport().urls()[0];
    assert!(url.contains(
        "Keywords=golang&Operation=ItemSearch&ResponseGroup=ItemAttributes&SearchIndex=All&"
    ));
}

#[tokio::test]
async fn test_query_keys_are_sorted_and_signature_is_last() {
    let client =
        ProductClient::with_transport(test_config("DE"), RecordingTransport::new(SEARCH_PAGE));

    client
        .item_search("Small", "Books", "rust programming", Some("salesrank"))
        .await
        .unwrap();

    let url = &client.transport().urls()[0];
    assert!(url.starts_with("http://ecs.amazonaws.de/onca/xml?"));

    let query = url.split_once('?').unwrap().1;
    let keys: Vec<&str> = query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap().0)
        .collect();

    let (signature, signed_keys) = keys.split_last().unwrap();
    assert_eq!(*signature, "Signature");

    let mut sorted = signed_keys.to_vec();
    sorted.sort_unstable();
    assert_eq!(signed_keys, sorted.as_slice());
    assert_eq!(
        signed_keys,
        [
            "AWSAccessKeyId",
            "AssociateTag",
            "Keywords",
            "Operation",
            "ResponseGroup",
            "SearchIndex",
            "Service",
            "Sort",
            "Timestamp",
            "Version",
        ]
    );
    assert!(query.contains("Keywords=rust%20programming&"));
}

#[tokio::test]
async fn test_each_call_is_one_round_trip() {
    let client =
        ProductClient::with_transport(test_config("US"), RecordingTransport::new(SEARCH_PAGE));

    client.item_search("Small", "All", "a", None).await.unwrap();
    client.item_search("Small", "All", "b", None).await.unwrap();

    assert_eq!(client.transport().urls().len(), 2);
}

// ============================================================================
// Decoding through the client
// ============================================================================

#[tokio::test]
async fn test_item_search_decodes_page() {
    let client =
        ProductClient::with_transport(test_config("US"), RecordingTransport::new(SEARCH_PAGE));

    let response = client
        .item_search("ItemAttributes", "Books", "golang", None)
        .await
        .unwrap();

    assert!(response.is_valid);
    assert_eq!(response.total_results, 2);
    assert_eq!(response.total_pages, 1);
    assert_eq!(response.items.len(), 2);
    assert_eq!(response.items[0].item_attributes.title, "Programming in Go");
    assert_eq!(
        response.items[1].item_attributes.authors,
        ["Alan A. A. Donovan", "Brian W. Kernighan"]
    );
    assert!(response.items[1].item_links.is_empty());
}

#[tokio::test]
async fn test_invalid_request_is_not_an_error() {
    let client =
        ProductClient::with_transport(test_config("US"), RecordingTransport::new(INVALID_SEARCH));

    let response = client
        .item_search("ItemAttributes", "NotAnIndex", "golang", None)
        .await
        .unwrap();

    assert!(!response.is_valid);
    assert!(response.items.is_empty());
}

// ============================================================================
// HTTP transport
// ============================================================================

#[tokio::test]
async fn test_connection_refused_surfaces_as_http_error() {
    let transport = RedirectingTransport {
        base: "http://127.0.0.1:1".to_string(),
        inner: HttpTransport::new(),
    };
    let client = ProductClient::with_transport(test_config("US"), transport);

    let result = client.item_lookup_raw("Small", "ASIN", &["0141033576"]).await;

    assert!(matches!(
        result,
        Err(ProductError::Http(HttpError::Network(_)))
    ));
}

#[tokio::test]
async fn test_full_round_trip_against_mock_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/onca/xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = RedirectingTransport {
        base: mock_server.uri(),
        inner: HttpTransport::new(),
    };
    let client = ProductClient::with_transport(test_config("US"), transport);

    let raw = client
        .item_search_raw("ItemAttributes", "All", "golang", None)
        .await
        .unwrap();

    assert_eq!(raw.body, SEARCH_PAGE.as_bytes());
    assert_eq!(raw.response.items.len(), 2);

    let requests = mock_server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap();
    assert!(query.contains("Operation=ItemSearch"));
    assert!(query.contains("&Signature="));
}

#[tokio::test]
async fn test_service_error_status_is_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string(
            "<ItemLookupErrorResponse><Error><Code>SignatureDoesNotMatch</Code></Error></ItemLookupErrorResponse>",
        ))
        .mount(&mock_server)
        .await;

    let transport = RedirectingTransport {
        base: mock_server.uri(),
        inner: HttpTransport::new(),
    };
    let client = ProductClient::with_transport(test_config("US"), transport);

    let result = client.item_lookup("Small", "ASIN", &["0141033576"]).await;

    match result {
        Err(ProductError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 403);
            assert!(e.message.contains("SignatureDoesNotMatch"));
        }
        other => panic!("Expected HTTP response error, got {other:?}"),
    }
}
