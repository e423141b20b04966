//! Typed records decoded from Product Advertising API XML responses.
//!
//! Decoding is lenient: unknown elements are ignored and missing elements
//! take their zero value (empty string, empty list, `0`, `false`). Only a
//! document that is not well-formed XML fails to decode.
//!
//! Numeric fields are parsed from element text. Text that is empty or not a
//! number becomes `0`; numbers too large for the field saturate at the
//! field's maximum. Attributes such as `Units="pixels"` are ignored.
//!
//! Decoding stops at the end of the root element. Anything after it, even
//! a stray closing tag, is not read and does not cause an error.
//!
//! # Example
//!
//! ```rust
//! use amazon_product_api::product::ItemLookupResponse;
//!
//! let xml = br#"<ItemLookupResponse>
//!   <Items>
//!     <Request><IsValid>True</IsValid></Request>
//!     <Item><ASIN>0141033576</ASIN></Item>
//!   </Items>
//! </ItemLookupResponse>"#;
//!
//! let response = ItemLookupResponse::from_xml(xml).unwrap();
//! assert!(response.is_valid);
//! assert_eq!(response.items[0].asin, "0141033576");
//! ```

use std::num::IntErrorKind;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::product::errors::DecodeError;

/// Decodes an XML response body into `T`.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not well-formed XML.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    Ok(quick_xml::de::from_reader(body)?)
}

/// Common view over decoded responses.
pub trait ItemResponse {
    /// Whether the service accepted the request parameters.
    ///
    /// When this is `false` the item list is empty; check it before trusting
    /// item data.
    fn is_valid(&self) -> bool;

    /// The items in document order.
    fn items(&self) -> &[Item];
}

/// Decoded `ItemLookupResponse` document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ItemsEnvelope")]
pub struct ItemLookupResponse {
    /// The service's `Items > Request > IsValid` flag.
    pub is_valid: bool,
    /// The looked-up items, in document order.
    pub items: Vec<Item>,
}

impl ItemLookupResponse {
    /// Decodes an `ItemLookupResponse` XML document.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not well-formed XML.
    pub fn from_xml(body: &[u8]) -> Result<Self, DecodeError> {
        decode(body)
    }
}

impl From<ItemsEnvelope> for ItemLookupResponse {
    fn from(envelope: ItemsEnvelope) -> Self {
        let items = envelope.items;
        Self {
            is_valid: items.request.is_valid,
            items: items.items,
        }
    }
}

impl ItemResponse for ItemLookupResponse {
    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn items(&self) -> &[Item] {
        &self.items
    }
}

/// Decoded `ItemSearchResponse` document.
///
/// Only the first page of results is returned; `total_pages` and
/// `more_search_results_url` describe what else exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ItemsEnvelope")]
pub struct ItemSearchResponse {
    /// The service's `Items > Request > IsValid` flag.
    pub is_valid: bool,
    /// Total number of matching items.
    pub total_results: u32,
    /// Total number of result pages.
    pub total_pages: u32,
    /// Link to the full result listing on the marketplace site.
    pub more_search_results_url: String,
    /// Items on this page, in document order.
    pub items: Vec<Item>,
}

impl ItemSearchResponse {
    /// Decodes an `ItemSearchResponse` XML document.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not well-formed XML.
    pub fn from_xml(body: &[u8]) -> Result<Self, DecodeError> {
        decode(body)
    }
}

impl From<ItemsEnvelope> for ItemSearchResponse {
    fn from(envelope: ItemsEnvelope) -> Self {
        let items = envelope.items;
        Self {
            is_valid: items.request.is_valid,
            total_results: items.total_results,
            total_pages: items.total_pages,
            more_search_results_url: items.more_search_results_url,
            items: items.items,
        }
    }
}

impl ItemResponse for ItemSearchResponse {
    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn items(&self) -> &[Item] {
        &self.items
    }
}

/// The `<Items>` block shared by both response documents.
#[derive(Debug, Default, Deserialize)]
struct ItemsEnvelope {
    #[serde(rename = "Items", default)]
    items: ItemsElement,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ItemsElement {
    #[serde(rename = "Request")]
    request: RequestElement,
    #[serde(rename = "TotalResults", deserialize_with = "saturating")]
    total_results: u32,
    #[serde(rename = "TotalPages", deserialize_with = "saturating")]
    total_pages: u32,
    #[serde(rename = "MoreSearchResultsUrl")]
    more_search_results_url: String,
    #[serde(rename = "Item")]
    items: Vec<Item>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RequestElement {
    #[serde(rename = "IsValid", deserialize_with = "flag")]
    is_valid: bool,
}

/// A catalog item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Catalog identifier.
    #[serde(rename = "ASIN")]
    pub asin: String,
    /// Canonical item URL.
    #[serde(rename = "URL")]
    pub url: String,
    /// Product detail page URL.
    #[serde(rename = "DetailPageURL")]
    pub detail_page_url: String,
    /// Descriptive attributes.
    #[serde(rename = "ItemAttributes")]
    pub item_attributes: ItemAttributes,
    /// Small image.
    #[serde(rename = "SmallImage")]
    pub small_image: Image,
    /// Medium image.
    #[serde(rename = "MediumImage")]
    pub medium_image: Image,
    /// Large image.
    #[serde(rename = "LargeImage")]
    pub large_image: Image,
    /// Named links (`ItemLinks > ItemLink`).
    #[serde(rename = "ItemLinks", deserialize_with = "item_links")]
    pub item_links: Vec<ItemLink>,
    /// Customer reviews iframe URL (`CustomerReviews > IFrameURL`).
    #[serde(rename = "CustomerReviews", deserialize_with = "customer_reviews_url")]
    pub customer_reviews_url: String,
}

/// The `ItemAttributes` response group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ItemAttributes {
    /// Item title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Every `Author` element, in document order.
    #[serde(rename = "Author")]
    pub authors: Vec<String>,
    /// Brand name.
    #[serde(rename = "Brand")]
    pub brand: String,
    /// Manufacturer name.
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    /// Record or publishing label.
    #[serde(rename = "Label")]
    pub label: String,
    /// Publisher name.
    #[serde(rename = "Publisher")]
    pub publisher: String,
    /// Film or music studio.
    #[serde(rename = "Studio")]
    pub studio: String,
    /// Primary EAN barcode.
    #[serde(rename = "EAN")]
    pub ean: String,
    /// Every EAN in `EANList > EANListElement`.
    #[serde(rename = "EANList", deserialize_with = "ean_list")]
    pub eans: Vec<String>,
    /// ISBN, for books.
    #[serde(rename = "ISBN")]
    pub isbn: String,
    /// Primary UPC barcode.
    #[serde(rename = "UPC")]
    pub upc: String,
    /// Every UPC in `UPCList > UPCListElement`.
    #[serde(rename = "UPCList", deserialize_with = "upc_list")]
    pub upcs: Vec<String>,
    /// Product group, e.g. `Book`.
    #[serde(rename = "ProductGroup")]
    pub product_group: String,
    /// Product type name, e.g. `ABIS_BOOK`.
    #[serde(rename = "ProductTypeName")]
    pub product_type_name: String,
    /// Binding or format, e.g. `Paperback`.
    #[serde(rename = "Binding")]
    pub binding: String,
    /// Edition description.
    #[serde(rename = "Edition")]
    pub edition: String,
    /// Publication date as sent, e.g. `2010-03-04`.
    #[serde(rename = "PublicationDate")]
    pub publication_date: String,
    /// Every `Feature` bullet, in document order.
    #[serde(rename = "Feature")]
    pub features: Vec<String>,
    /// Languages in `Languages > Language`.
    #[serde(rename = "Languages", deserialize_with = "languages")]
    pub languages: Vec<Language>,
    /// Manufacturer list price.
    #[serde(rename = "ListPrice")]
    pub list_price: Price,
    /// Dimensions of the item itself.
    #[serde(rename = "ItemDimensions")]
    pub item_dimensions: Dimensions,
    /// Dimensions of the shipping package.
    #[serde(rename = "PackageDimensions")]
    pub package_dimensions: Dimensions,
}

/// A price as reported by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Price {
    /// Amount in the currency's smallest unit (e.g. cents).
    #[serde(rename = "Amount", deserialize_with = "saturating")]
    pub amount: u32,
    /// ISO 4217 currency code.
    #[serde(rename = "CurrencyCode")]
    pub currency_code: String,
    /// Display string, e.g. `$12.99`.
    #[serde(rename = "FormattedPrice")]
    pub formatted_price: String,
}

/// Physical dimensions, in the units the service reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    /// Height, typically in hundredths of an inch or pound.
    #[serde(rename = "Height", deserialize_with = "saturating")]
    pub height: u16,
    /// Width, typically in hundredths of an inch or pound.
    #[serde(rename = "Width", deserialize_with = "saturating")]
    pub width: u16,
    /// Length, typically in hundredths of an inch or pound.
    #[serde(rename = "Length", deserialize_with = "saturating")]
    pub length: u16,
    /// Weight, typically in hundredths of an inch or pound.
    #[serde(rename = "Weight", deserialize_with = "saturating")]
    pub weight: u16,
}

/// An image descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Image location.
    #[serde(rename = "URL")]
    pub url: String,
    /// Height in pixels.
    #[serde(rename = "Height", deserialize_with = "saturating")]
    pub height: u16,
    /// Width in pixels.
    #[serde(rename = "Width", deserialize_with = "saturating")]
    pub width: u16,
}

/// A named link related to an item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ItemLink {
    /// What the link points to, e.g. `Add To Wishlist`.
    #[serde(rename = "Description")]
    pub description: String,
    /// Link target.
    #[serde(rename = "URL")]
    pub url: String,
}

/// A language the item is available in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Language {
    /// Language name, e.g. `English`.
    #[serde(rename = "Name")]
    pub name: String,
    /// Role of the language, e.g. `Published`.
    #[serde(rename = "Type")]
    pub kind: String,
}

/// Integer widths that saturate instead of failing.
trait Saturating: TryFrom<u64> + Default {
    const CEILING: Self;
}

impl Saturating for u16 {
    const CEILING: Self = Self::MAX;
}

impl Saturating for u32 {
    const CEILING: Self = Self::MAX;
}

fn parse_saturating<T: Saturating>(text: &str) -> T {
    match text.trim().parse::<u64>() {
        Ok(value) => T::try_from(value).unwrap_or(T::CEILING),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => T::CEILING,
        Err(_) => T::default(),
    }
}

/// Text content of an element, ignoring its attributes.
#[derive(Default, Deserialize)]
#[serde(default)]
struct Text {
    #[serde(rename = "$text")]
    value: String,
}

fn saturating<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Saturating,
{
    let text = Text::deserialize(deserializer)?;
    Ok(parse_saturating(&text.value))
}

// The service writes booleans as `True`/`False`
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Text::deserialize(deserializer)?;
    let value = text.value.trim();
    Ok(value.eq_ignore_ascii_case("true") || value == "1")
}

fn ean_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct List {
        #[serde(rename = "EANListElement", default)]
        elements: Vec<String>,
    }
    Ok(List::deserialize(deserializer)?.elements)
}

fn upc_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct List {
        #[serde(rename = "UPCListElement", default)]
        elements: Vec<String>,
    }
    Ok(List::deserialize(deserializer)?.elements)
}

fn languages<'de, D>(deserializer: D) -> Result<Vec<Language>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct List {
        #[serde(rename = "Language", default)]
        elements: Vec<Language>,
    }
    Ok(List::deserialize(deserializer)?.elements)
}

fn item_links<'de, D>(deserializer: D) -> Result<Vec<ItemLink>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct List {
        #[serde(rename = "ItemLink", default)]
        elements: Vec<ItemLink>,
    }
    Ok(List::deserialize(deserializer)?.elements)
}

fn customer_reviews_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct CustomerReviews {
        #[serde(rename = "IFrameURL", default)]
        iframe_url: String,
    }
    Ok(CustomerReviews::deserialize(deserializer)?.iframe_url)
}
