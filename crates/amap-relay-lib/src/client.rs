//! Upstream client for the Amap REST API.
//!
//! Each operation issues exactly one GET against the provider and relays the
//! parsed JSON envelope unchanged. The provider reports logical failures
//! in-band with HTTP 200, signalling them only through the envelope's
//! `status` field, so the client bridges that into the library error type.
//! Failed calls are surfaced immediately; the provider does not document
//! retry-safe semantics for these operations.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::Settings;
use crate::error::{Error, Result};

/// Fallback error text when a failed envelope carries no `info` field.
const NO_INFO_PLACEHOLDER: &str = "provider returned no info";

/// Sort order for POI search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortRule {
    /// Order results by distance.
    #[default]
    Distance,
    /// Order results by the provider's relevance weighting.
    Weight,
}

impl SortRule {
    /// Parse a sort rule from its wire representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "distance" => Some(SortRule::Distance),
            "weight" => Some(SortRule::Weight),
            _ => None,
        }
    }

    /// Wire representation sent to the provider.
    pub fn as_str(self) -> &'static str {
        match self {
            SortRule::Distance => "distance",
            SortRule::Weight => "weight",
        }
    }
}

impl std::fmt::Display for SortRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for a POI keyword search.
#[derive(Debug, Clone)]
pub struct PoiSearch {
    /// Search keywords.
    pub keywords: String,
    /// City name or code; omitted from the request when `None`.
    pub city: Option<String>,
    /// District name or code; omitted from the request when `None`.
    pub district: Option<String>,
    /// 1-based result page.
    pub page: u32,
    /// Records per page, 1 to 50.
    pub offset: u32,
    /// `|`-delimited POI category codes; omitted when `None`.
    pub types: Option<String>,
    /// Result ordering.
    pub sortrule: SortRule,
}

impl PoiSearch {
    /// Search with the provider defaults: first page, 20 records, distance
    /// ordering.
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            city: None,
            district: None,
            page: 1,
            offset: 20,
            types: None,
            sortrule: SortRule::Distance,
        }
    }
}

/// Client for the three relayed Amap operations.
///
/// Owns a shared `reqwest::Client`; the injected settings are immutable for
/// the lifetime of the process.
#[derive(Debug)]
pub struct AmapClient {
    http: Client,
    settings: Settings,
}

impl AmapClient {
    /// Build a client around the given settings.
    pub fn new(settings: Settings) -> Result<Self> {
        let http = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self { http, settings })
    }

    /// The settings this client was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Look up administrative districts matching `keywords`.
    ///
    /// An empty `keywords` returns the provider's top-level listing.
    pub async fn get_districts(&self, keywords: &str) -> Result<Value> {
        let params = vec![
            ("key", self.settings.api_key().to_string()),
            ("keywords", keywords.to_string()),
            ("subdistrict", "1".to_string()),
            ("extensions", "base".to_string()),
        ];
        self.call("district lookup", "/config/district", &params)
            .await
    }

    /// Search points of interest by keyword.
    pub async fn search_poi(&self, search: &PoiSearch) -> Result<Value> {
        let params = search_params(self.settings.api_key(), search);
        self.call("poi search", "/place/text", &params).await
    }

    /// Fetch the detail record for a single POI id.
    pub async fn get_poi_detail(&self, id: &str) -> Result<Value> {
        let params = vec![
            ("key", self.settings.api_key().to_string()),
            ("id", id.to_string()),
            ("extensions", "all".to_string()),
        ];
        self.call("poi detail lookup", "/place/detail", &params)
            .await
    }

    async fn call(
        &self,
        operation: &'static str,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Value> {
        let url = format!("{}{}", self.settings.base_url(), path);
        debug!(operation, url = %url, "calling provider");

        let response = self.http.get(&url).query(params).send().await?;
        let envelope = response.json::<Value>().await?;
        check_envelope(operation, envelope)
    }
}

fn user_agent() -> String {
    format!(
        "amap-relay-lib/{version} ({repo})",
        version = env!("CARGO_PKG_VERSION"),
        repo = "https://github.com/amap-relay/amap-relay-rs"
    )
}

/// Assemble the query parameters for a POI search.
///
/// `city`, `district`, and `types` are appended only when the caller supplied
/// them; the provider treats an empty value differently from an absent one.
fn search_params(key: &str, search: &PoiSearch) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("key", key.to_string()),
        ("keywords", search.keywords.clone()),
        ("page", search.page.to_string()),
        ("offset", search.offset.to_string()),
        ("extensions", "all".to_string()),
        ("sortrule", search.sortrule.to_string()),
    ];

    if let Some(city) = &search.city {
        params.push(("city", city.clone()));
    }
    if let Some(district) = &search.district {
        params.push(("district", district.clone()));
    }
    if let Some(types) = &search.types {
        params.push(("types", types.clone()));
    }

    params
}

/// Normalize the provider's in-band failure signal.
///
/// The envelope is returned unchanged when `status` is the literal string
/// `"1"`; anything else becomes an upstream error carrying the provider's
/// `info` text.
fn check_envelope(operation: &'static str, envelope: Value) -> Result<Value> {
    match envelope.get("status").and_then(Value::as_str) {
        Some("1") => Ok(envelope),
        _ => {
            let info = envelope
                .get("info")
                .and_then(Value::as_str)
                .unwrap_or(NO_INFO_PLACEHOLDER)
                .to_string();
            Err(Error::Upstream { operation, info })
        }
    }
}
