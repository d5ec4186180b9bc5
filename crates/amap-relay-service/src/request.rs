//! Query types and validation for the relay endpoints.

use serde::Deserialize;

use amap_relay_lib::{PoiSearch, SortRule};

use crate::reply::ErrorReply;

/// Validation for query types.
///
/// Implementations check every documented constraint and return an
/// [`ErrorReply`] before any upstream call is made.
pub trait Validate {
    /// Validate the query, returning an error reply if invalid.
    fn validate(&self) -> Result<(), ErrorReply>;
}

/// Query parameters for `GET /api/v1/districts`.
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictQuery {
    /// District name or code; empty returns the provider's top-level listing.
    #[serde(default)]
    pub keywords: String,
}

/// Query parameters for `GET /api/v1/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Search keywords.
    pub keywords: String,

    /// City name or code.
    pub city: Option<String>,

    /// District name or code.
    pub district: Option<String>,

    /// 1-based result page.
    #[serde(default = "default_page")]
    pub page: u32,

    /// Records per page, 1 to 50.
    #[serde(default = "default_offset")]
    pub offset: u32,

    /// `|`-delimited POI category codes.
    pub types: Option<String>,

    /// Result ordering: "distance" or "weight".
    #[serde(default = "default_sortrule")]
    pub sortrule: String,
}

fn default_page() -> u32 {
    1
}

fn default_offset() -> u32 {
    20
}

fn default_sortrule() -> String {
    "distance".to_string()
}

impl Validate for SearchQuery {
    fn validate(&self) -> Result<(), ErrorReply> {
        if self.page == 0 {
            return Err(ErrorReply::new("The 'page' parameter must be at least 1"));
        }

        if self.offset == 0 {
            return Err(ErrorReply::new("The 'offset' parameter must be at least 1"));
        }

        if self.offset > 50 {
            return Err(ErrorReply::new("The 'offset' parameter cannot exceed 50"));
        }

        if SortRule::parse(&self.sortrule).is_none() {
            return Err(ErrorReply::new(
                "The 'sortrule' parameter must be either 'distance' or 'weight'",
            ));
        }

        Ok(())
    }
}

impl SearchQuery {
    /// Convert to the library's search request.
    ///
    /// Callers validate first; an unrecognized sortrule falls back to the
    /// default ordering.
    pub fn to_search(&self) -> PoiSearch {
        PoiSearch {
            keywords: self.keywords.clone(),
            city: self.city.clone(),
            district: self.district.clone(),
            page: self.page,
            offset: self.offset,
            types: self.types.clone(),
            sortrule: SortRule::parse(&self.sortrule).unwrap_or_default(),
        }
    }
}
