use serde::{Deserialize, Serialize};

/// Sort intent carried in a filter set. The wire spellings ("newest",
/// "priceAsc", "priceDesc") are shared by the URL, the session store,
/// and the search proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::PriceAsc => "priceAsc",
            SortOrder::PriceDesc => "priceDesc",
        }
    }

    /// Parse a wire spelling; anything unknown is dropped by the caller.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "newest" => Some(SortOrder::Newest),
            "priceAsc" => Some(SortOrder::PriceAsc),
            "priceDesc" => Some(SortOrder::PriceDesc),
            _ => None,
        }
    }
}

/// Structured search intent. Every field is optional; unset fields are
/// omitted from query strings and session JSON rather than stored as null.
/// Numeric fields are non-negative by construction (unsigned types); `bbox`
/// always holds exactly four finite numbers in [west, south, east, north]
/// order when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<u32>,
    // Half baths are a thing, so baths allows decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sqft: Option<u64>,
    #[serde(rename = "maxHOA", skip_serializing_if = "Option::is_none")]
    pub max_hoa: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_pool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_view: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_type: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl FilterSet {
    /// True when no filter has been captured at all.
    pub fn is_empty(&self) -> bool {
        *self == FilterSet::default()
    }
}
