//! Serialisation helpers for filter sets: URL query strings in both
//! directions plus the shallow merge used everywhere a partial refinement
//! lands on the current search state. All four operations are total over
//! well-formed input; malformed URL values are silently dropped.

use url::form_urlencoded;

use crate::filters::model::{FilterSet, SortOrder};

/// Serialize a filter set to a query string. Unset fields are omitted,
/// the property-type list is comma-joined, booleans render as literal
/// "true"/"false". Key order is fixed so output is stable per call.
pub fn to_query_string(filters: &FilterSet) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());

    if let Some(q) = filters.q.as_deref().filter(|s| !s.is_empty()) {
        out.append_pair("q", q);
    }
    if let Some(v) = filters.min_price {
        out.append_pair("minPrice", &v.to_string());
    }
    if let Some(v) = filters.max_price {
        out.append_pair("maxPrice", &v.to_string());
    }
    if let Some(v) = filters.beds {
        out.append_pair("beds", &v.to_string());
    }
    if let Some(v) = filters.baths {
        out.append_pair("baths", &v.to_string());
    }
    if let Some(v) = filters.min_sqft {
        out.append_pair("minSqft", &v.to_string());
    }
    if let Some(v) = filters.max_hoa {
        out.append_pair("maxHOA", &v.to_string());
    }
    if let Some(v) = filters.min_year {
        out.append_pair("minYear", &v.to_string());
    }
    if let Some(v) = filters.has_pool {
        out.append_pair("hasPool", if v { "true" } else { "false" });
    }
    if let Some(v) = filters.has_view {
        out.append_pair("hasView", if v { "true" } else { "false" });
    }
    if !filters.property_type.is_empty() {
        out.append_pair("propertyType", &filters.property_type.join(","));
    }
    if let Some(sort) = filters.sort {
        out.append_pair("sort", sort.as_str());
    }
    if let Some(bbox) = filters.bbox {
        let joined = bbox.map(|v| v.to_string()).join(",");
        out.append_pair("bbox", &joined);
    }
    if let Some(v) = filters.page {
        out.append_pair("page", &v.to_string());
    }
    if let Some(v) = filters.page_size {
        out.append_pair("pageSize", &v.to_string());
    }

    out.finish()
}

/// Parse the search portion of a URL (with or without the leading '?')
/// back into a filter set. Unknown parameters are ignored, numeric values
/// that fail to parse are dropped, booleans are accepted only from the
/// literal strings "true"/"false", and `bbox` must be exactly four finite
/// floats or the whole field is discarded.
pub fn from_url_search(search: &str) -> FilterSet {
    let mut filters = FilterSet::default();
    let raw = search.trim_start_matches('?');

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        let value = value.as_ref();
        match key.as_ref() {
            "q" => {
                if !value.is_empty() {
                    filters.q = Some(value.to_string());
                }
            }
            "minPrice" => filters.min_price = value.parse().ok(),
            "maxPrice" => filters.max_price = value.parse().ok(),
            "beds" => filters.beds = value.parse().ok(),
            "baths" => {
                filters.baths = value
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v >= 0.0);
            }
            "minSqft" => filters.min_sqft = value.parse().ok(),
            "maxHOA" => filters.max_hoa = value.parse().ok(),
            "minYear" => filters.min_year = value.parse().ok(),
            "hasPool" => filters.has_pool = parse_bool(value),
            "hasView" => filters.has_view = parse_bool(value),
            "propertyType" => {
                filters.property_type = value
                    .split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "sort" => filters.sort = SortOrder::parse(value),
            "bbox" => filters.bbox = parse_bbox(value),
            "page" => filters.page = value.parse().ok(),
            "pageSize" => filters.page_size = value.parse().ok(),
            _ => {}
        }
    }

    filters
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_bbox(raw: &str) -> Option<[f64; 4]> {
    let parts: Vec<f64> = raw
        .split(',')
        .filter_map(|part| part.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect();

    // Count mismatch after filtering means something failed to parse.
    if parts.len() == 4 && raw.split(',').count() == 4 {
        Some([parts[0], parts[1], parts[2], parts[3]])
    } else {
        None
    }
}

/// Shallow merge of a partial refinement onto a base filter set. Set patch
/// fields overwrite, unset patch fields leave the base value intact, and
/// the property-type list replaces the base list entirely.
pub fn merge(base: &FilterSet, patch: &FilterSet) -> FilterSet {
    let mut merged = base.clone();

    if patch.q.is_some() {
        merged.q = patch.q.clone();
    }
    if patch.min_price.is_some() {
        merged.min_price = patch.min_price;
    }
    if patch.max_price.is_some() {
        merged.max_price = patch.max_price;
    }
    if patch.beds.is_some() {
        merged.beds = patch.beds;
    }
    if patch.baths.is_some() {
        merged.baths = patch.baths;
    }
    if patch.min_sqft.is_some() {
        merged.min_sqft = patch.min_sqft;
    }
    if patch.max_hoa.is_some() {
        merged.max_hoa = patch.max_hoa;
    }
    if patch.min_year.is_some() {
        merged.min_year = patch.min_year;
    }
    if patch.has_pool.is_some() {
        merged.has_pool = patch.has_pool;
    }
    if patch.has_view.is_some() {
        merged.has_view = patch.has_view;
    }
    if !patch.property_type.is_empty() {
        merged.property_type = patch.property_type.clone();
    }
    if patch.sort.is_some() {
        merged.sort = patch.sort;
    }
    if patch.bbox.is_some() {
        merged.bbox = patch.bbox;
    }
    if patch.page.is_some() {
        merged.page = patch.page;
    }
    if patch.page_size.is_some() {
        merged.page_size = patch.page_size;
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_filters() -> FilterSet {
        FilterSet {
            q: Some("Laguna Beach".to_string()),
            min_price: Some(800_000),
            max_price: Some(1_200_000),
            beds: Some(3),
            baths: Some(2.5),
            min_sqft: Some(1500),
            max_hoa: Some(400),
            min_year: Some(2005),
            has_pool: Some(true),
            has_view: Some(false),
            property_type: vec!["house".to_string(), "condo".to_string()],
            sort: Some(SortOrder::Newest),
            bbox: Some([-118.0, 33.4, -117.5, 33.8]),
            page: Some(2),
            page_size: Some(20),
        }
    }

    #[test]
    fn query_string_round_trip() {
        let filters = sample_filters();
        let qs = to_query_string(&filters);
        let parsed = from_url_search(&qs);
        assert_eq!(parsed, filters);
    }

    #[test]
    fn query_string_skips_unset_fields() {
        let filters = FilterSet {
            beds: Some(3),
            has_pool: Some(true),
            ..FilterSet::default()
        };
        let qs = to_query_string(&filters);
        assert_eq!(qs, "beds=3&hasPool=true");
    }

    #[test]
    fn unknown_params_are_ignored() {
        let parsed = from_url_search("?beds=3&utm_source=newsletter&waterfront=yes");
        assert_eq!(parsed.beds, Some(3));
        assert!(parsed.q.is_none());
    }

    #[test]
    fn booleans_only_from_literals() {
        let parsed = from_url_search("hasPool=1&hasView=false");
        assert_eq!(parsed.has_pool, None);
        assert_eq!(parsed.has_view, Some(false));
    }

    #[test]
    fn malformed_numbers_are_dropped() {
        let parsed = from_url_search("minPrice=abc&beds=-2&baths=NaN");
        assert_eq!(parsed.min_price, None);
        assert_eq!(parsed.beds, None);
        assert_eq!(parsed.baths, None);
    }

    #[test]
    fn bbox_requires_four_finite_floats() {
        assert_eq!(
            from_url_search("bbox=-118.0,33.4,-117.5,33.8").bbox,
            Some([-118.0, 33.4, -117.5, 33.8])
        );
        assert_eq!(from_url_search("bbox=-118.0,33.4,-117.5").bbox, None);
        assert_eq!(from_url_search("bbox=-118.0,33.4,-117.5,abc").bbox, None);
        assert_eq!(from_url_search("bbox=1,2,3,4,5").bbox, None);
    }

    #[test]
    fn merge_overwrites_set_fields_and_keeps_the_rest() {
        let base = FilterSet {
            q: Some("Irvine".to_string()),
            max_price: Some(1_000_000),
            property_type: vec!["house".to_string(), "condo".to_string()],
            ..FilterSet::default()
        };
        let patch = FilterSet {
            property_type: vec!["townhome".to_string()],
            beds: Some(4),
            ..FilterSet::default()
        };

        let merged = merge(&base, &patch);
        assert_eq!(merged.q.as_deref(), Some("Irvine"));
        assert_eq!(merged.max_price, Some(1_000_000));
        assert_eq!(merged.beds, Some(4));
        // Lists replace entirely, no concatenation.
        assert_eq!(merged.property_type, vec!["townhome".to_string()]);
    }

    #[test]
    fn merge_ignores_unset_patch_fields() {
        let base = sample_filters();
        let merged = merge(&base, &FilterSet::default());
        assert_eq!(merged, base);
    }
}
