//! Regex heuristics that turn a plain-English search phrase into a
//! structured filter set. Every category is matched independently with
//! first-match-wins inside the category, so "over" and "under" appearing
//! in the same phrase can legitimately produce both bounds.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filters::model::{FilterSet, SortOrder};

static MAX_PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:under|below|max(?:imum)?|<=?|up to)\s*\$?\s*([\d.,]+)\s*(m|k|million|thousand)?")
        .unwrap()
});

static MIN_PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:over|above|min(?:imum)?|>=?)\s*\$?\s*([\d.,]+)\s*(m|k|million|thousand)?")
        .unwrap()
});

static BEDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*\+?\s*(?:bed|bd|br|bedroom)s?").unwrap());

static BATHS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*\+?\s*(?:bath|ba|bathroom)s?").unwrap());

static SQFT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:over|above|min(?:imum)?|at least)?\s*([\d.,]+)\s*(?:sq\s*ft|square\s*feet|sf)")
        .unwrap()
});

static HOA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"hoa\s+(?:fees?|dues?)\s*(?:under|below|<=?)\s*\$?\s*([\d.,]+)").unwrap()
});

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:built|after)\s*(?:in\s*)?((?:19|20)\d{2})").unwrap());

static POOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"pool").unwrap());

static VIEW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:view|ocean view|coastal view|city view)\b").unwrap());

static SORT_NEWEST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"newest|latest").unwrap());

static SORT_PRICE_ASC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"low(?:est)?\s+price|cheapest|price\s+asc").unwrap());

static SORT_PRICE_DESC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"high(?:est)?\s+price|price\s+desc").unwrap());

/// Keyword-to-tag table for property types; each entry contributes its tag
/// once, in table order.
static PROPERTY_TYPE_KEYWORDS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"single\s*family|house|detached").unwrap(), "house"),
        (Regex::new(r"condo|minium").unwrap(), "condo"),
        (Regex::new(r"town\s*home|town\s*house").unwrap(), "townhome"),
        (Regex::new(r"duplex").unwrap(), "duplex"),
        (Regex::new(r"loft").unwrap(), "loft"),
        (Regex::new(r"land|lot").unwrap(), "land"),
    ]
});

/// A comma-separated fragment that trips none of these is treated as a
/// location token and kept for backend fuzzy matching.
static FRAGMENT_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

static FRAGMENT_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(bed|bath|pool|price|hoa|view|min|max|under|over|above|newest|latest|cheap|expensive|sq|sf|built|year|condo|house|townhome|duplex|loft|land)",
    )
    .unwrap()
});

/// Convert a matched amount such as "1.2" + "m" or "850" + "k" to currency
/// units. Commas are always thousands separators; periods are treated as
/// separators only when the value carries more than one of them (so "1.2m"
/// stays a decimal while "1.200.000" collapses to an integer).
pub fn parse_amount(raw: &str, unit: Option<&str>) -> Option<u64> {
    let mut cleaned = raw.replace(',', "");
    if cleaned.matches('.').count() > 1 {
        cleaned = cleaned.replace('.', "");
    }

    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    let multiplier = match unit.map(str::to_lowercase).as_deref() {
        Some(token) if token.starts_with('m') => 1_000_000.0,
        Some(token) if token.starts_with('k') || token.contains("thousand") => 1_000.0,
        _ => 1.0,
    };

    Some((value * multiplier).round() as u64)
}

/// Parse a free-text search phrase into a partial filter set. Pure and
/// deterministic; categories with no match are simply left unset, and
/// empty input yields an empty filter set.
pub fn parse_user_query(input: &str) -> FilterSet {
    let text = input.trim();
    if text.is_empty() {
        return FilterSet::default();
    }

    let mut filters = FilterSet::default();
    let lower = text.to_lowercase();

    let max_price_match = MAX_PRICE_RE.captures(&lower);
    if let Some(caps) = &max_price_match {
        filters.max_price = parse_amount(&caps[1], caps.get(2).map(|m| m.as_str()));
    }

    let min_price_match = MIN_PRICE_RE.captures(&lower);
    if let Some(caps) = &min_price_match {
        filters.min_price = parse_amount(&caps[1], caps.get(2).map(|m| m.as_str()));
    }

    if let Some(caps) = BEDS_RE.captures(&lower) {
        filters.beds = caps[1].parse().ok();
    }

    if let Some(caps) = BATHS_RE.captures(&lower) {
        filters.baths = caps[1].parse().ok();
    }

    if let Some(caps) = SQFT_RE.captures(&lower) {
        filters.min_sqft = parse_amount(&caps[1], None);
    }

    if let Some(caps) = HOA_RE.captures(&lower) {
        filters.max_hoa = parse_amount(&caps[1], None);
    }

    if let Some(caps) = YEAR_RE.captures(&lower) {
        filters.min_year = caps[1].parse().ok();
    }

    if POOL_RE.is_match(&lower) {
        filters.has_pool = Some(true);
    }
    if VIEW_RE.is_match(&lower) {
        filters.has_view = Some(true);
    }

    if SORT_NEWEST_RE.is_match(&lower) {
        filters.sort = Some(SortOrder::Newest);
    } else if SORT_PRICE_ASC_RE.is_match(&lower) {
        filters.sort = Some(SortOrder::PriceAsc);
    } else if SORT_PRICE_DESC_RE.is_match(&lower) {
        filters.sort = Some(SortOrder::PriceDesc);
    }

    let mut seen_types = Vec::new();
    for (pattern, tag) in PROPERTY_TYPE_KEYWORDS.iter() {
        if pattern.is_match(&lower) && !seen_types.contains(&tag.to_string()) {
            seen_types.push(tag.to_string());
        }
    }
    if !seen_types.is_empty() {
        filters.property_type = seen_types;
    }

    // Whatever is left after pulling out recognised fragments becomes the
    // location/free-text remainder.
    let location_pieces: Vec<&str> = text
        .split([',', ';'])
        .map(str::trim)
        .filter(|piece| {
            !piece.is_empty()
                && !FRAGMENT_DIGIT_RE.is_match(piece)
                && !FRAGMENT_KEYWORD_RE.is_match(piece)
        })
        .collect();

    if !location_pieces.is_empty() {
        filters.q = Some(location_pieces.join(", "));
    } else if max_price_match.is_none() && min_price_match.is_none() {
        // Keep the whole phrase so the backend still has something to
        // fuzzy-match on.
        filters.q = Some(text.to_string());
    }

    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_combined_refinement_phrase() {
        let filters = parse_user_query("HB or Newport, under 1.2M, 3+ beds, pool");
        assert_eq!(filters.q.as_deref(), Some("HB or Newport"));
        assert_eq!(filters.max_price, Some(1_200_000));
        assert_eq!(filters.beds, Some(3));
        assert_eq!(filters.has_pool, Some(true));
    }

    #[test]
    fn price_units_multiply_correctly() {
        assert_eq!(parse_amount("1.2", Some("m")), Some(1_200_000));
        assert_eq!(parse_amount("950", Some("k")), Some(950_000));
        assert_eq!(parse_amount("2", Some("million")), Some(2_000_000));
        assert_eq!(parse_amount("850", Some("thousand")), Some(850_000));
        assert_eq!(parse_amount("750000", None), Some(750_000));
    }

    #[test]
    fn separators_are_stripped_before_parsing() {
        assert_eq!(parse_amount("1,200,000", None), Some(1_200_000));
        assert_eq!(parse_amount("1.200.000", None), Some(1_200_000));
        assert_eq!(parse_amount("1.2", Some("m")), Some(1_200_000));
    }

    #[test]
    fn price_ceiling_phrases() {
        assert_eq!(parse_user_query("under 1.2m").max_price, Some(1_200_000));
        assert_eq!(parse_user_query("below 950k").max_price, Some(950_000));
        assert_eq!(parse_user_query("max 2 million").max_price, Some(2_000_000));
        assert_eq!(parse_user_query("up to 800000").max_price, Some(800_000));
    }

    #[test]
    fn price_floor_phrases() {
        assert_eq!(parse_user_query("over 800k").min_price, Some(800_000));
        assert_eq!(parse_user_query("above 1.3m").min_price, Some(1_300_000));
        let only_max = parse_user_query("under 1.2m");
        assert_eq!(only_max.min_price, None);
    }

    #[test]
    fn both_directions_in_one_phrase_set_both_bounds() {
        let filters = parse_user_query("over 800k and under 1.5m");
        assert_eq!(filters.min_price, Some(800_000));
        assert_eq!(filters.max_price, Some(1_500_000));
    }

    #[test]
    fn beds_and_baths() {
        assert_eq!(parse_user_query("3 beds").beds, Some(3));
        assert_eq!(parse_user_query("4br").beds, Some(4));
        assert_eq!(parse_user_query("2.5 baths").baths, Some(2.5));
        assert_eq!(parse_user_query("2+ bathrooms").baths, Some(2.0));
    }

    #[test]
    fn sqft_hoa_and_year() {
        assert_eq!(parse_user_query("over 1500 sqft").min_sqft, Some(1500));
        assert_eq!(parse_user_query("at least 2,000 sq ft").min_sqft, Some(2000));
        assert_eq!(parse_user_query("hoa fees under 350").max_hoa, Some(350));
        assert_eq!(parse_user_query("built after 2015").min_year, Some(2015));
        assert_eq!(parse_user_query("built in 1998").min_year, Some(1998));
    }

    #[test]
    fn amenity_flags() {
        assert_eq!(parse_user_query("needs a pool").has_pool, Some(true));
        assert_eq!(parse_user_query("ocean view please").has_view, Some(true));
        let neither = parse_user_query("Costa Mesa");
        assert_eq!(neither.has_pool, None);
        assert_eq!(neither.has_view, None);
    }

    #[test]
    fn sort_intent() {
        assert_eq!(parse_user_query("newest first").sort, Some(SortOrder::Newest));
        assert_eq!(parse_user_query("cheapest homes").sort, Some(SortOrder::PriceAsc));
        assert_eq!(
            parse_user_query("highest price first").sort,
            Some(SortOrder::PriceDesc)
        );
    }

    #[test]
    fn property_types_collect_in_first_match_order() {
        let filters = parse_user_query("condo or townhouse, maybe a house");
        assert_eq!(
            filters.property_type,
            vec!["house".to_string(), "condo".to_string(), "townhome".to_string()]
        );
    }

    #[test]
    fn whole_text_kept_when_nothing_matches() {
        let filters = parse_user_query("somewhere walkable near the pier");
        assert_eq!(filters.q.as_deref(), Some("somewhere walkable near the pier"));
    }

    #[test]
    fn price_only_queries_do_not_fall_back_to_whole_text() {
        let filters = parse_user_query("under 900k");
        assert_eq!(filters.q, None);
        assert_eq!(filters.max_price, Some(900_000));
    }

    #[test]
    fn empty_input_yields_empty_filters() {
        assert!(parse_user_query("").is_empty());
        assert!(parse_user_query("   ").is_empty());
    }
}
