//! Map surface the controller drives. The production adapter is a static
//! stylized map of Orange County: listing coordinates are projected into
//! percent offsets over the artwork, with everything west of the coastline
//! band pushed inland so markers never land in the ocean.

use crate::listings::Listing;

// Fallback viewport when no listing carries coordinates.
const DEFAULT_BOUNDS: Bounds = Bounds {
    min_lat: 33.4,
    max_lat: 33.8,
    min_lng: -118.1,
    max_lng: -117.6,
};

/// What the search controller needs from any map implementation.
pub trait MapAdapter {
    fn set_listings(&mut self, listings: &[Listing]);
    /// Viewport as [west, south, east, north], when one is known.
    fn current_bbox(&self) -> Option<[f64; 4]>;
    fn highlight_listing(&mut self, id: &str);
    fn clear_highlight(&mut self);
    fn focus_listing(&mut self, id: &str);
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

/// A marker placed on the static map, in percent coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub listing_id: String,
    pub left_pct: f64,
    pub top_pct: f64,
}

#[derive(Debug, Default)]
pub struct StaticMap {
    markers: Vec<Marker>,
    bounds: Option<Bounds>,
    highlighted: Option<String>,
}

impl StaticMap {
    pub fn new() -> StaticMap {
        StaticMap::default()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }
}

impl MapAdapter for StaticMap {
    fn set_listings(&mut self, listings: &[Listing]) {
        self.markers.clear();
        self.highlighted = None;

        let located: Vec<_> = listings
            .iter()
            .filter(|l| l.lat.is_some() && l.lng.is_some())
            .collect();
        if located.is_empty() {
            self.bounds = None;
            return;
        }

        let bounds = compute_bounds(&located);
        self.bounds = Some(bounds);

        let lat_range = (bounds.max_lat - bounds.min_lat).max(0.00001);
        let lng_range = (bounds.max_lng - bounds.min_lng).max(0.00001);

        for listing in located {
            let (lat, lng) = match (listing.lat, listing.lng) {
                (Some(lat), Some(lng)) => (lat, lng),
                _ => continue,
            };

            let mut left_pct = (lng - bounds.min_lng) / lng_range * 100.0;
            let top_pct = clamp_percent((bounds.max_lat - lat) / lat_range * 100.0, 4.0, 96.0);

            // Coastline runs diagonally across the artwork; keep markers
            // on the land side of it.
            let y_norm = top_pct / 100.0;
            let coastline_pct = 36.0 + y_norm * 22.0;
            if left_pct.is_finite() {
                left_pct = left_pct.max(coastline_pct);
            } else {
                left_pct = coastline_pct;
            }
            left_pct = clamp_percent(left_pct, (coastline_pct + 2.0).max(6.0), 94.0);

            self.markers.push(Marker {
                listing_id: listing.id.clone(),
                left_pct,
                top_pct,
            });
        }
    }

    fn current_bbox(&self) -> Option<[f64; 4]> {
        self.bounds
            .map(|b| [b.min_lng, b.min_lat, b.max_lng, b.max_lat])
    }

    fn highlight_listing(&mut self, id: &str) {
        if self.markers.iter().any(|m| m.listing_id == id) {
            self.highlighted = Some(id.to_string());
        }
    }

    fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    fn focus_listing(&mut self, id: &str) {
        self.highlight_listing(id);
    }
}

fn compute_bounds(listings: &[&Listing]) -> Bounds {
    let lats: Vec<f64> = listings.iter().filter_map(|l| l.lat).collect();
    let lngs: Vec<f64> = listings.iter().filter_map(|l| l.lng).collect();
    if lats.is_empty() || lngs.is_empty() {
        return DEFAULT_BOUNDS;
    }

    Bounds {
        min_lat: lats.iter().cloned().fold(f64::INFINITY, f64::min),
        max_lat: lats.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        min_lng: lngs.iter().cloned().fold(f64::INFINITY, f64::min),
        max_lng: lngs.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    }
}

fn clamp_percent(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::placeholder::placeholder_listings;

    fn located(id: &str, lat: f64, lng: f64) -> Listing {
        Listing {
            id: id.to_string(),
            price: 1_000_000,
            address: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            beds: None,
            baths: None,
            sqft: None,
            lat: Some(lat),
            lng: Some(lng),
            image: None,
            days_on_market: None,
            url: "#".to_string(),
        }
    }

    #[test]
    fn markers_stay_inside_the_frame_and_east_of_the_coast() {
        let mut map = StaticMap::new();
        map.set_listings(&placeholder_listings());

        assert_eq!(map.markers().len(), 10);
        for marker in map.markers() {
            assert!(marker.top_pct >= 4.0 && marker.top_pct <= 96.0);
            let coastline = 36.0 + (marker.top_pct / 100.0) * 22.0;
            assert!(marker.left_pct >= coastline);
            assert!(marker.left_pct <= 94.0);
        }
    }

    #[test]
    fn listings_without_coordinates_get_no_marker() {
        let mut map = StaticMap::new();
        let mut unlocated = located("a", 33.6, -117.8);
        unlocated.lat = None;
        map.set_listings(&[unlocated, located("b", 33.6, -117.8)]);

        assert_eq!(map.markers().len(), 1);
        assert_eq!(map.markers()[0].listing_id, "b");
    }

    #[test]
    fn bbox_tracks_the_listing_extent() {
        let mut map = StaticMap::new();
        map.set_listings(&[located("a", 33.5, -118.0), located("b", 33.7, -117.7)]);
        assert_eq!(map.current_bbox(), Some([-118.0, 33.5, -117.7, 33.7]));
    }

    #[test]
    fn highlight_requires_a_known_marker() {
        let mut map = StaticMap::new();
        map.set_listings(&[located("a", 33.5, -118.0)]);

        map.highlight_listing("missing");
        assert_eq!(map.highlighted(), None);

        map.highlight_listing("a");
        assert_eq!(map.highlighted(), Some("a"));
        map.clear_highlight();
        assert_eq!(map.highlighted(), None);
    }
}
