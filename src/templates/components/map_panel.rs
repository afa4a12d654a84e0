use maud::{html, Markup};

use crate::listings::Listing;
use crate::search::map::StaticMap;
use crate::templates::components::listing_card::{address_label, meta_line, price_label};

const PREVIEW_PLACEHOLDER: &str = "assets/backgrounds/placeholder-bg.webp";

/// The stylized map with one positioned marker per located listing. Each
/// marker carries a hover preview card.
pub fn map_panel(map: &StaticMap, listings: &[Listing]) -> Markup {
    html! {
        div id="propertyMap" class="static-map" {
            div class="static-map__layer" role="presentation" {
                @for marker in map.markers() {
                    @if let Some(listing) = listings.iter().find(|l| l.id == marker.listing_id) {
                        (map_marker(listing, marker.left_pct, marker.top_pct,
                            map.highlighted() == Some(marker.listing_id.as_str())))
                    }
                }
            }
            @if map.markers().is_empty() {
                div id="mapPlaceholder" class="static-map__empty" {
                    p { "Listings will appear here as soon as they match your search." }
                }
            }
        }
    }
}

fn map_marker(listing: &Listing, left_pct: f64, top_pct: f64, active: bool) -> Markup {
    let class = if active {
        "listing-marker static-map__marker listing-marker--active"
    } else {
        "listing-marker static-map__marker"
    };
    let style = format!("left:{:.2}%;top:{:.2}%;", left_pct, top_pct);
    let preview = listing.image.as_deref().unwrap_or(PREVIEW_PLACEHOLDER);
    let meta = meta_line(listing);

    html! {
        button type="button" class=(class) style=(style) data-listing-id=(listing.id) {
            span class="listing-marker__icon" aria-hidden="true" {}
            div class="static-map__preview" {
                img class="tooltip-card__image" src=(preview) alt=(address_label(listing)) loading="lazy";
                div class="static-map__preview-body" {
                    p class="tooltip-card__price" { (price_label(listing)) }
                    p class="tooltip-card__address" { (address_label(listing)) }
                    @if !meta.is_empty() {
                        p class="tooltip-card__meta" { (meta) }
                    }
                }
            }
        }
    }
}
