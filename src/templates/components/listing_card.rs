use maud::{html, Markup};

use crate::listings::Listing;
use crate::templates::format::{format_baths, format_currency, group_thousands};

const BULLET: &str = " \u{2022} ";

/// One result card. `data-listing-id` ties the card to its map marker.
pub fn listing_card(listing: &Listing) -> Markup {
    let price = price_label(listing);
    let meta = meta_line(listing);
    let address = address_label(listing);

    html! {
        article class="property-card" tabindex="0" data-listing-id=(listing.id) {
            div class="property-image" style=[background_style(listing)] aria-hidden="true" {
                p class="property-price" { (price) }
            }
            div class="property-details" {
                h3 class="property-address" { (address) }
                @if !meta.is_empty() {
                    p class="property-features" { (meta) }
                }
                div class="property-meta" {
                    @if let Some(dom) = listing.days_on_market {
                        span class="card-dom" { (dom) " DOM" }
                    }
                    a class="property-link" href=(listing.url) target="_blank" rel="noopener" {
                        "View details"
                    }
                }
            }
        }
    }
}

pub fn price_label(listing: &Listing) -> String {
    if listing.price > 0 {
        format_currency(listing.price)
    } else {
        "Call for pricing".to_string()
    }
}

pub fn address_label(listing: &Listing) -> String {
    if listing.address.is_empty() {
        format!("{}, {}", listing.city, listing.state)
    } else {
        listing.address.clone()
    }
}

/// "3 bd • 2.5 ba • 1,820 sqft", skipping whatever is unknown.
pub fn meta_line(listing: &Listing) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(beds) = listing.beds {
        parts.push(format!("{} bd", beds));
    }
    if let Some(baths) = listing.baths {
        parts.push(format!("{} ba", format_baths(baths)));
    }
    if let Some(sqft) = listing.sqft {
        parts.push(format!("{} sqft", group_thousands(sqft)));
    }
    parts.join(BULLET)
}

fn background_style(listing: &Listing) -> Option<String> {
    listing
        .image
        .as_deref()
        .map(|image| format!("background-image:url('{}');", image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::placeholder::placeholder_listings;

    #[test]
    fn card_carries_id_price_and_meta() {
        let listing = &placeholder_listings()[0];
        let rendered = listing_card(listing).into_string();

        assert!(rendered.contains("data-listing-id=\"demo-1\""));
        assert!(rendered.contains("$2,480,000"));
        assert!(rendered.contains("3 bd \u{2022} 3 ba \u{2022} 2,260 sqft"));
        assert!(rendered.contains("5 DOM"));
    }

    #[test]
    fn zero_price_renders_call_for_pricing() {
        let mut listing = placeholder_listings()[0].clone();
        listing.price = 0;
        listing.address = String::new();
        assert_eq!(price_label(&listing), "Call for pricing");
        assert_eq!(address_label(&listing), "Laguna Beach, CA");
    }
}
