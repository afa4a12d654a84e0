use maud::{html, Markup};

use crate::filters::codec::to_query_string;
use crate::listings::ListingSource;
use crate::search::controller::SearchController;
use crate::search::map::StaticMap;
use crate::templates::components::{chat_panel, listing_card, map_panel};
use crate::templates::layouts::desktop::desktop_layout;

pub fn search_page<S: ListingSource>(ctl: &SearchController<S, StaticMap>) -> Markup {
    let listings = ctl.listings();
    let top_five = &listings[..listings.len().min(5)];
    let top_ten = &listings[..listings.len().min(10)];

    desktop_layout(
        "Property Search | Real OC",
        html! {
            section class="search-hero" {
                h1 { "Find your place in Orange County" }
                p id="searchSummary" { (ctl.summary_label()) }
                p id="resultCount" { (ctl.result_count_label()) }

                div id="heroTop5" {
                    div class="top5-container" {
                        @if top_five.is_empty() {
                            div class="top5-card no-results" {
                                div class="card-details" {
                                    div class="card-price" { "No properties yet" }
                                    div class="card-address" { "Adjust filters to see matches" }
                                }
                            }
                        } @else {
                            @for listing in top_five {
                                (listing_card(listing))
                            }
                        }
                    }
                }
            }

            (chat_panel(ctl.chat()))

            section class="search-results" {
                @if let Some(message) = ctl.error_banner() {
                    div id="resultsError" class="results-error" { (message) }
                }

                div class="results-layout" {
                    (map_panel(ctl.map(), listings))

                    div {
                        @if listings.is_empty() {
                            div id="resultsEmpty" class="results-empty" {
                                p { "No listings match this search yet." }
                                p { "Loosen a filter or widen the map to see more homes." }
                            }
                        } @else {
                            div id="top10Grid" class="results-grid" {
                                @for listing in top_ten {
                                    (listing_card(listing))
                                }
                            }
                        }

                        @if ctl.load_more_visible() {
                            a id="loadMoreListings" class="load-more" href=(next_page_url(ctl)) {
                                "Load more listings"
                            }
                        }
                    }
                }
            }
        },
    )
}

fn next_page_url<S: ListingSource>(ctl: &SearchController<S, StaticMap>) -> String {
    let mut filters = ctl.filters().clone();
    filters.page = Some(filters.page.unwrap_or(1) + 1);
    format!("/search?{}", to_query_string(&filters))
}
