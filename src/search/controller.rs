//! Orchestration of the search experience: filter state, the chat box,
//! result fetching with debounce and stale-response protection, the sample
//! listing fallback, and map wiring. The controller owns a listing source
//! and a map adapter; everything else reads its state to render.

use std::time::Instant;

use crate::filters::codec::{from_url_search, merge};
use crate::filters::{parse_user_query, FilterSet, SortOrder};
use crate::listings::placeholder::{placeholder_listings, PLACEHOLDER_NOTICE};
use crate::listings::{dedupe_by_id, ListingSource, Listing, SearchError, SearchResults};
use crate::search::debounce::{Debouncer, REFRESH_DEBOUNCE};
use crate::search::map::MapAdapter;
use crate::templates::format::{format_currency, group_thousands};

pub const UNPARSED_CHAT_REPLY: &str = "I couldn't understand that yet, but I'm learning. \
     Try mentioning price, beds, baths, or must-haves.";
const UPDATING_REPLY: &str = "Updating your search...";
const DEFAULT_SUMMARY: &str = "Showing latest listings across Orange County.";

/// View state of the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet.
    Idle,
    /// Listings cleared optimistically, fetch not yet fired.
    Empty,
    /// A request is in flight.
    Loading,
    /// Listings on screen (live or sample data).
    Loaded,
    /// Last request failed but earlier listings are still shown.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

pub struct SearchController<S: ListingSource, M: MapAdapter> {
    source: S,
    map: M,
    filters: FilterSet,
    listings: Vec<Listing>,
    total: u64,
    phase: Phase,
    chat: Vec<ChatMessage>,
    error_banner: Option<String>,
    load_more_visible: bool,
    using_placeholder: bool,
    placeholder_notice_shown: bool,
    hovered_card: Option<String>,
    debounce: Debouncer,
    // Monotonic request id; only the completion matching the latest
    // dispatch may touch state.
    seq: u64,
    pending_append: bool,
    in_flight_append: bool,
}

impl<S: ListingSource, M: MapAdapter> SearchController<S, M> {
    pub fn new(source: S, map: M) -> SearchController<S, M> {
        SearchController {
            source,
            map,
            filters: FilterSet::default(),
            listings: Vec::new(),
            total: 0,
            phase: Phase::Idle,
            chat: Vec::new(),
            error_banner: None,
            load_more_visible: false,
            using_placeholder: false,
            placeholder_notice_shown: false,
            hovered_card: None,
            debounce: Debouncer::new(REFRESH_DEBOUNCE),
            seq: 0,
            pending_append: false,
            in_flight_append: false,
        }
    }

    /// Restore filters at page load. URL parameters win over the saved
    /// session, and the sort order defaults to newest.
    pub fn hydrate(&mut self, url_search: &str, session: &FilterSet) {
        let mut merged = merge(session, &from_url_search(url_search));
        if merged.sort.is_none() {
            merged.sort = Some(SortOrder::Newest);
        }
        self.filters = merged;
    }

    /// One chat turn. Unparseable input gets a help reply and changes
    /// nothing; otherwise the parsed filters merge in and a full refresh
    /// is scheduled.
    pub fn submit_chat(&mut self, raw: &str, now: Instant) {
        let query = raw.trim();
        if query.is_empty() {
            return;
        }
        self.push_chat(ChatRole::User, query);

        let parsed = parse_user_query(query);
        if parsed.is_empty() {
            self.push_chat(ChatRole::Assistant, UNPARSED_CHAT_REPLY);
            return;
        }

        self.push_chat(ChatRole::Assistant, UPDATING_REPLY);
        self.filters = merge(&self.filters, &parsed);
        self.schedule_refresh(true, now);
    }

    /// Merge an explicit filter patch (facet controls) and refresh.
    pub fn apply_patch(&mut self, patch: &FilterSet, now: Instant) {
        self.filters = merge(&self.filters, patch);
        self.schedule_refresh(true, now);
    }

    /// Map viewport moved: constrain to the new box and restart paging,
    /// but keep current results on screen until fresh ones arrive.
    pub fn on_bounds_change(&mut self, bbox: [f64; 4], now: Instant) {
        let patch = FilterSet {
            bbox: Some(bbox),
            page: Some(1),
            ..FilterSet::default()
        };
        self.filters = merge(&self.filters, &patch);
        self.schedule_refresh(false, now);
    }

    /// Fetch the next page and append it to what is already shown.
    pub fn load_more(&mut self, now: Instant) {
        self.filters.page = Some(self.filters.page.unwrap_or(1) + 1);
        self.pending_append = true;
        self.schedule_refresh(false, now);
    }

    fn schedule_refresh(&mut self, reset: bool, now: Instant) {
        if reset {
            self.filters.page = Some(1);
            self.listings.clear();
            self.total = 0;
            self.hovered_card = None;
            self.using_placeholder = false;
            self.pending_append = false;
            self.map.set_listings(&[]);
            self.phase = Phase::Empty;
        }
        self.debounce.trigger(now);
    }

    /// Drive the debounce clock. Fires at most one fetch per call.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.debounce.fire(now) {
            self.refresh_now();
            true
        } else {
            false
        }
    }

    /// Skip any pending debounce and fetch synchronously.
    pub fn refresh_now(&mut self) {
        let (seq, filters) = self.dispatch();
        let result = self.source.search(&filters);
        self.complete(seq, result);
    }

    /// Start a request: bump the sequence and snapshot the filters the
    /// request should carry. Split from `complete` so delivery order can
    /// be exercised directly.
    pub fn dispatch(&mut self) -> (u64, FilterSet) {
        self.seq += 1;
        self.debounce.cancel();
        self.error_banner = None;
        self.phase = Phase::Loading;
        self.in_flight_append = self.pending_append;
        self.pending_append = false;
        (self.seq, self.filters.clone())
    }

    /// Apply a finished request. Results for anything but the latest
    /// dispatched sequence are discarded.
    pub fn complete(&mut self, seq: u64, result: Result<SearchResults, SearchError>) {
        if seq != self.seq {
            return;
        }

        match result {
            Ok(results) => {
                let combined = if self.in_flight_append {
                    let mut all = self.listings.clone();
                    all.extend(results.items);
                    all
                } else {
                    results.items
                };
                let deduped = dedupe_by_id(combined);

                if deduped.is_empty() {
                    self.use_placeholder();
                    return;
                }

                self.using_placeholder = false;
                self.total = results.total;
                self.listings = deduped;
                self.map.set_listings(&self.listings);
                self.load_more_visible = (self.listings.len() as u64) < self.total;
                self.phase = Phase::Loaded;
            }
            Err(err) => {
                eprintln!("Listings fetch failed: {err}");
                if self.listings.is_empty() {
                    self.use_placeholder();
                    return;
                }
                self.error_banner = Some(err.to_string());
                self.load_more_visible = false;
                self.phase = Phase::Error;
            }
        }
    }

    fn use_placeholder(&mut self) {
        self.using_placeholder = true;
        self.listings = placeholder_listings();
        self.total = self.listings.len() as u64;
        self.map.set_listings(&self.listings);
        self.load_more_visible = false;
        self.error_banner = None;
        self.phase = Phase::Loaded;
        if !self.placeholder_notice_shown {
            self.placeholder_notice_shown = true;
            self.push_chat(ChatRole::Assistant, PLACEHOLDER_NOTICE);
        }
    }

    fn push_chat(&mut self, role: ChatRole, text: &str) {
        self.chat.push(ChatMessage {
            role,
            text: text.to_string(),
        });
    }

    pub fn hover_card(&mut self, id: &str) {
        self.hovered_card = Some(id.to_string());
        self.map.highlight_listing(id);
    }

    pub fn leave_cards(&mut self) {
        self.hovered_card = None;
        self.map.clear_highlight();
    }

    pub fn focus_card(&mut self, id: &str) {
        self.map.focus_listing(id);
    }

    /// Hero line: "12 of 1,284 matches", "10 demo matches", or a prompt.
    pub fn result_count_label(&self) -> String {
        if self.using_placeholder {
            format!("{} demo matches", self.listings.len())
        } else if self.total > 0 {
            let shown = (self.listings.len() as u64).min(self.total);
            format!("{} of {} matches", shown, group_thousands(self.total))
        } else if !self.listings.is_empty() {
            format!("{} matches", self.listings.len())
        } else {
            "No matches yet".to_string()
        }
    }

    /// Human-readable restatement of the active filters.
    pub fn summary_label(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(q) = self.filters.q.as_deref() {
            parts.push(q.to_string());
        }
        if let Some(v) = self.filters.min_price {
            parts.push(format!("from {}", format_currency(v)));
        }
        if let Some(v) = self.filters.max_price {
            parts.push(format!("under {}", format_currency(v)));
        }
        if let Some(v) = self.filters.beds {
            parts.push(format!("{}+ beds", v));
        }
        if let Some(v) = self.filters.baths {
            parts.push(format!("{}+ baths", v));
        }

        let summary = if parts.is_empty() {
            DEFAULT_SUMMARY.to_string()
        } else {
            format!("Filters: {}", parts.join(" \u{2022} "))
        };

        if self.using_placeholder {
            format!("{} \u{00b7} Demo preview", summary)
        } else {
            summary
        }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.error_banner.as_deref()
    }

    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    pub fn using_placeholder(&self) -> bool {
        self.using_placeholder
    }

    pub fn hovered_card(&self) -> Option<&str> {
        self.hovered_card.as_deref()
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn refresh_pending(&self) -> bool {
        self.debounce.pending()
    }
}
