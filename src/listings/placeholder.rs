//! Curated sample listings shown while the live MLS feed is unavailable.
//! Ten Orange County properties with believable prices and coordinates so
//! the page and the map stay fully demonstrable offline.

use crate::listings::model::Listing;

pub const PLACEHOLDER_NOTICE: &str =
    "Showing sample listings while we finish wiring the live MLS feed.";

struct Demo {
    id: &'static str,
    price: u64,
    address: &'static str,
    city: &'static str,
    postal_code: &'static str,
    beds: u32,
    baths: f64,
    sqft: u64,
    lat: f64,
    lng: f64,
    image: &'static str,
    days_on_market: u32,
}

const DEMOS: [Demo; 10] = [
    Demo {
        id: "demo-1",
        price: 2_480_000,
        address: "1985 Oceanfront Walk, Laguna Beach, CA 92651",
        city: "Laguna Beach",
        postal_code: "92651",
        beds: 3,
        baths: 3.0,
        sqft: 2260,
        lat: 33.5428,
        lng: -117.7835,
        image: "assets/backgrounds/featured-bg.webp",
        days_on_market: 5,
    },
    Demo {
        id: "demo-2",
        price: 1_895_000,
        address: "4201 Seashore Dr, Newport Beach, CA 92663",
        city: "Newport Beach",
        postal_code: "92663",
        beds: 4,
        baths: 3.0,
        sqft: 2450,
        lat: 33.6189,
        lng: -117.929,
        image: "assets/backgrounds/search-bg.webp",
        days_on_market: 9,
    },
    Demo {
        id: "demo-3",
        price: 1_425_000,
        address: "1801 Main St, Huntington Beach, CA 92648",
        city: "Huntington Beach",
        postal_code: "92648",
        beds: 3,
        baths: 2.0,
        sqft: 1985,
        lat: 33.6595,
        lng: -117.9988,
        image: "assets/backgrounds/004.webp",
        days_on_market: 3,
    },
    Demo {
        id: "demo-4",
        price: 1_280_000,
        address: "65 Coralwood, Irvine, CA 92618",
        city: "Irvine",
        postal_code: "92618",
        beds: 4,
        baths: 4.0,
        sqft: 3040,
        lat: 33.6846,
        lng: -117.8265,
        image: "assets/backgrounds/buyer-hero-bg.webp",
        days_on_market: 7,
    },
    Demo {
        id: "demo-5",
        price: 2_150_000,
        address: "28 Monarch Bay Dr, Dana Point, CA 92629",
        city: "Dana Point",
        postal_code: "92629",
        beds: 4,
        baths: 4.0,
        sqft: 3125,
        lat: 33.4672,
        lng: -117.6981,
        image: "assets/backgrounds/results-bg.jpg",
        days_on_market: 12,
    },
    Demo {
        id: "demo-6",
        price: 995_000,
        address: "312 Avenida Granada, San Clemente, CA 92672",
        city: "San Clemente",
        postal_code: "92672",
        beds: 3,
        baths: 3.0,
        sqft: 1880,
        lat: 33.427,
        lng: -117.612,
        image: "assets/backgrounds/about-bg.webp",
        days_on_market: 14,
    },
    Demo {
        id: "demo-7",
        price: 875_000,
        address: "88 Vintage, Irvine, CA 92620",
        city: "Irvine",
        postal_code: "92620",
        beds: 3,
        baths: 2.0,
        sqft: 1725,
        lat: 33.7074,
        lng: -117.759,
        image: "assets/backgrounds/reasons-bg.webp",
        days_on_market: 18,
    },
    Demo {
        id: "demo-8",
        price: 1_365_000,
        address: "22 Marseille, Newport Coast, CA 92657",
        city: "Newport Coast",
        postal_code: "92657",
        beds: 3,
        baths: 3.0,
        sqft: 2104,
        lat: 33.5906,
        lng: -117.8394,
        image: "assets/backgrounds/inquire-bg.webp",
        days_on_market: 8,
    },
    Demo {
        id: "demo-9",
        price: 1_185_000,
        address: "25712 Fairlie Dr, Mission Viejo, CA 92692",
        city: "Mission Viejo",
        postal_code: "92692",
        beds: 4,
        baths: 3.0,
        sqft: 2785,
        lat: 33.6001,
        lng: -117.672,
        image: "assets/backgrounds/about-bg.webp",
        days_on_market: 11,
    },
    Demo {
        id: "demo-10",
        price: 1_520_000,
        address: "701 E Canyon Ridge, Anaheim Hills, CA 92808",
        city: "Anaheim Hills",
        postal_code: "92808",
        beds: 5,
        baths: 4.0,
        sqft: 3320,
        lat: 33.8503,
        lng: -117.7601,
        image: "assets/backgrounds/featured-bg.webp",
        days_on_market: 16,
    },
];

pub fn placeholder_listings() -> Vec<Listing> {
    DEMOS
        .iter()
        .map(|demo| Listing {
            id: demo.id.to_string(),
            price: demo.price,
            address: demo.address.to_string(),
            city: demo.city.to_string(),
            state: "CA".to_string(),
            postal_code: demo.postal_code.to_string(),
            beds: Some(demo.beds),
            baths: Some(demo.baths),
            sqft: Some(demo.sqft),
            lat: Some(demo.lat),
            lng: Some(demo.lng),
            image: Some(demo.image.to_string()),
            days_on_market: Some(demo.days_on_market),
            url: "#".to_string(),
        })
        .collect()
}
