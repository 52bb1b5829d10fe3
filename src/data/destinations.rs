//! Destination catalog: the read-only reference table behind the UI.
//!
//! DESIGN
//! ======
//! One table serves the home gallery, both location selects, and the saved
//! bookings list, so the views cannot drift apart. Lookups key on the exact
//! destination name a booking stores; anything else (custom locations) falls
//! back to fixed values.

#[cfg(test)]
#[path = "destinations_test.rs"]
mod destinations_test;

/// One bookable destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Destination {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    /// Nightly rate in whole USD.
    pub price_per_night: u32,
    pub features: [&'static str; 3],
}

/// Every bookable destination, in gallery order.
pub const DESTINATIONS: [Destination; 8] = [
    Destination {
        name: "Yosemite Valley",
        image: "https://www.extranomical.com/wp-content/uploads/2023/03/Valley-View-Overlook.jpg",
        description: "Luxury tents with stunning valley views",
        price_per_night: 299,
        features: ["Hot tub", "Panoramic views", "Private deck"],
    },
    Destination {
        name: "Joshua Tree",
        image: "https://npf-prod.imgix.net/uploads/iStock_000046726096XLarge.jpg?auto=compress%2Cformat&fit=max&q=80&w=1600",
        description: "Desert dome houses under starry skies",
        price_per_night: 249,
        features: ["Stargazing deck", "Air conditioning", "Fire pit"],
    },
    Destination {
        name: "Olympic Peninsula",
        image: "https://content.vbt.com/content/uploads/2023/11/washington-olympic-peninsula-4-1280x840.jpg",
        description: "Treehouses nestled in ancient forests",
        price_per_night: 329,
        features: ["Elevated platforms", "Rain shower", "Forest trails"],
    },
    Destination {
        name: "Maine Coastline",
        image: "https://assets.vogue.com/photos/67094bb5803acd9bae5c5c1c/16:9/w_1280,c_limit/GettyImages-689355842.jpg",
        description: "Seaside yurts with private beaches",
        price_per_night: 279,
        features: ["Ocean views", "Private beach access", "Outdoor kitchen"],
    },
    Destination {
        name: "Sedona Red Rocks",
        image: "https://wildlandtrekking.com/content/uploads/2020/03/sedona-ib-slides1.jpg",
        description: "Luxury desert tents with red rock views",
        price_per_night: 319,
        features: ["Outdoor shower", "Meditation deck", "Guided hikes"],
    },
    Destination {
        name: "Blue Ridge Mountains",
        image: "https://upload.wikimedia.org/wikipedia/commons/3/3c/Rainy_Blue_Ridge-27527.jpg",
        description: "Mountain cabins with panoramic vistas",
        price_per_night: 259,
        features: ["Wood-burning stove", "Mountain views", "Hiking trails"],
    },
    Destination {
        name: "Big Sur Coastline",
        image: "https://travelcuriousoften.com/wp-content/uploads/2021/06/Big-Sur-Hwy-1-6-2-scaled.jpeg",
        description: "Cliffside eco-pods overlooking the Pacific",
        price_per_night: 399,
        features: ["Floor-to-ceiling windows", "Private hot tub", "Electric car charging"],
    },
    Destination {
        name: "The Serai,Rajasthan",
        image: "https://thesujanlife.com/documents/35366/45494/RTS.jpg/406169cb-fd4b-30a0-27cc-681088ea6880?t=1572337437548",
        description: "With luxury tents in the middle of the Thar Desert, this resort offers a royal desert experience.",
        price_per_night: 249,
        features: ["Stargazing deck", "Air conditioning", "Mountain biking"],
    },
];

/// How many catalog entries the home page features above the fold.
pub const FEATURED_COUNT: usize = 4;

/// Image shown for locations outside the catalog.
pub const FALLBACK_IMAGE: &str =
    "https://i0.wp.com/buoyantlifestyles.com/wp-content/uploads/2021/09/IMG_6359-1-scaled.jpg?ssl=1";

/// Description shown for locations outside the catalog.
pub const FALLBACK_DESCRIPTION: &str = "A unique glamping experience in nature";

/// Feature tags shown for locations outside the catalog.
pub const FALLBACK_FEATURES: [&str; 3] = ["Luxury amenities", "Natural surroundings", "Unique experience"];

/// Nightly rate assumed for locations outside the catalog, in whole USD.
pub const FALLBACK_PRICE: u32 = 249;

/// The catalog entry whose name matches `location` exactly.
#[must_use]
pub fn find(location: &str) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|destination| destination.name == location)
}

/// Destinations featured at the top of the home gallery.
#[must_use]
pub fn featured() -> &'static [Destination] {
    &DESTINATIONS[..FEATURED_COUNT]
}

/// Destinations in the expanded "more locations" gallery section.
#[must_use]
pub fn additional() -> &'static [Destination] {
    &DESTINATIONS[FEATURED_COUNT..]
}

/// Imagery for a booking's location.
#[must_use]
pub fn image_for(location: &str) -> &'static str {
    find(location).map_or(FALLBACK_IMAGE, |destination| destination.image)
}

/// Descriptive text for a booking's location.
#[must_use]
pub fn description_for(location: &str) -> &'static str {
    find(location).map_or(FALLBACK_DESCRIPTION, |destination| destination.description)
}

/// Feature tags for a booking's location.
#[must_use]
pub fn features_for(location: &str) -> &'static [&'static str] {
    find(location).map_or(&FALLBACK_FEATURES, |destination| &destination.features)
}

/// Nightly rate for a booking's location, in whole USD.
#[must_use]
pub fn price_for(location: &str) -> u32 {
    find(location).map_or(FALLBACK_PRICE, |destination| destination.price_per_night)
}
