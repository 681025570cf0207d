//! Discovery domain - location and window aware lookup of communities,
//! partners and cleanup events

pub mod activities;
pub mod models;
pub mod service;

// Re-export actions
pub use activities::{
    find_by_slug, find_enabled, find_nearby, is_active, is_slug_available, normalize_slug,
    slugify, slugs_match, suggest_available_slug,
};

// Re-export models
pub use models::{
    CleanupEvent, Community, DiscoveryQuery, Locatable, Partner, Slugged, TimeWindowed,
};

pub use service::Discovery;
