// TrashMob Discovery - Core
//
// Location and window aware lookup of communities, partners and cleanup
// events. Candidates are loaded by a store; the discovery operations filter
// them by active window, radius and slug without touching storage.

pub mod common;
pub mod config;
pub mod domains;
pub mod error;
pub mod stores;
pub mod testing;
pub mod traits;

pub use common::utils::geo::{distance_miles, within_radius, GeoPoint, Locatable};
pub use config::Config;
pub use domains::discovery::{
    find_by_slug, find_enabled, find_nearby, is_active, is_slug_available, CleanupEvent,
    Community, Discovery, DiscoveryQuery, Partner, Slugged, TimeWindowed,
};
pub use error::{DiscoveryError, Result};
pub use stores::{JsonFileStore, MemoryStore};
pub use traits::store::CandidateStore;
