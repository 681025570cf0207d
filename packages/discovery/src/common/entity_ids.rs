//! Typed ID definitions for discoverable entities.
//!
//! ```rust
//! use discovery_core::common::{CommunityId, PartnerId};
//!
//! let community_id = CommunityId::new();
//! let partner_id = PartnerId::new();
//! // let wrong: PartnerId = community_id; // compile error
//! # let _ = (community_id, partner_id);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Community entities (city or regional cleanup programs).
pub struct CommunityMarker;

/// Marker type for Partner entities (businesses and agencies that sponsor cleanups).
pub struct PartnerMarker;

/// Marker type for CleanupEvent entities.
pub struct CleanupEventMarker;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

pub type CommunityId = Id<CommunityMarker>;

pub type PartnerId = Id<PartnerMarker>;

pub type EventId = Id<CleanupEventMarker>;
