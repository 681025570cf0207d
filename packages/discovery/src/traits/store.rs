//! Candidate source trait.
//!
//! A store only materializes candidates. Filtering, slug matching and
//! ordering happen in the discovery operations, so a store never needs to
//! know about windows, radii or slugs.

use async_trait::async_trait;

use crate::error::Result;

/// Source of every candidate of one entity type.
#[async_trait]
pub trait CandidateStore<E>: Send + Sync
where
    E: Send + 'static,
{
    /// Load all candidates, enabled or not, in the store's natural order.
    async fn load_all(&self) -> Result<Vec<E>>;

    /// Number of candidates the store currently holds.
    async fn count(&self) -> Result<usize> {
        Ok(self.load_all().await?.len())
    }
}
