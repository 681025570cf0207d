//! In-memory candidate storage for testing and development.

use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{DiscoveryError, Result};
use crate::traits::store::CandidateStore;

/// In-memory candidate list.
///
/// Insertion order is preserved and is the order discovery results come back in.
pub struct MemoryStore<E> {
    candidates: RwLock<Vec<E>>,
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> MemoryStore<E> {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            candidates: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-loaded with `candidates`.
    pub fn with_candidates(candidates: impl IntoIterator<Item = E>) -> Self {
        Self {
            candidates: RwLock::new(candidates.into_iter().collect()),
        }
    }

    pub fn insert(&self, candidate: E) -> Result<()> {
        self.write()?.push(candidate);
        Ok(())
    }

    /// Clear all stored candidates.
    pub fn clear(&self) -> Result<()> {
        self.write()?.clear();
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<E>>> {
        self.candidates
            .read()
            .map_err(|_| DiscoveryError::Storage("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<E>>> {
        self.candidates
            .write()
            .map_err(|_| DiscoveryError::Storage("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl<E> CandidateStore<E> for MemoryStore<E>
where
    E: Clone + Send + Sync + 'static,
{
    async fn load_all(&self) -> Result<Vec<E>> {
        Ok(self.read()?.clone())
    }

    async fn count(&self) -> Result<usize> {
        self.len()
    }
}
