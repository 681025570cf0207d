//! Candidates read from a JSON array on disk.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::traits::store::CandidateStore;

/// Reads the whole file on every `load_all`, so edits on disk are picked up
/// without a restart.
pub struct JsonFileStore<E> {
    path: PathBuf,
    _entity: PhantomData<fn() -> E>,
}

impl<E> JsonFileStore<E> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl<E> CandidateStore<E> for JsonFileStore<E>
where
    E: DeserializeOwned + Send + 'static,
{
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_all(&self) -> Result<Vec<E>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let candidates: Vec<E> = serde_json::from_slice(&bytes)?;
        debug!(count = candidates.len(), "Loaded candidates from file");
        Ok(candidates)
    }
}
