//! Backends the store fetches its seed from and acknowledges writes against.

use async_trait::async_trait;
use std::time::Duration;

use super::models::{BlogPost, MediaAsset, PortfolioEntry};
use super::seed::{self, CatalogSeed};
use crate::error::CatalogError;

/// Source of the initial collections and sink for created entities.
///
/// The write hooks run before the store applies a new entity; an `Err` keeps
/// the entity out of the collections.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    async fn fetch_seed(&self) -> Result<CatalogSeed, CatalogError>;

    async fn write_entry(&self, _entry: &PortfolioEntry) -> Result<(), CatalogError> {
        Ok(())
    }

    async fn write_post(&self, _post: &BlogPost) -> Result<(), CatalogError> {
        Ok(())
    }

    async fn write_media(&self, _asset: &MediaAsset) -> Result<(), CatalogError> {
        Ok(())
    }
}

/// Serves the bundled sample catalog after an artificial delay. Writes always
/// succeed.
#[derive(Debug, Clone)]
pub struct SampleBackend {
    delay: Duration,
}

impl SampleBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SampleBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_LOAD_DELAY_MS))
    }
}

#[async_trait]
impl CatalogBackend for SampleBackend {
    async fn fetch_seed(&self) -> Result<CatalogSeed, CatalogError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        seed::sample_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sample_backend_waits_for_delay() {
        let backend = SampleBackend::default();
        let start = tokio::time::Instant::now();
        let seed = backend.fetch_seed().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(800));
        assert_eq!(seed.works.len(), 3);
    }

    #[tokio::test]
    async fn test_sample_backend_accepts_writes() {
        let backend = SampleBackend::new(Duration::ZERO);
        let seed = backend.fetch_seed().await.unwrap();
        assert!(backend.write_entry(&seed.works[0]).await.is_ok());
        assert!(backend.write_post(&seed.posts[0]).await.is_ok());
    }
}
