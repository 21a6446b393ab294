//! Catalog store: the session-wide owner of portfolio entries, blog posts and
//! media assets.
//!
//! Readers take cheap [`CatalogSnapshot`] clones or subscribe to changes;
//! every collection lives behind an `Arc` that is replaced on mutation, so a
//! pointer comparison is enough to tell whether a collection changed.
//!
//! Loads and adds are serialized through a single FIFO lock. An add issued
//! while another operation is pending waits for it and is applied afterwards.

pub mod backend;
pub mod models;
pub mod seed;

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{watch, Mutex};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Collection};
use backend::{CatalogBackend, SampleBackend};
use models::{
    BlogDraft, BlogPost, EntityId, MediaAsset, MediaDraft, PortfolioDraft, PortfolioEntry,
};

/// Message shown to visitors when the initial load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar los datos. Por favor, recarga la página.";

/// Lifecycle of the store's initial population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "lowercase")]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Point-in-time view of the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub works: Arc<Vec<PortfolioEntry>>,
    pub posts: Arc<Vec<BlogPost>>,
    pub media: Arc<Vec<MediaAsset>>,
    pub state: LoadState,
}

impl CatalogSnapshot {
    fn empty(state: LoadState) -> Self {
        Self {
            works: Arc::new(Vec::new()),
            posts: Arc::new(Vec::new()),
            media: Arc::new(Vec::new()),
            state,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Clock-derived ids, bumped so they stay strictly increasing even when two
/// entities are created within the same millisecond.
#[derive(Debug, Default)]
struct IdGenerator {
    last: EntityId,
}

impl IdGenerator {
    fn next_at(&mut self, now_ms: EntityId) -> EntityId {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    fn next(&mut self) -> EntityId {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn observe(&mut self, id: EntityId) {
        self.last = self.last.max(id);
    }
}

#[derive(Debug, Default)]
struct Writer {
    initialized: bool,
    ids: IdGenerator,
}

/// Puts a load whose future was dropped mid-fetch back to `Idle`.
struct LoadGuard<'a> {
    state: &'a watch::Sender<CatalogSnapshot>,
    armed: bool,
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::warn!("catalog load cancelled before completion");
        self.state.send_if_modified(|s| {
            if !s.is_loading() {
                return false;
            }
            s.state = LoadState::Idle;
            true
        });
    }
}

fn prepend<T: Clone>(items: &[T], item: T) -> Arc<Vec<T>> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(item);
    next.extend_from_slice(items);
    Arc::new(next)
}

fn remote_write(collection: Collection, err: CatalogError) -> CatalogError {
    match err {
        CatalogError::RemoteWrite { .. } => err,
        other => CatalogError::RemoteWrite {
            collection,
            reason: other.to_string(),
        },
    }
}

pub struct CatalogStore {
    backend: Arc<dyn CatalogBackend>,
    state: watch::Sender<CatalogSnapshot>,
    writer: Mutex<Writer>,
}

impl CatalogStore {
    /// Create an empty, not yet loaded store.
    pub fn new(backend: Arc<dyn CatalogBackend>) -> Self {
        let (state, _) = watch::channel(CatalogSnapshot::empty(LoadState::Idle));
        Self {
            backend,
            state,
            writer: Mutex::new(Writer::default()),
        }
    }

    /// Store backed by the bundled sample catalog.
    pub fn with_sample_data(config: &CatalogConfig) -> Self {
        Self::new(Arc::new(SampleBackend::new(config.load_delay())))
    }

    /// Create a store and run its initial load.
    pub async fn open(backend: Arc<dyn CatalogBackend>) -> Arc<Self> {
        let store = Arc::new(Self::new(backend));
        store.initialize().await;
        store
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.borrow().clone()
    }

    /// Register for change notifications. Dropping the receiver unregisters it.
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.state.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    /// Run the initial load once. Later calls return without touching state;
    /// use [`CatalogStore::reload`] to fetch again.
    pub async fn initialize(&self) {
        let mut writer = self.writer.lock().await;
        if writer.initialized {
            tracing::debug!("catalog already initialized, skipping load");
            return;
        }
        self.load(&mut writer).await;
    }

    /// Drop the current collections and repeat the initial load.
    pub async fn reload(&self) {
        let mut writer = self.writer.lock().await;
        tracing::info!("reloading catalog");
        self.load(&mut writer).await;
    }

    async fn load(&self, writer: &mut Writer) {
        writer.initialized = false;
        self.state
            .send_modify(|s| *s = CatalogSnapshot::empty(LoadState::Loading));

        let mut guard = LoadGuard {
            state: &self.state,
            armed: true,
        };
        let start = Instant::now();
        let fetched = self.backend.fetch_seed().await;
        guard.armed = false;
        writer.initialized = true;

        match fetched {
            Ok(seed) => {
                let max_id = seed
                    .works
                    .iter()
                    .map(|w| w.id)
                    .chain(seed.posts.iter().map(|p| p.id))
                    .chain(seed.media.iter().map(|m| m.id))
                    .max();
                if let Some(id) = max_id {
                    writer.ids.observe(id);
                }

                tracing::info!(
                    works = seed.works.len(),
                    posts = seed.posts.len(),
                    media = seed.media.len(),
                    duration_ms = %start.elapsed().as_millis(),
                    "catalog loaded"
                );

                self.state.send_modify(|s| {
                    *s = CatalogSnapshot {
                        works: Arc::new(seed.works),
                        posts: Arc::new(seed.posts),
                        media: Arc::new(seed.media),
                        state: LoadState::Ready,
                    }
                });
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    duration_ms = %start.elapsed().as_millis(),
                    "failed to load catalog"
                );
                self.state.send_modify(|s| {
                    *s = CatalogSnapshot::empty(LoadState::Failed(LOAD_ERROR_MESSAGE.to_string()))
                });
            }
        }
    }

    /// Add a portfolio entry at the front of the collection.
    pub async fn add_portfolio_entry(
        &self,
        draft: PortfolioDraft,
    ) -> Result<PortfolioEntry, CatalogError> {
        let mut writer = self.writer.lock().await;
        let entry = draft.finalize(writer.ids.next(), Utc::now());

        if let Err(e) = self.backend.write_entry(&entry).await {
            tracing::warn!(id = entry.id, error = %e, "portfolio entry rejected by backend");
            return Err(remote_write(Collection::Portfolio, e));
        }

        self.state
            .send_modify(|s| s.works = prepend(&s.works, entry.clone()));
        tracing::info!(id = entry.id, title = %entry.title, "portfolio entry added");
        Ok(entry)
    }

    /// Add a blog post at the front of the collection. The post is always
    /// published and dated now.
    pub async fn add_blog_post(&self, draft: BlogDraft) -> Result<BlogPost, CatalogError> {
        let mut writer = self.writer.lock().await;
        let post = draft.finalize(writer.ids.next(), Utc::now());

        if let Err(e) = self.backend.write_post(&post).await {
            tracing::warn!(id = post.id, error = %e, "blog post rejected by backend");
            return Err(remote_write(Collection::Blog, e));
        }

        self.state
            .send_modify(|s| s.posts = prepend(&s.posts, post.clone()));
        tracing::info!(id = post.id, title = %post.title, "blog post added");
        Ok(post)
    }

    pub async fn add_media_asset(&self, draft: MediaDraft) -> Result<MediaAsset, CatalogError> {
        let mut writer = self.writer.lock().await;
        let asset = draft.finalize(writer.ids.next(), Utc::now());

        if let Err(e) = self.backend.write_media(&asset).await {
            tracing::warn!(id = asset.id, error = %e, "media asset rejected by backend");
            return Err(remote_write(Collection::Media, e));
        }

        self.state
            .send_modify(|s| s.media = prepend(&s.media, asset.clone()));
        tracing::info!(id = asset.id, "media asset added");
        Ok(asset)
    }
}
