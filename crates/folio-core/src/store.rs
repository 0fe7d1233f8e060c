//! Store adapter: one ContentDocument at one fixed key, full replace only.
//!
//! `save` is a wholesale overwrite with no version check — two concurrent
//! saves resolve last-write-wins at the backend. `load` distinguishes a
//! missing document (`Ok(None)`) from a backend failure so the caller can
//! keep serving the built-in defaults instead of treating NotFound as fatal.
//! Every successful save is published on a broadcast channel; subscribers
//! receive the full replacement document.

use crate::content::ContentDocument;
use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};

/// Fixed address of the single content document within the store.
pub const CONTENT_KEY: &str = "content/portfolio";

const CHANGE_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<sled::Error> for StoreError {
    fn from(e: sled::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// Interface boundary to the document persistence backend.
///
/// Sled is the normative backend; anything that can hold one JSON document
/// behind this trait (the original system's alternate was a relational row)
/// is acceptable.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch the document. `Ok(None)` means it has never been saved.
    async fn load(&self) -> Result<Option<ContentDocument>, StoreError>;

    /// Full-document replace. Publishes the new document to subscribers on
    /// success.
    async fn save(&self, doc: &ContentDocument) -> Result<(), StoreError>;

    /// Change notifications. Each successful save delivers the replacement
    /// document; dropping the receiver unsubscribes.
    fn subscribe(&self) -> broadcast::Receiver<ContentDocument>;
}

/// Sled-backed store: the document serialized as JSON under [`CONTENT_KEY`].
pub struct SledContentStore {
    db: sled::Db,
    changes: broadcast::Sender<ContentDocument>,
}

impl SledContentStore {
    /// Opens or creates the database at the given path.
    pub fn open_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Ok(Self { db, changes })
    }
}

#[async_trait]
impl ContentStore for SledContentStore {
    async fn load(&self) -> Result<Option<ContentDocument>, StoreError> {
        let Some(bytes) = self.db.get(CONTENT_KEY.as_bytes())? else {
            return Ok(None);
        };
        let doc = serde_json::from_slice(&bytes)?;
        Ok(Some(doc))
    }

    async fn save(&self, doc: &ContentDocument) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(doc)?;
        self.db.insert(CONTENT_KEY.as_bytes(), bytes)?;
        self.db.flush_async().await?;
        // Receivers may have all dropped; that is not a save failure.
        let _ = self.changes.send(doc.clone());
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ContentDocument> {
        self.changes.subscribe()
    }
}

/// In-memory store: the non-normative alternate backend, also used in tests.
pub struct MemoryContentStore {
    doc: RwLock<Option<ContentDocument>>,
    changes: broadcast::Sender<ContentDocument>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            doc: RwLock::new(None),
            changes,
        }
    }
}

impl Default for MemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn load(&self) -> Result<Option<ContentDocument>, StoreError> {
        Ok(self.doc.read().await.clone())
    }

    async fn save(&self, doc: &ContentDocument) -> Result<(), StoreError> {
        *self.doc.write().await = Some(doc.clone());
        let _ = self.changes.send(doc.clone());
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ContentDocument> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sled_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = SledContentStore::open_path(dir.path()).unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sled_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SledContentStore::open_path(dir.path()).unwrap();
        let mut doc = ContentDocument::default_content();
        doc.profile.name = "Edited Name".to_string();
        store.save(&doc).await.unwrap();
        let loaded = store.load().await.unwrap().expect("document saved");
        assert_eq!(loaded, doc);
    }

    #[tokio::test]
    async fn save_notifies_subscribers_with_full_document() {
        let store = MemoryContentStore::new();
        let mut rx = store.subscribe();
        let doc = ContentDocument::default_content();
        store.save(&doc).await.unwrap();
        let notified = rx.recv().await.unwrap();
        assert_eq!(notified, doc);
    }

    #[tokio::test]
    async fn second_save_replaces_wholesale() {
        let store = MemoryContentStore::new();
        let first = ContentDocument::default_content();
        store.save(&first).await.unwrap();

        let mut second = first.clone();
        second.portfolio.clear();
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert!(loaded.portfolio.is_empty());
    }
}
