use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

const BLOB_URL_PREFIX: &str = "blob:podcast-studio/";

/// A byte buffer published under a blob URL.
#[derive(Debug, Clone)]
pub struct Blob {
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

/// Process-local table of blob URLs.
///
/// URLs stay resolvable until revoked or until the store is dropped.
/// Every call to [`BlobStore::create_object_url`] mints a fresh URL, even
/// for identical bytes.
#[derive(Debug, Default)]
pub struct BlobStore {
    blobs: DashMap<String, Blob>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_object_url(&self, bytes: Vec<u8>, mime_type: &str) -> String {
        let url = format!("{}{}", BLOB_URL_PREFIX, Uuid::new_v4());
        debug!("Publishing {} bytes ({}) at {}", bytes.len(), mime_type, url);
        self.blobs.insert(
            url.clone(),
            Blob {
                mime_type: mime_type.to_string(),
                bytes: bytes.into(),
            },
        );
        url
    }

    pub fn resolve(&self, url: &str) -> Option<Blob> {
        self.blobs.get(url).map(|entry| entry.value().clone())
    }

    /// Release a URL. Returns whether it was live.
    pub fn revoke_object_url(&self, url: &str) -> bool {
        let removed = self.blobs.remove(url).is_some();
        if removed {
            debug!("Revoked {}", url);
        }
        removed
    }

    pub fn is_blob_url(url: &str) -> bool {
        url.starts_with(BLOB_URL_PREFIX)
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
