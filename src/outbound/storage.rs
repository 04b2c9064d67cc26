//! HTTP adapter for the external content store.
//!
//! Hands decoded upload bytes to the object-storage host with a single `PUT`
//! per upload and returns the public location reference. The core never reads
//! content back through this adapter.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::domain::StorageKey;
use crate::domain::ports::{ContentStore, ContentStoreError};

/// Content store speaking plain HTTP `PUT` to an object-storage host.
#[derive(Clone)]
pub struct HttpContentStore {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpContentStore {
    /// Create an adapter writing under `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn object_url(&self, key: &StorageKey) -> Result<Url, ContentStoreError> {
        self.base_url
            .join(key.as_str())
            .map_err(|err| ContentStoreError::upstream(format!("invalid object url: {err}")))
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn store(
        &self,
        key: &StorageKey,
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<String, ContentStoreError> {
        let url = self.object_url(key)?;
        debug!(key = %key, byte_size = bytes.len(), "storing object");

        let response = self
            .client
            .put(url.clone())
            .header(reqwest::header::CONTENT_TYPE, mime_type)
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|err| ContentStoreError::upstream(format!("storage request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(ContentStoreError::upstream(format!(
                "storage host returned {}",
                response.status()
            )));
        }

        Ok(url.to_string())
    }
}
