//! Injected handle to the hosted document store.
//!
//! DESIGN
//! ======
//! One `StoreConfig` is built at app startup and one `StoreHandle` is placed
//! in context; pages never construct their own connection. The store speaks
//! plain JSON document conventions: a collection lives at
//! `{base}/{collection}.json` as a key-to-document map, a single document at
//! `{base}/{collection}/{key}.json`, and create returns the generated key.
//!
//! Every read goes through the typed decode layer in `records`, so a
//! malformed document is a [`StoreError::Decode`], never a half-rendered row.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use records::{DecodeError, Record};
use serde_json::Value;

/// Where the document store lives. Defaults to the same-origin `/store`
/// proxy path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "/store".to_owned(),
        }
    }
}

/// Error from a document-store operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The request never completed (network, serialization).
    #[error("store request failed: {0}")]
    Transport(String),
    /// The store answered with a non-success status.
    #[error("store responded with status {0}")]
    Status(u16),
    /// The payload did not decode into typed records.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Key assigned by the store on create.
#[cfg(feature = "csr")]
#[derive(serde::Deserialize)]
struct CreatedKey {
    name: String,
}

/// Shared document-store handle, provided via context.
#[derive(Clone, Debug)]
pub struct StoreHandle {
    config: StoreConfig,
}

impl StoreHandle {
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    #[cfg(any(test, feature = "csr"))]
    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}.json", self.config.base_url.trim_end_matches('/'))
    }

    #[cfg(any(test, feature = "csr"))]
    fn document_url(&self, collection: &str, key: &str) -> String {
        format!(
            "{}/{collection}/{key}.json",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// List a collection as typed records, sorted by key.
    ///
    /// # Errors
    ///
    /// Transport, status, or decode failure. Native builds return an empty
    /// list.
    pub async fn list<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.collection_url(R::COLLECTION))
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            let payload: Value = resp
                .json()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            Ok(records::decode_collection(&payload)?)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(Vec::new())
        }
    }

    /// Create a document in `R`'s collection, returning the generated key.
    ///
    /// # Errors
    ///
    /// Transport or status failure; native builds always fail.
    pub async fn create<R: Record>(&self, body: &Value) -> Result<String, StoreError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.collection_url(R::COLLECTION))
                .json(body)
                .map_err(|e| StoreError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            let created: CreatedKey = resp
                .json()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            Ok(created.name)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(StoreError::Transport(
                "store writes require a browser".to_owned(),
            ))
        }
    }

    /// Overwrite the record at its existing key.
    ///
    /// # Errors
    ///
    /// Transport or status failure; native builds always fail.
    pub async fn update<R: Record>(&self, record: &R) -> Result<(), StoreError> {
        self.put(R::COLLECTION, record.key(), &record.encode()).await
    }

    /// Write a document body at an explicit collection and key.
    ///
    /// # Errors
    ///
    /// Transport or status failure; native builds always fail.
    pub async fn put(&self, collection: &str, key: &str, body: &Value) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::put(&self.document_url(collection, key))
                .json(body)
                .map_err(|e| StoreError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            if resp.ok() {
                Ok(())
            } else {
                Err(StoreError::Status(resp.status()))
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (collection, key, body);
            Err(StoreError::Transport(
                "store writes require a browser".to_owned(),
            ))
        }
    }

    /// Delete the document at `collection/key`.
    ///
    /// # Errors
    ///
    /// Transport or status failure; native builds always fail.
    pub async fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&self.document_url(collection, key))
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            if resp.ok() {
                Ok(())
            } else {
                Err(StoreError::Status(resp.status()))
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (collection, key);
            Err(StoreError::Transport(
                "store writes require a browser".to_owned(),
            ))
        }
    }
}
