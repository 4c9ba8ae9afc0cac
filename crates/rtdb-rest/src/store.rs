//! REST-backed store implementation.

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use rtdb_core::Result;
use rtdb_core::traits::Store;
use rtdb_core::types::{AuthToken, DatabasePath, DatabaseUrl};

use crate::client::RestClient;

/// A network-backed store using the Realtime Database REST API.
///
/// Every read is a single `GET {url}/{path}.json`; nothing stays subscribed.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: RestClient,
}

impl RestStore {
    /// Create a new REST store for the given database URL.
    pub fn new(url: DatabaseUrl) -> Result<Self> {
        Ok(Self {
            client: RestClient::new(url)?,
        })
    }

    /// Authenticate reads with an ID token or database secret.
    pub fn with_auth(self, token: AuthToken) -> Self {
        Self {
            client: self.client.with_auth(token),
        }
    }

    /// Target a namespace on the local emulator.
    pub fn with_namespace(self, ns: impl Into<String>) -> Self {
        Self {
            client: self.client.with_namespace(ns),
        }
    }

    /// Returns the database URL for this store.
    pub fn url(&self) -> &DatabaseUrl {
        self.client.url()
    }
}

#[async_trait]
impl Store for RestStore {
    #[instrument(skip(self), fields(db = %self.client.url()))]
    async fn read_once(&self, path: &str) -> Result<Option<Value>> {
        let path = DatabasePath::new(path)?;
        self.client.get(&path).await
    }
}
