//! Store selection for the CLI.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use rtdb_core::traits::Store;
use rtdb_core::{AuthToken, DatabaseUrl};
use rtdb_file::FileStore;
use rtdb_rest::RestStore;

use crate::cli::ConnectionArgs;

/// Store wrapper for CLI use.
#[derive(Debug)]
pub enum CliStore {
    File(FileStore),
    Rest(RestStore),
}

impl CliStore {
    /// Open the store named by the connection arguments.
    ///
    /// `file://` URLs read a local JSON export; anything else goes over REST.
    pub fn open(args: &ConnectionArgs) -> Result<Self> {
        let url = DatabaseUrl::new(&args.database_url).context("Invalid database URL")?;

        if url.is_local() {
            let store = FileStore::from_url(&url).context("Invalid export location")?;
            return Ok(CliStore::File(store));
        }

        let mut store = RestStore::new(url).context("Failed to create HTTP client")?;
        if let Some(auth) = &args.auth {
            store = store.with_auth(AuthToken::new(auth));
        }
        if let Some(ns) = &args.namespace {
            store = store.with_namespace(ns);
        }

        Ok(CliStore::Rest(store))
    }

    /// Human-readable location of the store.
    pub fn location(&self) -> String {
        match self {
            CliStore::File(store) => store.export().display().to_string(),
            CliStore::Rest(store) => store.url().to_string(),
        }
    }
}

#[async_trait]
impl Store for CliStore {
    async fn read_once(&self, path: &str) -> rtdb_core::Result<Option<Value>> {
        match self {
            CliStore::File(store) => store.read_once(path).await,
            CliStore::Rest(store) => store.read_once(path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(url: &str) -> ConnectionArgs {
        ConnectionArgs {
            database_url: url.to_string(),
            auth: Some("s3cr3t".to_string()),
            namespace: None,
        }
    }

    #[test]
    fn file_url_opens_file_store() {
        let store = CliStore::open(&args("file:///tmp/export.json")).unwrap();
        assert!(matches!(store, CliStore::File(_)));
    }

    #[test]
    fn network_url_opens_rest_store() {
        let store = CliStore::open(&args("http://localhost:9000")).unwrap();
        assert!(matches!(store, CliStore::Rest(_)));
        assert!(!format!("{:?}", store).contains("s3cr3t"));
    }

    #[test]
    fn rejects_plain_http_remote() {
        assert!(CliStore::open(&args("http://demo.firebaseio.com")).is_err());
    }
}
