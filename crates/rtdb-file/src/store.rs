//! Store reading a JSON export from disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use rtdb_core::Result;
use rtdb_core::error::{InvalidInputError, StoreError, TransportError};
use rtdb_core::memory::resolve;
use rtdb_core::traits::Store;
use rtdb_core::types::{DatabasePath, DatabaseUrl};

fn map_io(path: &Path, err: std::io::Error) -> StoreError {
    TransportError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
    .into()
}

/// A [`Store`] over a JSON export of a whole database.
///
/// The export is the file the Firebase console produces with "Export JSON".
/// It is read afresh on every request, so edits show up on the next read.
#[derive(Debug, Clone)]
pub struct FileStore {
    export: PathBuf,
}

impl FileStore {
    /// Create a store reading the export at `export`.
    pub fn new(export: impl AsRef<Path>) -> Self {
        Self {
            export: export.as_ref().to_path_buf(),
        }
    }

    /// Create a store from a `file://` database URL.
    pub fn from_url(url: &DatabaseUrl) -> Result<Self> {
        let export = url
            .to_file_path()
            .ok_or_else(|| InvalidInputError::DatabaseUrl {
                value: url.to_string(),
                reason: "not a file:// URL".to_string(),
            })?;
        Ok(Self::new(export))
    }

    /// Returns the export file path.
    pub fn export(&self) -> &Path {
        &self.export
    }

    async fn load(&self) -> Result<Value> {
        let bytes = tokio::fs::read(&self.export)
            .await
            .map_err(|e| map_io(&self.export, e))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            InvalidInputError::Export {
                path: self.export.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl Store for FileStore {
    #[instrument(skip(self), fields(export = %self.export.display()))]
    async fn read_once(&self, path: &str) -> Result<Option<Value>> {
        let path = DatabasePath::new(path)?;
        let root = self.load().await?;
        let value = resolve(&root, &path).cloned();
        debug!(found = value.is_some(), "Read from export");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_export(dir: &TempDir, value: &Value) -> PathBuf {
        let path = dir.path().join("export.json");
        std::fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
        path
    }

    #[tokio::test]
    async fn reads_value_at_path() {
        let dir = TempDir::new().unwrap();
        let export = write_export(
            &dir,
            &json!({ "users": { "1": { "first_name": "Ada" } } }),
        );

        let store = FileStore::new(&export);
        let value = store.read_once("users/1").await.unwrap();
        assert_eq!(value, Some(json!({ "first_name": "Ada" })));
        assert_eq!(store.read_once("users/2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn sees_edits_between_reads() {
        let dir = TempDir::new().unwrap();
        let export = write_export(&dir, &json!({}));
        let store = FileStore::new(&export);

        assert_eq!(store.read_once("users").await.unwrap(), None);

        write_export(&dir, &json!({ "users": ["a"] }));
        assert_eq!(store.read_once("users/0").await.unwrap(), Some(json!("a")));
    }

    #[tokio::test]
    async fn missing_export_is_transport_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("missing.json"));
        let err = store.read_once("users").await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(TransportError::Io { .. })));
    }

    #[tokio::test]
    async fn malformed_export_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(&path, b"{ nope").unwrap();

        let err = FileStore::new(&path).read_once("users").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidInput(InvalidInputError::Export { .. })
        ));
    }

    #[test]
    fn from_file_url() {
        #[cfg(unix)]
        {
            let url = DatabaseUrl::new("file:///tmp/export.json").unwrap();
            let store = FileStore::from_url(&url).unwrap();
            assert_eq!(store.export(), Path::new("/tmp/export.json"));
        }

        let url = DatabaseUrl::new("https://demo.firebaseio.com").unwrap();
        assert!(FileStore::from_url(&url).is_err());
    }
}
