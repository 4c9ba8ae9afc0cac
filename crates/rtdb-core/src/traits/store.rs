//! Store backend trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// A hierarchical key-value store that can be read by path.
///
/// Backends are injected into a [`DatabaseProvider`](crate::DatabaseProvider),
/// which keeps descriptors free of any connection handling.
#[async_trait]
pub trait Store: Send + Sync {
    /// Read the value at `path` once.
    ///
    /// Returns `Ok(None)` when nothing is stored there. This is a single-shot
    /// read; backends must not keep a listener attached afterwards.
    async fn read_once(&self, path: &str) -> Result<Option<Value>>;
}

