//! In-memory store backed by a JSON tree.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::Result;
use crate::traits::Store;
use crate::types::DatabasePath;

/// Walk `path` through a JSON tree.
///
/// Objects are indexed by key and arrays by decimal position. A `null` leaf
/// counts as absent, matching how the database treats null writes.
pub fn resolve<'a>(root: &'a Value, path: &DatabasePath) -> Option<&'a Value> {
    let mut node = root;
    for segment in path.segments() {
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(array_index(segment)?)?,
            _ => return None,
        };
    }

    if node.is_null() { None } else { Some(node) }
}

/// Parse a canonical decimal array index: digits only, no sign, no leading zero.
fn array_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}

/// A [`Store`] that answers reads from a JSON tree held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    root: Value,
}

impl MemoryStore {
    /// Create a store serving the given tree.
    pub fn new(root: Value) -> Self {
        Self { root }
    }
}

#[async_trait]
impl Store for MemoryStore {
    #[instrument(skip(self))]
    async fn read_once(&self, path: &str) -> Result<Option<Value>> {
        let path = DatabasePath::new(path)?;
        let value = resolve(&self.root, &path).cloned();
        debug!(found = value.is_some(), "Read from memory store");
        Ok(value)
    }
}
