//! The `users` collection: request descriptors and record schemas.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::traits::DatabaseTarget;

/// Requests against the `users` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTarget {
    /// Every document under `users`.
    ListDocuments,
    /// A single document, `users/{id}`.
    GetDocument { id: i64 },
}

impl DatabaseTarget for UserTarget {
    fn path(&self) -> String {
        match self {
            UserTarget::ListDocuments => "users".to_string(),
            UserTarget::GetDocument { id } => format!("users/{}", id),
        }
    }
}

/// Wire name of [`UserRecord::first_name`].
const FIRST_NAME: &str = "first_name";

/// Wire name of [`UserRecord::last_name`].
const LAST_NAME: &str = "last_name";

/// A user document.
///
/// Both fields are optional; a document with neither is still valid.
/// Unknown fields are ignored. Only JSON objects decode: fields are matched
/// by wire name, never by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct UserRecord {
    #[serde(rename = "first_name", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(rename = "last_name", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl TryFrom<Map<String, Value>> for UserRecord {
    type Error = serde_json::Error;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: optional_string(&mut fields, FIRST_NAME)?,
            last_name: optional_string(&mut fields, LAST_NAME)?,
        })
    }
}

fn optional_string(
    fields: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<String>, serde_json::Error> {
    match fields.remove(key) {
        Some(value) => serde_json::from_value(value),
        None => Ok(None),
    }
}

/// One entry of a [`UserList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserEntry {
    /// The document key under `users`.
    pub id: String,
    /// The decoded document.
    #[serde(flatten)]
    pub record: UserRecord,
}

/// The whole `users` collection.
///
/// The database returns collections keyed by small integers as JSON arrays,
/// with `null` in the holes; other collections come back as objects. Both
/// shapes decode here, holes skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawUserList")]
pub struct UserList {
    entries: Vec<UserEntry>,
}

impl UserList {
    /// Returns the entries in key order (array position for array payloads).
    pub fn entries(&self) -> &[UserEntry] {
        &self.entries
    }

    /// Look up a document by key.
    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserList {
    Keyed(BTreeMap<String, Option<UserRecord>>),
    Indexed(Vec<Option<UserRecord>>),
}

impl From<RawUserList> for UserList {
    fn from(raw: RawUserList) -> Self {
        let entries = match raw {
            RawUserList::Keyed(map) => map
                .into_iter()
                .filter_map(|(id, record)| record.map(|record| UserEntry { id, record }))
                .collect(),
            RawUserList::Indexed(items) => items
                .into_iter()
                .enumerate()
                .filter_map(|(i, record)| {
                    record.map(|record| UserEntry {
                        id: i.to_string(),
                        record,
                    })
                })
                .collect(),
        };

        Self { entries }
    }
}
