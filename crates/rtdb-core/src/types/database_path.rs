//! Database path type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidInputError, StoreError};

/// Maximum encoded length of a path, in bytes.
const MAX_PATH_BYTES: usize = 768;

/// Maximum number of path segments.
const MAX_DEPTH: usize = 32;

/// Characters the database rejects inside a key.
const FORBIDDEN: &[char] = &['.', '$', '#', '[', ']'];

/// A validated slash-separated path into the database tree.
///
/// Leading and trailing slashes are trimmed; the empty path is the root.
///
/// # Example
///
/// ```
/// use rtdb_core::DatabasePath;
///
/// let path = DatabasePath::new("/users/1/").unwrap();
/// assert_eq!(path.as_str(), "users/1");
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["users", "1"]);
/// assert!(DatabasePath::new("users/a.b").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatabasePath(String);

impl DatabasePath {
    /// Create a new path from a string, validating each segment.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment is empty or contains a forbidden
    /// character, or the path is too long or too deep.
    pub fn new(s: impl AsRef<str>) -> Result<Self, StoreError> {
        let raw = s.as_ref();
        let trimmed = raw.trim_matches('/');
        Self::validate(trimmed, raw)?;
        Ok(Self(trimmed.to_string()))
    }

    /// The root of the database.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path string without surrounding slashes.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path segments, empty for the root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    fn validate(s: &str, original: &str) -> Result<(), StoreError> {
        let invalid = |reason: String| -> StoreError {
            InvalidInputError::Path {
                value: original.to_string(),
                reason,
            }
            .into()
        };

        if s.is_empty() {
            return Ok(());
        }

        if s.len() > MAX_PATH_BYTES {
            return Err(invalid(format!("longer than {} bytes", MAX_PATH_BYTES)));
        }

        let segments: Vec<&str> = s.split('/').collect();
        if segments.len() > MAX_DEPTH {
            return Err(invalid(format!("deeper than {} segments", MAX_DEPTH)));
        }

        for (i, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                return Err(invalid(format!("segment {} is empty", i + 1)));
            }

            if let Some(c) = segment
                .chars()
                .find(|c| FORBIDDEN.contains(c) || c.is_ascii_control())
            {
                return Err(invalid(format!(
                    "segment '{}' contains forbidden character {:?}",
                    segment, c
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for DatabasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

impl FromStr for DatabasePath {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DatabasePath {
    type Error = StoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<DatabasePath> for String {
    fn from(path: DatabasePath) -> Self {
        path.0
    }
}

impl AsRef<str> for DatabasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
