//! Database URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

use super::DatabasePath;
use crate::error::{InvalidInputError, StoreError};

/// A validated Realtime Database URL.
///
/// Supports network databases (HTTPS, or HTTP for a localhost emulator) and
/// local JSON exports addressed with `file://` URLs.
///
/// # Example
///
/// ```
/// use rtdb_core::{DatabasePath, DatabaseUrl};
///
/// let db = DatabaseUrl::new("https://demo-default-rtdb.firebaseio.com").unwrap();
/// let path = DatabasePath::new("users/1").unwrap();
/// assert_eq!(db.rest_url(&path).as_str(),
///            "https://demo-default-rtdb.firebaseio.com/users/1.json");
///
/// let local = DatabaseUrl::new("file:///tmp/export.json").unwrap();
/// assert!(local.is_local());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DatabaseUrl(Url);

impl DatabaseUrl {
    /// Create a new database URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, StoreError> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::DatabaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the REST endpoint for a database path.
    ///
    /// Each segment is percent-encoded, so keys containing `?`, `%` or spaces
    /// stay inside the path. The root path maps to `{base}/.json`.
    pub fn rest_url(&self, path: &DatabasePath) -> Url {
        let mut url = self.0.clone();
        let mut segments: Vec<&str> = path.segments().collect();
        let last = format!("{}.json", segments.pop().unwrap_or_default());

        // Validated URLs are always base URLs
        if let Ok(mut parts) = url.path_segments_mut() {
            parts.pop_if_empty().extend(segments).push(&last);
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns true if this points at a local JSON export (file:// URL).
    pub fn is_local(&self) -> bool {
        self.0.scheme() == "file"
    }

    /// Returns true if this is a network database (http:// or https:// URL).
    pub fn is_network(&self) -> bool {
        let scheme = self.0.scheme();
        scheme == "http" || scheme == "https"
    }

    /// Returns the filesystem path for file:// URLs.
    ///
    /// Returns `None` for non-file URLs.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.is_local() {
            self.0.to_file_path().ok()
        } else {
            None
        }
    }

    fn validate(url: &Url, original: &str) -> Result<(), StoreError> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::DatabaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::DatabaseUrl {
                value: original.to_string(),
                reason: "must not have a query or fragment".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();

        if scheme == "file" {
            if url.path().is_empty() || url.path() == "/" {
                return Err(InvalidInputError::DatabaseUrl {
                    value: original.to_string(),
                    reason: "file:// URL must name an export file".to_string(),
                }
                .into());
            }
            return Ok(());
        }

        // The emulator runs on localhost without TLS
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::DatabaseUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::DatabaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatabaseUrl {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for DatabaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for DatabaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DatabaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for DatabaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
