//! rtdb-core - Core types and traits for typed Realtime Database reads.
//!
//! A [`DatabaseProvider`] resolves a [`DatabaseTarget`] to a path, performs a
//! single-shot read against an injected [`Store`], and decodes the value into
//! a typed record.

pub mod error;
pub mod memory;
pub mod provider;
pub mod sample;
pub mod traits;
pub mod types;

pub use error::{ProviderError, StoreError};
pub use memory::MemoryStore;
pub use provider::DatabaseProvider;
pub use sample::{UserEntry, UserList, UserRecord, UserTarget};
pub use traits::{DatabaseTarget, Store};
pub use types::{AuthToken, DatabasePath, DatabaseUrl};

/// Result type alias for store reads.
pub type Result<T> = std::result::Result<T, StoreError>;
