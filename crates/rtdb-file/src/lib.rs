//! rtdb-file - Store backed by a local JSON export of a database.

mod store;

pub use store::FileStore;
