//! Core traits for request descriptors and store backends.

mod store;
mod target;

pub use store::Store;
pub use target::DatabaseTarget;
