//! rtdb-rest - Store backed by the Realtime Database REST API.

mod client;
mod store;

pub use client::RestClient;
pub use store::RestStore;
