//! Validated value types.
//!
//! These types enforce database invariants at construction time,
//! so backends never see a malformed URL or path.

mod auth_token;
mod database_path;
mod database_url;

pub use auth_token::AuthToken;
pub use database_path::DatabasePath;
pub use database_url::DatabaseUrl;
