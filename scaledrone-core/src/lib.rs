//! Scaledrone REST client
//!
//! Publishes messages to rooms and queries channel and room membership
//! through the Scaledrone HTTP management API. Every operation is exactly
//! one authenticated HTTP request; there is no retry, caching or realtime
//! transport here.

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod logging;
pub mod protocol;

pub use auth::AuthMode;
pub use client::{Client, ClientBuilder};
pub use error::{ErrorCategory, ScaledroneError, ScaledroneResult};
pub use http::HttpConfig;
pub use protocol::{RoomMembers, UsersCount};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
