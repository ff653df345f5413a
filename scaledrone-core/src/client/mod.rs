// Client module organization

pub mod rest;

// Re-export main types
pub use rest::{Client, ClientBuilder};
pub use crate::protocol::{RoomMembers, UsersCount};
