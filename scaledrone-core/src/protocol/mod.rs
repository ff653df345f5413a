// Response payloads of the Scaledrone REST API

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of `GET /{channel}/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersCount {
    pub users_count: i64,
}

/// Room name to member ids, as returned by `GET /{channel}/room-members`.
/// Only rooms with at least one member are present.
pub type RoomMembers = HashMap<String, Vec<String>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_count_requires_numeric_field() {
        let parsed: UsersCount = serde_json::from_str(r#"{"users_count": 42}"#).unwrap();
        assert_eq!(parsed.users_count, 42);

        assert!(serde_json::from_str::<UsersCount>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<UsersCount>(r#"{"users_count": "42"}"#).is_err());
    }

    #[test]
    fn room_members_keeps_member_order() {
        let parsed: RoomMembers =
            serde_json::from_str(r#"{"lobby":["u2","u1"],"kitchen":["u3"]}"#).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["lobby"], vec!["u2", "u1"]);
        assert_eq!(parsed["kitchen"], vec!["u3"]);
    }
}
