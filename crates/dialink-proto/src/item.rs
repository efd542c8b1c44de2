//! Item records carried inside command payloads.

use serde::{Deserialize, Serialize};

use crate::time::WireTime;

/// A single chat message as pushed by the server.
///
/// Identity is positional within the conversation: `hash` is a server-side
/// checksum contribution and is only ever used summed, never as a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message body.
    pub text: String,

    /// Per-message integrity contribution, summed by the client when
    /// verifying conversation state against a server hash.
    pub hash: i64,

    /// True when the receiving user authored this message.
    pub user_owns_message: bool,

    /// Send time (UTC, minute precision).
    pub time: WireTime,

    /// True when the receiving user has not read this message yet.
    pub is_unread: bool,
}

/// A conversation entry as pushed to the dialog-list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    /// Unique conversation identifier.
    pub id: u64,

    /// Per-dialog integrity contribution.
    pub hash: i64,

    /// Preview text (latest message in the conversation).
    pub text: String,

    /// True when the conversation has unread messages.
    pub is_unread: bool,
}
