//! In-memory item records.
//!
//! These ordered records replace the server-rendered markup the original
//! client mutated: controllers are the sole mutators, and the rendering
//! layer treats them as a read-only projection. Integrity hashing operates
//! over these records, never over rendered output.

use chrono::NaiveDate;
use dialink_proto::{Dialog, Message, WireTime};

/// One message in the open conversation.
///
/// Identity is positional within the conversation; `hash` is only ever
/// used summed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageItem {
    /// Message body.
    pub text: String,
    /// Integrity contribution.
    pub hash: i64,
    /// True when this user authored the message.
    pub from_me: bool,
    /// Send time.
    pub time: WireTime,
    /// True when this message arrived unread.
    pub unread: bool,
}

impl From<Message> for MessageItem {
    fn from(message: Message) -> Self {
        Self {
            text: message.text,
            hash: message.hash,
            from_me: message.user_owns_message,
            time: message.time,
            unread: message.is_unread,
        }
    }
}

impl MessageItem {
    /// Display projection: time label, ownership marker, text.
    ///
    /// `05:27 (from me): hi` for a message from `today`, `01.07 (to me): hi`
    /// otherwise.
    pub fn display_label(&self, today: NaiveDate) -> String {
        let ownership = if self.from_me { "(from me)" } else { "(to me)" };
        format!("{} {ownership}: {}", self.time.short_label(today), self.text)
    }
}

/// One entry in the conversation list.
///
/// At most one entry exists per `id`; list order is server-supplied on full
/// replace and newest-first on prepend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogEntry {
    /// Conversation identifier.
    pub id: u64,
    /// Integrity contribution.
    pub hash: i64,
    /// Preview text.
    pub text: String,
    /// True when the conversation has unread messages.
    pub unread: bool,
}

impl From<Dialog> for DialogEntry {
    fn from(dialog: Dialog) -> Self {
        Self { id: dialog.id, hash: dialog.hash, text: dialog.text, unread: dialog.is_unread }
    }
}

impl DialogEntry {
    /// Display projection: `<id>: <preview>`.
    pub fn display_label(&self) -> String {
        format!("{}: {}", self.id, self.text)
    }

    /// Location of the conversation page this entry links to.
    pub fn link_target(&self) -> String {
        format!("/dialogs/u{}", self.id)
    }
}
