//! Tagged command envelopes.
//!
//! Inbound frames are decoded once at the boundary into a per-view sum type
//! and dispatched by exhaustive match in the view controllers. Outbound
//! frames share a single [`ClientCommand`] enum across both views.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    error::ProtocolError,
    item::{Dialog, Message},
};

/// Inbound commands understood by the single-conversation dialog view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DialogCommand {
    /// One new message for the open conversation.
    GetNewMessage {
        /// The message to append.
        message: Message,
        /// Authoritative checksum over the full conversation.
        integrity_hash: i64,
    },

    /// Full authoritative replacement of the conversation.
    GetMessages {
        /// All messages, in server order.
        messages: Vec<Message>,
    },

    /// Standalone integrity verification request.
    CheckIntegrity {
        /// Authoritative checksum over the full conversation.
        integrity_hash: i64,
    },

    /// Server asks the client to leave the conversation page.
    GoHome,
}

impl DialogCommand {
    /// Command tags this view recognizes.
    const KNOWN: &'static [&'static str] =
        &["get_new_message", "get_messages", "check_integrity", "go_home"];

    /// Decode one inbound text frame for the dialog view.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        decode_tagged(text, Self::KNOWN)
    }
}

/// Inbound commands understood by the dialog-list view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ListCommand {
    /// A conversation received a new message; its entry moves to the top.
    GetNewMessage {
        /// Refreshed entry for the affected conversation.
        dialog: Dialog,
        /// Authoritative checksum over the full list.
        integrity_hash: i64,
    },

    /// A conversation was deleted.
    DeleteDialog {
        /// Identifier of the removed conversation.
        dialog_id: u64,
        /// Authoritative checksum over the full list.
        integrity_hash: i64,
    },

    /// Full authoritative replacement of the list.
    GetDialogs {
        /// All entries, in server order.
        dialogs: Vec<Dialog>,
    },

    /// A conversation was read on another device or page.
    MarkDialogAsRead {
        /// Identifier of the conversation that was read.
        dialog_id: u64,
        /// Authoritative checksum over the full list.
        integrity_hash: i64,
    },

    /// Standalone integrity verification request.
    CheckIntegrity {
        /// Authoritative checksum over the full list.
        integrity_hash: i64,
    },

    /// Server asks the client to leave the list page.
    GoHome,
}

impl ListCommand {
    /// Command tags this view recognizes.
    const KNOWN: &'static [&'static str] = &[
        "get_new_message",
        "delete_dialog",
        "get_dialogs",
        "mark_dialog_as_read",
        "check_integrity",
        "go_home",
    ];

    /// Decode one inbound text frame for the dialog-list view.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        decode_tagged(text, Self::KNOWN)
    }
}

/// Body of an outbound `get_new_message` frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Message text as typed by the user.
    pub text: String,
}

/// Outbound commands sent by either view.
///
/// All sends are fire-and-forget; the protocol has no acknowledgments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ClientCommand {
    /// Submit a new message for the open conversation.
    GetNewMessage {
        /// The message body.
        message: OutgoingMessage,
    },

    /// Read receipt for the open conversation.
    MarkDialogAsRead,

    /// Request a full authoritative conversation resync.
    GiveMessages,

    /// Request a full authoritative list resync.
    GiveDialogs,

    /// Delete a conversation.
    DeleteDialog {
        /// Identifier of the conversation to delete.
        dialog_id: u64,
    },
}

impl ClientCommand {
    /// Encode this command as a JSON text frame.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Decode a tagged frame, distinguishing a missing command key from an
/// unrecognized command tag.
fn decode_tagged<T: DeserializeOwned>(text: &str, known: &[&str]) -> Result<T, ProtocolError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let command = value
        .get("command")
        .and_then(serde_json::Value::as_str)
        .ok_or(ProtocolError::MissingCommand)?;

    if !known.contains(&command) {
        return Err(ProtocolError::UnknownCommand { command: command.to_owned() });
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn dialog_new_message_decodes() {
        let frame = r#"{"command":"get_new_message","integrity_hash":500,
            "message":{"text":"hi","hash":500,"user_owns_message":true,
                       "time":"2021.07.01 05:27","is_unread":true}}"#;

        let command = DialogCommand::decode(frame).unwrap();
        match command {
            DialogCommand::GetNewMessage { message, integrity_hash } => {
                assert_eq!(message.text, "hi");
                assert_eq!(integrity_hash, 500);
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_delete_dialog_decodes() {
        let frame = r#"{"command":"delete_dialog","dialog_id":1,"integrity_hash":99}"#;

        let command = ListCommand::decode(frame).unwrap();
        assert_eq!(command, ListCommand::DeleteDialog { dialog_id: 1, integrity_hash: 99 });
    }

    #[test]
    fn go_home_decodes_on_both_views() {
        let frame = r#"{"command":"go_home"}"#;

        assert_eq!(DialogCommand::decode(frame).unwrap(), DialogCommand::GoHome);
        assert_eq!(ListCommand::decode(frame).unwrap(), ListCommand::GoHome);
    }

    #[test]
    fn missing_command_key_is_malformed() {
        assert!(matches!(
            DialogCommand::decode(r#"{"message":{}}"#),
            Err(ProtocolError::MissingCommand)
        ));
        assert!(matches!(ListCommand::decode("[1,2,3]"), Err(ProtocolError::MissingCommand)));
    }

    #[test]
    fn unrecognized_command_is_distinct_from_malformed() {
        let frame = r#"{"command":"delete_dialog","dialog_id":1,"integrity_hash":0}"#;

        // delete_dialog belongs to the list view only.
        assert!(matches!(
            DialogCommand::decode(frame),
            Err(ProtocolError::UnknownCommand { command }) if command == "delete_dialog"
        ));
        assert!(ListCommand::decode(frame).is_ok());
    }

    #[test]
    fn non_json_frame_is_invalid() {
        assert!(matches!(DialogCommand::decode("not json"), Err(ProtocolError::Json(_))));
    }

    #[test]
    fn outbound_frames_match_wire_shape() {
        let send = ClientCommand::GetNewMessage {
            message: OutgoingMessage { text: "hello".into() },
        };
        assert_eq!(
            send.encode().unwrap(),
            r#"{"command":"get_new_message","message":{"text":"hello"}}"#
        );

        assert_eq!(
            ClientCommand::MarkDialogAsRead.encode().unwrap(),
            r#"{"command":"mark_dialog_as_read"}"#
        );
        assert_eq!(ClientCommand::GiveMessages.encode().unwrap(), r#"{"command":"give_messages"}"#);
        assert_eq!(ClientCommand::GiveDialogs.encode().unwrap(), r#"{"command":"give_dialogs"}"#);
        assert_eq!(
            ClientCommand::DeleteDialog { dialog_id: 4 }.encode().unwrap(),
            r#"{"command":"delete_dialog","dialog_id":4}"#
        );
    }
}
