//! Single-conversation view controller.
//!
//! State machine over the dialog command set. The only cross-event state
//! besides the message records is the `unread_messages_exist` flag and the
//! page focus; everything else is recomputed from the records.

use chrono::NaiveDate;
use dialink_proto::{ClientCommand, DialogCommand, OutgoingMessage, ProtocolError};

use crate::{MessageItem, ViewAction, ViewController, ViewEvent, integrity};

/// Location the dialog page navigates to on `go_home`.
const HOME_LOCATION: &str = "/account/";

/// Controller for the single-conversation page.
#[derive(Debug, Clone, Default)]
pub struct DialogView {
    /// Rendered messages, ordered by arrival (appends newest-last).
    messages: Vec<MessageItem>,
    /// The view-level unread flag gating read receipts.
    unread_messages_exist: bool,
    /// Current page focus state.
    has_focus: bool,
}

impl DialogView {
    /// Fresh controller for an unfocused page with no messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current message records, in render order.
    pub fn messages(&self) -> &[MessageItem] {
        &self.messages
    }

    /// Whether unread messages exist from this view's perspective.
    pub fn unread_messages_exist(&self) -> bool {
        self.unread_messages_exist
    }

    /// Sum of per-message integrity contributions.
    fn local_hash(&self) -> i64 {
        self.messages.iter().map(|m| m.hash).sum()
    }

    /// Verify local state against a server checksum; mismatch requests a
    /// full conversation resync.
    fn check_integrity(&self, server_hash: i64) -> Option<ViewAction> {
        integrity::check(self.local_hash(), server_hash, ClientCommand::GiveMessages)
    }

    /// Send the read receipt, clearing the local flag first.
    fn send_mark_dialog_as_read(&mut self) -> ViewAction {
        tracing::info!("send mark_dialog_as_read");
        self.unread_messages_exist = false;
        ViewAction::Send(ClientCommand::MarkDialogAsRead)
    }

    fn handle_command(&mut self, command: DialogCommand) -> Vec<ViewAction> {
        match command {
            DialogCommand::GetNewMessage { message, integrity_hash } => {
                let is_unread = message.is_unread;
                self.messages.push(message.into());

                let mut actions = vec![ViewAction::Render];
                actions.extend(self.check_integrity(integrity_hash));

                if is_unread {
                    if !self.unread_messages_exist && !self.has_focus {
                        self.unread_messages_exist = true;
                    } else if self.has_focus && self.unread_messages_exist {
                        actions.push(self.send_mark_dialog_as_read());
                    }
                    // A focused page receiving its first unread message only
                    // sets the flag; the receipt waits for the next focus
                    // event or a later unread message. Preserved as-is.
                }

                actions
            },
            DialogCommand::GetMessages { messages } => {
                self.messages = messages.into_iter().map(Into::into).collect();
                if self.messages.iter().any(|m| m.unread) {
                    self.unread_messages_exist = true;
                }

                let mut actions = vec![ViewAction::Render];
                if self.has_focus && self.unread_messages_exist {
                    actions.push(self.send_mark_dialog_as_read());
                }
                actions
            },
            DialogCommand::CheckIntegrity { integrity_hash } => {
                self.check_integrity(integrity_hash).into_iter().collect()
            },
            DialogCommand::GoHome => {
                vec![ViewAction::Navigate { location: HOME_LOCATION.to_owned() }]
            },
        }
    }
}

impl ViewController for DialogView {
    fn handle(&mut self, event: ViewEvent) -> Vec<ViewAction> {
        match event {
            ViewEvent::FrameText(text) => match DialogCommand::decode(&text) {
                Ok(command) => {
                    tracing::info!("command: {command:?}");
                    self.handle_command(command)
                },
                Err(ProtocolError::UnknownCommand { command }) => {
                    tracing::warn!("invalid command: {command}");
                    vec![]
                },
                Err(err) => {
                    tracing::warn!("invalid data: {err}");
                    vec![]
                },
            },
            ViewEvent::FocusGained => {
                self.has_focus = true;
                if self.unread_messages_exist {
                    vec![self.send_mark_dialog_as_read()]
                } else {
                    vec![]
                }
            },
            ViewEvent::FocusLost => {
                self.has_focus = false;
                vec![]
            },
            ViewEvent::Submit { text } => {
                tracing::info!("send new message");
                vec![ViewAction::Send(ClientCommand::GetNewMessage {
                    message: OutgoingMessage { text },
                })]
            },
            // Delete buttons belong to the list page.
            ViewEvent::DeleteClicked { .. } => vec![],
        }
    }

    fn render_lines(&self, today: NaiveDate) -> Vec<String> {
        self.messages.iter().map(|m| m.display_label(today)).collect()
    }
}
