//! Conversation-list view controller.
//!
//! Owns the multi-conversation list and the aggregate unread indicator
//! shown in the persistent navigation link. The link's base label is
//! captured once at construction; the decorated label is recomputed from it
//! on every read, so the parenthetical count can never nest.

use chrono::NaiveDate;
use dialink_proto::{ClientCommand, ListCommand, ProtocolError};

use crate::{DialogEntry, ViewAction, ViewController, ViewEvent, integrity};

/// Location the list page navigates to on `go_home`.
const HOME_LOCATION: &str = "/home/";

/// Controller for the conversation-list page.
#[derive(Debug, Clone)]
pub struct DialogListView {
    /// List entries, newest-first on prepend, server order on replace.
    entries: Vec<DialogEntry>,
    /// Static base text of the navigation link, without any count suffix.
    base_label: String,
}

impl DialogListView {
    /// Fresh controller with the navigation link's undecorated label.
    pub fn new(base_label: impl Into<String>) -> Self {
        Self { entries: Vec::new(), base_label: base_label.into() }
    }

    /// Current entries, in render order.
    pub fn entries(&self) -> &[DialogEntry] {
        &self.entries
    }

    /// Number of entries currently flagged unread.
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|e| e.unread).count()
    }

    /// Whether the navigation link should show its has-unread state.
    pub fn unread_exists(&self) -> bool {
        self.unread_count() > 0
    }

    /// Navigation-link label: the base text, suffixed with the unread count
    /// in parentheses when it is nonzero.
    pub fn nav_label(&self) -> String {
        match self.unread_count() {
            0 => self.base_label.clone(),
            n => format!("{} ({n})", self.base_label),
        }
    }

    /// Sum of per-entry integrity contributions plus the unread count.
    fn local_hash(&self) -> i64 {
        let entry_sum: i64 = self.entries.iter().map(|e| e.hash).sum();
        entry_sum + self.unread_count() as i64
    }

    /// Verify local state against a server checksum; mismatch requests a
    /// full list resync.
    fn check_integrity(&self, server_hash: i64) -> Option<ViewAction> {
        integrity::check(self.local_hash(), server_hash, ClientCommand::GiveDialogs)
    }

    /// Remove the entry with the given id, if present.
    fn remove_entry(&mut self, dialog_id: u64) {
        self.entries.retain(|e| e.id != dialog_id);
    }

    fn handle_command(&mut self, command: ListCommand) -> Vec<ViewAction> {
        match command {
            ListCommand::GetNewMessage { dialog, integrity_hash } => {
                // The refreshed entry replaces any stale one and moves to
                // the top.
                self.remove_entry(dialog.id);
                self.entries.insert(0, dialog.into());

                let mut actions = vec![ViewAction::Render];
                actions.extend(self.check_integrity(integrity_hash));
                actions
            },
            ListCommand::DeleteDialog { dialog_id, integrity_hash } => {
                self.remove_entry(dialog_id);

                let mut actions = vec![ViewAction::Render];
                actions.extend(self.check_integrity(integrity_hash));
                actions
            },
            ListCommand::GetDialogs { dialogs } => {
                // Authoritative replace; no integrity check afterwards.
                self.entries = dialogs.into_iter().map(Into::into).collect();
                vec![ViewAction::Render]
            },
            ListCommand::MarkDialogAsRead { dialog_id, integrity_hash } => {
                if let Some(entry) = self.entries.iter_mut().find(|e| e.id == dialog_id) {
                    entry.unread = false;
                } else {
                    tracing::warn!("mark_dialog_as_read for unknown dialog {dialog_id}");
                }

                let mut actions = vec![ViewAction::Render];
                actions.extend(self.check_integrity(integrity_hash));
                actions
            },
            ListCommand::CheckIntegrity { integrity_hash } => {
                self.check_integrity(integrity_hash).into_iter().collect()
            },
            ListCommand::GoHome => {
                vec![ViewAction::Navigate { location: HOME_LOCATION.to_owned() }]
            },
        }
    }
}

impl ViewController for DialogListView {
    fn handle(&mut self, event: ViewEvent) -> Vec<ViewAction> {
        match event {
            ViewEvent::FrameText(text) => match ListCommand::decode(&text) {
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
            ViewEvent::DeleteClicked { dialog_id } => {
                tracing::info!("send delete_dialog");
                vec![ViewAction::Send(ClientCommand::DeleteDialog { dialog_id })]
            },
            // Focus and the message form belong to the dialog page.
            ViewEvent::FocusGained | ViewEvent::FocusLost | ViewEvent::Submit { .. } => vec![],
        }
    }

    fn render_lines(&self, _today: NaiveDate) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| {
                if e.unread {
                    format!("* {}", e.display_label())
                } else {
                    e.display_label()
                }
            })
            .collect()
    }
}
