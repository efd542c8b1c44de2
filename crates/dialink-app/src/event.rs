//! View input events.
//!
//! Events originate from three sources: inbound network frames, page focus
//! changes, and local user actions (message submit, delete click). Each
//! controller handles the events that apply to its page and ignores the
//! rest.

/// Events processed by the view controllers.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// Raw inbound text frame from the server.
    FrameText(String),

    /// Page gained focus.
    FocusGained,

    /// Page lost focus.
    FocusLost,

    /// User submitted the message form (dialog view).
    Submit {
        /// Text from the input field.
        text: String,
    },

    /// User clicked a delete button (dialog-list view).
    DeleteClicked {
        /// Identifier of the conversation to delete.
        dialog_id: u64,
    },
}
