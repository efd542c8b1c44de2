//! View side-effects and intents.

use dialink_proto::ClientCommand;

/// Actions produced by the view controllers for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Send a command over the transport, fire-and-forget.
    Send(ClientCommand),

    /// Leave the page for the given location.
    Navigate {
        /// Target location path.
        location: String,
    },

    /// Re-project the view state.
    Render,
}
