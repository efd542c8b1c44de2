//! Error types for the Dialink wire protocol.
//!
//! The decode errors mirror the two warning classes the views emit: a frame
//! without a `"command"` key is malformed, a frame with an unrecognized
//! command is unknown. Both are logged and dropped by the caller; neither
//! is retried.

use thiserror::Error;

/// Errors that can occur while encoding or decoding protocol frames.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Frame is not a JSON object with a string `"command"` field.
    #[error("malformed frame: no command field")]
    MissingCommand,

    /// Frame carries a command this view does not recognize.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The unrecognized command tag.
        command: String,
    },

    /// Frame is not valid JSON, or the payload shape does not match the
    /// command.
    #[error("invalid frame: {0}")]
    Json(#[from] serde_json::Error),

    /// Wire timestamp does not match the `YYYY.MM.DD HH:MM` format.
    #[error("invalid wire time: {0}")]
    Time(#[from] chrono::format::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_unknown_command() {
        let err = ProtocolError::UnknownCommand { command: "get_everything".into() };
        assert_eq!(err.to_string(), "unknown command: get_everything");
    }
}
