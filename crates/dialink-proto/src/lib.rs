//! Wire protocol for Dialink.
//!
//! Both directions of the duplex channel carry JSON text frames with an
//! envelope field `"command"` (string) that determines the rest of the
//! shape. Each view decodes its own inbound command set, so there are two
//! inbound enums ([`DialogCommand`], [`ListCommand`]) and one shared
//! outbound enum ([`ClientCommand`]).
//!
//! # Invariants
//!
//! Each command variant maps to exactly one `"command"` tag (enforced by the
//! serde `tag` attribute). Decoding distinguishes a frame with no command
//! key from a frame with an unrecognized command; callers log distinct
//! warnings for the two cases and drop the frame either way.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
mod error;
mod item;
mod time;

pub use command::{ClientCommand, DialogCommand, ListCommand, OutgoingMessage};
pub use error::ProtocolError;
pub use item::{Dialog, Message};
pub use time::WireTime;
