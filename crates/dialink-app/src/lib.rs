//! View layer for Dialink.
//!
//! Pure state machines for the two consumers of the real-time channel,
//! enabling deterministic testing with the same code that runs against a
//! live server. Each controller consumes [`ViewEvent`] inputs (inbound
//! frames, focus changes, local user actions) and produces [`ViewAction`]
//! instructions for the runtime to execute. All cross-event state lives in
//! the controller instance; nothing is persisted beyond it.
//!
//! # Components
//!
//! - [`DialogView`]: single-conversation state machine (messages, unread
//!   flag, read-receipt negotiation)
//! - [`DialogListView`]: conversation-list state machine (entries, unread
//!   indicator)
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod controller;
mod dialog;
mod dialog_list;
mod driver;
mod event;
mod integrity;
mod runtime;
mod state;

pub use action::ViewAction;
pub use controller::ViewController;
pub use dialog::DialogView;
pub use dialog_list::DialogListView;
pub use driver::{Driver, DriverInput};
pub use event::ViewEvent;
pub use runtime::Runtime;
pub use state::{DialogEntry, MessageItem};
