//! Connection layer for Dialink.
//!
//! Two small pieces, both free of protocol knowledge:
//!
//! - [`PageLocation`]: derives the socket endpoint deterministically from a
//!   page location (scheme, host, path).
//! - [`ReconnectPolicy`]: pure reaction map over socket lifecycle events.
//!   Closure of any cause schedules exactly one reconnect after a fixed
//!   delay; the reconnect builds a brand-new connection which arms its own
//!   close handling, yielding unbounded retry with constant backoff.
//!
//! # Transport (optional)
//!
//! With the `transport` feature enabled, this crate also provides:
//! - [`transport::ConnectedSocket`]: channel handle over a WebSocket
//! - [`transport::connect`]: open a socket to an endpoint

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod endpoint;
mod reconnect;

#[cfg(feature = "transport")]
pub mod transport;

pub use endpoint::{EndpointError, PageLocation};
pub use reconnect::{RECONNECT_DELAY, Reconnect, ReconnectPolicy, SocketEvent};
