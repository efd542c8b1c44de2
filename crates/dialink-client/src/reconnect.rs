//! Fixed-delay reconnect policy.
//!
//! Constant backoff, no retry cap: the client is only alive while a page is
//! open, so the usual exponential-backoff machinery buys nothing here. A
//! close of any cause produces exactly one [`Reconnect`]; the error event
//! alone never does (the close that follows it carries the recovery).

use std::time::Duration;

/// Delay between an unexpected close and the reconnect attempt.
pub const RECONNECT_DELAY: Duration = Duration::from_millis(3000);

/// Socket lifecycle events observed by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketEvent {
    /// Connection established.
    Opened,
    /// Transport-level error. Informational only; the subsequent close does
    /// the actual recovery.
    Errored,
    /// Connection closed, any cause.
    Closed,
}

/// Instruction to re-run the original connect routine after a delay.
///
/// The connect routine creates a brand-new connection that independently
/// arms its own close handling. A scheduled reconnect is never cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconnect {
    /// How long to wait before reconnecting.
    pub delay: Duration,
}

/// Reaction map over socket lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    delay: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self { delay: RECONNECT_DELAY }
    }
}

impl ReconnectPolicy {
    /// Policy with a custom delay. Production uses [`RECONNECT_DELAY`].
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured reconnect delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// React to one socket lifecycle event.
    ///
    /// Returns a [`Reconnect`] for close events only, exactly one per close.
    pub fn on_event(&self, event: SocketEvent) -> Option<Reconnect> {
        match event {
            SocketEvent::Opened => {
                tracing::info!("socket open");
                None
            },
            SocketEvent::Errored => {
                tracing::error!("socket error");
                None
            },
            SocketEvent::Closed => {
                tracing::info!("socket close, reconnecting in {:?}", self.delay);
                Some(Reconnect { delay: self.delay })
            },
        }
    }
}
