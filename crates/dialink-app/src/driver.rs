//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the view runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::{future::Future, time::Duration};

use chrono::NaiveDate;

use crate::ViewEvent;

/// One unit of input multiplexed by a driver.
#[derive(Debug, Clone)]
pub enum DriverInput {
    /// A local event (focus change, submit, delete click).
    Event(ViewEvent),

    /// An inbound text frame from the server.
    Frame(String),

    /// The socket closed, for any cause. The runtime applies the reconnect
    /// policy and connects again.
    Closed,

    /// Page teardown; the runtime stops without reconnecting.
    Shutdown,
}

/// Abstracts I/O operations for the view runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic, so the same
/// orchestration code runs against a live server and in simulation.
///
/// # Implementations
///
/// - **Headless client**: WebSocket transport, stdin for local events
/// - **Simulation**: channel-backed socket with a fixed calendar date
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Establish a connection to the endpoint.
    ///
    /// Called once at startup and again after every reconnect delay. Each
    /// call produces a brand-new connection.
    fn connect(&mut self, endpoint: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Wait for the next input: a local event, an inbound frame, or a
    /// lifecycle notification.
    fn next_input(&mut self) -> impl Future<Output = Result<DriverInput, Self::Error>> + Send;

    /// Send a text frame to the server, fire-and-forget.
    fn send_text(&mut self, text: String)
    -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Sleep for the given duration (the reconnect delay).
    fn sleep(&mut self, duration: Duration) -> impl Future<Output = ()> + Send;

    /// Calendar date used by the display projection.
    fn today(&self) -> NaiveDate;

    /// Present the rendered projection.
    fn render(&mut self, lines: &[String]) -> Result<(), Self::Error>;

    /// Leave the page for the given location. The runtime stops afterwards.
    fn navigate(&mut self, location: &str) -> Result<(), Self::Error>;
}
