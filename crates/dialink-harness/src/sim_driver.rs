//! Scripted driver with virtual time.

use std::{collections::VecDeque, time::Duration};

use chrono::NaiveDate;
use dialink_app::{Driver, DriverInput};
use thiserror::Error;

/// Errors produced by the simulation driver.
#[derive(Debug, Error)]
pub enum SimDriverError {
    /// A scripted connect failure.
    #[error("simulated connect failure")]
    ConnectRefused,
}

/// Scripted [`Driver`] for deterministic tests.
///
/// Inputs are enqueued up front; time is virtual (sleeps are recorded, not
/// awaited). When the script runs dry the driver reports page teardown so
/// the runtime stops.
#[derive(Debug, Default)]
pub struct SimDriver {
    script: VecDeque<DriverInput>,
    /// Calendar date the projection renders against.
    today: Option<NaiveDate>,
    /// Reconnect attempts to refuse before accepting again.
    refuse_reconnects: u32,

    /// Outbound text frames, in send order.
    pub sent: Vec<String>,
    /// Render snapshots, one per `Render` action.
    pub rendered: Vec<Vec<String>>,
    /// Recorded sleeps, in order.
    pub slept: Vec<Duration>,
    /// Locations navigated to.
    pub navigations: Vec<String>,
    /// Number of successful connects.
    pub connects: u32,
    /// Number of refused connect attempts.
    pub refused_connects: u32,
}

impl SimDriver {
    /// Driver over a scripted input sequence.
    pub fn with_script(script: impl IntoIterator<Item = DriverInput>) -> Self {
        Self { script: script.into_iter().collect(), ..Self::default() }
    }

    /// Fix the calendar date used by the projection.
    pub fn on_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Refuse the first `count` reconnect attempts. The initial connect
    /// always succeeds.
    pub fn refusing_reconnects(mut self, count: u32) -> Self {
        self.refuse_reconnects = count;
        self
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn connect(&mut self, endpoint: &str) -> Result<(), SimDriverError> {
        if self.connects > 0 && self.refuse_reconnects > 0 {
            self.refuse_reconnects -= 1;
            self.refused_connects += 1;
            return Err(SimDriverError::ConnectRefused);
        }
        tracing::debug!("sim connect: {endpoint}");
        self.connects += 1;
        Ok(())
    }

    async fn next_input(&mut self) -> Result<DriverInput, SimDriverError> {
        Ok(self.script.pop_front().unwrap_or(DriverInput::Shutdown))
    }

    async fn send_text(&mut self, text: String) -> Result<(), SimDriverError> {
        self.sent.push(text);
        Ok(())
    }

    async fn sleep(&mut self, duration: Duration) {
        self.slept.push(duration);
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_default()
    }

    fn render(&mut self, lines: &[String]) -> Result<(), SimDriverError> {
        self.rendered.push(lines.to_vec());
        Ok(())
    }

    fn navigate(&mut self, location: &str) -> Result<(), SimDriverError> {
        self.navigations.push(location.to_owned());
        Ok(())
    }
}
