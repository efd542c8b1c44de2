//! Generic runtime for view orchestration.
//!
//! The Runtime drives the event loop for one view, coordinating between:
//! - a [`ViewController`]: pure view state machine
//! - a [`Driver`]: platform-specific I/O
//! - the [`ReconnectPolicy`]: fixed-delay recovery from socket closure
//!
//! Single-task and cooperative: no two handlers run concurrently, and
//! ordering between an outbound send and the next inbound frame is purely
//! transport-ordered.

use dialink_client::{ReconnectPolicy, SocketEvent};

use crate::{
    ViewAction, ViewController, ViewEvent,
    driver::{Driver, DriverInput},
};

/// Generic runtime that orchestrates one view controller over one driver.
pub struct Runtime<C, D>
where
    C: ViewController,
    D: Driver,
{
    controller: C,
    driver: D,
    endpoint: String,
    policy: ReconnectPolicy,
}

impl<C, D> Runtime<C, D>
where
    C: ViewController,
    D: Driver,
{
    /// Create a runtime with the production reconnect policy.
    pub fn new(controller: C, driver: D, endpoint: String) -> Self {
        Self { controller, driver, endpoint, policy: ReconnectPolicy::default() }
    }

    /// Create a runtime with a custom reconnect policy (simulation).
    pub fn with_policy(controller: C, driver: D, endpoint: String, policy: ReconnectPolicy) -> Self {
        Self { controller, driver, endpoint, policy }
    }

    /// Run the main event loop.
    ///
    /// Connects, then processes inputs until the driver signals teardown or
    /// the view navigates away. Socket closure is recovered via the
    /// reconnect policy and never ends the loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial connect fails or the driver
    /// encounters an I/O error. Reconnect attempts retry instead of failing.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        self.driver.connect(&self.endpoint).await?;
        let _ = self.policy.on_event(SocketEvent::Opened);

        loop {
            let input = self.driver.next_input().await?;
            match input {
                DriverInput::Event(event) => {
                    let actions = self.controller.handle(event);
                    if self.execute(actions).await? {
                        return Ok(());
                    }
                },
                DriverInput::Frame(text) => {
                    let actions = self.controller.handle(ViewEvent::FrameText(text));
                    if self.execute(actions).await? {
                        return Ok(());
                    }
                },
                DriverInput::Closed => self.reconnect().await,
                DriverInput::Shutdown => return Ok(()),
            }
        }
    }

    /// Apply the reconnect policy after a close, retrying until a new
    /// connection is up. The delay is constant; there is no retry cap.
    async fn reconnect(&mut self) {
        let Some(reconnect) = self.policy.on_event(SocketEvent::Closed) else {
            return;
        };

        self.driver.sleep(reconnect.delay).await;
        while let Err(e) = self.driver.connect(&self.endpoint).await {
            let _ = self.policy.on_event(SocketEvent::Errored);
            tracing::error!("reconnect failed: {e}");
            self.driver.sleep(self.policy.delay()).await;
        }
        let _ = self.policy.on_event(SocketEvent::Opened);
    }

    /// Execute controller actions. Returns `true` when the view navigated
    /// away and the loop should stop.
    async fn execute(&mut self, actions: Vec<ViewAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                ViewAction::Send(command) => match command.encode() {
                    Ok(text) => {
                        // Fire-and-forget: a send racing a close is dropped,
                        // like a send on a closing socket.
                        if let Err(e) = self.driver.send_text(text).await {
                            tracing::warn!("send failed: {e}");
                        }
                    },
                    Err(e) => tracing::warn!("failed to encode command: {e}"),
                },
                ViewAction::Navigate { location } => {
                    self.driver.navigate(&location)?;
                    return Ok(true);
                },
                ViewAction::Render => {
                    let lines = self.controller.render_lines(self.driver.today());
                    self.driver.render(&lines)?;
                },
            }
        }
        Ok(false)
    }

    /// The view controller.
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// The I/O driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
