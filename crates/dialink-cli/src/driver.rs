//! Production driver: WebSocket transport plus stdin for local events.
//!
//! Local events are typed one per line: `/focus`, `/blur`, and
//! `/delete <id>` map to their page events; any other line is submitted as
//! message text, exactly as the message form would send it.

use std::time::Duration;

use chrono::NaiveDate;
use dialink_app::{Driver, DriverInput, ViewEvent};
use dialink_client::transport::{self, ConnectedSocket, TransportError};
use thiserror::Error;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

/// Errors from the headless driver.
#[derive(Debug, Error)]
pub enum HeadlessError {
    /// Connection failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Send attempted without a live socket.
    #[error("not connected")]
    NotConnected,
}

/// [`Driver`] over a real WebSocket and stdin.
pub struct HeadlessDriver {
    socket: Option<ConnectedSocket>,
    lines: mpsc::Receiver<String>,
}

impl HeadlessDriver {
    /// Driver reading local events from stdin.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(16);
        tokio::spawn(read_stdin_lines(tx));
        Self { socket: None, lines: rx }
    }
}

impl Default for HeadlessDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward stdin lines into the driver until EOF.
async fn read_stdin_lines(tx: mpsc::Sender<String>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if tx.send(line).await.is_err() {
            break;
        }
    }
}

/// Map one stdin line to a page event.
fn parse_line(line: &str) -> ViewEvent {
    match line.trim_end() {
        "/focus" => ViewEvent::FocusGained,
        "/blur" => ViewEvent::FocusLost,
        other => {
            if let Some(id) = other.strip_prefix("/delete ") {
                if let Ok(dialog_id) = id.trim().parse() {
                    return ViewEvent::DeleteClicked { dialog_id };
                }
            }
            ViewEvent::Submit { text: other.to_owned() }
        },
    }
}

impl Driver for HeadlessDriver {
    type Error = HeadlessError;

    async fn connect(&mut self, endpoint: &str) -> Result<(), HeadlessError> {
        self.socket = Some(transport::connect(endpoint).await?);
        tracing::info!("connected to {endpoint}");
        Ok(())
    }

    async fn next_input(&mut self) -> Result<DriverInput, HeadlessError> {
        let Some(socket) = self.socket.as_mut() else {
            return Ok(match self.lines.recv().await {
                Some(line) => DriverInput::Event(parse_line(&line)),
                None => DriverInput::Shutdown,
            });
        };

        let input = tokio::select! {
            frame = socket.from_server.recv() => match frame {
                Some(text) => DriverInput::Frame(text),
                None => DriverInput::Closed,
            },
            line = self.lines.recv() => match line {
                Some(line) => DriverInput::Event(parse_line(&line)),
                None => DriverInput::Shutdown,
            },
        };

        if matches!(input, DriverInput::Closed) {
            self.socket = None;
        }
        Ok(input)
    }

    async fn send_text(&mut self, text: String) -> Result<(), HeadlessError> {
        let socket = self.socket.as_ref().ok_or(HeadlessError::NotConnected)?;
        // Fire-and-forget; a send racing the socket task's shutdown is
        // simply dropped.
        let _ = socket.to_server.send(text).await;
        Ok(())
    }

    async fn sleep(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }

    fn render(&mut self, lines: &[String]) -> Result<(), HeadlessError> {
        println!("----");
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }

    fn navigate(&mut self, location: &str) -> Result<(), HeadlessError> {
        println!("-> {location}");
        if let Some(socket) = self.socket.take() {
            socket.stop();
        }
        Ok(())
    }
}
