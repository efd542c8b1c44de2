//! WebSocket transport.
//!
//! Provides [`ConnectedSocket`], a channel handle over one WebSocket
//! connection. This is a thin layer that just moves text frames; protocol
//! logic stays in the views, and reconnect scheduling stays with the caller
//! via [`crate::ReconnectPolicy`]. A `None` from `from_server` means the
//! socket closed and the caller should apply the policy.

use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failed.
    #[error("connection failed: {0}")]
    Connection(String),
}

/// Handle to one live WebSocket connection.
///
/// Text frames are sent and received via the channels; an internal task
/// handles the socket I/O. Sends are fire-and-forget. The handle is
/// replaced wholesale on reconnect, never reused.
pub struct ConnectedSocket {
    /// Send text frames to the server.
    pub to_server: mpsc::Sender<String>,
    /// Receive text frames from the server. Yields `None` once the socket
    /// has closed, for any cause.
    pub from_server: mpsc::Receiver<String>,
    /// Abort handle to stop the connection task.
    abort_handle: tokio::task::AbortHandle,
}

impl ConnectedSocket {
    /// Stop the connection task. Only used at page teardown.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

/// Open a WebSocket to the given endpoint.
pub async fn connect(url: &str) -> Result<ConnectedSocket, TransportError> {
    let (stream, _response) = tokio_tungstenite::connect_async(url)
        .await
        .map_err(|e| TransportError::Connection(e.to_string()))?;

    tracing::info!("socket open: {url}");

    let (to_server_tx, to_server_rx) = mpsc::channel::<String>(32);
    let (from_server_tx, from_server_rx) = mpsc::channel::<String>(32);

    let handle = tokio::spawn(run_connection(stream, to_server_rx, from_server_tx));

    Ok(ConnectedSocket {
        to_server: to_server_tx,
        from_server: from_server_rx,
        abort_handle: handle.abort_handle(),
    })
}

/// Run the connection, bridging between the channels and the socket.
///
/// Ends when the socket closes or either channel side is dropped; dropping
/// the `from_server` sender is what signals closure to the caller.
async fn run_connection<S>(
    stream: tokio_tungstenite::WebSocketStream<S>,
    mut to_server: mpsc::Receiver<String>,
    from_server: mpsc::Sender<String>,
) where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    let (mut sink, mut source) = stream.split();

    loop {
        tokio::select! {
            outbound = to_server.recv() => match outbound {
                Some(text) => {
                    if sink.send(Message::Text(text.into())).await.is_err() {
                        tracing::info!("socket close (send failed)");
                        break;
                    }
                },
                // Caller dropped the handle.
                None => break,
            },
            inbound = source.next() => match inbound {
                Some(Ok(Message::Text(text))) => {
                    if from_server.send(text.as_str().to_owned()).await.is_err() {
                        break;
                    }
                },
                // Binary frames are not part of this protocol; ping/pong is
                // answered by tungstenite internally.
                Some(Ok(Message::Binary(_) | Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => {},
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("socket close");
                    break;
                },
                Some(Err(e)) => {
                    tracing::error!("socket error: {e}");
                    break;
                },
            },
        }
    }
}
