//! TCP connection implementation using `tokio::net`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::Mutex;

use crate::{Connection, ConnectionId, TransportError};

/// Counter for generating unique connection IDs.
static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Size of the buffer for a single receive.
///
/// Responses are expected to fit in one read; there is no reassembly.
pub const RECV_CHUNK_SIZE: usize = 4096;

/// A TCP stream to the server's control port.
pub struct TcpConnection {
    id: ConnectionId,
    reader: Mutex<OwnedReadHalf>,
    writer: Mutex<OwnedWriteHalf>,
}

impl TcpConnection {
    /// Opens a connection to `host:port`. No retries: a failure is
    /// returned as is.
    pub async fn connect(host: &str, port: u16) -> Result<Self, TransportError> {
        let label = format!("{host}:{port}");
        let stream = TcpStream::connect((host, port)).await.map_err(|source| {
            TransportError::ConnectFailed {
                addr: label.clone(),
                source,
            }
        })?;
        // Requests are tiny and always followed by a read.
        if let Err(e) = stream.set_nodelay(true) {
            tracing::debug!(addr = %label, error = %e, "could not disable Nagle's algorithm");
        }

        let id = ConnectionId::new(
            NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed),
        );
        tracing::debug!(%id, addr = %label, "opened TCP connection");

        let (reader, writer) = stream.into_split();
        Ok(Self {
            id,
            reader: Mutex::new(reader),
            writer: Mutex::new(writer),
        })
    }

    async fn read_chunk(&self) -> Result<Vec<u8>, TransportError> {
        let mut buf = vec![0u8; RECV_CHUNK_SIZE];
        let n = self
            .reader
            .lock()
            .await
            .read(&mut buf)
            .await
            .map_err(TransportError::ReceiveFailed)?;
        if n == 0 {
            return Err(TransportError::ConnectionClosed);
        }
        buf.truncate(n);
        Ok(buf)
    }
}

impl Connection for TcpConnection {
    async fn send(&self, data: &[u8]) -> Result<(), TransportError> {
        let mut writer = self.writer.lock().await;
        writer
            .write_all(data)
            .await
            .map_err(TransportError::SendFailed)?;
        writer.flush().await.map_err(TransportError::SendFailed)
    }

    async fn recv(
        &self,
        timeout: Option<Duration>,
    ) -> Result<Vec<u8>, TransportError> {
        match timeout {
            Some(timeout) => {
                match tokio::time::timeout(timeout, self.read_chunk()).await {
                    Ok(result) => result,
                    Err(_) => Err(TransportError::NoData { timeout }),
                }
            }
            None => self.read_chunk().await,
        }
    }

    async fn close(&self) -> Result<(), TransportError> {
        tracing::debug!(id = %self.id, "closing TCP connection");
        self.writer
            .lock()
            .await
            .shutdown()
            .await
            .map_err(TransportError::SendFailed)
    }

    fn id(&self) -> ConnectionId {
        self.id
    }
}
