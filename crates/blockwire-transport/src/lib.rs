//! Connection layer for Blockwire.
//!
//! Provides the [`Connection`] trait that the command surface talks to, and
//! [`TcpConnection`], the line-oriented TCP stream used against a real server.
//!
//! The protocol is strictly half-duplex: one request, then (maybe) one
//! response chunk. Nothing here frames messages; a response is whatever a
//! single read returns.
//!
//! # Feature Flags
//!
//! - `tcp` (default): TCP connection via `tokio::net`

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "tcp")]
mod tcp;

pub use error::TransportError;
#[cfg(feature = "tcp")]
pub use tcp::{RECV_CHUNK_SIZE, TcpConnection};

use std::fmt;
use std::time::Duration;

/// Opaque identifier for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Creates a new `ConnectionId` from a raw `u64`.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying `u64` value.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// A single connection to a server that can send and receive bytes.
pub trait Connection: Send + Sync + 'static {
    /// Sends all of `data` to the server, or fails.
    async fn send(&self, data: &[u8]) -> Result<(), TransportError>;

    /// Receives one chunk of bytes from the server.
    ///
    /// Waits at most `timeout`; `None` waits indefinitely. Elapsing the
    /// timeout yields [`TransportError::NoData`].
    async fn recv(
        &self,
        timeout: Option<Duration>,
    ) -> Result<Vec<u8>, TransportError>;

    /// Closes the connection.
    async fn close(&self) -> Result<(), TransportError>;

    /// Returns the unique identifier for this connection.
    fn id(&self) -> ConnectionId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_id_new_and_into_inner() {
        let id = ConnectionId::new(42);
        assert_eq!(id.into_inner(), 42);
    }

    #[test]
    fn test_connection_id_display() {
        assert_eq!(ConnectionId::new(7).to_string(), "conn-7");
    }

    #[test]
    fn test_no_data_error_mentions_timeout() {
        let err = TransportError::NoData {
            timeout: Duration::from_millis(100),
        };
        assert!(err.to_string().contains("100ms"));
    }
}
