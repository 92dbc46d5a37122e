use std::time::Duration;

/// Errors that can occur in the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Opening the TCP connection failed.
    #[error("could not connect to {addr}: {source}")]
    ConnectFailed {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// A command was issued before `connect` was called.
    #[error("no connection to the server, connect first")]
    NotConnected,

    /// Sending data failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving data failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// The server closed the connection.
    #[error("connection closed by the server")]
    ConnectionClosed,

    /// Nothing arrived before the receive timeout elapsed.
    #[error("no response from the server after {timeout:?}")]
    NoData { timeout: Duration },
}
