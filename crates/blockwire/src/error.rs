//! Unified error type for Blockwire.

use blockwire_protocol::{ProtocolError, SlotEmpty};
use blockwire_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant auto-generates `From` impls, so
/// the `?` operator converts sub-crate errors automatically. Nothing is
/// retried internally: every error reaches the caller.
#[derive(Debug, thiserror::Error)]
pub enum BlockwireError {
    /// Connection-level error: not connected, I/O failure, or the server
    /// did not answer in time.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response (or a request argument) could not be encoded/decoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// An argument was rejected before anything was sent.
    #[error("invalid argument: {0}")]
    Validation(String),

    /// An inventory slot holds no item.
    #[error(transparent)]
    SlotEmpty(#[from] SlotEmpty),
}

impl BlockwireError {
    /// `true` if the server did not respond within the receive timeout.
    /// The connection has been dropped by then; reconnect before retrying.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(TransportError::NoData { .. }))
    }

    /// `true` if a command was issued without an open connection.
    pub fn is_not_connected(&self) -> bool {
        matches!(self, Self::Transport(TransportError::NotConnected))
    }
}
