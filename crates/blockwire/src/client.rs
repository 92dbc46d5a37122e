//! The [`Client`]: connection ownership and the request/response cycle.
//!
//! The protocol has no request ids, so a response can only be matched to
//! its request by order. Every command therefore locks the connection for
//! its whole exchange (both round trips for mutate-then-reread), and
//! concurrent callers sharing a `Client` simply queue up.

use std::time::Duration;

use blockwire_protocol::{CommandLine, decode_text};
use blockwire_transport::{Connection, TcpConnection, TransportError};
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};

use crate::{BlockwireError, ConnectConfig};

/// An open connection plus the receive timeout that goes with it.
pub(crate) struct Link<C> {
    conn: C,
    timeout: Option<Duration>,
}

impl<C: Connection> Link<C> {
    /// Encodes and sends one line. Encoding errors surface before any byte
    /// is written.
    async fn send(
        &self,
        line: &CommandLine,
    ) -> Result<(), BlockwireError> {
        let encoded = line.encode()?;
        tracing::debug!(
            conn = %self.conn.id(),
            command = line.name(),
            args = line.args().len(),
            "sending command"
        );
        self.conn.send(encoded.as_bytes()).await?;
        Ok(())
    }

    /// Waits for one response chunk and decodes it to text.
    async fn receive(&self) -> Result<String, BlockwireError> {
        let data = self.conn.recv(self.timeout).await?;
        Ok(decode_text(&data)?)
    }

    /// Sends every line in order, then `reread` if given, returning its
    /// response text.
    async fn exchange(
        &self,
        lines: &[CommandLine],
        reread: Option<&CommandLine>,
    ) -> Result<Option<String>, BlockwireError> {
        for line in lines {
            self.send(line).await?;
        }
        match reread {
            Some(line) => {
                self.send(line).await?;
                self.receive().await.map(Some)
            }
            None => Ok(None),
        }
    }
}

/// A handle to one server.
///
/// Starts disconnected; [`connect`](Client::connect) opens (or replaces)
/// the connection. Commands issued while disconnected fail with
/// [`TransportError::NotConnected`]. There is no automatic reconnect: an
/// I/O error or a receive timeout is returned to the caller, the
/// connection is dropped, and the next `connect` starts over.
///
/// Every value a command returns is a snapshot. It is not updated when the
/// server state changes.
///
/// ```rust,no_run
/// # async fn run() -> Result<(), blockwire::BlockwireError> {
/// use blockwire::prelude::*;
///
/// let client = Client::new();
/// client.connect("localhost", DEFAULT_PORT, ConnectConfig::from_env()).await?;
///
/// let player = client.get_player(0).await?;
/// let player = client.set_player_health(&player, 15.0).await?;
/// println!("{} now has {} health", player.name, player.health);
/// # Ok(())
/// # }
/// ```
pub struct Client<C: Connection = TcpConnection> {
    link: Mutex<Option<Link<C>>>,
}

impl Client<TcpConnection> {
    /// Creates a client with no connection.
    pub fn new() -> Self {
        Self {
            link: Mutex::new(None),
        }
    }

    /// Connects to `host:port`, closing any connection this client already
    /// holds. Fails immediately if the server cannot be reached.
    ///
    /// The environment overrides (see [`ConnectConfig`]) are applied on top
    /// of `config` here, whichever way it was built.
    pub async fn connect(
        &self,
        host: &str,
        port: u16,
        config: ConnectConfig,
    ) -> Result<(), BlockwireError> {
        let mut link = self.link.lock().await;
        if let Some(old) = link.take() {
            close_quietly(old.conn).await;
        }

        let config = config.with_env_overrides();
        let host = config.resolve_host(host);
        let conn = TcpConnection::connect(host, port).await?;
        tracing::info!(conn = %conn.id(), host, port, "connected to server");

        *link = Some(Link {
            conn,
            timeout: config.timeout,
        });
        Ok(())
    }
}

impl Default for Client<TcpConnection> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Connection> Client<C> {
    /// Wraps an already open connection.
    ///
    /// Any [`Connection`] works, which is how tests drive the client
    /// without a server.
    pub fn with_connection(conn: C, timeout: Option<Duration>) -> Self {
        Self {
            link: Mutex::new(Some(Link { conn, timeout })),
        }
    }

    /// Whether a connection is currently held.
    pub async fn is_connected(&self) -> bool {
        self.link.lock().await.is_some()
    }

    /// Changes the receive timeout of the current connection.
    pub async fn set_timeout(
        &self,
        timeout: Option<Duration>,
    ) -> Result<(), BlockwireError> {
        self.link().await?.timeout = timeout;
        Ok(())
    }

    /// Closes the connection. The client can be connected again afterwards.
    pub async fn close(&self) -> Result<(), BlockwireError> {
        let old = self.link.lock().await.take();
        match old {
            Some(old) => {
                tracing::info!(conn = %old.conn.id(), "closing connection");
                old.conn.close().await?;
                Ok(())
            }
            None => Err(TransportError::NotConnected.into()),
        }
    }

    /// Locks the connection for one exchange.
    pub(crate) async fn link(
        &self,
    ) -> Result<MappedMutexGuard<'_, Link<C>>, BlockwireError> {
        MutexGuard::try_map(self.link.lock().await, Option::as_mut)
            .map_err(|_| TransportError::NotConnected.into())
    }

    /// Fire-and-forget: send without waiting for a reply.
    pub(crate) async fn fire(
        &self,
        line: CommandLine,
    ) -> Result<(), BlockwireError> {
        self.exchange(&[line], None).await.map(drop)
    }

    /// Query: send and return the decoded response text.
    pub(crate) async fn query(
        &self,
        line: CommandLine,
    ) -> Result<String, BlockwireError> {
        self.mutate(Vec::new(), line).await
    }

    /// Mutate-then-reread: send every mutation, then run `reread` and
    /// return its response. The connection stays locked throughout so no
    /// other command can slip in between.
    pub(crate) async fn mutate(
        &self,
        mutations: Vec<CommandLine>,
        reread: CommandLine,
    ) -> Result<String, BlockwireError> {
        let text = self.exchange(&mutations, Some(&reread)).await?;
        Ok(text.unwrap_or_default())
    }

    /// Runs one exchange under the lock.
    ///
    /// All lines are encoded up front; if any is illegal nothing is sent.
    /// A transport failure part-way through (a timeout included) leaves
    /// unread or unsent bytes on the socket, so the connection is dropped
    /// and later commands fail with `NotConnected` until `connect` is
    /// called again.
    async fn exchange(
        &self,
        lines: &[CommandLine],
        reread: Option<&CommandLine>,
    ) -> Result<Option<String>, BlockwireError> {
        for line in lines.iter().chain(reread) {
            line.encode()?;
        }

        let mut slot = self.link.lock().await;
        let link = slot.as_ref().ok_or(TransportError::NotConnected)?;
        let result = link.exchange(lines, reread).await;

        if let Err(BlockwireError::Transport(e)) = &result {
            if let Some(old) = slot.take() {
                tracing::warn!(
                    conn = %old.conn.id(),
                    error = %e,
                    "dropping connection after failed exchange"
                );
                if let Err(e) = old.conn.close().await {
                    tracing::debug!(error = %e, "closing failed connection failed");
                }
            }
        }
        result
    }
}

async fn close_quietly<C: Connection>(conn: C) {
    tracing::info!(conn = %conn.id(), "replacing existing connection");
    if let Err(e) = conn.close().await {
        tracing::debug!(error = %e, "closing previous connection failed");
    }
}
