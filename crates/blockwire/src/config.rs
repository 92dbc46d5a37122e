//! Connection configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Port the server-side mod listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 25595;

/// How long a query waits for its response by default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Environment variable that replaces the host passed to `connect`.
pub const HOST_OVERRIDE_ENV: &str = "SK_SERVER_OVERWRITE";

/// Environment variable that replaces the receive timeout. Seconds as a
/// decimal number, or `None` to wait indefinitely.
pub const TIMEOUT_OVERRIDE_ENV: &str = "SK_TIMEOUT_OVERWRITE";

/// Settings applied when a connection is opened.
///
/// `ConnectConfig::default()` connects where it is told to and waits
/// [`DEFAULT_TIMEOUT`] for responses. The development overrides in
/// [`HOST_OVERRIDE_ENV`] and [`TIMEOUT_OVERRIDE_ENV`] are layered on top
/// by `Client::connect`, so they win over whatever config is passed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Host to use instead of the one passed to `connect`.
    pub host_override: Option<String>,

    /// Receive timeout. `None` blocks until data arrives.
    pub timeout: Option<Duration>,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            host_override: None,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ConnectConfig {
    /// Reads [`HOST_OVERRIDE_ENV`] and [`TIMEOUT_OVERRIDE_ENV`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::default().with_overrides(lookup)
    }

    /// Applies [`HOST_OVERRIDE_ENV`] and [`TIMEOUT_OVERRIDE_ENV`] from the
    /// process environment on top of `self`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies whichever overrides `lookup` knows about; everything else
    /// is left as it is.
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = self;

        if let Some(host) = lookup(HOST_OVERRIDE_ENV) {
            tracing::warn!(
                env = HOST_OVERRIDE_ENV,
                %host,
                "server host overridden by environment"
            );
            config.host_override = Some(host);
        }

        if let Some(raw) = lookup(TIMEOUT_OVERRIDE_ENV) {
            match parse_timeout(&raw) {
                Some(timeout) => {
                    tracing::warn!(
                        env = TIMEOUT_OVERRIDE_ENV,
                        ?timeout,
                        "receive timeout overridden by environment"
                    );
                    config.timeout = timeout;
                }
                None => {
                    tracing::warn!(
                        env = TIMEOUT_OVERRIDE_ENV,
                        value = %raw,
                        "ignoring unparsable timeout override"
                    );
                }
            }
        }

        config
    }

    /// Returns the host to connect to: the override if set, else `host`.
    pub fn resolve_host<'a>(&'a self, host: &'a str) -> &'a str {
        self.host_override.as_deref().unwrap_or(host)
    }

    /// Sets the receive timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// `None` means "block indefinitely" and so does zero; the outer `None`
/// means the value could not be parsed.
fn parse_timeout(raw: &str) -> Option<Option<Duration>> {
    let raw = raw.trim();
    if raw == "None" {
        return Some(None);
    }
    let secs: f64 = raw.parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    if secs == 0.0 {
        return Some(None);
    }
    Some(Some(Duration::from_secs_f64(secs)))
}
