//! Jump boost: release sneak while standing on solid ground to be
//! launched upwards.
//!
//! ```text
//! RUST_LOG=debug cargo run -p jump-boost -- [host] [--jetpack]
//! ```
//!
//! With `--jetpack` the boost also works mid-air.

use std::time::Duration;

use blockwire::prelude::*;
use tracing_subscriber::EnvFilter;

/// One game tick.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

const BOOST: f64 = 3.0;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut host = "localhost".to_string();
    let mut jetpack = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--jetpack" => jetpack = true,
            _ => host = arg,
        }
    }

    let client = Client::new();
    client
        .connect(&host, DEFAULT_PORT, ConnectConfig::default())
        .await?;
    tracing::info!(%host, jetpack, "jump boost running, release sneak to jump");

    let mut was_sneaking = false;
    loop {
        let player = match client.get_player(0).await {
            Ok(player) => player,
            Err(e) if e.is_timeout() => {
                tracing::warn!(error = %e, "server is slow, reconnecting");
                client
                    .connect(&host, DEFAULT_PORT, ConnectConfig::default())
                    .await?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if was_sneaking && !player.sneaking {
            let below = client
                .get_block(player.x, player.y - 1, player.z, Dimension::World)
                .await?;
            if jetpack || below.kind != Material::Air {
                let boosted = client
                    .set_player_velocity(&player, Direction::Up, BOOST)
                    .await?;
                tracing::debug!(
                    snapshot = %serde_json::to_string(&boosted)?,
                    "boosted"
                );
            }
        }
        was_sneaking = player.sneaking;

        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
