//! # Blockwire
//!
//! Script a running Minecraft server from Rust.
//!
//! A server-side mod listens on a TCP port and understands a small
//! line-based command language. [`Client`] speaks that language: it places
//! and reads blocks, moves players, spawns and edits entities, fills
//! inventories, posts to chat and drives boss bars.
//!
//! The work is split across three crates:
//!
//! - `blockwire-transport`: the [`Connection`] trait and its TCP
//!   implementation.
//! - `blockwire-protocol`: the wire codec and the snapshot models
//!   ([`Player`], [`Entity`], [`Inventory`], ...).
//! - `blockwire` (this crate): the [`Client`] and its command surface.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blockwire::prelude::*;
//!
//! # async fn run() -> Result<(), BlockwireError> {
//! let client = Client::new();
//! client.connect("localhost", DEFAULT_PORT, ConnectConfig::from_env()).await?;
//!
//! client.post_chat("hello from Rust").await?;
//! client.set_block(0, 64, 0, Material::GoldBlock, Dimension::World).await?;
//!
//! let player = client.get_player(0).await?;
//! let inventory = client
//!     .give_item(&player, Material::DiamondSword, 1, &GiveOptions::default())
//!     .await?;
//! println!("{} holds {} stacks", player.name, inventory.len());
//! # Ok(())
//! # }
//! ```
//!
//! Every command waits for its reply before the next one is sent, even
//! when a `Client` is shared between tasks.

mod boss_bar;
mod client;
mod config;
mod entity;
mod error;
mod inventory;
mod player;
mod world;

pub use client::Client;
pub use config::{
    ConnectConfig, DEFAULT_PORT, DEFAULT_TIMEOUT, HOST_OVERRIDE_ENV,
    TIMEOUT_OVERRIDE_ENV,
};
pub use error::BlockwireError;
pub use inventory::GiveOptions;
pub use player::ROTATION_RANGE;
pub use world::TitleOptions;

pub use blockwire_protocol as protocol;
pub use blockwire_transport as transport;

pub use blockwire_protocol::{
    Block, BossBar, BossBarColor, BossBarStyle, ChatMessage, Dimension,
    Direction, Entity, EntityId, EntityKind, IdKind, Inventory,
    InventoryField, Item, ItemRef, Material, MaterialType, Player, PlayerId,
    SlotEmpty,
};
pub use blockwire_transport::{Connection, TcpConnection};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::{
        Block, BlockwireError, BossBar, BossBarColor, BossBarStyle,
        ChatMessage, Client, ConnectConfig, DEFAULT_PORT, Dimension,
        Direction, Entity, EntityKind, GiveOptions, IdKind, Inventory, Item,
        ItemRef, Material, MaterialType, Player, TitleOptions,
    };
}
