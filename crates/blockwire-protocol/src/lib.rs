//! Wire protocol for Blockwire.
//!
//! This crate defines the "language" spoken with the server-side mod:
//!
//! - **Codec** ([`CommandLine`], [`WireArg`], [`decode_text`]): how a
//!   command becomes one request line and how response bytes become text.
//! - **Models** ([`Player`], [`Entity`], [`Block`], [`Inventory`], ...):
//!   snapshots decoded from response text.
//! - **Errors** ([`ProtocolError`]): what can go wrong while encoding or
//!   decoding.
//!
//! # Architecture
//!
//! ```text
//! Client (commands) → Protocol (lines / snapshots) → Transport (bytes)
//! ```
//!
//! Nothing here touches a socket. Block and item types that the local
//! tables do not know decode to [`MaterialType::Unknown`] with a logged
//! warning; every other malformed payload is an error.

#[macro_use]
mod macros;

mod block;
mod boss_bar;
mod catalog;
mod chat;
mod codec;
mod entity;
mod error;
mod inventory;
mod player;
mod world;

pub use block::{Block, MaterialType};
pub use boss_bar::{BossBar, BossBarColor, BossBarStyle};
pub use catalog::{EntityKind, Material};
pub use chat::{ChatMessage, encode_chat, parse_chat};
pub use codec::{
    CommandLine, SEPARATOR, WireArg, decode_text, join_fields, split_fields,
    tagged,
};
pub use entity::{Entity, EntityId, NULL_LITERAL};
pub use error::ProtocolError;
pub use inventory::{Inventory, InventoryField, Item, ItemRef, SlotEmpty};
pub use player::{Player, PlayerId};
pub use world::{
    Dimension, Direction, IdKind, PlayerStat, TICKS_PER_SECOND,
    seconds_to_ticks,
};
