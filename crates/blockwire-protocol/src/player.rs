//! Player snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{parse_bool, parse_field};
use crate::{Block, ProtocolError, WireArg, join_fields, split_fields};

/// Server-assigned player identifier.
///
/// Stable across snapshots of the same player. On the wire it is a plain
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

impl WireArg for PlayerId {
    fn to_wire_arg(&self) -> String {
        self.0.to_string()
    }
}

/// A player at the time of the query. The data is NOT kept up to date;
/// query again (or use the value returned by a setter) for fresh state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    /// Yaw from -180 to 180.
    pub rotation: i32,
    /// The nearest block in the player's line of sight (at most 100 blocks away).
    pub looking_at: Block,
    pub sneaking: bool,
    pub max_health: f64,
    pub health: f64,
    pub hunger: f64,
    pub saturation: f64,
    pub xp_level: f64,
    pub xp_progress: f64,
}

impl Player {
    /// Number of positional fields in the wire format.
    pub const FIELD_COUNT: usize = 14;

    /// Decodes a player payload.
    ///
    /// Field order: id, name, x, y, z, rotation, looking-at block type,
    /// sneaking, max health, health, hunger, saturation, xp level,
    /// xp progress.
    ///
    /// # Errors
    /// Strict: a wrong field count or any unparsable field is an error.
    /// Only the looking-at block type tolerates unknown names.
    pub fn from_wire(text: &str) -> Result<Self, ProtocolError> {
        let fields: Vec<&str> = split_fields(text).collect();
        let [
            id,
            name,
            x,
            y,
            z,
            rotation,
            looking_at,
            sneaking,
            max_health,
            health,
            hunger,
            saturation,
            xp_level,
            xp_progress,
        ] = fields[..]
        else {
            return Err(ProtocolError::FieldCount {
                model: "player",
                expected: Self::FIELD_COUNT,
                got: fields.len(),
            });
        };

        Ok(Self {
            id: PlayerId(parse_field("player.id", id)?),
            name: name.to_string(),
            x: parse_field("player.x", x)?,
            y: parse_field("player.y", y)?,
            z: parse_field("player.z", z)?,
            rotation: parse_field("player.rotation", rotation)?,
            looking_at: Block::from_wire(looking_at),
            sneaking: parse_bool("player.sneaking", sneaking)?,
            max_health: parse_field("player.max_health", max_health)?,
            health: parse_field("player.health", health)?,
            hunger: parse_field("player.hunger", hunger)?,
            saturation: parse_field("player.saturation", saturation)?,
            xp_level: parse_field("player.xp_level", xp_level)?,
            xp_progress: parse_field("player.xp_progress", xp_progress)?,
        })
    }

    /// Encodes this snapshot in the same layout the server sends.
    pub fn to_wire(&self) -> String {
        join_fields([
            self.id.to_wire_arg(),
            self.name.clone(),
            self.x.to_string(),
            self.y.to_string(),
            self.z.to_string(),
            self.rotation.to_string(),
            self.looking_at.to_wire(),
            self.sneaking.to_string(),
            self.max_health.to_string(),
            self.health.to_string(),
            self.hunger.to_string(),
            self.saturation.to_string(),
            self.xp_level.to_string(),
            self.xp_progress.to_string(),
        ])
    }
}
