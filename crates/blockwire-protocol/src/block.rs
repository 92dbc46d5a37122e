//! Block snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Material, WireArg};

/// The type of a block or item as reported by the server.
///
/// The server may run a newer game version than this library's tables
/// know about. Such names decode to [`MaterialType::Unknown`], keeping the
/// raw wire name, instead of failing the whole call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    /// A material from the local table.
    Known(Material),
    /// A name the local table does not contain.
    Unknown(String),
}

impl MaterialType {
    /// Resolves a wire name, logging a warning for unknown names.
    pub fn from_wire(raw: &str) -> Self {
        match Material::from_wire(raw) {
            Some(material) => Self::Known(material),
            None => {
                tracing::warn!(
                    material = raw,
                    "material is not supported by this library, decoded as unknown"
                );
                Self::Unknown(raw.to_string())
            }
        }
    }

    /// The wire name, known or not.
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Known(material) => material.as_wire(),
            Self::Unknown(raw) => raw,
        }
    }

    /// The material, if it is in the local table.
    pub fn material(&self) -> Option<Material> {
        match self {
            Self::Known(material) => Some(*material),
            Self::Unknown(_) => None,
        }
    }

    /// `true` for the unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<Material> for MaterialType {
    fn from(material: Material) -> Self {
        Self::Known(material)
    }
}

impl PartialEq<Material> for MaterialType {
    fn eq(&self, other: &Material) -> bool {
        self.material() == Some(*other)
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl WireArg for MaterialType {
    fn to_wire_arg(&self) -> String {
        self.as_wire().to_string()
    }
}

/// A block at a coordinate, as seen at the time of the query.
///
/// Coordinates are absent when the block was not looked up by position,
/// e.g. the block a player is looking at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: MaterialType,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub z: Option<i32>,
}

impl Block {
    /// Decodes a block type name without coordinates.
    ///
    /// Never fails: unknown names become [`MaterialType::Unknown`].
    pub fn from_wire(raw: &str) -> Self {
        Self {
            kind: MaterialType::from_wire(raw),
            x: None,
            y: None,
            z: None,
        }
    }

    /// Decodes a block type name that was queried at `(x, y, z)`.
    pub fn from_wire_at(raw: &str, x: i32, y: i32, z: i32) -> Self {
        Self {
            kind: MaterialType::from_wire(raw),
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// The wire form of this block (its type name).
    pub fn to_wire(&self) -> String {
        self.kind.as_wire().to_string()
    }
}
