//! Entity snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{parse_bool, parse_field};
use crate::{EntityKind, ProtocolError, WireArg, join_fields, split_fields};

/// Literal the server sends for an absent field.
pub const NULL_LITERAL: &str = "null";

/// Server-assigned entity identifier (a UUID string in practice).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl WireArg for EntityId {
    fn to_wire_arg(&self) -> String {
        self.0.clone()
    }
}

/// An entity at the time of the query. Most fields may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Absent until the entity has been spawned and echoed by the server.
    pub id: Option<EntityId>,
    pub kind: EntityKind,
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub health: Option<f64>,
    pub ai: Option<bool>,
}

impl Entity {
    /// Number of positional fields in the wire format.
    pub const FIELD_COUNT: usize = 8;

    /// An entity of `kind` that has not been spawned yet.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            id: None,
            kind,
            name: None,
            x: None,
            y: None,
            z: None,
            health: None,
            ai: None,
        }
    }

    /// Decodes an entity payload: id, type, name, x, y, z, health, ai.
    ///
    /// Any field may be the literal `null`, which decodes to `None`
    /// (except the type, which is required).
    ///
    /// # Errors
    /// Strict: wrong field count, unparsable numbers or booleans, and
    /// entity types missing from [`EntityKind`] are all errors.
    pub fn from_wire(text: &str) -> Result<Self, ProtocolError> {
        let fields: Vec<&str> = split_fields(text).collect();
        let [id, kind, name, x, y, z, health, ai] = fields[..] else {
            return Err(ProtocolError::FieldCount {
                model: "entity",
                expected: Self::FIELD_COUNT,
                got: fields.len(),
            });
        };

        let kind = EntityKind::from_wire(kind)
            .ok_or_else(|| ProtocolError::UnknownEntity(kind.to_string()))?;

        Ok(Self {
            id: nullable(id).map(|id| EntityId(id.to_string())),
            kind,
            name: nullable(name).map(str::to_string),
            x: nullable(x).map(|v| parse_field("entity.x", v)).transpose()?,
            y: nullable(y).map(|v| parse_field("entity.y", v)).transpose()?,
            z: nullable(z).map(|v| parse_field("entity.z", v)).transpose()?,
            health: nullable(health)
                .map(|v| parse_field("entity.health", v))
                .transpose()?,
            ai: nullable(ai).map(|v| parse_bool("entity.ai", v)).transpose()?,
        })
    }

    /// Encodes this snapshot in the same layout the server sends, writing
    /// `null` for absent fields.
    pub fn to_wire(&self) -> String {
        fn opt<T: ToString>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map_or_else(|| NULL_LITERAL.to_string(), T::to_string)
        }

        join_fields([
            opt(&self.id),
            self.kind.as_wire().to_string(),
            opt(&self.name),
            opt(&self.x),
            opt(&self.y),
            opt(&self.z),
            opt(&self.health),
            opt(&self.ai),
        ])
    }
}

fn nullable(raw: &str) -> Option<&str> {
    (raw != NULL_LITERAL).then_some(raw)
}
