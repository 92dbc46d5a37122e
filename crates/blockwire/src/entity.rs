//! Spawning and editing entities.

use blockwire_protocol::{
    CommandLine, Dimension, Entity, EntityId, EntityKind, WireArg, tagged,
};
use blockwire_transport::Connection;

use crate::{BlockwireError, Client};

/// The id of a spawned entity, or a `Validation` error for one that was
/// never echoed by the server.
fn require_id(entity: &Entity) -> Result<&EntityId, BlockwireError> {
    entity.id.as_ref().ok_or_else(|| {
        BlockwireError::Validation(format!(
            "{} entity has no id; spawn it first",
            entity.kind
        ))
    })
}

fn get_entity_line(id: &EntityId) -> CommandLine {
    CommandLine::new("getEntity").arg(id)
}

impl<C: Connection> Client<C> {
    /// Returns the current state of a spawned entity.
    pub async fn get_entity(&self, entity: &Entity) -> Result<Entity, BlockwireError> {
        let id = require_id(entity)?;
        let text = self.query(get_entity_line(id)).await?;
        Ok(Entity::from_wire(&text)?)
    }

    /// Spawns an entity of `kind` and returns it with its server id.
    pub async fn spawn_entity(
        &self,
        x: i32,
        y: i32,
        z: i32,
        kind: EntityKind,
        dimension: Dimension,
    ) -> Result<Entity, BlockwireError> {
        let text = self
            .query(
                CommandLine::new("spawnEntity")
                    .arg(x)
                    .arg(y)
                    .arg(z)
                    .arg(dimension)
                    .arg(kind),
            )
            .await?;
        Ok(Entity::from_wire(&text)?)
    }

    pub async fn set_entity_name(
        &self,
        entity: &Entity,
        name: &str,
    ) -> Result<Entity, BlockwireError> {
        self.edit_entity(entity, tagged("name", name)).await
    }

    /// Moves the entity. Coordinates may be fractional.
    pub async fn set_entity_position(
        &self,
        entity: &Entity,
        x: f64,
        y: f64,
        z: f64,
        dimension: Dimension,
    ) -> Result<Entity, BlockwireError> {
        let position = [
            x.to_wire_arg(),
            y.to_wire_arg(),
            z.to_wire_arg(),
            dimension.to_wire_arg(),
        ]
        .join(";");
        self.edit_entity(entity, tagged("position", position)).await
    }

    /// Turns the entity's AI on or off. Without AI it does not move.
    pub async fn set_entity_ai(
        &self,
        entity: &Entity,
        enabled: bool,
    ) -> Result<Entity, BlockwireError> {
        self.edit_entity(entity, tagged("ai", enabled)).await
    }

    /// Sets the entity's health. Zero kills it.
    pub async fn set_entity_health(
        &self,
        entity: &Entity,
        health: f64,
    ) -> Result<Entity, BlockwireError> {
        self.edit_entity(entity, tagged("health", health)).await
    }

    async fn edit_entity(
        &self,
        entity: &Entity,
        change: String,
    ) -> Result<Entity, BlockwireError> {
        let id = require_id(entity)?;
        let line = CommandLine::new("editEntity").arg(id).arg(change);
        let text = self.mutate(vec![line], get_entity_line(id)).await?;
        Ok(Entity::from_wire(&text)?)
    }
}
