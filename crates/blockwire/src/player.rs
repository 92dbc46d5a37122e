//! Player queries and edits.
//!
//! Every edit is followed by a fresh `getPlayer`, and the setters return
//! that new snapshot. The snapshot passed in is left untouched.

use std::ops::RangeInclusive;

use blockwire_protocol::{
    CommandLine, Dimension, Direction, Player, PlayerId, PlayerStat, tagged,
};
use blockwire_transport::Connection;

use crate::{BlockwireError, Client};

/// Accepted player yaw, in degrees.
pub const ROTATION_RANGE: RangeInclusive<i32> = -180..=180;

fn get_player_line(id: PlayerId) -> CommandLine {
    CommandLine::new("getPlayer").arg(id)
}

fn set_stat_line(stat: PlayerStat, id: PlayerId, value: f64) -> CommandLine {
    CommandLine::new("setPlayerStat").arg(stat).arg(id).arg(value)
}

impl<C: Connection> Client<C> {
    /// Returns the player at `index`. Players are numbered in the order
    /// they joined, starting at 0.
    pub async fn get_player(&self, index: i32) -> Result<Player, BlockwireError> {
        let text = self.query(get_player_line(PlayerId(index))).await?;
        Ok(Player::from_wire(&text)?)
    }

    /// Teleports `player`. With `rotation` set, the yaw changes too.
    ///
    /// # Errors
    /// `Validation` if `rotation` is outside [`ROTATION_RANGE`]; nothing is
    /// sent in that case.
    pub async fn set_player_position(
        &self,
        player: &Player,
        x: i32,
        y: i32,
        z: i32,
        rotation: Option<i32>,
        dimension: Dimension,
    ) -> Result<Player, BlockwireError> {
        if let Some(rotation) = rotation.filter(|r| !ROTATION_RANGE.contains(r)) {
            return Err(BlockwireError::Validation(format!(
                "player rotation must be between -180 and 180, got {rotation}"
            )));
        }

        let line = CommandLine::new("setPlayerPos")
            .arg(player.id)
            .arg(x)
            .arg(y)
            .arg(z)
            .arg(dimension)
            .arg_opt(rotation.map(|r| tagged("rotation", r)));
        self.reread_player(vec![line], player.id).await
    }

    /// Sets the player's speed in `direction`. 1 is normal, 0 freezes.
    pub async fn set_player_velocity(
        &self,
        player: &Player,
        direction: Direction,
        value: f64,
    ) -> Result<Player, BlockwireError> {
        let line = CommandLine::new("setPlayerVelocity")
            .arg(direction)
            .arg(player.id)
            .arg(value);
        self.reread_player(vec![line], player.id).await
    }

    pub async fn set_player_max_health(
        &self,
        player: &Player,
        value: f64,
    ) -> Result<Player, BlockwireError> {
        self.set_player_stat(player, PlayerStat::MaxHealth, value).await
    }

    /// Sets current health. Anything above the maximum is ignored by the
    /// server.
    pub async fn set_player_health(
        &self,
        player: &Player,
        value: f64,
    ) -> Result<Player, BlockwireError> {
        self.set_player_stat(player, PlayerStat::Health, value).await
    }

    pub async fn set_player_xp_level(
        &self,
        player: &Player,
        value: f64,
    ) -> Result<Player, BlockwireError> {
        self.set_player_stat(player, PlayerStat::XpLevel, value).await
    }

    /// Sets progress towards the next level.
    pub async fn set_player_xp_progress(
        &self,
        player: &Player,
        value: f64,
    ) -> Result<Player, BlockwireError> {
        self.set_player_stat(player, PlayerStat::XpProgress, value).await
    }

    /// Sets the food level, and the saturation if given.
    pub async fn set_player_hunger(
        &self,
        player: &Player,
        value: f64,
        saturation: Option<f64>,
    ) -> Result<Player, BlockwireError> {
        let mut lines = vec![set_stat_line(PlayerStat::FoodLevel, player.id, value)];
        if let Some(saturation) = saturation {
            lines.push(set_stat_line(PlayerStat::Saturation, player.id, saturation));
        }
        self.reread_player(lines, player.id).await
    }

    async fn set_player_stat(
        &self,
        player: &Player,
        stat: PlayerStat,
        value: f64,
    ) -> Result<Player, BlockwireError> {
        self.reread_player(vec![set_stat_line(stat, player.id, value)], player.id)
            .await
    }

    async fn reread_player(
        &self,
        mutations: Vec<CommandLine>,
        id: PlayerId,
    ) -> Result<Player, BlockwireError> {
        let text = self.mutate(mutations, get_player_line(id)).await?;
        Ok(Player::from_wire(&text)?)
    }
}
