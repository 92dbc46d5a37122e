//! Blocks, chat, titles, and server commands.

use blockwire_protocol::{
    Block, ChatMessage, CommandLine, Dimension, IdKind, MaterialType, parse_chat,
    seconds_to_ticks,
};
use blockwire_transport::Connection;

use crate::{BlockwireError, Client};

/// Display settings for [`Client::show_title`].
///
/// Times are in seconds and are converted to game ticks (rounded down)
/// before sending.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleOptions {
    pub subtitle: String,
    /// Player to show the title to. Negative means every player.
    pub player_index: i32,
    pub fade_in: f64,
    pub display: f64,
    pub fade_out: f64,
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            subtitle: String::new(),
            player_index: -1,
            fade_in: 1.0,
            display: 5.0,
            fade_out: 1.0,
        }
    }
}

impl TitleOptions {
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Shows the title to one player only.
    pub fn player(mut self, index: i32) -> Self {
        self.player_index = index;
        self
    }

    /// Sets fade-in, display and fade-out times, in seconds.
    pub fn timing(mut self, fade_in: f64, display: f64, fade_out: f64) -> Self {
        self.fade_in = fade_in;
        self.display = display;
        self.fade_out = fade_out;
        self
    }
}

impl<C: Connection> Client<C> {
    /// Places `material` at the given position, replacing whatever is
    /// there. Use [`Material::Air`](blockwire_protocol::Material::Air) to
    /// clear a block. Materials missing from the catalog can be placed by
    /// name with [`MaterialType::Unknown`].
    pub async fn set_block(
        &self,
        x: i32,
        y: i32,
        z: i32,
        material: impl Into<MaterialType>,
        dimension: Dimension,
    ) -> Result<(), BlockwireError> {
        self.fire(
            CommandLine::new("setBlock")
                .arg(x)
                .arg(y)
                .arg(z)
                .arg(dimension)
                .arg(material.into()),
        )
        .await
    }

    /// Returns the block at the given position. Empty space is `AIR`.
    ///
    /// Block types this library does not know decode as
    /// [`MaterialType::Unknown`](blockwire_protocol::MaterialType::Unknown)
    /// rather than failing.
    pub async fn get_block(
        &self,
        x: i32,
        y: i32,
        z: i32,
        dimension: Dimension,
    ) -> Result<Block, BlockwireError> {
        let text = self
            .query(
                CommandLine::new("getBlock")
                    .arg(x)
                    .arg(y)
                    .arg(z)
                    .arg(dimension),
            )
            .await?;
        Ok(Block::from_wire_at(&text.to_uppercase(), x, y, z))
    }

    /// Writes `message` to the in-game chat.
    pub async fn post_chat(&self, message: &str) -> Result<(), BlockwireError> {
        self.fire(CommandLine::new("postChat").arg(message)).await
    }

    /// Returns every chat message written since the previous poll.
    pub async fn poll_chat(&self) -> Result<Vec<ChatMessage>, BlockwireError> {
        let text = self.query(CommandLine::new("pollChat")).await?;
        Ok(parse_chat(&text)?)
    }

    /// Runs a server command as if typed into the server console.
    /// The leading `/` is not needed.
    pub async fn run_command(&self, command: &str) -> Result<(), BlockwireError> {
        if command.starts_with('/') {
            tracing::warn!(
                command,
                "command starts with '/', which is probably not intended"
            );
        }
        self.fire(CommandLine::new("chatCommand").arg(command)).await
    }

    /// Shows a title (and optional subtitle) on screen.
    pub async fn show_title(
        &self,
        text: &str,
        options: &TitleOptions,
    ) -> Result<(), BlockwireError> {
        self.fire(
            CommandLine::new("showTitle")
                .arg(options.player_index)
                .arg(text)
                .arg(&options.subtitle)
                .arg(seconds_to_ticks(options.fade_in))
                .arg(seconds_to_ticks(options.display))
                .arg(seconds_to_ticks(options.fade_out)),
        )
        .await
    }

    /// Asks the server whether `id` names a material or entity type it
    /// supports.
    pub async fn validate_id(
        &self,
        kind: IdKind,
        id: &str,
    ) -> Result<bool, BlockwireError> {
        let text = self
            .query(CommandLine::new("validate").arg(kind).arg(id))
            .await?;
        Ok(text == "Yes")
    }
}
