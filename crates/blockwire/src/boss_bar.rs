//! Boss bars.
//!
//! The server keeps no queryable state for bars, so [`BossBar`] is a local
//! mirror: each setter sends the edit and then updates the mirror.

use blockwire_protocol::{BossBar, BossBarColor, BossBarStyle, CommandLine, WireArg, tagged};
use blockwire_transport::Connection;

use crate::{BlockwireError, Client};

fn edit_line(bar: &BossBar, key: &'static str, value: impl WireArg) -> CommandLine {
    CommandLine::new("editBossBar")
        .arg(key)
        .arg(&bar.name)
        .arg(tagged(key, value))
}

impl<C: Connection> Client<C> {
    /// Creates a bar. `name` identifies it in later edits; `display_text`
    /// is what players see. New bars are empty, solid and purple.
    pub async fn create_boss_bar(
        &self,
        name: &str,
        display_text: &str,
    ) -> Result<BossBar, BlockwireError> {
        self.fire(CommandLine::new("spawnBossBar").arg(name).arg(display_text))
            .await?;
        Ok(BossBar::new(name, display_text))
    }

    pub async fn set_boss_bar_text(
        &self,
        bar: &mut BossBar,
        display_text: &str,
    ) -> Result<(), BlockwireError> {
        self.fire(edit_line(bar, "text", display_text)).await?;
        bar.display_text = display_text.to_string();
        Ok(())
    }

    pub async fn set_boss_bar_color(
        &self,
        bar: &mut BossBar,
        color: BossBarColor,
    ) -> Result<(), BlockwireError> {
        self.fire(edit_line(bar, "color", color)).await?;
        bar.color = color;
        Ok(())
    }

    pub async fn set_boss_bar_style(
        &self,
        bar: &mut BossBar,
        style: BossBarStyle,
    ) -> Result<(), BlockwireError> {
        self.fire(edit_line(bar, "style", style)).await?;
        bar.style = style;
        Ok(())
    }

    /// Sets how full the bar is.
    ///
    /// # Errors
    /// `Validation` unless `0.0 <= value <= 1.0`; nothing is sent and the
    /// mirror is unchanged.
    pub async fn set_boss_bar_value(
        &self,
        bar: &mut BossBar,
        value: f64,
    ) -> Result<(), BlockwireError> {
        if !BossBar::is_valid_value(value) {
            return Err(BlockwireError::Validation(format!(
                "boss bar value must be between 0 and 1, got {value}"
            )));
        }
        self.fire(edit_line(bar, "value", value)).await?;
        bar.value = value;
        Ok(())
    }

    /// Removes the bar from every player's screen.
    pub async fn delete_boss_bar(&self, bar: BossBar) -> Result<(), BlockwireError> {
        self.fire(CommandLine::new("deleteBossBar").arg(bar.name)).await
    }
}
