//! Boss bars: named progress bars shown at the top of the screen.
//!
//! The server owns the bar. A [`BossBar`] is the client's mirror of the
//! last values it set; the server never reports the bar back.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

wire_enum! {
    /// How the bar is drawn.
    #[derive(Default)]
    pub enum BossBarStyle {
        #[default]
        Solid => "solid",
        Segmented6 => "segmented_6",
        Segmented10 => "segmented_10",
        Segmented12 => "segmented_12",
        Segmented20 => "segmented_20",
    }
}

wire_enum! {
    /// Bar color.
    #[derive(Default)]
    pub enum BossBarColor {
        Blue => "blue",
        Green => "green",
        Pink => "pink",
        #[default]
        Purple => "purple",
        Red => "red",
        White => "white",
        Yellow => "yellow",
    }
}

/// Client-side mirror of a boss bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossBar {
    /// The name chosen when the bar was created; identifies it on the server.
    pub name: String,
    pub display_text: String,
    /// Fill level.
    pub value: f64,
    pub style: BossBarStyle,
    pub color: BossBarColor,
}

impl BossBar {
    /// Accepted fill values, both ends inclusive.
    pub const VALUE_RANGE: RangeInclusive<f64> = 0.0..=1.0;

    /// The state of a freshly spawned bar: empty, solid, purple.
    pub fn new(name: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_text: display_text.into(),
            value: 0.0,
            style: BossBarStyle::default(),
            color: BossBarColor::default(),
        }
    }

    /// Whether `value` is an acceptable fill level. NaN is not.
    pub fn is_valid_value(value: f64) -> bool {
        Self::VALUE_RANGE.contains(&value)
    }
}
