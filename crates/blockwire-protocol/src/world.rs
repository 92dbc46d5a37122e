//! Small enums that appear as command arguments.

wire_enum! {
    /// A world dimension. Positional commands always name one.
    #[derive(Default)]
    pub enum Dimension {
        #[default]
        World => "world",
        Nether => "world_nether",
        End => "world_the_end",
    }
}

wire_enum! {
    /// Directions whose movement speed can be changed.
    pub enum Direction {
        Up => "UP",
        Down => "DOWN",
        Back => "BACK",
        /// Wherever the player is currently looking.
        Looking => "LOOKING",
    }
}

wire_enum! {
    /// Player statistics writable through `setPlayerStat`.
    pub enum PlayerStat {
        MaxHealth => "MAX_HEALTH",
        Health => "HEALTH",
        FoodLevel => "FOOD_LEVEL",
        Saturation => "SATURATION",
        XpLevel => "XP_LEVEL",
        XpProgress => "XP_PROGRESS",
    }
}

wire_enum! {
    /// Which identifier table a `validate` request checks against.
    pub enum IdKind {
        Material => "MATERIAL",
        Entity => "ENTITY",
    }
}

/// Game ticks per second.
pub const TICKS_PER_SECOND: f64 = 20.0;

/// Converts seconds to game ticks, rounding down.
pub fn seconds_to_ticks(seconds: f64) -> i64 {
    (seconds * TICKS_PER_SECOND).floor() as i64
}
