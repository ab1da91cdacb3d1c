/// Tunable constants for one session.
///
/// Everything the simulation measures against lives here so that the pure
/// functions in `compute` never reach for globals.  `Default` reproduces the
/// classic 640×480 arcade layout.

use std::fmt;

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_CANVAS_WIDTH: f32 = 640.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 480.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,

    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    /// Distance from the bottom edge to the player's top-left corner.
    pub player_bottom_offset: f32,

    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,
    /// Horizontal velocity of the two outer bullets of a spread volley.
    pub spread_dx: f32,

    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_speed: f32,
    /// Ticks between enemy spawns.
    pub enemy_spawn_interval: u32,

    pub item_width: f32,
    pub item_height: f32,
    pub item_speed: f32,
    /// Chance that a destroyed enemy drops an item.
    pub item_drop_chance: f64,

    /// Ticks a collected item keeps the spread shot active.
    pub power_up_duration: u32,
    pub score_per_enemy: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            player_width: 50.0,
            player_height: 50.0,
            player_speed: 5.0,
            player_bottom_offset: 60.0,
            bullet_width: 5.0,
            bullet_height: 15.0,
            bullet_speed: 7.0,
            spread_dx: 2.0,
            enemy_width: 50.0,
            enemy_height: 50.0,
            enemy_speed: 2.0,
            enemy_spawn_interval: 120,
            item_width: 20.0,
            item_height: 20.0,
            item_speed: 3.0,
            item_drop_chance: 0.2,
            power_up_duration: 300,
            score_per_enemy: 10,
        }
    }
}

impl GameConfig {
    /// Default constants on a canvas of the given size.
    pub fn with_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    /// Reject layouts the simulation cannot honour (e.g. a canvas narrower
    /// than an enemy, which would leave no valid spawn column).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("item_width", self.item_width),
            ("item_height", self.item_height),
        ];
        for (name, value) in dims {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let speeds = [
            ("player_speed", self.player_speed),
            ("bullet_speed", self.bullet_speed),
            ("enemy_speed", self.enemy_speed),
            ("item_speed", self.item_speed),
        ];
        for (name, value) in speeds {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.canvas_width <= self.player_width || self.canvas_width <= self.enemy_width {
            return Err(ConfigError::CanvasTooNarrow {
                width: self.canvas_width,
            });
        }
        if self.canvas_height <= self.player_bottom_offset {
            return Err(ConfigError::CanvasTooShort {
                height: self.canvas_height,
            });
        }
        if !(0.0..=1.0).contains(&self.item_drop_chance) {
            return Err(ConfigError::DropChanceOutOfRange(self.item_drop_chance));
        }
        if self.enemy_spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        Ok(())
    }
}

// ── Errors ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonPositive { name: &'static str, value: f32 },
    CanvasTooNarrow { width: f32 },
    CanvasTooShort { height: f32 },
    DropChanceOutOfRange(f64),
    ZeroSpawnInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { name, value } => {
                write!(f, "{name} must be a positive number (got {value})")
            }
            Self::CanvasTooNarrow { width } => {
                write!(f, "canvas width {width} leaves no room for the player or an enemy")
            }
            Self::CanvasTooShort { height } => {
                write!(f, "canvas height {height} is too short to place the player")
            }
            Self::DropChanceOutOfRange(p) => {
                write!(f, "item drop chance must be within [0, 1] (got {p})")
            }
            Self::ZeroSpawnInterval => write!(f, "enemy spawn interval must be at least one tick"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn with_canvas_keeps_other_constants() {
        let c = GameConfig::with_canvas(800.0, 600.0);
        assert_eq!(c.canvas_width, 800.0);
        assert_eq!(c.canvas_height, 600.0);
        assert_eq!(c.enemy_spawn_interval, 120);
        assert_eq!(c.power_up_duration, 300);
    }

    #[test]
    fn narrow_canvas_rejected() {
        let c = GameConfig::with_canvas(40.0, 480.0);
        assert_eq!(c.validate(), Err(ConfigError::CanvasTooNarrow { width: 40.0 }));
    }

    #[test]
    fn short_canvas_rejected() {
        let c = GameConfig::with_canvas(640.0, 50.0);
        assert_eq!(c.validate(), Err(ConfigError::CanvasTooShort { height: 50.0 }));
    }

    #[test]
    fn bad_drop_chance_rejected() {
        let c = GameConfig {
            item_drop_chance: 1.5,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::DropChanceOutOfRange(1.5)));
    }

    #[test]
    fn nan_dimension_rejected() {
        let c = GameConfig {
            canvas_width: f32::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NonPositive { name: "canvas_width", .. })
        ));
    }

    #[test]
    fn zero_spawn_interval_rejected() {
        let c = GameConfig {
            enemy_spawn_interval: 0,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroSpawnInterval));
    }
}
