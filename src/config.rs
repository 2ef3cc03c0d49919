//! Game tuning and host configuration.
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml`
//! 2. `config/user.toml` (gitignored, local overrides)
//! 3. Environment variables (`FLAPPY_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable prefix, e.g. `FLAPPY_GAME__GRAVITY=0.5`.
pub const ENV_PREFIX: &str = "FLAPPY_";

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed or a value had the wrong type.
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),

    /// Values parsed but the simulation cannot run with them.
    #[error("Invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Full application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from the `config` directory and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory.
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }
        // FLAPPY_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: AppConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.frame_ms == 0 {
            return Err(invalid("window.frame_ms", "must be at least 1"));
        }
        self.game.validate()
    }
}

/// Host window settings. The core never reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Target frame duration in milliseconds.
    pub frame_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Flappy GoAi".to_string(),
            frame_ms: 16,
        }
    }
}

/// Simulation tuning. Distances are logical pixels, speeds are per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub bird_size: f32,
    /// Fixed horizontal position of the bird.
    pub bird_x: f32,
    pub gravity: f32,
    /// Velocity set (not added) while the jump key is held. Negative is up.
    pub jump_impulse: f32,
    pub max_fall_speed: f32,
    pub pipe_width: f32,
    /// Smallest gap size, inclusive.
    pub gap_min: f32,
    /// Largest gap size, exclusive.
    pub gap_max: f32,
    /// A new pipe spawns once the newest one is left of `screen_width - gap_between_pipes`.
    pub gap_between_pipes: f32,
    pub pipe_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let bird_size = 20.0;
        Self {
            screen_width: 640.0,
            screen_height: 480.0,
            bird_size,
            bird_x: 50.0,
            gravity: 0.3,
            jump_impulse: -5.0,
            max_fall_speed: 10.0,
            pipe_width: bird_size * 2.0,
            gap_min: 100.0,
            gap_max: 200.0,
            gap_between_pipes: 200.0,
            pipe_speed: 2.0,
        }
    }
}

impl GameConfig {
    /// Logical resolution reported to the host.
    pub fn layout(&self) -> (f32, f32) {
        (self.screen_width, self.screen_height)
    }

    /// Bird y after a reset: vertically centered.
    pub fn bird_start_y(&self) -> f32 {
        self.screen_height / 2.0 - self.bird_size / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("game.screen_width", self.screen_width),
            ("game.screen_height", self.screen_height),
            ("game.bird_size", self.bird_size),
            ("game.bird_x", self.bird_x),
            ("game.gravity", self.gravity),
            ("game.jump_impulse", self.jump_impulse),
            ("game.max_fall_speed", self.max_fall_speed),
            ("game.pipe_width", self.pipe_width),
            ("game.gap_min", self.gap_min),
            ("game.gap_max", self.gap_max),
            ("game.gap_between_pipes", self.gap_between_pipes),
            ("game.pipe_speed", self.pipe_speed),
        ];
        for (field, value) in all {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {}", value)));
            }
        }

        let positive = [
            ("game.screen_width", self.screen_width),
            ("game.screen_height", self.screen_height),
            ("game.bird_size", self.bird_size),
            ("game.pipe_width", self.pipe_width),
            ("game.pipe_speed", self.pipe_speed),
            ("game.max_fall_speed", self.max_fall_speed),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {}", value)));
            }
        }
        if self.gap_min < 0.0 {
            return Err(invalid("game.gap_min", "must not be negative"));
        }
        if self.gap_min >= self.gap_max {
            return Err(invalid(
                "game.gap_max",
                format!("must exceed gap_min ({} >= {})", self.gap_min, self.gap_max),
            ));
        }
        if self.gap_max > self.screen_height {
            return Err(invalid(
                "game.gap_max",
                format!("must not exceed screen_height {}", self.screen_height),
            ));
        }
        if self.bird_size >= self.screen_height {
            return Err(invalid("game.bird_size", "bird must fit on screen"));
        }
        if self.bird_x < 0.0 || self.bird_x + self.bird_size > self.screen_width {
            return Err(invalid("game.bird_x", "bird must fit on screen"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
