//! Game tuning and runtime configuration
//!
//! Every component copies the section it needs at construction time, so a
//! running session never observes a config change. Loaded from JSON; any
//! field left out of the file keeps its default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Playfield size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// Bird sprite, start position and physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdConfig {
    pub start_x: f32,
    pub start_y: f32,
    pub width: f32,
    pub height: f32,
    /// Added to velocity every tick (positive = downward)
    pub gravity: f32,
    /// Velocity a flap sets (negative = upward)
    pub flap_velocity: f32,
    pub hitbox_margin: f32,
    pub tilt_factor: f32,
}

impl Default for BirdConfig {
    fn default() -> Self {
        Self {
            start_x: BIRD_START_X,
            start_y: BIRD_START_Y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            hitbox_margin: BIRD_HITBOX_MARGIN,
            tilt_factor: BIRD_TILT_FACTOR,
        }
    }
}

/// Pipe geometry and spawn timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    pub width: f32,
    /// Sprite height; the hitbox is `height - hitbox_trim`
    pub height: f32,
    pub gap: f32,
    pub min_top: f32,
    pub hitbox_trim: f32,
    pub spawn_x: f32,
    pub spawn_interval_ms: f32,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            width: PIPE_WIDTH,
            height: PIPE_HEIGHT,
            gap: PIPE_GAP,
            min_top: PIPE_MIN_TOP,
            hitbox_trim: PIPE_HITBOX_TRIM,
            spawn_x: PIPE_SPAWN_X,
            spawn_interval_ms: PIPE_SPAWN_INTERVAL_MS,
        }
    }
}

impl PipeConfig {
    pub fn hitbox_height(&self) -> f32 {
        (self.height - self.hitbox_trim).max(0.0)
    }
}

/// Scroll speed ramp and playfield bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub base_speed: f32,
    pub speed_increment: f32,
    pub speed_milestone: u32,
    pub ceiling_tolerance: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            speed_increment: SPEED_INCREMENT,
            speed_milestone: SPEED_MILESTONE,
            ceiling_tolerance: CEILING_TOLERANCE,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub bird: BirdConfig,
    pub pipes: PipeConfig,
    pub session: SessionConfig,
    pub frame_rate: u32,
    /// Plain-text file holding the best score
    pub high_score_path: PathBuf,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            bird: BirdConfig::default(),
            pipes: PipeConfig::default(),
            session: SessionConfig::default(),
            frame_rate: FRAME_RATE,
            high_score_path: PathBuf::from(HIGH_SCORE_FILE),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));

        let numbers = [
            self.screen.width,
            self.screen.height,
            self.bird.start_x,
            self.bird.start_y,
            self.bird.width,
            self.bird.height,
            self.bird.gravity,
            self.bird.flap_velocity,
            self.bird.hitbox_margin,
            self.bird.tilt_factor,
            self.pipes.width,
            self.pipes.height,
            self.pipes.gap,
            self.pipes.min_top,
            self.pipes.hitbox_trim,
            self.pipes.spawn_x,
            self.pipes.spawn_interval_ms,
            self.session.base_speed,
            self.session.speed_increment,
            self.session.ceiling_tolerance,
        ];
        if numbers.iter().any(|n| !n.is_finite()) {
            return invalid("all numeric fields must be finite");
        }
        if self.session.base_speed < 0.0 || self.session.speed_increment < 0.0 {
            return invalid("scroll speed and its increment must not be negative");
        }
        if self.screen.width <= 0.0 || self.screen.height <= 0.0 {
            return invalid("screen size must be positive");
        }
        if self.bird.width <= 0.0 || self.bird.height <= 0.0 {
            return invalid("bird size must be positive");
        }
        if self.pipes.width <= 0.0 || self.pipes.height <= 0.0 || self.pipes.gap <= 0.0 {
            return invalid("pipe width, height and gap must be positive");
        }
        if self.pipes.min_top < 0.0 {
            return invalid("pipe min_top must not be negative");
        }
        if self.pipes.gap + 2.0 * self.pipes.min_top > self.screen.height {
            return invalid("pipe gap and margins do not fit the screen height");
        }
        if self.pipes.spawn_interval_ms <= 0.0 {
            return invalid("pipe spawn interval must be positive");
        }
        if self.frame_rate == 0 {
            return invalid("frame rate must be positive");
        }
        if self.session.speed_milestone == 0 {
            return invalid("speed milestone must be positive");
        }
        Ok(())
    }

    /// Target wall-clock duration of one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }
}
