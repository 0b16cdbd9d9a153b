//! Flappy - a side-scrolling flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipe stream, collisions, session state)
//! - `renderer`: Draw-request frames and a vertex batch backend
//! - `platform`: Frame clock and input sources
//! - `highscores`: Persisted best score
//! - `config`: Data-driven game tuning
//! - `game`: Frame loop driver wiring the above together

pub mod config;
pub mod error;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{Game, LoopControl};
pub use highscores::{HighScoreStore, MemoryStore, TextFileStore};

/// Default tuning values. Components read the runtime copy in [`GameConfig`].
pub mod consts {
    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Target frames per second for the loop driver
    pub const FRAME_RATE: u32 = 60;
    /// Longest frame the driver will report (ms), so a stall can't burst-spawn pipes
    pub const MAX_FRAME_MS: f32 = 250.0;

    /// Bird sprite and start position
    pub const BIRD_WIDTH: f32 = 55.0;
    pub const BIRD_HEIGHT: f32 = 40.0;
    pub const BIRD_START_X: f32 = 100.0;
    pub const BIRD_START_Y: f32 = SCREEN_HEIGHT / 2.0;
    /// Hitbox shrink per axis (total, split evenly between both sides)
    pub const BIRD_HITBOX_MARGIN: f32 = 14.0;
    /// Sprite tilt in degrees per unit of vertical velocity
    pub const BIRD_TILT_FACTOR: f32 = 3.0;

    /// Physics (units per tick)
    pub const GRAVITY: f32 = 0.25;
    pub const FLAP_VELOCITY: f32 = -8.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_HEIGHT: f32 = 400.0;
    pub const PIPE_GAP: f32 = 200.0;
    /// Smallest distance from the top of the screen to the gap (and from the gap to the bottom)
    pub const PIPE_MIN_TOP: f32 = 50.0;
    /// Hitbox height = sprite height - trim
    pub const PIPE_HITBOX_TRIM: f32 = 20.0;
    /// New pipes are centered here, off the right edge
    pub const PIPE_SPAWN_X: f32 = 500.0;
    pub const PIPE_SPAWN_INTERVAL_MS: f32 = 1200.0;

    /// Scroll speed
    pub const BASE_SPEED: f32 = 5.0;
    pub const SPEED_INCREMENT: f32 = 0.005;
    /// Speed ramps every time the score reaches a multiple of this
    pub const SPEED_MILESTONE: u32 = 10;

    /// How far above the screen top the bird may fly before the run ends
    pub const CEILING_TOLERANCE: f32 = 50.0;

    pub const HIGH_SCORE_FILE: &str = "high_score.txt";
}
