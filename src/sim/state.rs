//! Session state and core simulation types
//!
//! One [`GameState`] lives for the whole process; a restart swaps in a fresh
//! bird and pipe stream but keeps the high score, RNG and debug flag.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bird::Bird;
use super::collision::CollisionResult;
use super::pipes::PipeStream;
use crate::config::GameConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Bird flying, world scrolling
    Active,
    /// Run over, end screen showing, waiting for restart
    Ended,
}

/// Things that happened during a tick, for the driver to react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Flapped,
    PipeSpawned { gap_top: f32 },
    /// A pipe pair was cleared; carries the new score
    Scored { score: u32 },
    /// A score milestone raised the scroll speed
    SpeedUp { speed: f32 },
    GameOver { score: u32, cause: CollisionResult },
    /// The ended run beat the previous best; should be persisted
    NewHighScore { score: u32 },
    Restarted,
    DebugToggled { enabled: bool },
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub bird: Bird,
    pub pipes: PipeStream,
    pub score: u32,
    /// Best score seen by this process (loaded from the store at startup)
    pub high_score: u32,
    /// Scroll speed in units per tick
    pub speed: f32,
    /// Draw hitboxes and the speed readout
    pub debug: bool,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed and previously stored best score
    pub fn new(config: GameConfig, seed: u64, high_score: u32) -> Self {
        Self {
            seed,
            phase: GamePhase::Active,
            bird: Bird::new(&config.bird),
            pipes: PipeStream::new(&config.pipes, &config.screen),
            score: 0,
            high_score,
            speed: config.session.base_speed,
            debug: false,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Start a fresh run: new bird and pipes, score and speed reset
    pub fn restart(&mut self) {
        self.bird = Bird::new(&self.config.bird);
        self.pipes = PipeStream::new(&self.config.pipes, &self.config.screen);
        self.score = 0;
        self.speed = self.config.session.base_speed;
        self.time_ticks = 0;
        self.phase = GamePhase::Active;
    }

    /// Raise the high score if the current score beats it.
    /// Returns true when it changed.
    pub fn record_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// Add one point; while the run is active, ramps the speed when the new
    /// score hits a milestone. Returns the new speed if it ramped.
    pub fn add_point(&mut self) -> Option<f32> {
        self.score += 1;
        // `is_multiple_of(0)` is false for any non-zero score
        if self.is_active() && self.score.is_multiple_of(self.config.session.speed_milestone) {
            self.speed += self.config.session.speed_increment;
            Some(self.speed)
        } else {
            None
        }
    }
}
