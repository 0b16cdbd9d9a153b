//! Frame loop driver
//!
//! Owns the session state and its three collaborators (input, renderer,
//! high-score store) and runs them in a fixed order every frame.

use crate::config::GameConfig;
use crate::highscores::HighScoreStore;
use crate::platform::{Command, FrameClock, InputSource, tick_input};
use crate::renderer::{Frame, Renderer};
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Whether the loop should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Game instance holding the session and its collaborators
pub struct Game<I, R, S> {
    state: GameState,
    input: I,
    renderer: R,
    store: S,
    /// Events from the most recent tick
    events: Vec<GameEvent>,
}

impl<I, R, S> Game<I, R, S>
where
    I: InputSource,
    R: Renderer,
    S: HighScoreStore,
{
    /// Start a session, seeding the high score from the store
    pub fn new(config: GameConfig, seed: u64, input: I, renderer: R, store: S) -> Self {
        let high_score = store.load();
        log::info!("Starting session with seed {seed}, high score {high_score}");
        Self {
            state: GameState::new(config, seed, high_score),
            input,
            renderer,
            store,
            events: Vec::new(),
        }
    }

    /// Run one frame: poll input, tick, persist, draw
    pub fn step(&mut self, dt_ms: f32) -> LoopControl {
        let commands = self.input.poll(&self.state);
        if commands.contains(&Command::Quit) {
            self.finish();
            return LoopControl::Quit;
        }

        let input = tick_input(&commands);
        let events = tick(&mut self.state, &input, dt_ms);
        for event in &events {
            if let GameEvent::NewHighScore { score } = event {
                self.persist(*score);
            }
        }
        self.events = events;

        self.renderer.draw(&Frame::from_state(&self.state));
        LoopControl::Continue
    }

    /// Drive frames at the configured rate until the input source quits
    pub fn run(&mut self) {
        let mut clock = FrameClock::new(self.state.config.frame_duration());
        let mut frames: u64 = 0;
        loop {
            let dt_ms = clock.tick();
            if self.step(dt_ms) == LoopControl::Quit {
                break;
            }
            frames += 1;
        }
        log::info!(
            "Quit after {frames} frames (score {}, high score {})",
            self.state.score,
            self.state.high_score
        );
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn last_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// A run that ended right before quitting has not been recorded yet
    fn finish(&mut self) {
        if self.state.phase == GamePhase::Ended && self.state.record_high_score() {
            log::info!("New high score: {}", self.state.high_score);
            self.persist(self.state.high_score);
        }
    }

    /// Save failures are logged; the in-memory high score stays correct
    fn persist(&mut self, score: u32) {
        if let Err(e) = self.store.save(score) {
            log::warn!("Failed to save high score {score}: {e}");
        }
    }
}
