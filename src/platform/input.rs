//! Input sources
//!
//! An [`InputSource`] is polled once per frame and returns the commands
//! issued since the last poll. Hosts with a keyboard map Space to `Flap`,
//! R to `Restart`, D to `ToggleDebug` and window close to `Quit`.

use std::collections::VecDeque;

use crate::sim::{GamePhase, GameState, TickInput};

/// A player or host request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Flap,
    Restart,
    ToggleDebug,
    /// Stop the loop
    Quit,
    /// Spawn a pipe pair now (for hosts running their own spawn timer)
    SpawnTick,
}

/// Fold a frame's commands into simulation input. `Quit` has no tick effect.
pub fn tick_input(commands: &[Command]) -> TickInput {
    let mut input = TickInput::default();
    for command in commands {
        match command {
            Command::Flap => input.flap = true,
            Command::Restart => input.restart = true,
            Command::ToggleDebug => input.toggle_debug = !input.toggle_debug,
            Command::SpawnTick => input.spawn = true,
            Command::Quit => {}
        }
    }
    input
}

pub trait InputSource {
    /// Commands for the coming frame; `state` is the state about to be ticked
    fn poll(&mut self, state: &GameState) -> Vec<Command>;
}

/// Replays a fixed list of per-frame commands, then quits
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<Command>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<Command>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Append `count` frames with no input
    pub fn idle(mut self, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(Vec::new(), count));
        self
    }

    /// Append one frame with the given commands
    pub fn then(mut self, commands: Vec<Command>) -> Self {
        self.frames.push_back(commands);
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> Vec<Command> {
        self.frames.pop_front().unwrap_or_else(|| vec![Command::Quit])
    }
}

/// Demo player: steers toward the next gap, restarts for a fixed number of
/// rounds, then quits
#[derive(Debug, Clone)]
pub struct Autopilot {
    rounds_left: u32,
    /// Flap once the bird sinks this far below the gap center
    flap_below: f32,
    /// Stop flapping at this score so the run ends
    score_limit: Option<u32>,
}

impl Autopilot {
    pub fn new(rounds: u32) -> Self {
        Self {
            rounds_left: rounds.max(1),
            flap_below: 40.0,
            score_limit: None,
        }
    }

    /// Give up each run once it reaches `limit` points
    pub fn with_score_limit(mut self, limit: u32) -> Self {
        self.score_limit = Some(limit);
        self
    }

    pub fn rounds_left(&self) -> u32 {
        self.rounds_left
    }

    /// Height the bird should hover around: the next gap still ahead of it,
    /// or mid-screen when nothing is in range
    fn target_y(state: &GameState) -> f32 {
        let bird_left = state.bird.hitbox().left();
        state
            .pipes
            .pairs()
            .iter()
            .filter(|pair| !pair.passed && pair.lower.right() > bird_left)
            .min_by(|a, b| a.lower.right().total_cmp(&b.lower.right()))
            .map(|pair| pair.gap_center())
            .unwrap_or(state.config.screen.height / 2.0)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> Vec<Command> {
        match state.phase {
            GamePhase::Ended => {
                self.rounds_left = self.rounds_left.saturating_sub(1);
                if self.rounds_left > 0 {
                    log::info!(
                        "Autopilot scored {}, {} rounds left",
                        state.score,
                        self.rounds_left
                    );
                    vec![Command::Restart]
                } else {
                    vec![Command::Quit]
                }
            }
            GamePhase::Active => {
                if self.score_limit.is_some_and(|limit| state.score >= limit) {
                    return Vec::new();
                }
                let target = Self::target_y(state);
                if state.bird.pos.y > target + self.flap_below && state.bird.vel >= 0.0 {
                    vec![Command::Flap]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), 5, 0)
    }

    #[test]
    fn test_tick_input_folds_commands() {
        let input = tick_input(&[Command::Flap, Command::SpawnTick, Command::Quit]);
        assert!(input.flap);
        assert!(input.spawn);
        assert!(!input.restart);
        assert!(!input.toggle_debug);

        // Two presses in one frame cancel out
        let input = tick_input(&[Command::ToggleDebug, Command::ToggleDebug]);
        assert!(!input.toggle_debug);
    }

    #[test]
    fn test_script_replays_then_quits() {
        let state = state();
        let mut script = ScriptedInput::new([vec![Command::Flap]])
            .idle(1)
            .then(vec![Command::Restart]);
        assert_eq!(script.remaining(), 3);
        assert_eq!(script.poll(&state), vec![Command::Flap]);
        assert_eq!(script.poll(&state), Vec::<Command>::new());
        assert_eq!(script.poll(&state), vec![Command::Restart]);
        assert_eq!(script.poll(&state), vec![Command::Quit]);
        assert_eq!(script.poll(&state), vec![Command::Quit]);
    }

    #[test]
    fn test_autopilot_flaps_below_gap() {
        let mut state = state();
        state.pipes.spawn_pair(300.0, 200.0);
        let mut pilot = Autopilot::new(1);

        // Gap center is 300; bird sinking at 350
        state.bird.pos.y = 350.0;
        state.bird.vel = 1.0;
        assert_eq!(pilot.poll(&state), vec![Command::Flap]);

        // Still rising from the last flap
        state.bird.vel = -3.0;
        assert!(pilot.poll(&state).is_empty());

        // Close enough to the gap center
        state.bird.pos.y = 320.0;
        state.bird.vel = 1.0;
        assert!(pilot.poll(&state).is_empty());
    }

    #[test]
    fn test_autopilot_ignores_pipes_behind() {
        let mut state = state();
        // Behind the bird, gap center 450
        state.pipes.spawn_pair(20.0, 350.0);
        // Ahead, gap center 150
        state.pipes.spawn_pair(300.0, 50.0);
        assert_eq!(Autopilot::target_y(&state), 150.0);

        state.pipes.pairs_mut()[1].passed = true;
        assert_eq!(Autopilot::target_y(&state), 300.0);
    }

    #[test]
    fn test_autopilot_rounds() {
        let mut state = state();
        state.phase = GamePhase::Ended;
        let mut pilot = Autopilot::new(2);

        assert_eq!(pilot.poll(&state), vec![Command::Restart]);
        assert_eq!(pilot.rounds_left(), 1);
        assert_eq!(pilot.poll(&state), vec![Command::Quit]);
        assert_eq!(pilot.rounds_left(), 0);
    }

    #[test]
    fn test_autopilot_gives_up_at_score_limit() {
        let mut state = state();
        state.bird.pos.y = 500.0;
        let mut pilot = Autopilot::new(1).with_score_limit(3);
        assert_eq!(pilot.poll(&state), vec![Command::Flap]);

        state.score = 3;
        assert!(pilot.poll(&state).is_empty());
    }
}
