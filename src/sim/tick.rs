//! Per-frame simulation tick
//!
//! Advances the session by one frame. Physics is per tick; only pipe
//! spawning looks at wall-clock time (`dt_ms`).

use super::collision::{judge_collision, score_passed_pipes};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (ignored once the run has ended)
    pub flap: bool,
    /// Start a new run (ignored while playing)
    pub restart: bool,
    /// Toggle hitbox/speed overlay
    pub toggle_debug: bool,
    /// Spawn a pipe pair now, for hosts that drive spawning from their own timer
    pub spawn: bool,
}

/// Advance the session by one frame. Returns what happened, in order.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.toggle_debug {
        state.debug = !state.debug;
        events.push(GameEvent::DebugToggled {
            enabled: state.debug,
        });
    }

    if state.phase == GamePhase::Ended {
        // Record before a same-tick restart can wipe the score
        if state.record_high_score() {
            log::info!("New high score: {}", state.high_score);
            events.push(GameEvent::NewHighScore {
                score: state.high_score,
            });
        }

        if !input.restart {
            return events;
        }
        state.restart();
        log::info!("Run restarted");
        events.push(GameEvent::Restarted);
    } else if input.flap {
        state.bird.flap();
        events.push(GameEvent::Flapped);
    }

    state.time_ticks += 1;

    // Spawning
    if input.spawn {
        let gap_top = state.pipes.spawn(&mut state.rng);
        events.push(GameEvent::PipeSpawned { gap_top });
    }
    let spawned = state.pipes.advance_timer(dt_ms, &mut state.rng);
    let pairs = state.pipes.pairs();
    for pair in &pairs[pairs.len() - spawned..] {
        events.push(GameEvent::PipeSpawned {
            gap_top: pair.gap_top,
        });
    }

    // Motion
    state.bird.update();
    state.pipes.advance(state.speed);

    // Collision
    let result = judge_collision(
        &state.bird,
        state.pipes.pairs(),
        state.config.screen.height,
        state.config.session.ceiling_tolerance,
    );
    if !result.is_clear() {
        state.phase = GamePhase::Ended;
    }

    // Scoring (pairs cleared on the fatal tick still count, but don't ramp)
    let passed = score_passed_pipes(state.bird.rect().left(), state.pipes.pairs_mut());
    for _ in 0..passed {
        let ramped = state.add_point();
        events.push(GameEvent::Scored { score: state.score });
        if let Some(speed) = ramped {
            log::debug!("Speed up to {speed:.3} at score {}", state.score);
            events.push(GameEvent::SpeedUp { speed });
        }
    }

    if !result.is_clear() {
        log::info!(
            "Game over ({}) with score {} after {} ticks",
            result.as_str(),
            state.score,
            state.time_ticks
        );
        events.push(GameEvent::GameOver {
            score: state.score,
            cause: result,
        });
    }

    events
}
