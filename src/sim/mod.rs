//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Physics advances per tick, never per wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (pipe pairs in spawn order)
//! - No rendering, input, or storage dependencies

pub mod bird;
pub mod collision;
pub mod geom;
pub mod pipes;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use collision::{CollisionResult, bounds_collision, judge_collision, score_passed_pipes};
pub use geom::Rect;
pub use pipes::{PipePair, PipeStream};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
