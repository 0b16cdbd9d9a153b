//! Platform layer
//!
//! Everything the simulation needs from the host:
//! - Frame pacing (`clock`)
//! - Player commands (`input`)

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{Autopilot, Command, InputSource, ScriptedInput, tick_input};
