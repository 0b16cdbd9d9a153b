//! Flappy entry point
//!
//! Runs a headless session driven by the autopilot. Set `FLAPPY_CONFIG` to a
//! JSON file to override tuning, and `RUST_LOG` for verbosity.

use std::path::PathBuf;

use flappy::platform::Autopilot;
use flappy::renderer::VertexBatch;
use flappy::{Game, GameConfig, TextFileStore};

/// Runs the demo player plays before quitting
const DEMO_ROUNDS: u32 = 3;
/// Score at which the demo player lets a run end
const DEMO_SCORE_LIMIT: u32 = 25;

fn main() {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();
    log::info!("Flappy starting...");

    let config_path = std::env::var_os("FLAPPY_CONFIG").map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref());
    let seed = config.seed.unwrap_or_else(rand::random);
    let store = TextFileStore::new(&config.high_score_path);
    log::info!("High score file: {}", store.path().display());

    let mut game = Game::new(
        config,
        seed,
        Autopilot::new(DEMO_ROUNDS).with_score_limit(DEMO_SCORE_LIMIT),
        VertexBatch::new(),
        store,
    );
    game.run();

    log::info!("Best score: {}", game.state().high_score);
}
