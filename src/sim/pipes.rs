//! Scrolling pipe pairs: spawning, motion, and despawn

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::Rng;

use super::geom::Rect;
use crate::config::{PipeConfig, ScreenConfig};

/// One obstacle: an upper and a lower pipe around a gap
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    /// Pipe rising from the bottom (hitbox)
    pub lower: Rect,
    /// Pipe hanging from the top (hitbox)
    pub upper: Rect,
    /// Distance from the screen top to the top of the gap
    pub gap_top: f32,
    /// Set once the bird has cleared this pair (it scores only once)
    pub passed: bool,
}

impl PipePair {
    pub fn center_x(&self) -> f32 {
        self.upper.center_x()
    }

    /// Vertical middle of the gap
    pub fn gap_center(&self) -> f32 {
        (self.upper.bottom() + self.lower.top()) / 2.0
    }

    /// True once the whole pair has scrolled past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.lower.right() <= 0.0
    }

    pub fn hitboxes(&self) -> [Rect; 2] {
        [self.lower, self.upper]
    }

    fn shift_x(&mut self, dx: f32) {
        self.lower.translate_x(dx);
        self.upper.translate_x(dx);
    }
}

/// The ordered stream of pipe pairs (oldest first)
#[derive(Debug, Clone)]
pub struct PipeStream {
    pairs: Vec<PipePair>,
    config: PipeConfig,
    screen_height: f32,
    /// Wall-clock time since the last timed spawn (ms)
    spawn_elapsed_ms: f32,
}

impl PipeStream {
    pub fn new(config: &PipeConfig, screen: &ScreenConfig) -> Self {
        Self {
            pairs: Vec::new(),
            config: config.clone(),
            screen_height: screen.height,
            spawn_elapsed_ms: 0.0,
        }
    }

    /// Inclusive range the random gap offset is drawn from
    pub fn gap_range(&self) -> RangeInclusive<i32> {
        let lo = self.config.min_top.round() as i32;
        let hi = (self.screen_height - self.config.gap - self.config.min_top).round() as i32;
        lo..=hi.max(lo)
    }

    /// Spawn a pair with a random gap offset. Returns the offset used.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) -> f32 {
        let gap_top = rng.random_range(self.gap_range()) as f32;
        self.spawn_at(gap_top);
        gap_top
    }

    /// Spawn a pair at the configured spawn column
    pub fn spawn_at(&mut self, gap_top: f32) {
        self.spawn_pair(self.config.spawn_x, gap_top);
    }

    /// Spawn a pair centered on `center_x` whose gap starts at `gap_top`
    pub fn spawn_pair(&mut self, center_x: f32, gap_top: f32) {
        let size = Vec2::new(self.config.width, self.config.hitbox_height());
        let lower = Rect::from_midtop(Vec2::new(center_x, gap_top + self.config.gap), size);
        let upper = Rect::from_midbottom(Vec2::new(center_x, gap_top), size);

        log::debug!("Pipe spawned at x={center_x} gap_top={gap_top}");
        self.pairs.push(PipePair {
            lower,
            upper,
            gap_top,
            passed: false,
        });
    }

    /// Accumulate elapsed wall-clock time and spawn one pair per full
    /// interval. Returns how many pairs were spawned.
    pub fn advance_timer<R: Rng>(&mut self, dt_ms: f32, rng: &mut R) -> usize {
        let interval = self.config.spawn_interval_ms;
        if interval <= 0.0 {
            return 0;
        }

        self.spawn_elapsed_ms += dt_ms.max(0.0);
        let mut spawned = 0;
        while self.spawn_elapsed_ms >= interval {
            self.spawn_elapsed_ms -= interval;
            self.spawn(rng);
            spawned += 1;
        }
        spawned
    }

    /// Scroll every pair left by `speed`, then drop the ones that left the screen
    pub fn advance(&mut self, speed: f32) {
        for pair in &mut self.pairs {
            pair.shift_x(-speed);
        }
        self.pairs.retain(|p| !p.is_offscreen());
    }

    pub fn pairs(&self) -> &[PipePair] {
        &self.pairs
    }

    pub fn pairs_mut(&mut self) -> &mut [PipePair] {
        &mut self.pairs
    }

    /// Every pipe rectangle, lower then upper for each pair
    pub fn hitboxes(&self) -> impl Iterator<Item = Rect> + '_ {
        self.pairs.iter().flat_map(|p| p.hitboxes())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn config(&self) -> &PipeConfig {
        &self.config
    }
}
