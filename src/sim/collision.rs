//! Collision and scoring checks for the bird against the pipe stream
//!
//! Pipe overlap uses the bird's forgiving hitbox; the ceiling/floor bounds
//! use the full sprite rectangle.

use super::bird::Bird;
use super::geom::Rect;
use super::pipes::PipePair;

/// Outcome of the once-per-tick collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionResult {
    /// Nothing hit, the run continues
    Clear,
    /// Hitbox overlaps a pipe
    Pipe,
    /// Flew too far above the top of the screen
    Ceiling,
    /// Reached the bottom of the screen
    Floor,
}

impl CollisionResult {
    pub fn is_clear(&self) -> bool {
        *self == CollisionResult::Clear
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionResult::Clear => "clear",
            CollisionResult::Pipe => "pipe",
            CollisionResult::Ceiling => "ceiling",
            CollisionResult::Floor => "floor",
        }
    }
}

/// Check whether a hitbox overlaps either pipe of a pair
#[inline]
pub fn hitbox_pipe_collision(hitbox: &Rect, pair: &PipePair) -> bool {
    hitbox.intersects(&pair.lower) || hitbox.intersects(&pair.upper)
}

/// Check a sprite rect against the vertical playfield bounds.
///
/// The run ends once the top reaches `-ceiling_tolerance` or the bottom
/// reaches `screen_height` (both inclusive).
pub fn bounds_collision(rect: &Rect, screen_height: f32, ceiling_tolerance: f32) -> CollisionResult {
    if rect.top() <= -ceiling_tolerance {
        CollisionResult::Ceiling
    } else if rect.bottom() >= screen_height {
        CollisionResult::Floor
    } else {
        CollisionResult::Clear
    }
}

/// Full per-tick check: pipes first, then bounds
pub fn judge_collision(
    bird: &Bird,
    pipes: &[PipePair],
    screen_height: f32,
    ceiling_tolerance: f32,
) -> CollisionResult {
    let hitbox = bird.hitbox();
    if pipes.iter().any(|pair| hitbox_pipe_collision(&hitbox, pair)) {
        return CollisionResult::Pipe;
    }
    bounds_collision(&bird.rect(), screen_height, ceiling_tolerance)
}

/// Mark every pair whose center has moved strictly left of `bird_left` as
/// passed. Returns how many pairs were newly passed this call.
pub fn score_passed_pipes(bird_left: f32, pipes: &mut [PipePair]) -> u32 {
    let mut newly_passed = 0;
    for pair in pipes.iter_mut().filter(|p| !p.passed) {
        if pair.center_x() < bird_left {
            pair.passed = true;
            newly_passed += 1;
        }
    }
    newly_passed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BirdConfig, PipeConfig, ScreenConfig};
    use crate::sim::pipes::PipeStream;
    use proptest::prelude::*;

    fn bird() -> Bird {
        Bird::new(&BirdConfig::default())
    }

    fn stream() -> PipeStream {
        PipeStream::new(&PipeConfig::default(), &ScreenConfig::default())
    }

    #[test]
    fn test_clear_in_open_air() {
        assert_eq!(judge_collision(&bird(), &[], 600.0, 50.0), CollisionResult::Clear);
    }

    #[test]
    fn test_bird_inside_gap_is_clear() {
        let mut pipes = stream();
        // Gap 200..400 around the bird at y=300, pipe right over the bird
        pipes.spawn_pair(100.0, 200.0);
        assert_eq!(
            judge_collision(&bird(), pipes.pairs(), 600.0, 50.0),
            CollisionResult::Clear
        );
    }

    #[test]
    fn test_bird_hits_upper_pipe() {
        let mut pipes = stream();
        // Gap 300..500: upper pipe bottom at 300 cuts through the bird
        pipes.spawn_pair(100.0, 300.0);
        assert_eq!(
            judge_collision(&bird(), pipes.pairs(), 600.0, 50.0),
            CollisionResult::Pipe
        );
    }

    #[test]
    fn test_hitbox_margin_forgives_graze() {
        let mut pipes = stream();
        // Sprite bottom is 320, hitbox bottom is 313. Lower pipe top at 315:
        // overlaps the sprite but not the hitbox.
        pipes.spawn_pair(100.0, 115.0);
        let b = bird();
        assert!(b.rect().intersects(&pipes.pairs()[0].lower));
        assert_eq!(
            judge_collision(&b, pipes.pairs(), 600.0, 50.0),
            CollisionResult::Clear
        );
    }

    #[test]
    fn test_floor_ends_run_at_screen_bottom() {
        let mut b = bird();
        // Bottom edge exactly at 600
        b.pos.y = 580.0;
        assert_eq!(judge_collision(&b, &[], 600.0, 50.0), CollisionResult::Floor);

        b.pos.y = 579.5;
        assert_eq!(judge_collision(&b, &[], 600.0, 50.0), CollisionResult::Clear);
    }

    #[test]
    fn test_ceiling_tolerance() {
        let mut b = bird();
        // Top edge at -30: above the screen but inside the tolerance
        b.pos.y = -10.0;
        assert_eq!(judge_collision(&b, &[], 600.0, 50.0), CollisionResult::Clear);

        // Top edge at -50
        b.pos.y = -30.0;
        assert_eq!(judge_collision(&b, &[], 600.0, 50.0), CollisionResult::Ceiling);
    }

    #[test]
    fn test_pipe_reported_before_bounds() {
        let mut pipes = stream();
        pipes.spawn_pair(100.0, 50.0);
        let mut b = bird();
        b.pos.y = 590.0;
        assert_eq!(judge_collision(&b, pipes.pairs(), 600.0, 50.0), CollisionResult::Pipe);
    }

    #[test]
    fn test_scores_once_when_center_passes_left_edge() {
        let mut pipes = stream();
        // Bird left edge is 72.5
        pipes.spawn_pair(72.5, 200.0);
        assert_eq!(score_passed_pipes(72.5, pipes.pairs_mut()), 0, "equal is not past");

        pipes.advance(0.5);
        assert_eq!(score_passed_pipes(72.5, pipes.pairs_mut()), 1);
        assert!(pipes.pairs()[0].passed);

        pipes.advance(5.0);
        assert_eq!(score_passed_pipes(72.5, pipes.pairs_mut()), 0);
    }

    #[test]
    fn test_scores_multiple_pairs_in_one_call() {
        let mut pipes = stream();
        pipes.spawn_pair(10.0, 100.0);
        pipes.spawn_pair(40.0, 100.0);
        pipes.spawn_pair(300.0, 100.0);
        assert_eq!(score_passed_pipes(72.5, pipes.pairs_mut()), 2);
        assert!(!pipes.pairs()[2].passed);
    }

    proptest! {
        #[test]
        fn clear_iff_no_overlap_and_in_bounds(
            y in -120.0f32..700.0,
            pairs in proptest::collection::vec((0.0f32..300.0, 0.0f32..400.0), 0..4),
        ) {
            let mut pipes = stream();
            for &(x, gap_top) in &pairs {
                pipes.spawn_pair(x, gap_top);
            }
            let mut b = bird();
            b.pos.y = y;

            let hitbox = b.hitbox();
            let overlaps = pipes.hitboxes().any(|r| hitbox.intersects(&r));
            let rect = b.rect();
            let in_bounds = rect.top() > -50.0 && rect.bottom() < 600.0;

            let result = judge_collision(&b, pipes.pairs(), 600.0, 50.0);
            prop_assert_eq!(result.is_clear(), !overlaps && in_bounds);
            if overlaps {
                prop_assert_eq!(result, CollisionResult::Pipe);
            }
        }

        #[test]
        fn each_pair_scores_at_most_once(
            start in 80.0f32..600.0,
            speed in 0.5f32..12.0,
            ticks in 1usize..200,
        ) {
            let mut pipes = stream();
            pipes.spawn_pair(start, 200.0);
            let bird_left = 72.5;
            let mut total = 0;
            let mut was_passed = false;
            for _ in 0..ticks {
                pipes.advance(speed);
                let center = pipes.pairs().first().map(|p| p.center_x());
                let scored = score_passed_pipes(bird_left, pipes.pairs_mut());
                if let Some(center) = center {
                    // Transition happens exactly on the first tick the center is past
                    prop_assert_eq!(scored == 1, !was_passed && center < bird_left);
                    was_passed |= center < bird_left;
                }
                total += scored;
            }
            prop_assert!(total <= 1);
        }
    }
}
