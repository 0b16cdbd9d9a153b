//! The player's bird: vertical physics and hitbox

use glam::Vec2;

use super::geom::Rect;
use crate::config::BirdConfig;

/// The bird. Moves only vertically; the world scrolls past it.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Sprite center
    pub pos: Vec2,
    /// Vertical velocity (positive = downward)
    pub vel: f32,
    size: Vec2,
    gravity: f32,
    flap_velocity: f32,
    hitbox_margin: f32,
    tilt_factor: f32,
}

impl Bird {
    pub fn new(config: &BirdConfig) -> Self {
        Self {
            pos: Vec2::new(config.start_x, config.start_y),
            vel: 0.0,
            size: Vec2::new(config.width, config.height),
            gravity: config.gravity,
            flap_velocity: config.flap_velocity,
            hitbox_margin: config.hitbox_margin,
            tilt_factor: config.tilt_factor,
        }
    }

    /// Override velocity with the flap impulse (not additive)
    pub fn flap(&mut self) {
        self.vel = self.flap_velocity;
    }

    /// Apply gravity, then move by the new velocity
    pub fn update(&mut self) {
        self.vel += self.gravity;
        self.pos.y += self.vel;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Visible sprite rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Collision rectangle, shrunk inside the sprite so grazes are forgiven
    pub fn hitbox(&self) -> Rect {
        self.rect().inflate(-self.hitbox_margin, -self.hitbox_margin)
    }

    /// Sprite tilt for drawing: nose up while rising, down while falling
    pub fn rotation_degrees(&self) -> f32 {
        -self.vel * self.tilt_factor
    }
}
