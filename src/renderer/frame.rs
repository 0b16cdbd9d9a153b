//! Per-frame draw requests built from the session state

use glam::Vec2;

use super::vertex::colors;
use crate::sim::{GameState, Rect};

/// How a text label is positioned relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Center,
    TopRight,
}

/// A single draw request, in painter's order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background,
    Bird {
        center: Vec2,
        size: Vec2,
        rotation_deg: f32,
    },
    /// Pipe sprite; `flipped` for the upper pipe hanging from the top
    Pipe { rect: Rect, flipped: bool },
    /// Full-screen tint
    Overlay { color: [f32; 4] },
    Text {
        text: String,
        anchor_pos: Vec2,
        anchor: TextAnchor,
        font_size: f32,
        color: [f32; 4],
    },
    /// Hitbox outline for the debug view
    DebugRect { rect: Rect, color: [f32; 4] },
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub size: Vec2,
    pub commands: Vec<DrawCommand>,
}

/// Font sizes
const SCORE_FONT: f32 = 36.0;
const TITLE_FONT: f32 = 54.0;
const DEBUG_FONT: f32 = 24.0;

impl Frame {
    /// Describe the current state: playfield while playing, end screen once
    /// the run is over, speed readout on top in debug mode.
    pub fn from_state(state: &GameState) -> Self {
        let screen = &state.config.screen;
        let size = Vec2::new(screen.width, screen.height);
        let mid_x = screen.width / 2.0;
        let mid_y = screen.height / 2.0;

        let mut frame = Self {
            size,
            commands: vec![DrawCommand::Background],
        };

        if state.is_active() {
            frame.push(DrawCommand::Bird {
                center: state.bird.pos,
                size: state.bird.size(),
                rotation_deg: state.bird.rotation_degrees(),
            });
            if state.debug {
                frame.push(DrawCommand::DebugRect {
                    rect: state.bird.hitbox(),
                    color: colors::DEBUG_BIRD,
                });
            }

            let sprite_height = state.pipes.config().height;
            for pair in state.pipes.pairs() {
                let lower = Rect::new(
                    pair.lower.left(),
                    pair.lower.top(),
                    pair.lower.width(),
                    sprite_height,
                );
                let upper = Rect::from_midbottom(
                    Vec2::new(pair.upper.center_x(), pair.upper.bottom()),
                    Vec2::new(pair.upper.width(), sprite_height),
                );
                frame.push(DrawCommand::Pipe {
                    rect: lower,
                    flipped: false,
                });
                frame.push(DrawCommand::Pipe {
                    rect: upper,
                    flipped: true,
                });
            }
            if state.debug {
                for rect in state.pipes.hitboxes() {
                    frame.push(DrawCommand::DebugRect {
                        rect,
                        color: colors::DEBUG_PIPE,
                    });
                }
            }

            frame.text(
                state.score.to_string(),
                Vec2::new(mid_x, 50.0),
                SCORE_FONT,
                colors::TEXT_DARK,
            );
        } else {
            frame.push(DrawCommand::Overlay { color: colors::DIM });
            frame.text(
                "Game Over".to_string(),
                Vec2::new(mid_x, mid_y - 60.0),
                TITLE_FONT,
                colors::TEXT_LIGHT,
            );
            frame.text(
                format!("Score: {}", state.score),
                Vec2::new(mid_x, mid_y),
                SCORE_FONT,
                colors::TEXT_LIGHT,
            );
            frame.text(
                format!("High Score: {}", state.high_score),
                Vec2::new(mid_x, mid_y + 60.0),
                SCORE_FONT,
                colors::TEXT_LIGHT,
            );
        }

        if state.debug {
            frame.push(DrawCommand::Text {
                text: format!("Speed: {:.1}", state.speed),
                anchor_pos: Vec2::new(screen.width - 10.0, 10.0),
                anchor: TextAnchor::TopRight,
                font_size: DEBUG_FONT,
                color: colors::TEXT_DARK,
            });
        }

        frame
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn text(&mut self, text: String, center: Vec2, font_size: f32, color: [f32; 4]) {
        self.push(DrawCommand::Text {
            text,
            anchor_pos: center,
            anchor: TextAnchor::Center,
            font_size,
            color,
        });
    }

    /// All text in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
