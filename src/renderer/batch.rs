//! Triangle-list backend for the [`Renderer`] trait
//!
//! Tessellates each frame into colored vertices a GPU host can upload as-is.
//! Text is passed through as labels since font rasterization lives with the
//! host.

use glam::Vec2;

use super::frame::{DrawCommand, Frame, TextAnchor};
use super::shapes::{quad, rect_outline, rotated_quad};
use super::vertex::{Vertex, colors};
use super::Renderer;
use crate::sim::Rect;

/// Outline width for debug hitboxes
const DEBUG_LINE: f32 = 2.0;

/// A text request the host should rasterize
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub anchor_pos: Vec2,
    pub anchor: TextAnchor,
    pub font_size: f32,
    pub color: [f32; 4],
}

/// Rebuilds a vertex list and label list every frame
#[derive(Debug, Default)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
    frames_drawn: u64,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data ready for a GPU buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl Renderer for VertexBatch {
    fn draw(&mut self, frame: &Frame) {
        self.vertices.clear();
        self.labels.clear();
        let screen = Rect::new(0.0, 0.0, frame.size.x, frame.size.y);

        for command in &frame.commands {
            match command {
                DrawCommand::Background => {
                    self.vertices.extend_from_slice(&quad(&screen, colors::SKY));
                }
                DrawCommand::Bird {
                    center,
                    size,
                    rotation_deg,
                } => {
                    let bird = rotated_quad(*center, *size, *rotation_deg, colors::BIRD);
                    self.vertices.extend_from_slice(&bird);
                }
                DrawCommand::Pipe { rect, .. } => {
                    self.vertices.extend_from_slice(&quad(rect, colors::PIPE));
                }
                DrawCommand::Overlay { color } => {
                    self.vertices.extend_from_slice(&quad(&screen, *color));
                }
                DrawCommand::Text {
                    text,
                    anchor_pos,
                    anchor,
                    font_size,
                    color,
                } => {
                    self.labels.push(TextLabel {
                        text: text.clone(),
                        anchor_pos: *anchor_pos,
                        anchor: *anchor,
                        font_size: *font_size,
                        color: *color,
                    });
                }
                DrawCommand::DebugRect { rect, color } => {
                    self.vertices.extend(rect_outline(rect, DEBUG_LINE, *color));
                }
            }
        }

        self.frames_drawn += 1;
        log::trace!(
            "Frame {}: {} vertices, {} labels",
            self.frames_drawn,
            self.vertices.len(),
            self.labels.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{GamePhase, GameState};

    #[test]
    fn test_playing_frame_vertex_count() {
        let mut state = GameState::new(GameConfig::default(), 1, 0);
        state.pipes.spawn_at(150.0);
        let mut batch = VertexBatch::new();
        batch.draw(&Frame::from_state(&state));

        // Background + bird + two pipes, six vertices each
        assert_eq!(batch.vertices().len(), 4 * 6);
        assert_eq!(batch.labels().len(), 1);
        assert_eq!(batch.labels()[0].text, "0");
        assert_eq!(batch.as_bytes().len(), 24 * std::mem::size_of::<Vertex>());
        assert_eq!(batch.frames_drawn(), 1);
    }

    #[test]
    fn test_debug_outlines_add_vertices() {
        let mut state = GameState::new(GameConfig::default(), 1, 0);
        state.debug = true;
        let mut batch = VertexBatch::new();
        batch.draw(&Frame::from_state(&state));

        // Background + bird quads, plus one 4-edge outline
        assert_eq!(batch.vertices().len(), 2 * 6 + 24);
        assert!(batch.vertices().iter().any(|v| v.color == colors::DEBUG_BIRD));
    }

    #[test]
    fn test_buffers_reset_each_frame() {
        let mut state = GameState::new(GameConfig::default(), 1, 0);
        let mut batch = VertexBatch::new();
        batch.draw(&Frame::from_state(&state));
        let playing = batch.vertices().len();

        state.phase = GamePhase::Ended;
        batch.draw(&Frame::from_state(&state));
        // Background + dim overlay
        assert_eq!(batch.vertices().len(), 12);
        assert_ne!(playing, 0);
        assert_eq!(batch.labels().len(), 3);
        assert_eq!(batch.frames_drawn(), 2);
    }
}
