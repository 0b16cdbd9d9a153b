//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.44, 0.77, 0.81, 1.0];
    pub const BIRD: [f32; 4] = [0.98, 0.82, 0.18, 1.0];
    pub const PIPE: [f32; 4] = [0.33, 0.66, 0.2, 1.0];
    pub const TEXT_DARK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const TEXT_LIGHT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Semi-transparent black over the end screen
    pub const DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
    pub const DEBUG_BIRD: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const DEBUG_PIPE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
}
