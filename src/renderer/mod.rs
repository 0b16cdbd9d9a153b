//! Rendering module
//!
//! The simulation never draws. Each frame the driver turns the session
//! state into a [`Frame`] of draw requests and hands it to a [`Renderer`].

pub mod batch;
pub mod frame;
pub mod shapes;
pub mod vertex;

pub use batch::{TextLabel, VertexBatch};
pub use frame::{DrawCommand, Frame, TextAnchor};
pub use vertex::Vertex;

/// Receives one frame of draw requests per loop iteration
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}
